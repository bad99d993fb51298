pub mod assignment_log;
pub mod config;
pub mod entity_map;

pub use assignment_log::{AssignmentLog, AssignmentOutcome, AssignmentRecord};
pub use config::{EcsUidGenerator, SignalConfig};
pub use entity_map::UidMap;
