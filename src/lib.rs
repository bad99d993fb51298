#[macro_use]
mod macros;

pub mod ecs;
pub mod flush;
pub mod id;
pub mod model;

pub use id::UidGenerator;
pub use model::{
    Color, ItemKind, ShapeDefinition, SignalValue, is_truthy_signal, is_valid_signal_code,
    parse_signal_code,
};
