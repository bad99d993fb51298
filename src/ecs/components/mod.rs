pub mod common;
pub mod pins;
pub mod signal;

pub use common::EntityUid;
pub use pins::{PinDirection, PinSlot, PinType, WiredPins};
pub use signal::ConstantSignal;
