pub mod constant_signal;

pub use constant_signal::{
    ConstantSignalPlugin, PlacementSubscription, SIGNAL_INPUT_ID, publish_constant_signals,
    teardown_constant_signals,
};
