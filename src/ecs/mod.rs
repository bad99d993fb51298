pub mod app;
pub mod clock;
pub mod commands;
pub mod components;
pub mod dialog;
pub mod events;
pub mod resources;
pub mod schedule;
pub mod spawn;
pub mod systems;
pub mod test_helpers;

pub use app::{build_signal_app, build_signal_app_with_executor};
pub use clock::SimClock;
pub use commands::{SignalCommand, SignalCommandKind};
pub use components::{ConstantSignal, EntityUid, PinDirection, PinSlot, PinType, WiredPins};
pub use dialog::{
    ButtonStyle, DialogButton, DialogButtonKind, DialogContinuation, DialogId, DialogStack,
    FormInput, ModalDialog,
};
pub use events::{
    DialogButtonPressed, DialogInputChanged, DiscardReason, EntityManuallyPlaced,
    SignalReactiveEvent,
};
pub use resources::{
    AssignmentLog, AssignmentOutcome, AssignmentRecord, EcsUidGenerator, SignalConfig, UidMap,
};
pub use schedule::{SimPhase, SimTick, configure_sim_schedule};
pub use spawn::{
    duplicate_signal_emitter, place_entity, spawn_signal_emitter, spawn_signal_emitter_with_uid,
};
pub use systems::{ConstantSignalPlugin, PlacementSubscription, teardown_constant_signals};
