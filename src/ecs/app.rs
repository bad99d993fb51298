use bevy_app::App;
use bevy_ecs::message::MessageRegistry;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs};

use super::clock::SimClock;
use super::commands::{SignalCommand, apply_signal_commands};
use super::dialog::DialogStack;
use super::events::{
    DialogButtonPressed, DialogInputChanged, EntityManuallyPlaced, SignalReactiveEvent,
};
use super::resources::{AssignmentLog, EcsUidGenerator, SignalConfig, UidMap};
use super::schedule::{SimPhase, configure_sim_schedule};

/// Build a headless Bevy app with the tick clock, uid bookkeeping, the dialog
/// stack, message types, and the command applicator.
///
/// Signal systems come from `ConstantSignalPlugin`. Manual tick control:
/// ```no_run
/// # use wired_signals::ecs::{build_signal_app, ConstantSignalPlugin, SignalConfig, SimTick};
/// let mut app = build_signal_app(SignalConfig::default());
/// app.add_plugins(ConstantSignalPlugin);
/// for _ in 0..60 {
///     app.world_mut().run_schedule(SimTick);
/// }
/// ```
pub fn build_signal_app(config: SignalConfig) -> App {
    build_signal_app_with_executor(config, ExecutorKind::SingleThreaded)
}

/// Build a headless Bevy app with a specific executor kind.
pub fn build_signal_app_with_executor(config: SignalConfig, executor: ExecutorKind) -> App {
    let mut app = App::empty();

    // Core resources
    app.insert_resource(config);
    app.insert_resource(SimClock::new());
    app.insert_resource(UidMap::new());
    app.insert_resource(EcsUidGenerator::default());
    app.insert_resource(AssignmentLog::new());
    app.insert_resource(DialogStack::new());

    // Register message types
    MessageRegistry::register_message::<EntityManuallyPlaced>(app.world_mut());
    MessageRegistry::register_message::<DialogInputChanged>(app.world_mut());
    MessageRegistry::register_message::<DialogButtonPressed>(app.world_mut());
    MessageRegistry::register_message::<SignalCommand>(app.world_mut());
    MessageRegistry::register_message::<SignalReactiveEvent>(app.world_mut());

    // Build schedule with message rotation + applicator
    let mut schedule = configure_sim_schedule(executor);
    schedule.add_systems(bevy_ecs::message::message_update_system.in_set(SimPhase::PreUpdate));
    schedule.add_systems(apply_signal_commands.in_set(SimPhase::PostUpdate));
    app.add_schedule(schedule);
    app
}
