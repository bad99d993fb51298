use bevy_app::App;
use bevy_ecs::entity::Entity;
use wired_signals::ecs::{
    ConstantSignal, ConstantSignalPlugin, EntityUid, SignalConfig, WiredPins, build_signal_app,
};
use wired_signals::model::SignalValue;

pub fn build_test_app() -> App {
    let mut app = build_signal_app(SignalConfig::default());
    app.add_plugins(ConstantSignalPlugin);
    app
}

pub fn stored_signal(app: &App, entity: Entity) -> Option<SignalValue> {
    app.world()
        .get::<ConstantSignal>(entity)
        .and_then(|store| store.signal.clone())
}

pub fn published_signal(app: &App, entity: Entity) -> Option<SignalValue> {
    app.world().get::<WiredPins>(entity).unwrap().slots[0]
        .value
        .clone()
}

pub fn uid_of(app: &App, entity: Entity) -> u64 {
    app.world().get::<EntityUid>(entity).unwrap().0
}
