use bevy_ecs::entity::Entity;
use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use crate::ecs::components::{ConstantSignal, EntityUid, PinDirection, WiredPins};
use crate::ecs::events::EntityManuallyPlaced;
use crate::ecs::resources::{EcsUidGenerator, UidMap};
use crate::model::SignalValue;

fn register(world: &mut World, uid: u64, entity: Entity) {
    // UidMap is temporarily absent while apply_signal_commands runs
    if let Some(mut map) = world.get_resource_mut::<UidMap>() {
        map.insert(uid, entity);
    }
}

fn next_uid(world: &mut World) -> u64 {
    world.resource_mut::<EcsUidGenerator>().0.next_id()
}

/// Spawn a constant signal emitter (store + one output pin) under a fresh uid.
pub fn spawn_signal_emitter(world: &mut World, signal: Option<SignalValue>) -> Entity {
    let uid = next_uid(world);
    spawn_signal_emitter_with_uid(world, uid, signal)
}

/// Spawn an emitter under a known uid, e.g. when restoring a snapshot.
/// The uid is reserved so it is never allocated again.
pub fn spawn_signal_emitter_with_uid(
    world: &mut World,
    uid: u64,
    signal: Option<SignalValue>,
) -> Entity {
    world.resource_mut::<EcsUidGenerator>().0.reserve(uid);
    let entity = world
        .spawn((
            EntityUid(uid),
            ConstantSignal::new(signal),
            WiredPins::single_ejector(PinDirection::Top),
        ))
        .id();
    register(world, uid, entity);
    entity
}

/// Blueprint paste: clone an emitter under a new uid. The store shares its
/// signal with the source and the pins start empty.
pub fn duplicate_signal_emitter(world: &mut World, source: Entity) -> Option<Entity> {
    let store = world.get::<ConstantSignal>(source)?.duplicate_without_contents();
    let pins = world
        .get::<WiredPins>(source)
        .map(WiredPins::duplicate_without_contents)
        .unwrap_or_else(|| WiredPins::single_ejector(PinDirection::Top));

    let uid = next_uid(world);
    let entity = world.spawn((EntityUid(uid), store, pins)).id();
    register(world, uid, entity);
    Some(entity)
}

/// Broadcast that the player placed `entity` by hand.
pub fn place_entity(world: &mut World, entity: Entity) {
    world
        .resource_mut::<Messages<EntityManuallyPlaced>>()
        .write(EntityManuallyPlaced { entity });
}
