use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::ecs::components::ConstantSignal;
use crate::ecs::events::{DiscardReason, SignalReactiveEvent};
use crate::ecs::resources::AssignmentOutcome;
use crate::model::parse_signal_code;

use super::SignalCommand;
use super::applicator::ApplyCtx;

/// Resolve `uid` to a live entity. A mapping that points at a dead entity is
/// dropped from the map.
pub(super) fn resolve_live(ctx: &mut ApplyCtx, world: &World, uid: u64) -> Option<Entity> {
    let entity = ctx.entity_map.find_by_uid(uid)?;
    if world.get_entity(entity).is_err() {
        tracing::debug!(uid, "pruning uid mapped to a despawned entity");
        ctx.entity_map.remove_by_uid(uid);
        return None;
    }
    Some(entity)
}

fn discard(ctx: &mut ApplyCtx, cmd: &SignalCommand, uid: u64, reason: DiscardReason) {
    tracing::debug!(uid, ?reason, "discarding stale signal command");
    ctx.record(cmd, AssignmentOutcome::Discarded(reason));
    ctx.emit(SignalReactiveEvent::AssignmentDiscarded { uid, reason });
}

/// Re-resolve the target and store, then parse `code` and assign it.
/// A target that vanished or lost its store is a no-op.
pub(crate) fn apply_assign_constant_signal(
    ctx: &mut ApplyCtx,
    world: &mut World,
    cmd: &SignalCommand,
    uid: u64,
    code: &str,
) {
    let Some(entity) = resolve_live(ctx, world, uid) else {
        discard(ctx, cmd, uid, DiscardReason::EntityGone);
        return;
    };
    let Some(mut store) = world.get_mut::<ConstantSignal>(entity) else {
        discard(ctx, cmd, uid, DiscardReason::StoreRemoved);
        return;
    };

    let signal = parse_signal_code(code);
    store.signal = signal.clone();

    tracing::info!(uid, signal = ?signal, "constant signal assigned");
    ctx.record(cmd, AssignmentOutcome::Assigned(signal.clone()));
    ctx.emit(SignalReactiveEvent::ConstantSignalAssigned {
        uid,
        entity,
        signal,
    });
}

/// Strip the `ConstantSignal` component. The entity itself survives.
pub(crate) fn apply_remove_constant_signal(
    ctx: &mut ApplyCtx,
    world: &mut World,
    cmd: &SignalCommand,
    uid: u64,
) {
    let Some(entity) = resolve_live(ctx, world, uid) else {
        discard(ctx, cmd, uid, DiscardReason::EntityGone);
        return;
    };
    let mut entity_mut = world.entity_mut(entity);
    if entity_mut.take::<ConstantSignal>().is_none() {
        discard(ctx, cmd, uid, DiscardReason::StoreRemoved);
        return;
    }

    ctx.record(cmd, AssignmentOutcome::StoreRemoved);
    ctx.emit(SignalReactiveEvent::ConstantSignalRemoved { uid, entity });
}
