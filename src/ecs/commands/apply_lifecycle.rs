use bevy_ecs::world::World;

use crate::ecs::events::{DiscardReason, SignalReactiveEvent};
use crate::ecs::resources::AssignmentOutcome;

use super::SignalCommand;
use super::applicator::ApplyCtx;
use super::apply_signal::resolve_live;

/// Despawn the entity behind `uid` and unmap the uid.
/// Idempotent: an already-gone uid is only unmapped.
pub(crate) fn apply_despawn_entity(
    ctx: &mut ApplyCtx,
    world: &mut World,
    cmd: &SignalCommand,
    uid: u64,
) {
    let live = resolve_live(ctx, world, uid);
    ctx.entity_map.remove_by_uid(uid);

    let Some(entity) = live else {
        ctx.record(cmd, AssignmentOutcome::Discarded(DiscardReason::EntityGone));
        return;
    };

    world.entity_mut(entity).despawn();
    tracing::debug!(uid, "entity despawned");
    ctx.record(cmd, AssignmentOutcome::Despawned);
    ctx.emit(SignalReactiveEvent::EntityDespawned { uid });
}
