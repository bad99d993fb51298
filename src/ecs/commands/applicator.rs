use bevy_ecs::message::Messages;
use bevy_ecs::world::World;

use crate::ecs::clock::SimClock;
use crate::ecs::events::SignalReactiveEvent;
use crate::ecs::resources::{AssignmentLog, AssignmentOutcome, AssignmentRecord, UidMap};

use super::{SignalCommand, SignalCommandKind};
use super::{apply_lifecycle, apply_signal};

/// Context passed to all `apply_*` sub-functions, providing the resources they
/// need without requiring direct World access.
pub(crate) struct ApplyCtx {
    pub log: AssignmentLog,
    pub entity_map: UidMap,
    pub tick: u64,
    pub reactive_events: Vec<SignalReactiveEvent>,
}

impl ApplyCtx {
    pub(crate) fn record(&mut self, cmd: &SignalCommand, outcome: AssignmentOutcome) {
        self.log.records.push(AssignmentRecord {
            tick: self.tick,
            uid: cmd.uid(),
            description: cmd.description.clone(),
            outcome,
        });
    }

    /// Queue a reactive event for emission after all commands are processed.
    pub(crate) fn emit(&mut self, event: SignalReactiveEvent) {
        self.reactive_events.push(event);
    }
}

/// Exclusive system that drains all pending `SignalCommand` messages, applies
/// them, records the outcome in `AssignmentLog`, and emits `SignalReactiveEvent`s.
///
/// Runs in `SimPhase::PostUpdate`. Without a `UidMap` the owning simulation is
/// gone and the commands are dropped.
pub fn apply_signal_commands(world: &mut World) {
    let commands: Vec<SignalCommand> = {
        let Some(mut messages) = world.get_resource_mut::<Messages<SignalCommand>>() else {
            return;
        };
        messages.drain().collect()
    };

    if commands.is_empty() {
        return;
    }

    let Some(entity_map) = world.remove_resource::<UidMap>() else {
        tracing::debug!(
            count = commands.len(),
            "no uid map, dropping signal commands"
        );
        return;
    };
    let log = world.remove_resource::<AssignmentLog>().unwrap_or_default();
    let tick = world
        .get_resource::<SimClock>()
        .map_or(0, |clock| clock.tick_count);

    let mut ctx = ApplyCtx {
        log,
        entity_map,
        tick,
        reactive_events: Vec::new(),
    };

    for cmd in &commands {
        match &cmd.kind {
            SignalCommandKind::AssignConstantSignal { uid, code } => {
                apply_signal::apply_assign_constant_signal(&mut ctx, world, cmd, *uid, code);
            }
            SignalCommandKind::RemoveConstantSignal { uid } => {
                apply_signal::apply_remove_constant_signal(&mut ctx, world, cmd, *uid);
            }
            SignalCommandKind::DespawnEntity { uid } => {
                apply_lifecycle::apply_despawn_entity(&mut ctx, world, cmd, *uid);
            }
        }
    }

    let reactive_events = std::mem::take(&mut ctx.reactive_events);
    if let Some(mut messages) = world.get_resource_mut::<Messages<SignalReactiveEvent>>() {
        messages.write_batch(reactive_events);
    }

    world.insert_resource(ctx.log);
    world.insert_resource(ctx.entity_map);
}
