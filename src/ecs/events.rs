use bevy_ecs::entity::Entity;
use bevy_ecs::message::Message;

use crate::ecs::dialog::{DialogButtonKind, DialogId};
use crate::model::SignalValue;

/// Fired by the host once per entity the player placed by hand.
#[derive(Message, Clone, Debug)]
pub struct EntityManuallyPlaced {
    pub entity: Entity,
}

/// The text of a dialog's input field changed.
#[derive(Message, Clone, Debug)]
pub struct DialogInputChanged {
    pub dialog: DialogId,
    pub text: String,
}

/// A dialog button was pressed.
#[derive(Message, Clone, Debug)]
pub struct DialogButtonPressed {
    pub dialog: DialogId,
    pub button: DialogButtonKind,
}

/// Why a confirmed assignment did not reach its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscardReason {
    /// The uid no longer resolves to a live entity.
    EntityGone,
    /// The entity exists but no longer carries a `ConstantSignal`.
    StoreRemoved,
}

/// Outcomes emitted by the command applicator.
#[derive(Message, Clone, Debug, PartialEq, Eq)]
pub enum SignalReactiveEvent {
    ConstantSignalAssigned {
        uid: u64,
        entity: Entity,
        signal: Option<SignalValue>,
    },
    AssignmentDiscarded {
        uid: u64,
        reason: DiscardReason,
    },
    ConstantSignalRemoved {
        uid: u64,
        entity: Entity,
    },
    EntityDespawned {
        uid: u64,
    },
}
