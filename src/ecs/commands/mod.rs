pub mod applicator;
mod apply_lifecycle;
mod apply_signal;

use bevy_ecs::message::Message;

pub use applicator::apply_signal_commands;

/// A command describing an intended change to signal-carrying entities.
///
/// Targets are always uids, never entity handles: commands may be queued
/// long after the target was last seen. The applicator in `SimPhase::PostUpdate`
/// re-resolves every uid before touching the world.
#[derive(Message, Clone, Debug)]
pub struct SignalCommand {
    pub kind: SignalCommandKind,
    /// Human-readable description for the `AssignmentLog`.
    pub description: String,
}

impl SignalCommand {
    pub fn new(kind: SignalCommandKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
        }
    }

    /// Assign the signal described by `code` to the store of `uid`.
    pub fn assign(uid: u64, code: impl Into<String>) -> Self {
        let code = code.into();
        let description = format!("set constant signal of {uid} to '{code}'");
        Self::new(SignalCommandKind::AssignConstantSignal { uid, code }, description)
    }

    pub fn remove_store(uid: u64) -> Self {
        Self::new(
            SignalCommandKind::RemoveConstantSignal { uid },
            format!("remove constant signal from {uid}"),
        )
    }

    pub fn despawn(uid: u64) -> Self {
        Self::new(
            SignalCommandKind::DespawnEntity { uid },
            format!("despawn {uid}"),
        )
    }

    pub fn uid(&self) -> u64 {
        match &self.kind {
            SignalCommandKind::AssignConstantSignal { uid, .. }
            | SignalCommandKind::RemoveConstantSignal { uid }
            | SignalCommandKind::DespawnEntity { uid } => *uid,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignalCommandKind {
    /// Carries the raw code; it is parsed again at commit time.
    AssignConstantSignal { uid: u64, code: String },
    RemoveConstantSignal { uid: u64 },
    DespawnEntity { uid: u64 },
}
