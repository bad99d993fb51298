use bevy_ecs::resource::Resource;

use crate::ecs::events::DiscardReason;
use crate::model::SignalValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentOutcome {
    Assigned(Option<SignalValue>),
    Discarded(DiscardReason),
    StoreRemoved,
    Despawned,
}

/// One applied (or discarded) signal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRecord {
    pub tick: u64,
    pub uid: u64,
    pub description: String,
    pub outcome: AssignmentOutcome,
}

/// Audit trail of everything the command applicator did, in application order.
#[derive(Resource, Debug, Clone, Default)]
pub struct AssignmentLog {
    pub records: Vec<AssignmentRecord>,
}

impl AssignmentLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_uid(&self, uid: u64) -> impl Iterator<Item = &AssignmentRecord> {
        self.records.iter().filter(move |r| r.uid == uid)
    }

    pub fn last(&self) -> Option<&AssignmentRecord> {
        self.records.last()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
