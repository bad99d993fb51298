use std::collections::BTreeMap;

use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

/// Bidirectional mapping between stable uids and Bevy entities.
#[derive(Resource, Debug, Clone, Default)]
pub struct UidMap {
    to_bevy: BTreeMap<u64, Entity>,
    to_uid: BTreeMap<Entity, u64>,
}

impl UidMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping. Panics if the uid is already registered.
    pub fn insert(&mut self, uid: u64, entity: Entity) {
        let prev = self.to_bevy.insert(uid, entity);
        assert!(prev.is_none(), "duplicate uid {uid} in UidMap");
        self.to_uid.insert(entity, uid);
    }

    /// Resolve a uid. `None` once the entity has been unmapped.
    pub fn find_by_uid(&self, uid: u64) -> Option<Entity> {
        self.to_bevy.get(&uid).copied()
    }

    pub fn uid_of(&self, entity: Entity) -> Option<u64> {
        self.to_uid.get(&entity).copied()
    }

    pub fn remove_by_uid(&mut self, uid: u64) -> Option<Entity> {
        let entity = self.to_bevy.remove(&uid)?;
        self.to_uid.remove(&entity);
        Some(entity)
    }

    pub fn len(&self) -> usize {
        self.to_bevy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_bevy.is_empty()
    }
}
