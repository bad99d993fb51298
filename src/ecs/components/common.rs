use bevy_ecs::component::Component;

/// Stable identifier of a simulation entity.
///
/// Unlike the Bevy `Entity` handle, a uid is what long-lived workflows hold on
/// to: it is resolved through `UidMap` whenever the entity is needed again.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityUid(pub u64);
