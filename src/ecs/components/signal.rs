use bevy_ecs::component::Component;
use serde::{Deserialize, Serialize};

use crate::model::SignalValue;

/// Fixed signal an entity publishes every tick. `None` until the player assigns one.
#[derive(Component, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantSignal {
    pub signal: Option<SignalValue>,
}

impl ConstantSignal {
    pub fn new(signal: Option<SignalValue>) -> Self {
        Self { signal }
    }

    /// Copy for blueprint paste. The new store refers to the same immutable value.
    pub fn duplicate_without_contents(&self) -> Self {
        Self {
            signal: self.signal.clone(),
        }
    }
}
