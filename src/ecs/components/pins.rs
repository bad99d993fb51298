use bevy_ecs::component::Component;

use crate::model::SignalValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinType {
    /// Writes a value onto the attached wire.
    LogicalEjector,
    /// Reads a value off the attached wire.
    LogicalAcceptor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinDirection {
    Top,
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinSlot {
    pub pin_type: PinType,
    pub direction: PinDirection,
    pub value: Option<SignalValue>,
}

impl PinSlot {
    pub fn new(pin_type: PinType, direction: PinDirection) -> Self {
        Self {
            pin_type,
            direction,
            value: None,
        }
    }
}

/// Wiring pins of an entity. The wire network reads and writes slot values.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct WiredPins {
    pub slots: Vec<PinSlot>,
}

impl WiredPins {
    pub fn new(slots: Vec<PinSlot>) -> Self {
        Self { slots }
    }

    /// A single output pin, the layout of a constant signal emitter.
    pub fn single_ejector(direction: PinDirection) -> Self {
        Self::new(vec![PinSlot::new(PinType::LogicalEjector, direction)])
    }

    /// Same slot layout, values cleared.
    pub fn duplicate_without_contents(&self) -> Self {
        Self {
            slots: self
                .slots
                .iter()
                .map(|slot| PinSlot::new(slot.pin_type, slot.direction))
                .collect(),
        }
    }
}
