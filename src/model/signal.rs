use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::shape::ShapeDefinition;

/// Registry kind of a signal item. Used as the `$` tag when a signal is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ItemKind {
    Boolean,
    Color,
    Shape,
}

string_enum!(ItemKind {
    Boolean => "boolean",
    Color => "color",
    Shape => "shape",
});

/// An immutable logic value carried on the wire network.
///
/// Cloning never deep-copies: booleans and colors are plain values, and shapes
/// share their descriptor through an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "ItemRecord", try_from = "ItemRecord")]
pub enum SignalValue {
    BooleanTrue,
    BooleanFalse,
    Color(Color),
    Shape(Arc<ShapeDefinition>),
}

impl SignalValue {
    pub const TRUE: SignalValue = SignalValue::BooleanTrue;
    pub const FALSE: SignalValue = SignalValue::BooleanFalse;

    pub fn from_bool(value: bool) -> Self {
        if value { Self::TRUE } else { Self::FALSE }
    }

    pub fn shape(definition: ShapeDefinition) -> Self {
        SignalValue::Shape(Arc::new(definition))
    }

    pub fn item_kind(&self) -> ItemKind {
        match self {
            SignalValue::BooleanTrue | SignalValue::BooleanFalse => ItemKind::Boolean,
            SignalValue::Color(_) => ItemKind::Color,
            SignalValue::Shape(_) => ItemKind::Shape,
        }
    }

    /// Canonical code; parsing it yields an equal value.
    pub fn short_code(&self) -> String {
        match self {
            SignalValue::BooleanTrue => "1".to_string(),
            SignalValue::BooleanFalse => "0".to_string(),
            SignalValue::Color(color) => color.as_str().to_string(),
            SignalValue::Shape(def) => def.short_key(),
        }
    }

    /// True when both values point at the same payload. Shapes compare by
    /// pointer, everything else by value.
    pub fn shares_payload_with(&self, other: &SignalValue) -> bool {
        match (self, other) {
            (SignalValue::Shape(a), SignalValue::Shape(b)) => Arc::ptr_eq(a, b),
            _ => self == other,
        }
    }
}

impl fmt::Display for SignalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_code())
    }
}

/// Whether a slot value counts as "on" for logic consumers.
pub fn is_truthy_signal(signal: Option<&SignalValue>) -> bool {
    match signal {
        None | Some(SignalValue::BooleanFalse) => false,
        Some(SignalValue::BooleanTrue) | Some(SignalValue::Shape(_)) => true,
        Some(SignalValue::Color(color)) => *color != Color::Uncolored,
    }
}

/// Parse a user-entered signal code.
///
/// Leading and trailing whitespace is ignored. Colors win over booleans, and
/// booleans over shape keys. `true`/`false` are case-sensitive.
pub fn parse_signal_code(code: &str) -> Option<SignalValue> {
    let code = code.trim();

    if let Some(color) = Color::from_code(code) {
        return Some(SignalValue::Color(color));
    }

    match code {
        "1" | "true" => return Some(SignalValue::TRUE),
        "0" | "false" => return Some(SignalValue::FALSE),
        _ => {}
    }

    ShapeDefinition::from_short_key(code)
        .ok()
        .map(SignalValue::shape)
}

/// Live validator for signal entry. Accepts exactly what `parse_signal_code` accepts.
pub fn is_valid_signal_code(code: &str) -> bool {
    parse_signal_code(code).is_some()
}

/// Saved form of a signal: `{"$": kind, "data": payload}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "$", content = "data", rename_all = "lowercase")]
enum ItemRecord {
    Boolean(u8),
    Color(Color),
    Shape(String),
}

impl From<SignalValue> for ItemRecord {
    fn from(value: SignalValue) -> Self {
        match value {
            SignalValue::BooleanTrue => ItemRecord::Boolean(1),
            SignalValue::BooleanFalse => ItemRecord::Boolean(0),
            SignalValue::Color(color) => ItemRecord::Color(color),
            SignalValue::Shape(def) => ItemRecord::Shape(def.short_key()),
        }
    }
}

impl TryFrom<ItemRecord> for SignalValue {
    type Error = String;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        match record {
            ItemRecord::Boolean(1) => Ok(SignalValue::TRUE),
            ItemRecord::Boolean(0) => Ok(SignalValue::FALSE),
            ItemRecord::Boolean(other) => Err(format!("invalid boolean item data: {other}")),
            ItemRecord::Color(color) => Ok(SignalValue::Color(color)),
            ItemRecord::Shape(key) => ShapeDefinition::from_short_key(&key).map(SignalValue::shape),
        }
    }
}
