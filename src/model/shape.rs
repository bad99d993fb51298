use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Maximum number of stacked layers in a shape.
pub const MAX_LAYERS: usize = 4;

/// Separator between layers in a short key.
pub const LAYER_SEPARATOR: char = ':';

/// Sub-shape occupying one quadrant of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubShape {
    Rect,
    Circle,
    Star,
    Windmill,
}

impl SubShape {
    pub const ALL: [SubShape; 4] = [
        SubShape::Rect,
        SubShape::Circle,
        SubShape::Star,
        SubShape::Windmill,
    ];

    pub fn short_code(self) -> char {
        match self {
            SubShape::Rect => 'R',
            SubShape::Circle => 'C',
            SubShape::Star => 'S',
            SubShape::Windmill => 'W',
        }
    }

    pub fn from_short_code(code: char) -> Option<Self> {
        SubShape::ALL.into_iter().find(|s| s.short_code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeQuadrant {
    pub sub_shape: SubShape,
    pub color: Color,
}

/// Four quadrants, clockwise from top-right. `None` is an empty quadrant.
pub type ShapeLayer = [Option<ShapeQuadrant>; 4];

/// Immutable, parsed shape descriptor.
///
/// Short key grammar: 1 to 4 layers joined by `:`. Each layer is exactly eight
/// characters, four `<subshape><color>` pairs. `--` marks an empty quadrant and
/// every layer must have at least one filled quadrant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ShapeDefinition {
    layers: Vec<ShapeLayer>,
}

impl ShapeDefinition {
    /// Build from already-validated layers. Rejects empty layer lists, too many
    /// layers, and fully empty layers.
    pub fn from_layers(layers: Vec<ShapeLayer>) -> Result<Self, String> {
        if layers.is_empty() {
            return Err("shape has no layers".to_string());
        }
        if layers.len() > MAX_LAYERS {
            return Err(format!(
                "shape has {} layers, at most {MAX_LAYERS} allowed",
                layers.len()
            ));
        }
        if let Some(idx) = layers.iter().position(|l| l.iter().all(Option::is_none)) {
            return Err(format!("layer {idx} is empty"));
        }
        Ok(Self { layers })
    }

    pub fn from_short_key(key: &str) -> Result<Self, String> {
        let layers = key
            .split(LAYER_SEPARATOR)
            .map(parse_layer)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_layers(layers)
    }

    pub fn is_valid_short_key(key: &str) -> bool {
        Self::from_short_key(key).is_ok()
    }

    pub fn layers(&self) -> &[ShapeLayer] {
        &self.layers
    }

    pub fn short_key(&self) -> String {
        let mut key = String::with_capacity(self.layers.len() * 9);
        for (i, layer) in self.layers.iter().enumerate() {
            if i > 0 {
                key.push(LAYER_SEPARATOR);
            }
            for quadrant in layer {
                match quadrant {
                    Some(q) => {
                        key.push(q.sub_shape.short_code());
                        key.push(q.color.short_code());
                    }
                    None => key.push_str("--"),
                }
            }
        }
        key
    }
}

fn parse_layer(text: &str) -> Result<ShapeLayer, String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != 8 {
        return Err(format!("layer '{text}' must be 8 characters"));
    }

    let mut layer: ShapeLayer = [None; 4];
    for (quad, pair) in chars.chunks(2).enumerate() {
        let (shape_code, color_code) = (pair[0], pair[1]);
        if let Some(sub_shape) = SubShape::from_short_code(shape_code) {
            let color = Color::from_short_code(color_code)
                .ok_or_else(|| format!("unknown color code '{color_code}' in '{text}'"))?;
            layer[quad] = Some(ShapeQuadrant { sub_shape, color });
        } else if shape_code == '-' {
            if color_code != '-' {
                return Err(format!("empty quadrant {quad} in '{text}' carries a color"));
            }
        } else {
            return Err(format!("unknown sub-shape code '{shape_code}' in '{text}'"));
        }
    }
    Ok(layer)
}

impl fmt::Display for ShapeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_key())
    }
}

impl From<ShapeDefinition> for String {
    fn from(def: ShapeDefinition) -> Self {
        def.short_key()
    }
}

impl TryFrom<String> for ShapeDefinition {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_short_key(&s)
    }
}
