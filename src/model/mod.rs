pub mod color;
pub mod shape;
pub mod signal;

pub use color::Color;
pub use shape::{MAX_LAYERS, ShapeDefinition, ShapeLayer, ShapeQuadrant, SubShape};
pub use signal::{ItemKind, SignalValue, is_truthy_signal, is_valid_signal_code, parse_signal_code};
