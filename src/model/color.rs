use serde::{Deserialize, Serialize};

/// The fixed color palette a signal or shape quadrant can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Cyan,
    White,
    Uncolored,
}

string_enum!(Color {
    Red => "red",
    Green => "green",
    Blue => "blue",
    Yellow => "yellow",
    Purple => "purple",
    Cyan => "cyan",
    White => "white",
    Uncolored => "uncolored",
});

impl Color {
    /// One-letter code used inside shape short keys.
    pub fn short_code(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Yellow => 'y',
            Color::Purple => 'p',
            Color::Cyan => 'c',
            Color::White => 'w',
            Color::Uncolored => 'u',
        }
    }

    pub fn from_short_code(code: char) -> Option<Self> {
        Color::ALL.iter().copied().find(|c| c.short_code() == code)
    }
}
