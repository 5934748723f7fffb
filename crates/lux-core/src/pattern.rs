use serde::{Deserialize, Serialize};

/// Visualization patterns the LED engine can run, in dropdown display order.
///
/// Each pattern has a stable machine value (what the engine and serde see)
/// and a human-readable label (what the dropdown shows).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    #[default]
    Blank,
    Solid,
    Trail,
    Confetti,
    VBar,
}

/// All patterns, in the order the selector lists them.
pub const ALL_PATTERNS: &[Pattern] = &[
    Pattern::Blank,
    Pattern::Solid,
    Pattern::Trail,
    Pattern::Confetti,
    Pattern::VBar,
];

impl Pattern {
    /// Machine value, as used by the engine and the serialized form.
    pub fn value(&self) -> &'static str {
        match self {
            Pattern::Blank => "blank",
            Pattern::Solid => "solid",
            Pattern::Trail => "trail",
            Pattern::Confetti => "confetti",
            Pattern::VBar => "vbar",
        }
    }

    /// Display label for the pattern selector.
    pub fn label(&self) -> &'static str {
        match self {
            Pattern::Blank => "Blank",
            Pattern::Solid => "Solid",
            Pattern::Trail => "Trail",
            Pattern::Confetti => "Confetti",
            Pattern::VBar => "VBar",
        }
    }

    /// Look up a pattern by its machine value. Unknown values fall back
    /// to `Blank`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "blank" => Pattern::Blank,
            "solid" => Pattern::Solid,
            "trail" => Pattern::Trail,
            "confetti" => Pattern::Confetti,
            "vbar" => Pattern::VBar,
            _ => Pattern::Blank,
        }
    }
}
