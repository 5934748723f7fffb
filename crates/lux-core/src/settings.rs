use serde::{Deserialize, Serialize};

use crate::pattern::Pattern;

/// Noise gate threshold range (normalized input level).
pub const NOISE_THRESHOLD_MIN: f32 = 0.0;
pub const NOISE_THRESHOLD_MAX: f32 = 1.0;

/// Volume compression threshold range (normalized input level).
pub const COMPRESSION_THRESHOLD_MIN: f32 = 0.0;
pub const COMPRESSION_THRESHOLD_MAX: f32 = 1.0;

/// Hue wheel range for the frequency-to-color mapping. The LED engine
/// uses an 8-bit hue wheel, so the endpoints are 0 and 255.
pub const COLOR_HUE_MIN: f32 = 0.0;
pub const COLOR_HUE_MAX: f32 = 255.0;

/// User-adjustable settings for the visualization engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Active visualization pattern.
    pub pattern: Pattern,
    /// Input level below which the signal is treated as silence. Range: 0.0..1.0
    pub noise_threshold: f32,
    /// Input level above which volume compression engages. Range: 0.0..1.0
    pub compression_threshold: f32,
    /// Hue assigned to the lowest frequency band. Range: 0.0..255.0
    pub low_freq_color: f32,
    /// Hue assigned to the highest frequency band. Range: 0.0..255.0
    pub high_freq_color: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pattern: Pattern::default(),
            noise_threshold: 0.05,
            compression_threshold: 0.5,
            low_freq_color: 96.0,
            high_freq_color: 0.0,
        }
    }
}
