use lux_core::settings::{
    COLOR_HUE_MAX, COLOR_HUE_MIN, COMPRESSION_THRESHOLD_MAX, COMPRESSION_THRESHOLD_MIN,
    NOISE_THRESHOLD_MAX, NOISE_THRESHOLD_MIN,
};
use lux_core::ALL_PATTERNS;

/// Panel title, rendered above the sections.
pub const PANEL_TITLE: &str = "Settings";

/// One entry in the pattern dropdown. No entry carries a pre-selected
/// flag; the default selection is whatever the bound `Pattern` holds.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// The widget a panel section renders under its heading.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionControl {
    Select { options: Vec<SelectOption> },
    Slider { min: f32, max: f32 },
}

/// One labeled section of the settings panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSection {
    /// Stable id, used for widget id salts and to bind sliders to
    /// `Settings` fields.
    pub id: &'static str,
    pub heading: &'static str,
    pub control: SectionControl,
}

/// Build the settings panel layout: the pattern selector followed by the
/// four threshold and color sliders, in display order.
///
/// The layout is deterministic. Both the draw function and the tests
/// consume it, so the rendered panel and the documented contract cannot
/// drift apart.
pub fn panel_layout() -> Vec<PanelSection> {
    vec![
        PanelSection {
            id: "patterns",
            heading: "Current Pattern",
            control: SectionControl::Select {
                options: ALL_PATTERNS
                    .iter()
                    .map(|p| SelectOption {
                        value: p.value(),
                        label: p.label(),
                    })
                    .collect(),
            },
        },
        PanelSection {
            id: "noise_threshold",
            heading: "Noise Threshold",
            control: SectionControl::Slider {
                min: NOISE_THRESHOLD_MIN,
                max: NOISE_THRESHOLD_MAX,
            },
        },
        PanelSection {
            id: "compression_threshold",
            heading: "Compression Threshold",
            control: SectionControl::Slider {
                min: COMPRESSION_THRESHOLD_MIN,
                max: COMPRESSION_THRESHOLD_MAX,
            },
        },
        PanelSection {
            id: "low_freq_color",
            heading: "Low Frequency Color",
            control: SectionControl::Slider {
                min: COLOR_HUE_MIN,
                max: COLOR_HUE_MAX,
            },
        },
        PanelSection {
            id: "high_freq_color",
            heading: "High Frequency Color",
            control: SectionControl::Slider {
                min: COLOR_HUE_MIN,
                max: COLOR_HUE_MAX,
            },
        },
    ]
}
