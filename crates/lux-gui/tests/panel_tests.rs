use lux_core::settings::{
    COLOR_HUE_MAX, COLOR_HUE_MIN, COMPRESSION_THRESHOLD_MAX, COMPRESSION_THRESHOLD_MIN,
    NOISE_THRESHOLD_MAX, NOISE_THRESHOLD_MIN,
};
use lux_core::{Pattern, Settings};
use lux_gui::layout::{panel_layout, SectionControl};

// ── Layout shape ─────────────────────────────────────────────────

#[test]
fn layout_has_five_sections() {
    assert_eq!(panel_layout().len(), 5);
}

#[test]
fn panel_title_is_settings() {
    assert_eq!(lux_gui::layout::PANEL_TITLE, "Settings");
}

#[test]
fn pattern_select_comes_first_with_five_options() {
    let layout = panel_layout();
    let first = &layout[0];
    assert_eq!(first.heading, "Current Pattern");

    let SectionControl::Select { options } = &first.control else {
        panic!("first section is not a select");
    };
    let pairs: Vec<(&str, &str)> = options.iter().map(|o| (o.value, o.label)).collect();
    assert_eq!(
        pairs,
        vec![
            ("blank", "Blank"),
            ("solid", "Solid"),
            ("trail", "Trail"),
            ("confetti", "Confetti"),
            ("vbar", "VBar"),
        ]
    );
}

#[test]
fn exactly_one_select_in_layout() {
    let selects = panel_layout()
        .iter()
        .filter(|s| matches!(s.control, SectionControl::Select { .. }))
        .count();
    assert_eq!(selects, 1);
}

#[test]
fn slider_sections_in_fixed_order() {
    let headings: Vec<&str> = panel_layout()
        .iter()
        .filter(|s| matches!(s.control, SectionControl::Slider { .. }))
        .map(|s| s.heading)
        .collect();
    assert_eq!(
        headings,
        vec![
            "Noise Threshold",
            "Compression Threshold",
            "Low Frequency Color",
            "High Frequency Color",
        ]
    );
}

#[test]
fn slider_ranges_match_core_constants() {
    for section in panel_layout() {
        let SectionControl::Slider { min, max } = section.control else {
            continue;
        };
        let expected = match section.id {
            "noise_threshold" => (NOISE_THRESHOLD_MIN, NOISE_THRESHOLD_MAX),
            "compression_threshold" => (COMPRESSION_THRESHOLD_MIN, COMPRESSION_THRESHOLD_MAX),
            "low_freq_color" | "high_freq_color" => (COLOR_HUE_MIN, COLOR_HUE_MAX),
            other => panic!("unexpected slider id '{}'", other),
        };
        assert_eq!((min, max), expected, "range mismatch for '{}'", section.id);
    }
}

#[test]
fn layout_is_deterministic() {
    assert_eq!(panel_layout(), panel_layout());
}

#[test]
fn default_selection_is_first_option() {
    // No option carries a selected flag; the bound default lines up with
    // the first dropdown entry.
    let layout = panel_layout();
    let SectionControl::Select { options } = &layout[0].control else {
        panic!("first section is not a select");
    };
    assert_eq!(Settings::default().pattern, Pattern::from_value(options[0].value));
}

// ── Headless draw ────────────────────────────────────────────────

#[test]
fn draw_leaves_untouched_settings_unchanged() {
    let ctx = egui::Context::default();
    let mut settings = Settings::default();
    let before = settings.clone();

    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            let changed = lux_gui::draw_settings_panel(ui, &mut settings);
            assert!(!changed, "draw reported a change with no input");
        });
    });

    assert_eq!(settings, before);
}

#[test]
fn draw_is_repeatable() {
    let ctx = egui::Context::default();
    let mut settings = Settings::default();

    for _ in 0..3 {
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                lux_gui::draw_settings_panel(ui, &mut settings);
            });
        });
    }

    assert_eq!(settings, Settings::default());
}
