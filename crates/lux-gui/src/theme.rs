// Panel palette
const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(18, 22, 30);
const PANEL_FILL: egui::Color32 = egui::Color32::from_rgb(26, 32, 44);
const FOREGROUND: egui::Color32 = egui::Color32::from_rgb(228, 233, 240);
const MUTED: egui::Color32 = egui::Color32::from_rgb(110, 122, 140);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(80, 250, 123);
const ACCENT_DIM: egui::Color32 = egui::Color32::from_rgb(40, 125, 62);
const WARN: egui::Color32 = egui::Color32::from_rgb(255, 184, 108);
const ERROR: egui::Color32 = egui::Color32::from_rgb(255, 85, 85);

static INIT: std::sync::Once = std::sync::Once::new();

/// Apply the panel theme to the egui context.
///
/// Visuals are set once (guarded by `std::sync::Once`), so it is safe to
/// call this every frame from the host's update loop.
pub fn apply(ctx: &egui::Context) {
    INIT.call_once(|| {
        let mut visuals = egui::Visuals::dark();

        visuals.panel_fill = PANEL_FILL;
        visuals.window_fill = PANEL_FILL;
        visuals.extreme_bg_color = BACKGROUND;
        visuals.faint_bg_color = BACKGROUND;

        visuals.selection.bg_fill = ACCENT_DIM;
        visuals.selection.stroke = egui::Stroke::new(1.0, FOREGROUND);

        visuals.hyperlink_color = ACCENT;
        visuals.warn_fg_color = WARN;
        visuals.error_fg_color = ERROR;

        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, MUTED);
        visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.5, FOREGROUND);
        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ACCENT);
        visuals.widgets.active.fg_stroke = egui::Stroke::new(2.0, FOREGROUND);
        visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, ACCENT);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, FOREGROUND);

        ctx.set_visuals(visuals);
    });
}

/// Intended styling for the threshold and color sliders: an accent-filled
/// track on the panel background.
///
/// `draw_settings_panel` does not apply these visuals; the sliders render
/// with whatever the context's current style provides.
pub fn slider_visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();
    visuals.selection.bg_fill = ACCENT;
    visuals.extreme_bg_color = BACKGROUND;
    visuals.widgets.inactive.bg_fill = PANEL_FILL;
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ACCENT);
    visuals
}
