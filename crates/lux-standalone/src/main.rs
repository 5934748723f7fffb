use eframe::egui;
use lux_core::Settings;

/// Host window for the settings panel.
struct LuxApp {
    settings: Settings,
}

impl Default for LuxApp {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
        }
    }
}

impl eframe::App for LuxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        lux_gui::theme::apply(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            if lux_gui::draw_settings_panel(ui, &mut self.settings) {
                log::debug!(
                    "settings changed: pattern={} noise={:.3} compression={:.3} low_hue={:.1} high_hue={:.1}",
                    self.settings.pattern.value(),
                    self.settings.noise_threshold,
                    self.settings.compression_threshold,
                    self.settings.low_freq_color,
                    self.settings.high_freq_color,
                );
            }
        });
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([360.0, 440.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AudioLux",
        options,
        Box::new(|_cc| Ok(Box::new(LuxApp::default()))),
    )
}
