use egui::Ui;
use lux_core::{Pattern, Settings};

use crate::layout::{panel_layout, SectionControl, PANEL_TITLE};

/// Draw the settings panel: title, pattern selector, and the threshold
/// and color sliders.
///
/// Returns `true` if any control changed this frame. The panel performs
/// no I/O and sends nothing anywhere; the caller decides what a change
/// means.
pub fn draw_settings_panel(ui: &mut Ui, settings: &mut Settings) -> bool {
    let mut changed = false;

    ui.heading(PANEL_TITLE);
    ui.separator();

    for section in panel_layout() {
        ui.add_space(8.0);
        ui.label(egui::RichText::new(section.heading).strong());

        match section.control {
            SectionControl::Select { options } => {
                egui::ComboBox::from_id_salt(section.id)
                    .selected_text(settings.pattern.label())
                    .show_ui(ui, |ui| {
                        for opt in &options {
                            let pattern = Pattern::from_value(opt.value);
                            if ui
                                .selectable_value(&mut settings.pattern, pattern, opt.label)
                                .changed()
                            {
                                log::trace!("pattern selected: {}", opt.value);
                                changed = true;
                            }
                        }
                    });
            }
            SectionControl::Slider { min, max } => {
                if let Some(value) = slider_field(settings, section.id) {
                    if ui.add(egui::Slider::new(value, min..=max)).changed() {
                        changed = true;
                    }
                }
            }
        }
    }

    changed
}

/// Map a slider section id to the `Settings` field it edits.
fn slider_field<'a>(settings: &'a mut Settings, id: &str) -> Option<&'a mut f32> {
    match id {
        "noise_threshold" => Some(&mut settings.noise_threshold),
        "compression_threshold" => Some(&mut settings.compression_threshold),
        "low_freq_color" => Some(&mut settings.low_freq_color),
        "high_freq_color" => Some(&mut settings.high_freq_color),
        _ => None,
    }
}
