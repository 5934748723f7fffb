pub mod layout;
pub mod panel;
pub mod theme;

pub use layout::{panel_layout, PanelSection, SectionControl, SelectOption};
pub use panel::draw_settings_panel;
