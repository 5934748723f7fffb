pub mod pattern;
pub mod settings;

pub use pattern::{Pattern, ALL_PATTERNS};
pub use settings::Settings;
