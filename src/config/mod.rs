pub mod settings;

pub use settings::{DEFAULT_SETTINGS_PATH, RenderMode, Settings};
