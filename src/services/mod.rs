//! Services: settings file and platform paths.

pub mod paths;
pub mod settings;

pub use paths::{ensure_log_dir, get_log_dir, get_settings_path};
pub use settings::{
    ensure_settings_file, ensure_settings_file_at, load_settings, load_settings_from,
    BoardSettings, Settings, SettingsError, ThemeSettings,
};
