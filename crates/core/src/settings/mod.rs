//! User settings: one opaque row per user.

mod error;
mod functions;
mod types;

pub use error::SettingsError;
pub use functions::classify_settings_row;
pub use types::{SettingsErrorPolicy, UserSettings, USER_ID_COLUMN, USER_SETTINGS_TABLE};
