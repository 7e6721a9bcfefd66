use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Table holding one settings row per user.
pub const USER_SETTINGS_TABLE: &str = "user_settings";

/// Column linking a settings row to its owner.
pub const USER_ID_COLUMN: &str = "user_id";

/// A user's settings row.
///
/// Only the owner key is typed. All other columns are carried verbatim so the
/// row reaches callers exactly as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub user_id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl UserSettings {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Raw column value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Column value as a non-empty string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// Business name printed on invoices, when configured.
    pub fn company_name(&self) -> Option<&str> {
        self.get_str("company_name")
    }
}

/// What the settings accessor does with query failures other than not-found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsErrorPolicy {
    /// Log and return the error to the caller.
    #[default]
    Propagate,
    /// Log and answer "no settings". Matches the behavior of the earlier
    /// web frontend, which dropped these errors.
    Ignore,
}

impl FromStr for SettingsErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(Self::Propagate),
            "ignore" => Ok(Self::Ignore),
            other => Err(format!(
                "unknown settings error policy '{other}' (expected 'propagate' or 'ignore')"
            )),
        }
    }
}
