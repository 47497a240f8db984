//! Settings file: rule bounds and prefilled setup fields.

use std::path::Path;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{ConnectNRules, SettingsError, SetupFields};

/// Text placed in the setup fields when the screen opens.
///
/// Everything is empty by default, so a fresh screen starts invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupDefaults {
    /// Prefilled width.
    width: Option<i32>,
    /// Prefilled height.
    height: Option<i32>,
    /// Prefilled run length.
    n: Option<i32>,
    /// Prefilled first player name.
    player1: String,
    /// Prefilled second player name.
    player2: String,
}

impl SetupDefaults {
    /// Field contents for a new setup screen.
    pub fn to_fields(&self) -> SetupFields {
        let number = |v: Option<i32>| v.map(|v| v.to_string()).unwrap_or_default();
        SetupFields::new(
            number(self.width),
            number(self.height),
            number(self.n),
            self.player1.clone(),
            self.player2.clone(),
        )
    }
}

/// Top-level settings, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Legality bounds for boards.
    rules: ConnectNRules,
    /// Prefilled setup fields.
    defaults: SetupDefaults,
}

impl Settings {
    /// Loads and validates settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the file cannot be read, parsed or fails
    /// validation.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;
        let settings: Self = toml::from_str(&content)?;
        settings.validate()?;
        info!(rules = ?settings.rules, "Settings loaded successfully");
        Ok(settings)
    }

    /// Loads settings, falling back to defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`from_file`](Self::from_file) when the file exists.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks the rule bounds.
    ///
    /// # Errors
    ///
    /// Propagates [`ConnectNRules::validate`].
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.rules.validate()
    }

    /// Default settings rendered as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if serialization fails.
    pub fn default_toml() -> Result<String, SettingsError> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| SettingsError::new(format!("Failed to serialize settings: {}", e)))
    }
}
