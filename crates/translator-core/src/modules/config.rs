//! Preference file store.
//!
//! Preferences live in `preferences.json` inside the config directory and
//! are re-read on every load. Non-empty `GEMINI_API_KEY` / `GEMINI_MODEL`
//! environment variables take precedence over the file.

use std::fs;
use std::path::PathBuf;

use translator_types::{ConfigError, Preferences};

use crate::translation::host::PreferenceStore;

const CONFIG_FILE: &str = "preferences.json";
const APP_DIR: &str = "selection-translator";

/// Overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "TRANSLATOR_CONFIG_DIR";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const MODEL_ENV: &str = "GEMINI_MODEL";

/// Keys accepted by [`FilePreferenceStore::get_value`] / [`FilePreferenceStore::set_value`].
pub const KEY_API_KEY: &str = "gemini.api_key";
pub const KEY_MODEL: &str = "gemini.model";
pub const KEYS: [&str; 2] = [KEY_API_KEY, KEY_MODEL];

/// Resolve the config directory: `$TRANSLATOR_CONFIG_DIR`, else the
/// platform config dir joined with `selection-translator`.
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|d| d.join(APP_DIR)).ok_or(ConfigError::DirectoryNotFound)
}

#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    dir: PathBuf,
    env_overrides: bool,
}

impl FilePreferenceStore {
    /// Store rooted at `dir`, without environment overrides.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), env_overrides: false }
    }

    /// Store at the default location, honoring environment overrides.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        Ok(Self { dir: get_config_dir()?, env_overrides: true })
    }

    pub fn with_env_overrides(mut self, enabled: bool) -> Self {
        self.env_overrides = enabled;
        self
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// Preferences as stored on disk. A missing file yields empty values.
    pub fn load_file(&self) -> Result<Preferences, ConfigError> {
        let path = self.path();
        if !path.exists() {
            return Ok(Preferences::default());
        }
        let content = fs::read_to_string(&path).map_err(|e| ConfigError::from_read_error(&e))?;
        serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))
    }

    /// Write atomically (temp file + rename).
    pub fn save(&self, prefs: &Preferences) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.dir).map_err(|e| ConfigError::from_io_error(&e))?;
        let path = self.path();
        let temp_path = self.dir.join(format!("{}.tmp", CONFIG_FILE));

        let content =
            serde_json::to_string_pretty(prefs).map_err(|e| ConfigError::from_json_error(&e))?;

        fs::write(&temp_path, content).map_err(|e| ConfigError::from_io_error(&e))?;
        fs::rename(&temp_path, &path).map_err(|e| ConfigError::from_io_error(&e))?;
        tracing::info!("Preferences saved to {}", path.display());
        Ok(())
    }

    /// Update specific fields in the stored preferences.
    pub fn update<F>(&self, updater: F) -> Result<Preferences, ConfigError>
    where
        F: FnOnce(&mut Preferences),
    {
        let mut prefs = self.load_file()?;
        updater(&mut prefs);
        self.save(&prefs)?;
        Ok(prefs)
    }

    /// Stored value for `key`.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        let prefs = self.load_file()?;
        match key {
            KEY_API_KEY => Ok(prefs.gemini_api_key),
            KEY_MODEL => Ok(prefs.gemini_model),
            _ => Err(unknown_key(key)),
        }
    }

    pub fn set_value(&self, key: &str, value: &str) -> Result<Preferences, ConfigError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ConfigError::invalid(key, "value must not be empty"));
        }
        match key {
            KEY_API_KEY => self.update(|p| p.gemini_api_key = value.to_string()),
            KEY_MODEL => self.update(|p| p.gemini_model = value.to_string()),
            _ => Err(unknown_key(key)),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Preferences, ConfigError> {
        let prefs = self.load_file()?;
        if self.env_overrides {
            Ok(apply_env_overrides(prefs, |name| std::env::var(name).ok()))
        } else {
            Ok(prefs)
        }
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::invalid(key, format!("unknown key (expected one of: {})", KEYS.join(", ")))
}

/// Replace fields whose environment variable is set and non-empty.
pub fn apply_env_overrides<F>(mut prefs: Preferences, lookup: F) -> Preferences
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
    if let Some(key) = non_empty(API_KEY_ENV) {
        prefs.gemini_api_key = key;
    }
    if let Some(model) = non_empty(MODEL_ENV) {
        prefs.gemini_model = model;
    }
    prefs
}
