use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{app_data_dir, config_file_in, store_file_in},
    errors::Result,
    utils::persistence::replace_file,
};

/// User preferences for the text front end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Prefix used when displaying amounts.
    pub currency_symbol: String,
    pub ui_color_enabled: bool,
    /// Overrides the account store location; defaults to `users.txt` in the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".into(),
            ui_color_enabled: true,
            store_file: None,
        }
    }
}

impl Config {
    /// Resolves the account store path, relative overrides anchored at `base`.
    pub fn store_path(&self, base: &Path) -> PathBuf {
        match &self.store_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => base.join(path),
            None => store_file_in(base),
        }
    }

    pub fn format_amount(&self, amount: u64) -> String {
        format!("{}{}", self.currency_symbol, amount)
    }
}

/// Loads and saves [`Config`] as pretty JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base_dir: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        let path = config_file_in(&base);
        Self {
            base_dir: base,
            path,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        replace_file(&self.path, &json)?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
