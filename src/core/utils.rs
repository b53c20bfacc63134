use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".atm_ledger";
const STORE_FILE: &str = "users.txt";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.atm_ledger`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("ATM_LEDGER_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Default location of the account store inside `base`.
pub fn store_file_in(base: &std::path::Path) -> PathBuf {
    base.join(STORE_FILE)
}

pub fn config_file_in(base: &std::path::Path) -> PathBuf {
    base.join(CONFIG_FILE)
}
