use dialoguer::theme::ColorfulTheme;
use tracing::debug;

use crate::{
    config::{Config, ConfigManager},
    core::LedgerSession,
    storage::TextFileStore,
};

use super::commands;
use super::core::{CliError, CommandError};
use super::io as cli_io;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};

const PROMPT_ROOT: &str = "atm";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// State owned by one running shell: the ledger session plus presentation settings.
pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) session: LedgerSession,
    pub(crate) config: Config,
    pub(crate) theme: ColorfulTheme,
    pub(crate) running: bool,
}

impl ShellContext {
    /// Loads configuration, opens the account store and builds the command table.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new();
        let config = config_manager.load()?;
        let store_path = config.store_path(config_manager.base_dir());
        debug!(path = %store_path.display(), "opening account store");
        let session = LedgerSession::open(Box::new(TextFileStore::new(store_path)))?;
        Ok(Self::with_session(mode, config, session))
    }

    pub fn with_session(mode: CliMode, config: Config, session: LedgerSession) -> Self {
        output::set_color_enabled(config.ui_color_enabled);
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        Self {
            mode,
            registry,
            session,
            config,
            theme: ColorfulTheme::default(),
            running: true,
        }
    }

    pub fn session(&self) -> &LedgerSession {
        &self.session
    }

    pub(crate) fn prompt(&self) -> String {
        match self.session.current() {
            Some(account) => format!("{} [{}]> ", PROMPT_ROOT, account.name),
            None => format!("{}> ", PROMPT_ROOT),
        }
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// Returns `arg` when given, otherwise asks for it interactively. Script
    /// mode cannot prompt, so a missing argument is a usage error there.
    pub(crate) fn arg_or_prompt(
        &self,
        arg: Option<&str>,
        prompt: &str,
        secret: bool,
        usage: &str,
    ) -> Result<String, CommandError> {
        if let Some(value) = arg {
            return Ok(value.to_string());
        }
        match self.mode {
            CliMode::Script => Err(CommandError::InvalidArguments(format!("Usage: {usage}"))),
            CliMode::Interactive if secret => cli_io::prompt_secret(&self.theme, prompt),
            CliMode::Interactive => cli_io::prompt_text(&self.theme, prompt),
        }
    }

    pub(crate) fn format_amount(&self, amount: u64) -> String {
        self.config.format_amount(amount)
    }
}
