use tracing::{info, warn};

use crate::{
    domain::Account,
    errors::{AuthError, LedgerError, Result, ValidationError},
    storage::AccountStore,
};

use super::validation::{parse_amount, validate_new_pin};

/// Outcome of a mini statement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiniStatement<'a> {
    Empty,
    /// The most recent entries, oldest first.
    Entries(&'a [String]),
}

/// Owns the loaded accounts and the one account currently logged in.
pub struct LedgerSession {
    accounts: Vec<Account>,
    current: Option<usize>,
    store: Box<dyn AccountStore>,
}

impl LedgerSession {
    /// Seeds the store if needed and loads every account from it.
    pub fn open(store: Box<dyn AccountStore>) -> Result<Self> {
        store.ensure_initialized()?;
        let accounts = store.load_all()?;
        Ok(Self::with_accounts(store, accounts))
    }

    pub fn with_accounts(store: Box<dyn AccountStore>, accounts: Vec<Account>) -> Self {
        Self {
            accounts,
            current: None,
            store,
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn current(&self) -> Option<&Account> {
        self.current.and_then(|index| self.accounts.get(index))
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Binds the first account whose PIN matches exactly.
    pub fn login(&mut self, pin: &str) -> Result<&Account> {
        let pin = pin.trim();
        if pin.is_empty() {
            return Err(AuthError::EmptyPin.into());
        }
        let Some(index) = self.accounts.iter().position(|account| account.pin == pin) else {
            warn!("login rejected: unknown PIN");
            return Err(AuthError::UnknownPin.into());
        };
        self.current = Some(index);
        let account = &self.accounts[index];
        info!(account = %account.name, "logged in");
        Ok(account)
    }

    pub fn logout(&mut self) {
        if let Some(account) = self.current() {
            info!(account = %account.name, "logged out");
        }
        self.current = None;
    }

    pub fn balance(&self) -> Result<u64> {
        self.current()
            .map(|account| account.balance)
            .ok_or(LedgerError::NotAuthenticated)
    }

    /// Credits the current account and returns the new balance.
    pub fn deposit(&mut self, amount_text: &str) -> Result<u64> {
        let index = self.current_index()?;
        let amount = parse_amount(amount_text)?;
        let balance = self.accounts[index]
            .balance
            .checked_add(amount)
            .ok_or(ValidationError::AmountTooLarge)?;
        self.commit(index, |account| {
            account.balance = balance;
            account.record(format!("Deposit +{amount}"));
        })?;
        info!(account = %self.accounts[index].name, amount, balance, "deposit");
        Ok(balance)
    }

    /// Debits the current account and returns the new balance.
    pub fn withdraw(&mut self, amount_text: &str) -> Result<u64> {
        let index = self.current_index()?;
        let amount = parse_amount(amount_text)?;
        let available = self.accounts[index].balance;
        if amount > available {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available,
            });
        }
        let balance = available - amount;
        self.commit(index, |account| {
            account.balance = balance;
            account.record(format!("Withdraw -{amount}"));
        })?;
        info!(account = %self.accounts[index].name, amount, balance, "withdrawal");
        Ok(balance)
    }

    pub fn recent_history(&self) -> Result<MiniStatement<'_>> {
        let account = self.current().ok_or(LedgerError::NotAuthenticated)?;
        if account.history.is_empty() {
            Ok(MiniStatement::Empty)
        } else {
            Ok(MiniStatement::Entries(account.recent()))
        }
    }

    /// Replaces the current account's PIN. Reuse of the old PIN, or of a PIN
    /// held by another account, is allowed.
    pub fn change_pin(&mut self, old_pin: &str, new_pin: &str, confirm_pin: &str) -> Result<()> {
        let index = self.current_index()?;
        if old_pin.trim() != self.accounts[index].pin {
            return Err(AuthError::IncorrectPin.into());
        }
        let new_pin = new_pin.trim();
        validate_new_pin(new_pin, confirm_pin.trim())?;
        self.commit(index, |account| account.pin = new_pin.to_string())?;
        info!(account = %self.accounts[index].name, "PIN changed");
        Ok(())
    }

    fn current_index(&self) -> Result<usize> {
        self.current.ok_or(LedgerError::NotAuthenticated)
    }

    /// Applies `change` to one account and persists the full set. If the
    /// store rejects the write the account is put back as it was.
    fn commit(&mut self, index: usize, change: impl FnOnce(&mut Account)) -> Result<()> {
        let previous = self.accounts[index].clone();
        change(&mut self.accounts[index]);
        if let Err(err) = self.store.save_all(&self.accounts) {
            self.accounts[index] = previous;
            return Err(err);
        }
        Ok(())
    }
}

impl std::fmt::Debug for LedgerSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerSession")
            .field("accounts", &self.accounts.len())
            .field("current", &self.current)
            .finish()
    }
}
