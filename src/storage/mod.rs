pub mod text_backend;

use crate::{domain::Account, errors::Result};

pub use text_backend::TextFileStore;

/// Number of accounts synthesized when the store is absent or empty.
pub const SEED_ACCOUNT_COUNT: u64 = 50;
const SEED_PIN_BASE: u64 = 1000;
const SEED_BALANCE_BASE: u64 = 5000;
const SEED_BALANCE_STEP: u64 = 73;

/// Abstraction over the durable record set holding every account.
pub trait AccountStore: Send + Sync {
    /// Seeds the default accounts when the store is missing or empty.
    /// Returns `true` when seeding happened.
    fn ensure_initialized(&self) -> Result<bool>;

    /// Reads every well-formed record in store order, each with an empty history.
    fn load_all(&self) -> Result<Vec<Account>>;

    /// Replaces the whole store with `accounts`, in the given order.
    fn save_all(&self, accounts: &[Account]) -> Result<()>;
}

/// `User{i},{1000 + i},{5000 + 73 * i}` for `i` in `1..=50`.
pub fn default_accounts() -> Vec<Account> {
    (1..=SEED_ACCOUNT_COUNT)
        .map(|i| {
            Account::new(
                format!("User{i}"),
                (SEED_PIN_BASE + i).to_string(),
                SEED_BALANCE_BASE + SEED_BALANCE_STEP * i,
            )
        })
        .collect()
}
