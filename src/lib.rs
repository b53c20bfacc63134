#![doc(test(attr(deny(warnings))))]

//! ATM Ledger keeps a flat-file set of PIN-protected accounts and exposes a
//! single-user session for balance checks, deposits, withdrawals, mini
//! statements and PIN changes.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::{LedgerSession, MiniStatement};
pub use domain::Account;
pub use errors::{AuthError, LedgerError, ValidationError};
pub use storage::{AccountStore, TextFileStore};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("ATM Ledger tracing initialized.");
    });
}
