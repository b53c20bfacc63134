pub mod account;

pub use account::{is_valid_pin, Account, PIN_LENGTH, STATEMENT_LENGTH};
