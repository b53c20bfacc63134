pub mod session;
pub mod utils;
pub mod validation;

pub use session::{LedgerSession, MiniStatement};
