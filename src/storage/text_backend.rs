use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{domain::Account, errors::Result, utils::persistence::replace_file};

use super::{default_accounts, AccountStore};

const FIELD_SEPARATOR: char = ',';
const FIELD_COUNT: usize = 3;

/// Flat text store: one `name,pin,balance` record per line, no header.
#[derive(Debug, Clone)]
pub struct TextFileStore {
    path: PathBuf,
}

impl TextFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_missing_or_empty(&self) -> Result<bool> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(true),
            Err(err) => Err(err.into()),
        }
    }
}

impl AccountStore for TextFileStore {
    fn ensure_initialized(&self) -> Result<bool> {
        if !self.is_missing_or_empty()? {
            return Ok(false);
        }
        let accounts = default_accounts();
        self.save_all(&accounts)?;
        info!(
            path = %self.path.display(),
            count = accounts.len(),
            "seeded account store"
        );
        Ok(true)
    }

    fn load_all(&self) -> Result<Vec<Account>> {
        let reader = BufReader::new(File::open(&self.path)?);
        let mut accounts = Vec::new();
        for (index, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            // Invalid UTF-8 is just another malformed record.
            let Ok(text) = std::str::from_utf8(&line) else {
                debug!(line = index + 1, "skipping non-UTF-8 account record");
                continue;
            };
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            match parse_record(trimmed) {
                Some(account) => accounts.push(account),
                None => debug!(line = index + 1, "skipping malformed account record"),
            }
        }
        info!(count = accounts.len(), "loaded accounts");
        Ok(accounts)
    }

    fn save_all(&self, accounts: &[Account]) -> Result<()> {
        let mut contents = String::new();
        for account in accounts {
            contents.push_str(&account.to_record());
            contents.push('\n');
        }
        replace_file(&self.path, &contents)?;
        debug!(count = accounts.len(), "persisted account store");
        Ok(())
    }
}

/// Parses a trimmed record line. Returns `None` for anything that is not
/// exactly three fields with an unsigned integer balance. The balance may
/// carry surrounding spaces and a leading `+`.
pub(crate) fn parse_record(line: &str) -> Option<Account> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }
    let balance_text = fields[2].trim();
    let balance_text = balance_text.strip_prefix('+').unwrap_or(balance_text);
    if balance_text.is_empty() || !balance_text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let balance = balance_text.parse().ok()?;
    Some(Account::new(fields[0], fields[1], balance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_record() {
        let account = parse_record("User7,1007,5511").expect("record");
        assert_eq!(account.name, "User7");
        assert_eq!(account.pin, "1007");
        assert_eq!(account.balance, 5511);
        assert!(account.history.is_empty());
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(parse_record("User7,1007").is_none());
        assert!(parse_record("User7,1007,5511,extra").is_none());
    }

    #[test]
    fn rejects_non_numeric_balance() {
        assert!(parse_record("User7,1007,lots").is_none());
        assert!(parse_record("User7,1007,-5").is_none());
        assert!(parse_record("User7,1007,").is_none());
        assert!(parse_record("User7,1007,+").is_none());
        assert!(parse_record("User7,1007,++5").is_none());
        assert!(parse_record("User7,1007,5 5").is_none());
    }

    #[test]
    fn balance_tolerates_padding_and_plus_sign() {
        assert_eq!(parse_record("User7,1007, 5511 ").unwrap().balance, 5511);
        assert_eq!(parse_record("User7,1007,+5511").unwrap().balance, 5511);
        assert_eq!(parse_record("User7,1007, +12").unwrap().balance, 12);
    }
}
