/// Number of digits a PIN must have.
pub const PIN_LENGTH: usize = 4;

/// Number of history entries shown on a mini statement.
pub const STATEMENT_LENGTH: usize = 5;

/// A named holder of a PIN and a whole-unit balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub pin: String,
    pub balance: u64,
    /// Transaction descriptions for this process only; never written to the store.
    pub history: Vec<String>,
}

impl Account {
    /// Creates an account with an empty history.
    pub fn new(name: impl Into<String>, pin: impl Into<String>, balance: u64) -> Self {
        Self {
            name: name.into(),
            pin: pin.into(),
            balance,
            history: Vec::new(),
        }
    }

    /// Appends a transaction description to the in-memory history.
    pub fn record(&mut self, entry: impl Into<String>) {
        self.history.push(entry.into());
    }

    /// Renders the `name,pin,balance` record stored on disk.
    pub fn to_record(&self) -> String {
        format!("{},{},{}", self.name, self.pin, self.balance)
    }

    /// The tail of the history shown on a mini statement, oldest first.
    pub fn recent(&self) -> &[String] {
        let start = self.history.len().saturating_sub(STATEMENT_LENGTH);
        &self.history[start..]
    }
}

/// Returns true when `candidate` is exactly four ASCII decimal digits.
pub fn is_valid_pin(candidate: &str) -> bool {
    candidate.len() == PIN_LENGTH && candidate.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_line_has_no_trailing_newline() {
        let account = Account::new("User1", "1001", 5073);
        assert_eq!(account.to_record(), "User1,1001,5073");
    }

    #[test]
    fn recent_keeps_last_five_in_order() {
        let mut account = Account::new("User1", "1001", 0);
        for n in 1..=7 {
            account.record(format!("Deposit +{n}"));
        }
        let recent: Vec<&str> = account.recent().iter().map(String::as_str).collect();
        assert_eq!(
            recent,
            vec![
                "Deposit +3",
                "Deposit +4",
                "Deposit +5",
                "Deposit +6",
                "Deposit +7"
            ]
        );
    }

    #[test]
    fn pin_format_rules() {
        assert!(is_valid_pin("0000"));
        assert!(is_valid_pin("1234"));
        assert!(!is_valid_pin("123"));
        assert!(!is_valid_pin("12345"));
        assert!(!is_valid_pin("12a4"));
        assert!(!is_valid_pin("١٢٣٤"));
        assert!(!is_valid_pin(""));
    }
}
