//! Statement entries and the pure functions computed over them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Currency amount. No unit is tracked and no rounding is applied.
pub type Amount = f64;

/// Discriminant of an [`Operation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Credit,
    Debit,
}

/// A single ledger entry on a customer's statement.
///
/// Credits carry an optional description; debits never do. Entries are
/// immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Operation {
    Credit {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        amount: Amount,
        created_at: DateTime<Utc>,
    },
    Debit {
        amount: Amount,
        created_at: DateTime<Utc>,
    },
}

impl Operation {
    pub fn credit(amount: Amount, description: Option<String>, created_at: DateTime<Utc>) -> Self {
        Self::Credit {
            description,
            amount,
            created_at,
        }
    }

    pub fn debit(amount: Amount, created_at: DateTime<Utc>) -> Self {
        Self::Debit { amount, created_at }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Credit { .. } => OperationKind::Credit,
            Self::Debit { .. } => OperationKind::Debit,
        }
    }

    pub fn amount(&self) -> Amount {
        match self {
            Self::Credit { amount, .. } | Self::Debit { amount, .. } => *amount,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Credit { created_at, .. } | Self::Debit { created_at, .. } => *created_at,
        }
    }

    /// Contribution of this entry to the balance.
    pub fn signed_amount(&self) -> Amount {
        match self.kind() {
            OperationKind::Credit => self.amount(),
            OperationKind::Debit => -self.amount(),
        }
    }
}

/// Net balance of a statement: credits minus debits, starting from zero.
///
/// Recomputed on every call; nothing is cached.
pub fn balance(statement: &[Operation]) -> Amount {
    statement
        .iter()
        .fold(0.0, |acc, op| acc + op.signed_amount())
}

/// Entries whose `created_at` falls on `date` (UTC calendar day), in statement order.
pub fn filter_by_date(statement: &[Operation], date: NaiveDate) -> Vec<Operation> {
    statement
        .iter()
        .filter(|op| op.created_at().date_naive() == date)
        .cloned()
        .collect()
}

/// Parse the `date` query value of a statement lookup.
///
/// Only a bare calendar date (`YYYY-MM-DD`) is accepted. Anything else,
/// timestamps included, yields `None`, which callers treat as "matches
/// nothing" rather than as an error.
pub fn parse_statement_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn empty_statement_has_zero_balance() {
        assert_eq!(balance(&[]), 0.0);
    }

    #[test]
    fn credits_add_and_debits_subtract() {
        let statement = vec![
            Operation::credit(100.0, Some("salary".into()), at(2024, 1, 1, 9)),
            Operation::debit(30.0, at(2024, 1, 1, 10)),
            Operation::credit(5.0, None, at(2024, 1, 2, 9)),
        ];
        assert_eq!(balance(&statement), 75.0);
    }

    #[test]
    fn filter_matches_whole_calendar_day_only() {
        let statement = vec![
            Operation::credit(100.0, None, at(2024, 1, 1, 0)),
            Operation::debit(10.0, at(2024, 1, 1, 23)),
            Operation::credit(50.0, None, at(2024, 1, 2, 0)),
        ];
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let filtered = filter_by_date(&statement, day);
        assert_eq!(filtered, statement[..2].to_vec());
    }

    #[test]
    fn parse_accepts_plain_dates() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(parse_statement_date("2024-01-01"), Some(day));
        assert_eq!(parse_statement_date(" 2024-01-01 "), Some(day));
    }

    #[test]
    fn parse_rejects_timestamps_with_offsets() {
        // Would land on 2024-01-02 once shifted to UTC.
        assert_eq!(parse_statement_date("2024-01-01T23:30:00-05:00"), None);
        assert_eq!(parse_statement_date("2024-01-01T15:30:00Z"), None);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_statement_date("yesterday"), None);
        assert_eq!(parse_statement_date("2024-13-01"), None);
        assert_eq!(parse_statement_date(""), None);
    }

    #[test]
    fn credit_serializes_with_type_tag_and_description() {
        let op = Operation::credit(10.0, Some("gift".into()), at(2024, 1, 1, 12));
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json["type"], "credit");
        assert_eq!(json["description"], "gift");
        assert_eq!(json["amount"], 10.0);
        assert_eq!(json["created_at"], "2024-01-01T12:00:00Z");
    }

    #[test]
    fn debit_serializes_without_description() {
        let op = Operation::debit(4.5, at(2024, 1, 1, 12));
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json["type"], "debit");
        assert!(json.get("description").is_none());
    }

    proptest! {
        #[test]
        fn balance_is_credits_minus_debits(
            entries in proptest::collection::vec((any::<bool>(), 0u32..10_000), 0..50)
        ) {
            let ts = at(2024, 1, 1, 0);
            let statement: Vec<Operation> = entries
                .iter()
                .map(|(is_credit, cents)| {
                    let amount = f64::from(*cents);
                    if *is_credit {
                        Operation::credit(amount, None, ts)
                    } else {
                        Operation::debit(amount, ts)
                    }
                })
                .collect();

            let credits: f64 = entries.iter().filter(|(c, _)| *c).map(|(_, a)| f64::from(*a)).sum();
            let debits: f64 = entries.iter().filter(|(c, _)| !*c).map(|(_, a)| f64::from(*a)).sum();

            prop_assert_eq!(balance(&statement), credits - debits);
        }
    }
}
