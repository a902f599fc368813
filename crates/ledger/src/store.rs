use serde::{Deserialize, Serialize};

use crate::entry::LedgerEntry;

/// Append-only, insertion-ordered ledger for one session.
///
/// Rows arrive in balanced pairs and are never edited, reordered, or deleted,
/// so the length is even at all times. The store itself holds no accounting
/// rules; it only keeps rows and hands them back for sequential scans.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    /// Create an empty ledger (session start).
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a balanced pair in one step: both rows land, or neither.
    ///
    /// This is the only mutation path; taking the pair by value as an array
    /// makes a half-appended transaction unrepresentable.
    pub fn append_pair(&mut self, pair: [LedgerEntry; 2]) {
        self.entries.extend(pair);
    }

    /// All rows, in insertion order.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn iter(&self) -> core::slice::Iter<'_, LedgerEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a LedgerEntry;
    type IntoIter = core::slice::Iter<'a, LedgerEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Category, Side};
    use chrono::NaiveDate;
    use restobooks_core::Money;

    fn row(account: &str, side: Side) -> LedgerEntry {
        LedgerEntry {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            description: "lunch service".to_string(),
            amount: Money::from_minor(10_000),
            category: Category::Income,
            account: account.to_string(),
            side,
        }
    }

    #[test]
    fn starts_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn append_pair_preserves_insertion_order_and_even_length() {
        let mut ledger = Ledger::new();
        ledger.append_pair([row("Food Sales", Side::Debit), row("Equity", Side::Credit)]);
        ledger.append_pair([row("Cash", Side::Credit), row("Liability", Side::Debit)]);

        assert_eq!(ledger.len(), 4);
        assert_eq!(ledger.len() % 2, 0);
        let accounts: Vec<_> = ledger.iter().map(|e| e.account.as_str()).collect();
        assert_eq!(accounts, ["Food Sales", "Equity", "Cash", "Liability"]);
    }
}
