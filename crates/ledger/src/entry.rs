use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use restobooks_core::Money;

/// Transaction category chosen at entry time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Income,
    Expense,
    Asset,
    Liability,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Income,
        Category::Expense,
        Category::Asset,
        Category::Liability,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::Expense => "Expense",
            Category::Asset => "Asset",
            Category::Liability => "Liability",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which side of the books a row lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Debit,
    Credit,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Debit => Side::Credit,
            Side::Credit => Side::Debit,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::Debit => "Debit",
            Side::Credit => "Credit",
        }
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded ledger row (immutable once appended).
///
/// `account` stays an open string: the suggested per-category account lists
/// are an input-side convention, and the auto-generated counter-rows reuse
/// the labels "Equity"/"Liability"/"Asset" as account names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub description: String,
    /// Positive amount in smallest unit (e.g., cents).
    pub amount: Money,
    pub category: Category,
    pub account: String,
    pub side: Side,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_opposite_flips_both_ways() {
        assert_eq!(Side::Debit.opposite(), Side::Credit);
        assert_eq!(Side::Credit.opposite(), Side::Debit);
    }
}
