use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use restobooks_core::{DomainError, DomainResult, Money};
use restobooks_ledger::{Category, Ledger, LedgerEntry, Side};

/// Validated transaction input from the entry-form collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub category: Category,
    pub account: String,
    pub side: Side,
}

/// Counter-row account label for a category.
///
/// A static lookup, not a balancing computation: Income and Expense close to
/// "Equity", Assets balance against "Liability", everything else against
/// "Asset". The labels are category markers reused as account names; the
/// reports match on exactly this wording.
pub fn opposite_account(category: Category) -> &'static str {
    match category {
        Category::Income | Category::Expense => "Equity",
        Category::Asset => "Liability",
        // Liability, and historically any unrecognized category.
        _ => "Asset",
    }
}

/// Expand one transaction into its balanced row pair and append both.
///
/// The primary row carries the caller's account and side as given; the
/// counter-row shares date, description, amount, and category, flips the
/// side, and takes its account from [`opposite_account`]. The account label
/// is not checked against the suggested lists - that is the entry form's job.
pub fn record_transaction(ledger: &mut Ledger, tx: Transaction) -> DomainResult<()> {
    if !tx.amount.is_positive() {
        return Err(DomainError::validation("amount must be positive"));
    }

    let counter = LedgerEntry {
        date: tx.date,
        description: tx.description.clone(),
        amount: tx.amount,
        category: tx.category,
        account: opposite_account(tx.category).to_string(),
        side: tx.side.opposite(),
    };
    let primary = LedgerEntry {
        date: tx.date,
        description: tx.description,
        amount: tx.amount,
        category: tx.category,
        account: tx.account,
        side: tx.side,
    };

    ledger.append_pair([primary, counter]);
    Ok(())
}
