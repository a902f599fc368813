//! `restobooks-accounting` — the double-entry bookkeeping engine.
//!
//! Pure domain logic only: no IO, no persistence concerns. One validated
//! transaction becomes a balanced row pair in the ledger; the three reports
//! (profit & loss, balance sheet, trial balance) are linear scans over
//! whatever the ledger currently holds.

pub mod accounts;
pub mod engine;
pub mod reports;

pub use accounts::suggested_accounts;
pub use engine::{Transaction, opposite_account, record_transaction};
pub use reports::{
    BalanceSheet, ProfitAndLoss, TrialBalance, TrialBalanceLine, balance_sheet, profit_and_loss,
    trial_balance,
};
