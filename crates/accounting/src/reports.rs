//! Derived reports: linear scans over the ledger, recomputed on every call.
//!
//! At manual-entry volumes a full scan per report is the right trade; no
//! incremental aggregation is kept anywhere.

use std::collections::BTreeMap;

use serde::Serialize;

use restobooks_core::Money;
use restobooks_ledger::{Ledger, Side};

/// Profit & Loss statement.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfitAndLoss {
    pub income: Money,
    pub expenses: Money,
    pub net: Money,
}

/// Balance sheet totals.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalanceSheet {
    pub assets: Money,
    pub liabilities: Money,
    pub equity: Money,
}

/// One trial-balance row: per-side totals and their difference.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrialBalanceLine {
    pub debit: Money,
    pub credit: Money,
    pub total: Money,
}

/// Per-account debit/credit totals over every row in the ledger.
///
/// Accounts are exactly the distinct labels observed at call time - there is
/// no fixed chart of accounts. Keys are sorted (BTreeMap), which fixes the
/// display order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrialBalance {
    accounts: BTreeMap<String, TrialBalanceLine>,
}

impl TrialBalance {
    pub fn line(&self, account: &str) -> Option<&TrialBalanceLine> {
        self.accounts.get(account)
    }

    /// Rows in ascending account-label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TrialBalanceLine)> {
        self.accounts.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

fn sum_for_account(ledger: &Ledger, account: &str) -> Money {
    ledger
        .iter()
        .filter(|e| e.account == account)
        .map(|e| e.amount)
        .sum()
}

/// Profit & Loss: income and expense totals plus their difference.
///
/// Matches on the literal account labels "Income"/"Expense" - rows the user
/// explicitly filed under those labels. Counter-rows never land here because
/// the category mapping only ever produces "Equity"/"Liability"/"Asset".
/// Empty matches sum to zero.
pub fn profit_and_loss(ledger: &Ledger) -> ProfitAndLoss {
    let income = sum_for_account(ledger, "Income");
    let expenses = sum_for_account(ledger, "Expense");
    ProfitAndLoss {
        income,
        expenses,
        net: income - expenses,
    }
}

/// Balance sheet: asset and liability totals plus derived equity.
///
/// Amounts are summed at face value on both sides - a credit-side asset row
/// raises the total exactly like a debit-side one. No sign adjustment is
/// applied here, unlike the trial balance.
pub fn balance_sheet(ledger: &Ledger) -> BalanceSheet {
    let assets = sum_for_account(ledger, "Asset");
    let liabilities = sum_for_account(ledger, "Liability");
    BalanceSheet {
        assets,
        liabilities,
        equity: assets - liabilities,
    }
}

/// Trial balance: group every row by its account label and total each side.
///
/// User-chosen labels and auto-generated counter-labels share one namespace;
/// colliding strings land in the same row. Given the static counter-account
/// rule, the grand total over all rows carries no zero-sum guarantee.
pub fn trial_balance(ledger: &Ledger) -> TrialBalance {
    let mut accounts: BTreeMap<String, TrialBalanceLine> = BTreeMap::new();

    for entry in ledger {
        let line = accounts.entry(entry.account.clone()).or_default();
        match entry.side {
            Side::Debit => line.debit += entry.amount,
            Side::Credit => line.credit += entry.amount,
        }
    }

    for line in accounts.values_mut() {
        line.total = line.debit - line.credit;
    }

    TrialBalance { accounts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Transaction, record_transaction};
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use restobooks_ledger::Category;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn record(ledger: &mut Ledger, category: Category, account: &str, minor: i64, side: Side) {
        record_transaction(
            ledger,
            Transaction {
                date: test_date(),
                description: String::new(),
                amount: Money::from_minor(minor),
                category,
                account: account.to_string(),
                side,
            },
        )
        .unwrap();
    }

    #[test]
    fn empty_ledger_reports_all_zero() {
        let ledger = Ledger::new();
        assert_eq!(profit_and_loss(&ledger), ProfitAndLoss::default());
        assert_eq!(balance_sheet(&ledger), BalanceSheet::default());
        assert!(trial_balance(&ledger).is_empty());
    }

    #[test]
    fn pnl_counts_only_rows_filed_under_the_literal_labels() {
        let mut ledger = Ledger::new();
        // "Food Sales" is an Income-category account, but not the label "Income":
        // it contributes nothing to the P&L. Its counter-row lands under "Equity".
        record(&mut ledger, Category::Income, "Food Sales", 10_000, Side::Debit);
        assert_eq!(profit_and_loss(&ledger), ProfitAndLoss::default());

        record(&mut ledger, Category::Income, "Income", 10_000, Side::Debit);
        record(&mut ledger, Category::Expense, "Expense", 4_000, Side::Credit);

        let pnl = profit_and_loss(&ledger);
        assert_eq!(pnl.income, Money::from_minor(10_000));
        assert_eq!(pnl.expenses, Money::from_minor(4_000));
        assert_eq!(pnl.net, Money::from_minor(6_000));
    }

    #[test]
    fn balance_sheet_sums_face_value_regardless_of_side() {
        let mut ledger = Ledger::new();
        // Credit-side asset row still raises the asset total.
        record(&mut ledger, Category::Asset, "Asset", 50_000, Side::Credit);

        let sheet = balance_sheet(&ledger);
        assert_eq!(sheet.assets, Money::from_minor(50_000));
        // The counter-row of an Asset transaction is labeled "Liability".
        assert_eq!(sheet.liabilities, Money::from_minor(50_000));
        assert_eq!(sheet.equity, Money::ZERO);
    }

    #[test]
    fn counter_rows_can_feed_the_balance_sheet_buckets() {
        let mut ledger = Ledger::new();
        // A Liability transaction's counter-row is auto-labeled "Asset" and is
        // counted in the asset total even though the user never typed it.
        record(
            &mut ledger,
            Category::Liability,
            "Loans",
            20_000,
            Side::Credit,
        );

        let sheet = balance_sheet(&ledger);
        assert_eq!(sheet.assets, Money::from_minor(20_000));
        assert_eq!(sheet.liabilities, Money::ZERO);
        assert_eq!(sheet.equity, Money::from_minor(20_000));
    }

    #[test]
    fn trial_balance_groups_counter_rows_under_equity() {
        let mut ledger = Ledger::new();
        record(&mut ledger, Category::Income, "Food Sales", 10_000, Side::Debit);
        record(&mut ledger, Category::Expense, "Rent", 4_000, Side::Credit);

        let tb = trial_balance(&ledger);
        // Income counter-row: Credit 100.00; Expense counter-row: Debit 40.00.
        let equity = tb.line("Equity").unwrap();
        assert_eq!(equity.credit, Money::from_minor(10_000));
        assert_eq!(equity.debit, Money::from_minor(4_000));
        assert_eq!(equity.total, Money::from_minor(-6_000));

        let food = tb.line("Food Sales").unwrap();
        assert_eq!(food.debit, Money::from_minor(10_000));
        assert_eq!(food.credit, Money::ZERO);
        assert_eq!(food.total, Money::from_minor(10_000));

        // Only the labels actually observed appear.
        let labels: Vec<_> = tb.iter().map(|(a, _)| a).collect();
        assert_eq!(labels, ["Equity", "Food Sales", "Rent"]);
    }

    #[test]
    fn user_labels_and_counter_labels_share_one_namespace() {
        let mut ledger = Ledger::new();
        // User files an expense directly under "Equity"; it merges with the
        // counter-row of the income transaction below.
        record(&mut ledger, Category::Expense, "Equity", 1_000, Side::Debit);
        record(&mut ledger, Category::Income, "Food Sales", 2_000, Side::Debit);

        let tb = trial_balance(&ledger);
        let equity = tb.line("Equity").unwrap();
        assert_eq!(equity.debit, Money::from_minor(1_000));
        // 2_000 from the income counter-row, 1_000 from the expense counter-row.
        assert_eq!(equity.credit, Money::from_minor(3_000));
        assert_eq!(equity.total, Money::from_minor(-2_000));
    }

    #[test]
    fn raw_listing_preserves_every_field_in_insertion_order() {
        let mut ledger = Ledger::new();
        record(&mut ledger, Category::Income, "Food Sales", 10_000, Side::Debit);
        record(&mut ledger, Category::Asset, "Cash", 50_000, Side::Credit);

        let accounts: Vec<_> = ledger.iter().map(|e| e.account.as_str()).collect();
        assert_eq!(accounts, ["Food Sales", "Equity", "Cash", "Liability"]);
        assert!(ledger.iter().all(|e| e.date == test_date()));
        assert!(ledger.iter().all(|e| e.amount.is_positive()));
    }

    #[test]
    fn reports_serialize_to_plain_display_payloads() {
        let mut ledger = Ledger::new();
        record(&mut ledger, Category::Income, "Income", 10_000, Side::Debit);

        let pnl = serde_json::to_value(profit_and_loss(&ledger)).unwrap();
        assert_eq!(pnl["income"], 10_000);
        assert_eq!(pnl["net"], 10_000);

        let tb = serde_json::to_value(trial_balance(&ledger)).unwrap();
        assert_eq!(tb["Income"]["debit"], 10_000);
        assert_eq!(tb["Equity"]["credit"], 10_000);
    }

    fn any_category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    fn any_side() -> impl Strategy<Value = Side> {
        prop_oneof![Just(Side::Debit), Just(Side::Credit)]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: all three reports are invariant under reordering of the
        /// recorded transactions (sums and group-by are order-independent).
        #[test]
        fn reports_are_order_independent(
            inputs in prop::collection::vec(
                (1i64..1_000_000i64, any_category(), any_side(), "[A-Za-z ]{0,10}"),
                1..20,
            )
        ) {
            let mut forward = Ledger::new();
            for (minor, category, side, account) in &inputs {
                record(&mut forward, *category, account, *minor, *side);
            }

            let mut reversed = Ledger::new();
            for (minor, category, side, account) in inputs.iter().rev() {
                record(&mut reversed, *category, account, *minor, *side);
            }

            prop_assert_eq!(profit_and_loss(&forward), profit_and_loss(&reversed));
            prop_assert_eq!(balance_sheet(&forward), balance_sheet(&reversed));
            prop_assert_eq!(trial_balance(&forward), trial_balance(&reversed));
        }
    }
}
