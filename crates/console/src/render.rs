//! Plain-text rendering of the ledger listing and the three reports.

use anyhow::Result;

use restobooks_ledger::Ledger;

pub fn help() {
    println!("Commands:");
    println!("  add      enter one transaction (creates a balanced pair)");
    println!("  ledger   list all recorded rows in order");
    println!("  pnl      Profit and Loss statement");
    println!("  balance  Balance Sheet");
    println!("  trial    Trial Balance");
    println!("  json     all reports plus the raw ledger as JSON");
    println!("  quit     end the session (nothing is saved)");
}

pub fn ledger(ledger: &Ledger) {
    println!("Transaction History");
    if ledger.is_empty() {
        println!("  (no transactions yet)");
        return;
    }

    println!(
        "  {:<12} {:<24} {:>12}  {:<10} {:<20} {}",
        "Date", "Description", "Amount", "Category", "Account", "Debit/Credit"
    );
    for entry in ledger {
        println!(
            "  {:<12} {:<24} {:>12}  {:<10} {:<20} {}",
            entry.date.to_string(),
            entry.description,
            entry.amount.to_string(),
            entry.category.to_string(),
            entry.account,
            entry.side
        );
    }
}

pub fn profit_and_loss(ledger: &Ledger) {
    let pnl = restobooks_accounting::profit_and_loss(ledger);
    println!("Profit and Loss (P&L) Statement");
    println!("  Total Income:    {}", pnl.income);
    println!("  Total Expenses:  {}", pnl.expenses);
    println!("  Net Profit/Loss: {}", pnl.net);
}

pub fn balance_sheet(ledger: &Ledger) {
    let sheet = restobooks_accounting::balance_sheet(ledger);
    println!("Balance Sheet");
    println!("  Total Assets:      {}", sheet.assets);
    println!("  Total Liabilities: {}", sheet.liabilities);
    println!("  Equity:            {}", sheet.equity);
}

pub fn trial_balance(ledger: &Ledger) {
    let tb = restobooks_accounting::trial_balance(ledger);
    println!("Trial Balance");
    if tb.is_empty() {
        println!("  (no transactions yet)");
        return;
    }

    println!(
        "  {:<20} {:>12} {:>12} {:>12}",
        "Account", "Debit", "Credit", "Total"
    );
    for (account, line) in tb.iter() {
        println!(
            "  {:<20} {:>12} {:>12} {:>12}",
            account,
            line.debit.to_string(),
            line.credit.to_string(),
            line.total.to_string()
        );
    }
}

pub fn json(ledger: &Ledger) -> Result<()> {
    let payload = serde_json::json!({
        "profit_and_loss": restobooks_accounting::profit_and_loss(ledger),
        "balance_sheet": restobooks_accounting::balance_sheet(ledger),
        "trial_balance": restobooks_accounting::trial_balance(ledger),
        "ledger": ledger.entries(),
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
