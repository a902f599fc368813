//! Interactive prompts: the input boundary that validates everything before
//! the engine sees it.

use std::io::{self, Write};

use anyhow::Result;
use chrono::{Local, NaiveDate};

use restobooks_accounting::{Transaction, suggested_accounts};
use restobooks_core::Money;
use restobooks_ledger::{Category, Side};

/// Ask one question; `None` means the input stream ended.
fn ask(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_date() -> Result<Option<NaiveDate>> {
    loop {
        let Some(raw) = ask("Transaction date (YYYY-MM-DD) [today]: ")? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(Some(Local::now().date_naive()));
        }
        match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => return Ok(Some(date)),
            Err(_) => println!("please enter a date like 2024-03-01"),
        }
    }
}

fn prompt_amount() -> Result<Option<Money>> {
    loop {
        let Some(raw) = ask("Amount: ")? else {
            return Ok(None);
        };
        match raw.parse::<Money>() {
            Ok(amount) if amount >= Money::CENT => return Ok(Some(amount)),
            Ok(_) => println!("amount must be at least 0.01"),
            Err(_) => println!("please enter a decimal amount like 12.50"),
        }
    }
}

fn prompt_category() -> Result<Option<Category>> {
    for (i, category) in Category::ALL.iter().enumerate() {
        println!("  {}. {category}", i + 1);
    }
    loop {
        let Some(raw) = ask("Category [1-4]: ")? else {
            return Ok(None);
        };
        match raw.parse::<usize>() {
            Ok(n) if (1..=Category::ALL.len()).contains(&n) => {
                return Ok(Some(Category::ALL[n - 1]));
            }
            _ => println!("please pick a number between 1 and 4"),
        }
    }
}

fn prompt_account(category: Category) -> Result<Option<String>> {
    let accounts = suggested_accounts(category);
    for (i, account) in accounts.iter().enumerate() {
        println!("  {}. {account}", i + 1);
    }
    loop {
        let Some(raw) = ask(&format!("Account [1-{}]: ", accounts.len()))? else {
            return Ok(None);
        };
        match raw.parse::<usize>() {
            Ok(n) if (1..=accounts.len()).contains(&n) => {
                return Ok(Some(accounts[n - 1].to_string()));
            }
            _ => println!("please pick one of the listed accounts"),
        }
    }
}

fn prompt_side() -> Result<Option<Side>> {
    loop {
        let Some(raw) = ask("Debit or credit? [d/c]: ")? else {
            return Ok(None);
        };
        match raw.to_ascii_lowercase().as_str() {
            "d" | "debit" => return Ok(Some(Side::Debit)),
            "c" | "credit" => return Ok(Some(Side::Credit)),
            _ => println!("please answer d or c"),
        }
    }
}

/// Walk through one transaction entry; `None` means the user hit end-of-input.
///
/// Defaults: today's date, empty description. Accounts are constrained to
/// the category's suggested list here, not in the engine.
pub fn prompt_transaction() -> Result<Option<Transaction>> {
    let Some(date) = prompt_date()? else {
        return Ok(None);
    };
    let Some(description) = ask("Description []: ")? else {
        return Ok(None);
    };
    let Some(amount) = prompt_amount()? else {
        return Ok(None);
    };
    let Some(category) = prompt_category()? else {
        return Ok(None);
    };
    let Some(account) = prompt_account(category)? else {
        return Ok(None);
    };
    let Some(side) = prompt_side()? else {
        return Ok(None);
    };

    Ok(Some(Transaction {
        date,
        description,
        amount,
        category,
        account,
        side,
    }))
}
