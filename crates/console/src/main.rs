//! Interactive session driver for the bookkeeping engine.
//!
//! This binary is the "entry form" collaborator: it validates all input up
//! front, hands validated transactions to the engine, and renders whatever
//! the engine returns. All state lives in one in-memory session and is gone
//! on exit.

use std::io::{self, Write};

use anyhow::Result;

use restobooks_accounting::record_transaction;
use restobooks_core::Entity;
use restobooks_ledger::Session;

mod input;
mod render;

fn main() -> Result<()> {
    restobooks_observability::init();

    let mut session = Session::start();
    tracing::info!(session_id = %session.id(), "session started");

    println!("Restaurant Accounting System");
    println!("Type `help` for commands.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => {}
            "help" => render::help(),
            "add" => match input::prompt_transaction()? {
                Some(tx) => {
                    let account = tx.account.clone();
                    let amount = tx.amount;
                    match record_transaction(session.ledger_mut(), tx) {
                        Ok(()) => {
                            tracing::info!(%account, %amount, "transaction recorded");
                            println!("Transaction added.");
                        }
                        Err(err) => println!("rejected: {err}"),
                    }
                }
                None => break,
            },
            "ledger" => render::ledger(session.ledger()),
            "pnl" => render::profit_and_loss(session.ledger()),
            "balance" => render::balance_sheet(session.ledger()),
            "trial" => render::trial_balance(session.ledger()),
            "json" => render::json(session.ledger())?,
            "quit" | "exit" => break,
            other => println!("unknown command: {other} (try `help`)"),
        }
    }

    tracing::info!(entries = session.ledger().len(), "session ended, ledger discarded");
    Ok(())
}
