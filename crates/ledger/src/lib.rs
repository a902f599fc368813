//! `restobooks-ledger` — the append-only ledger store.
//!
//! Pure domain logic only: no IO, no persistence concerns. This crate holds
//! rows and scans them; the rules that produce balanced row pairs live in
//! `restobooks-accounting`.

pub mod entry;
pub mod session;
pub mod store;

pub use entry::{Category, LedgerEntry, Side};
pub use session::Session;
pub use store::Ledger;
