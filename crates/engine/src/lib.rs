//! Ledger state model for a personal cashbook.
//!
//! - [`LedgerStore`] keeps the append-only list of [`Transaction`]s and
//!   derives the balance from it.
//! - [`EntryFlowController`] owns the entry prompt: it opens a draft for a
//!   [`TransactionKind`], validates it and commits it into the ledger.
//! - [`Session`] owns one of each (plus an optional [`Journal`]) and is what
//!   a front-end drives.
pub use entry_flow::{DraftField, EntryDraft, EntryFlow, EntryFlowController};
pub use error::EngineError;
pub use journal::{Journal, JsonlJournal, MemoryJournal};
pub use ledger::LedgerStore;
pub use money::Money;
pub use session::{DraftState, Intent, Outcome, Session};
pub use transactions::{Transaction, TransactionId, TransactionKind};

mod entry_flow;
mod error;
mod journal;
mod ledger;
mod money;
mod session;
mod transactions;

pub type ResultEngine<T> = Result<T, EngineError>;
