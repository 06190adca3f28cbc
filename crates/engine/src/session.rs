//! A single user session: the ledger, the entry flow and an optional journal.
//!
//! The front-end feeds user intents through [`Session::handle`] one at a
//! time and renders from the query methods.

use crate::{
    DraftField, EngineError, EntryFlowController, Journal, LedgerStore, Money, ResultEngine,
    Transaction, TransactionKind,
};

/// Something the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    RequestNewEntry(TransactionKind),
    UpdateField(DraftField, String),
    FocusNext,
    Submit,
    Cancel,
}

/// What handling an [`Intent`] did.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Opened(TransactionKind),
    Closed,
    Updated,
    /// The draft was recorded. `persist_error` is set when the journal could
    /// not store it; the ledger keeps the entry anyway.
    Committed {
        transaction: Transaction,
        persist_error: Option<EngineError>,
    },
    /// Nothing changed: the intent does not apply to the current state, the
    /// draft is not valid or the ledger has no room for its amount.
    Ignored,
}

/// Snapshot of the entry prompt for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftState {
    pub is_open: bool,
    pub target_kind: Option<TransactionKind>,
    pub amount: String,
    pub note: String,
    pub focus: Option<DraftField>,
    pub is_submit_disabled: bool,
}

pub struct Session {
    ledger: LedgerStore,
    flow: EntryFlowController,
    journal: Option<Box<dyn Journal>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Session without durable storage.
    pub fn new() -> Self {
        Self {
            ledger: LedgerStore::new(),
            flow: EntryFlowController::new(),
            journal: None,
        }
    }

    /// Session restored from `journal`, which also receives every new entry.
    pub fn open(journal: Box<dyn Journal>) -> ResultEngine<Self> {
        let transactions = journal.load_all()?;
        Ok(Self {
            ledger: LedgerStore::from_transactions(transactions)?,
            flow: EntryFlowController::new(),
            journal: Some(journal),
        })
    }

    pub fn handle(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::RequestNewEntry(kind) => {
                self.flow.request_new_entry(kind);
                if self.flow.is_drafting() {
                    Outcome::Opened(kind)
                } else {
                    Outcome::Closed
                }
            }
            Intent::UpdateField(field, value) => {
                if !self.flow.is_drafting() {
                    return Outcome::Ignored;
                }
                self.flow.update_field(field, value);
                Outcome::Updated
            }
            Intent::FocusNext => {
                if !self.flow.is_drafting() {
                    return Outcome::Ignored;
                }
                self.flow.focus_next();
                Outcome::Updated
            }
            Intent::Submit => self.submit(),
            Intent::Cancel => {
                if !self.flow.is_drafting() {
                    return Outcome::Ignored;
                }
                self.flow.cancel();
                Outcome::Closed
            }
        }
    }

    fn submit(&mut self) -> Outcome {
        let Some(transaction) = self.flow.submit(&mut self.ledger).cloned() else {
            return Outcome::Ignored;
        };
        tracing::info!(
            id = transaction.id(),
            kind = transaction.kind().as_str(),
            amount = %transaction.amount(),
            "entry recorded"
        );

        let persist_error = match self.journal.as_mut() {
            Some(journal) => journal.persist(&transaction).err(),
            None => None,
        };
        if let Some(err) = &persist_error {
            tracing::warn!(id = transaction.id(), "failed to persist entry: {err}");
        }

        Outcome::Committed {
            transaction,
            persist_error,
        }
    }

    pub fn current_balance(&self) -> Money {
        self.ledger.balance()
    }

    pub fn current_entries(&self) -> &[Transaction] {
        self.ledger.all()
    }

    pub fn current_draft_state(&self) -> DraftState {
        match self.flow.draft() {
            Some(draft) => DraftState {
                is_open: true,
                target_kind: Some(draft.target_kind()),
                amount: draft.amount().to_string(),
                note: draft.note().to_string(),
                focus: Some(draft.focus()),
                is_submit_disabled: !self.flow.can_submit(&self.ledger),
            },
            None => DraftState {
                is_open: false,
                target_kind: None,
                amount: String::new(),
                note: String::new(),
                focus: None,
                is_submit_disabled: true,
            },
        }
    }

    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    pub fn flow(&self) -> &EntryFlowController {
        &self.flow
    }
}
