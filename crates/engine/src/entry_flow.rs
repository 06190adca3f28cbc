//! Entry creation state machine.
//!
//! The controller is either idle or holds exactly one [`EntryDraft`]. Invalid
//! drafts are never reported as errors: they just cannot be submitted, and
//! [`EntryFlowController::is_submit_disabled`] says so up front.

use crate::{LedgerStore, Money, Transaction, TransactionKind};

/// Editable field of a draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Amount,
    Note,
}

impl DraftField {
    fn next(self) -> Self {
        match self {
            Self::Amount => Self::Note,
            Self::Note => Self::Amount,
        }
    }
}

/// Transaction being typed in. The amount is kept as raw text and only
/// parsed when validating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryDraft {
    target_kind: TransactionKind,
    amount: String,
    note: String,
    focus: DraftField,
}

impl EntryDraft {
    fn new(target_kind: TransactionKind) -> Self {
        Self {
            target_kind,
            amount: "0".to_string(),
            note: String::new(),
            focus: DraftField::Amount,
        }
    }

    pub fn target_kind(&self) -> TransactionKind {
        self.target_kind
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn focus(&self) -> DraftField {
        self.focus
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Amount => &self.amount,
            DraftField::Note => &self.note,
        }
    }

    /// Amount as money, `None` when the text is not a number.
    pub fn parsed_amount(&self) -> Option<Money> {
        self.amount.parse().ok()
    }

    /// A draft can be committed when its amount is a number greater than zero
    /// and its note has some non-whitespace content.
    pub fn is_valid(&self) -> bool {
        self.valid_amount().is_some()
    }

    fn valid_amount(&self) -> Option<Money> {
        if self.note.trim().is_empty() {
            return None;
        }
        self.parsed_amount().filter(|amount| amount.is_positive())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EntryFlow {
    #[default]
    Idle,
    Drafting(EntryDraft),
}

#[derive(Debug, Default)]
pub struct EntryFlowController {
    state: EntryFlow,
}

impl EntryFlowController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EntryFlow {
        &self.state
    }

    pub fn draft(&self) -> Option<&EntryDraft> {
        match &self.state {
            EntryFlow::Idle => None,
            EntryFlow::Drafting(draft) => Some(draft),
        }
    }

    pub fn is_drafting(&self) -> bool {
        matches!(self.state, EntryFlow::Drafting(_))
    }

    /// Opens a draft for `kind` when idle.
    ///
    /// While a draft is already open the request closes it instead, whatever
    /// `kind` is: asking for "Out" during an "In" draft does not retarget it.
    pub fn request_new_entry(&mut self, kind: TransactionKind) {
        self.state = match self.state {
            EntryFlow::Idle => {
                tracing::debug!(kind = kind.as_str(), "entry draft opened");
                EntryFlow::Drafting(EntryDraft::new(kind))
            }
            EntryFlow::Drafting(_) => {
                tracing::debug!(kind = kind.as_str(), "entry draft toggled closed");
                EntryFlow::Idle
            }
        };
    }

    /// Replaces the value of one field. Ignored while idle.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        if let EntryFlow::Drafting(draft) = &mut self.state {
            match field {
                DraftField::Amount => draft.amount = value.into(),
                DraftField::Note => draft.note = value.into(),
            }
        }
    }

    /// Moves input focus to the other field. Ignored while idle.
    pub fn focus_next(&mut self) {
        if let EntryFlow::Drafting(draft) = &mut self.state {
            draft.focus = draft.focus.next();
        }
    }

    pub fn focused_field(&self) -> Option<DraftField> {
        self.draft().map(EntryDraft::focus)
    }

    pub fn is_valid(&self) -> bool {
        self.draft().is_some_and(EntryDraft::is_valid)
    }

    /// `true` while the draft itself cannot be committed. See
    /// [`can_submit`](Self::can_submit) for the check against a ledger.
    pub fn is_submit_disabled(&self) -> bool {
        !self.is_valid()
    }

    /// Whether [`submit`](Self::submit) into `ledger` would commit: the draft
    /// is valid and the ledger still has room for its amount.
    pub fn can_submit(&self, ledger: &LedgerStore) -> bool {
        self.draft().is_some_and(|draft| {
            draft
                .valid_amount()
                .is_some_and(|amount| ledger.accepts(draft.target_kind, amount))
        })
    }

    /// Commits the draft into `ledger` and returns to idle.
    ///
    /// Returns `None` without touching the ledger or the draft when idle, when
    /// the draft is invalid or when the ledger would overflow its totals.
    pub fn submit<'l>(&mut self, ledger: &'l mut LedgerStore) -> Option<&'l Transaction> {
        let EntryFlow::Drafting(draft) = &self.state else {
            return None;
        };
        let Some(amount) = draft.valid_amount() else {
            tracing::debug!("submit ignored, draft is not valid");
            return None;
        };
        if !ledger.accepts(draft.target_kind, amount) {
            tracing::debug!(
                kind = draft.target_kind.as_str(),
                %amount,
                "submit ignored, total would overflow"
            );
            return None;
        }
        let kind = draft.target_kind;
        let EntryFlow::Drafting(draft) = std::mem::take(&mut self.state) else {
            return None;
        };
        Some(ledger.append(kind, amount, &draft.note))
    }

    /// Drops the draft without recording anything.
    pub fn cancel(&mut self) {
        if self.is_drafting() {
            tracing::debug!("entry draft cancelled");
        }
        self.state = EntryFlow::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drafting(kind: TransactionKind, amount: &str, note: &str) -> EntryFlowController {
        let mut flow = EntryFlowController::new();
        flow.request_new_entry(kind);
        flow.update_field(DraftField::Amount, amount);
        flow.update_field(DraftField::Note, note);
        flow
    }

    #[test]
    fn starts_idle_with_submit_disabled() {
        let flow = EntryFlowController::new();
        assert_eq!(flow.state(), &EntryFlow::Idle);
        assert!(flow.is_submit_disabled());
        assert_eq!(flow.focused_field(), None);
    }

    #[test]
    fn request_opens_fresh_draft() {
        let mut flow = EntryFlowController::new();
        flow.request_new_entry(TransactionKind::Out);

        let draft = flow.draft().unwrap();
        assert_eq!(draft.target_kind(), TransactionKind::Out);
        assert_eq!(draft.amount(), "0");
        assert_eq!(draft.note(), "");
        assert_eq!(draft.focus(), DraftField::Amount);
        assert!(flow.is_submit_disabled());
    }

    #[test]
    fn second_request_closes_instead_of_switching() {
        let mut flow = EntryFlowController::new();
        flow.request_new_entry(TransactionKind::In);
        flow.request_new_entry(TransactionKind::Out);
        assert_eq!(flow.state(), &EntryFlow::Idle);

        flow.request_new_entry(TransactionKind::In);
        flow.request_new_entry(TransactionKind::In);
        assert_eq!(flow.state(), &EntryFlow::Idle);
    }

    #[test]
    fn update_field_touches_only_named_field() {
        let mut flow = EntryFlowController::new();
        flow.request_new_entry(TransactionKind::In);
        flow.update_field(DraftField::Note, "salary");

        let draft = flow.draft().unwrap();
        assert_eq!(draft.note(), "salary");
        assert_eq!(draft.amount(), "0");
        assert_eq!(draft.target_kind(), TransactionKind::In);

        flow.update_field(DraftField::Amount, "12.5");
        let draft = flow.draft().unwrap();
        assert_eq!(draft.amount(), "12.5");
        assert_eq!(draft.note(), "salary");
    }

    #[test]
    fn updates_while_idle_are_ignored() {
        let mut flow = EntryFlowController::new();
        flow.update_field(DraftField::Amount, "5");
        flow.focus_next();
        assert_eq!(flow.state(), &EntryFlow::Idle);
    }

    #[test]
    fn focus_cycles_between_fields() {
        let mut flow = EntryFlowController::new();
        flow.request_new_entry(TransactionKind::In);
        flow.focus_next();
        assert_eq!(flow.focused_field(), Some(DraftField::Note));
        flow.focus_next();
        assert_eq!(flow.focused_field(), Some(DraftField::Amount));
    }

    #[test]
    fn validation_gate() {
        assert!(!drafting(TransactionKind::In, "0", "salary").is_valid());
        assert!(!drafting(TransactionKind::In, "-5", "salary").is_valid());
        assert!(!drafting(TransactionKind::In, "abc", "salary").is_valid());
        assert!(!drafting(TransactionKind::In, "", "salary").is_valid());
        assert!(!drafting(TransactionKind::In, "100", "").is_valid());
        assert!(!drafting(TransactionKind::In, "100", "   \t").is_valid());
        assert!(drafting(TransactionKind::In, "100", "salary").is_valid());
        assert!(drafting(TransactionKind::Out, "0.01", " x ").is_valid());
    }

    #[test]
    fn submit_commits_and_returns_to_idle() {
        let mut ledger = LedgerStore::new();
        let mut flow = drafting(TransactionKind::In, "100", "salary");

        let tx = flow.submit(&mut ledger).unwrap();
        assert_eq!(tx.kind(), TransactionKind::In);
        assert_eq!(tx.amount(), Money::new(10_000));
        assert_eq!(tx.note(), "salary");
        assert_eq!(flow.state(), &EntryFlow::Idle);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn invalid_submit_keeps_draft_and_ledger() {
        let mut ledger = LedgerStore::new();
        let mut flow = drafting(TransactionKind::Out, "0", "lunch");

        assert!(flow.submit(&mut ledger).is_none());
        assert!(ledger.is_empty());
        let draft = flow.draft().unwrap();
        assert_eq!(draft.target_kind(), TransactionKind::Out);
        assert_eq!(draft.note(), "lunch");
    }

    #[test]
    fn submit_refuses_amount_past_the_ledger_total() {
        let mut ledger = LedgerStore::new();
        let mut flow = drafting(TransactionKind::In, "90000000000000000", "big");
        assert!(flow.can_submit(&ledger));
        assert!(flow.submit(&mut ledger).is_some());

        let mut flow = drafting(TransactionKind::In, "90000000000000000", "big");
        assert!(flow.is_valid());
        assert!(!flow.can_submit(&ledger));
        assert!(flow.submit(&mut ledger).is_none());
        assert_eq!(ledger.len(), 1);
        assert_eq!(flow.draft().unwrap().note(), "big");

        flow.cancel();
        let mut flow = drafting(TransactionKind::Out, "90000000000000000", "big");
        assert!(flow.submit(&mut ledger).is_some());
        assert_eq!(ledger.balance(), Money::ZERO);
    }

    #[test]
    fn submit_while_idle_is_noop() {
        let mut ledger = LedgerStore::new();
        let mut flow = EntryFlowController::new();
        assert!(flow.submit(&mut ledger).is_none());
        assert!(ledger.is_empty());
    }

    #[test]
    fn cancel_discards_draft() {
        let mut ledger = LedgerStore::new();
        let mut flow = drafting(TransactionKind::In, "100", "salary");
        flow.cancel();

        assert_eq!(flow.state(), &EntryFlow::Idle);
        assert!(flow.submit(&mut ledger).is_none());
        assert!(ledger.is_empty());

        flow.request_new_entry(TransactionKind::In);
        assert_eq!(flow.draft().unwrap().note(), "");
    }
}
