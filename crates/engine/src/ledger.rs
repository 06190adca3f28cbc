//! The append-only ledger.
//!
//! The balance is always derived by folding the stored transactions; no
//! running total is kept next to them. The "In" total and the "Out" total
//! each fit in a [`Money`], which keeps every partial balance in range too.

use chrono::{DateTime, Utc};

use crate::{EngineError, Money, ResultEngine, Transaction, TransactionId, TransactionKind};

#[derive(Debug)]
pub struct LedgerStore {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a ledger from previously recorded transactions, keeping their
    /// order. New ids continue after the last loaded one.
    ///
    /// Every transaction must be one this ledger could have recorded itself;
    /// the first one that is not is reported by its 1-based position.
    pub fn from_transactions(transactions: Vec<Transaction>) -> ResultEngine<Self> {
        let mut replay = Replay::default();
        for (index, transaction) in transactions.iter().enumerate() {
            replay
                .check(transaction)
                .map_err(|why| EngineError::Journal(format!("entry {}: {why}", index + 1)))?;
        }
        let next_id = transactions.last().map_or(1, |last| last.id() + 1);
        Ok(Self {
            transactions,
            next_id,
        })
    }

    /// Whether recording `amount` as `kind` keeps the totals representable.
    /// Entries failing this are not submittable.
    pub fn accepts(&self, kind: TransactionKind, amount: Money) -> bool {
        amount.is_positive() && self.total_of(kind).checked_add(amount).is_some()
    }

    /// Records a new transaction at the end of the ledger.
    ///
    /// Amount and note are assumed valid: callers go through
    /// [`EntryFlowController`](crate::EntryFlowController), which only submits
    /// a non-blank note with an amount the ledger [`accepts`](Self::accepts).
    pub fn append(&mut self, kind: TransactionKind, amount: Money, note: &str) -> &Transaction {
        self.append_at(kind, amount, note, Utc::now())
    }

    fn append_at(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        note: &str,
        now: DateTime<Utc>,
    ) -> &Transaction {
        // Keep history chronological even if the wall clock steps backwards.
        let recorded_at = self
            .transactions
            .last()
            .map_or(now, |last| now.max(last.recorded_at()));

        let id = self.next_id;
        self.next_id += 1;

        let transaction = Transaction::new(id, kind, amount, note.trim().to_string(), recorded_at);
        tracing::debug!(id, kind = kind.as_str(), amount = %amount, "ledger append");
        self.transactions.push(transaction);
        &self.transactions[self.transactions.len() - 1]
    }

    /// Signed sum of every transaction: `In` positive, `Out` negative.
    pub fn balance(&self) -> Money {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    pub fn total_in(&self) -> Money {
        self.total_of(TransactionKind::In)
    }

    pub fn total_out(&self) -> Money {
        self.total_of(TransactionKind::Out)
    }

    fn total_of(&self, kind: TransactionKind) -> Money {
        self.transactions
            .iter()
            .filter(|tx| tx.kind() == kind)
            .map(Transaction::amount)
            .sum()
    }

    /// All transactions in insertion order.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// `true` when nothing has been recorded yet; the history view shows an
    /// explicit "no entries" state in that case.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Walks restored transactions in order and checks each against what
/// [`LedgerStore::append`] would have produced.
#[derive(Debug, Default)]
pub(crate) struct Replay {
    last: Option<(TransactionId, DateTime<Utc>)>,
    total_in: Money,
    total_out: Money,
}

impl Replay {
    pub(crate) fn check(&mut self, tx: &Transaction) -> Result<(), String> {
        if !tx.amount().is_positive() {
            return Err(format!("amount must be > 0, got {}", tx.amount()));
        }
        if tx.note().trim().is_empty() {
            return Err("note is blank".to_string());
        }
        if let Some((last_id, last_at)) = self.last {
            if tx.id() <= last_id {
                return Err(format!("id {} does not follow id {last_id}", tx.id()));
            }
            if tx.recorded_at() < last_at {
                return Err(format!("id {} is recorded before id {last_id}", tx.id()));
            }
        } else if tx.id() == 0 {
            return Err("id 0 is not a ledger id".to_string());
        }

        let total = match tx.kind() {
            TransactionKind::In => &mut self.total_in,
            TransactionKind::Out => &mut self.total_out,
        };
        *total = total.checked_add(tx.amount()).ok_or_else(|| {
            format!("{} total overflows at id {}", tx.kind().as_str(), tx.id())
        })?;

        self.last = Some((tx.id(), tx.recorded_at()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn new_ledger_is_empty_with_zero_balance() {
        let ledger = LedgerStore::new();
        assert!(ledger.is_empty());
        assert!(ledger.all().is_empty());
        assert_eq!(ledger.balance(), Money::ZERO);
    }

    #[test]
    fn default_matches_new() {
        let mut ledger = LedgerStore::default();
        assert_eq!(ledger.append(TransactionKind::In, Money::new(1), "x").id(), 1);
    }

    #[test]
    fn append_assigns_increasing_ids_and_trims_note() {
        let mut ledger = LedgerStore::new();
        let first = ledger.append(TransactionKind::In, Money::new(100), "  salary ").clone();
        let second = ledger.append(TransactionKind::Out, Money::new(30), "tea").clone();

        assert_eq!(first.id(), 1);
        assert_eq!(second.id(), 2);
        assert_eq!(first.note(), "salary");
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn balance_is_signed_sum() {
        let mut ledger = LedgerStore::new();
        ledger.append(TransactionKind::In, Money::new(10_000), "salary");
        ledger.append(TransactionKind::Out, Money::new(3_000), "rent");

        assert_eq!(ledger.balance(), Money::new(7_000));
        assert_eq!(ledger.total_in(), Money::new(10_000));
        assert_eq!(ledger.total_out(), Money::new(3_000));
    }

    #[test]
    fn balance_may_go_negative() {
        let mut ledger = LedgerStore::new();
        ledger.append(TransactionKind::Out, Money::new(250), "snacks");
        assert_eq!(ledger.balance(), Money::new(-250));
    }

    #[test]
    fn recorded_at_never_goes_backwards() {
        let mut ledger = LedgerStore::new();
        let now = Utc::now();
        let first = ledger
            .append_at(TransactionKind::In, Money::new(1), "a", now)
            .recorded_at();
        let second = ledger
            .append_at(TransactionKind::In, Money::new(1), "b", now - Duration::hours(1))
            .recorded_at();
        assert_eq!(first, now);
        assert_eq!(second, now);
    }

    #[test]
    fn from_transactions_continues_sequence() {
        let mut original = LedgerStore::new();
        original.append(TransactionKind::In, Money::new(100), "a");
        original.append(TransactionKind::Out, Money::new(40), "b");

        let mut restored = LedgerStore::from_transactions(original.all().to_vec()).unwrap();
        assert_eq!(restored.balance(), Money::new(60));
        let next = restored.append(TransactionKind::In, Money::new(1), "c");
        assert_eq!(next.id(), 3);
    }

    #[test]
    fn accepts_up_to_the_largest_total() {
        let mut ledger = LedgerStore::new();
        let max = Money::new(i64::MAX);
        assert!(ledger.accepts(TransactionKind::In, max));
        ledger.append(TransactionKind::In, max, "all of it");

        assert!(!ledger.accepts(TransactionKind::In, Money::new(1)));
        assert!(ledger.accepts(TransactionKind::Out, max));
        assert!(!ledger.accepts(TransactionKind::Out, Money::ZERO));

        ledger.append(TransactionKind::Out, max, "spent");
        assert_eq!(ledger.balance(), Money::ZERO);
        assert_eq!(ledger.total_in(), max);
        assert_eq!(ledger.total_out(), max);
    }

    #[test]
    fn from_transactions_rejects_out_of_order_ids() {
        let mut ledger = LedgerStore::new();
        ledger.append(TransactionKind::In, Money::new(1), "a");
        ledger.append(TransactionKind::In, Money::new(2), "b");
        let mut swapped = ledger.all().to_vec();
        swapped.reverse();

        assert_eq!(
            LedgerStore::from_transactions(swapped).unwrap_err(),
            EngineError::Journal("entry 2: id 1 does not follow id 2".to_string())
        );
    }

    #[test]
    fn from_empty_transactions_starts_at_one() {
        let mut ledger = LedgerStore::from_transactions(Vec::new()).unwrap();
        assert_eq!(ledger.append(TransactionKind::Out, Money::new(1), "x").id(), 1);
    }
}
