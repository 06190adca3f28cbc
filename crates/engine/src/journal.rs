//! Durable storage for the ledger.
//!
//! The ledger itself lives in memory; a [`Journal`] is told about every new
//! transaction and can hand the whole history back on start-up.

use std::{
    fs::{File, OpenOptions},
    io::{BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use crate::{EngineError, ResultEngine, Transaction, ledger::Replay};

pub trait Journal {
    /// Every recorded transaction, oldest first.
    fn load_all(&self) -> ResultEngine<Vec<Transaction>>;

    /// Records one new transaction.
    fn persist(&mut self, transaction: &Transaction) -> ResultEngine<()>;
}

/// Journal kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryJournal {
    transactions: Vec<Transaction>,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

impl Journal for MemoryJournal {
    fn load_all(&self) -> ResultEngine<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }

    fn persist(&mut self, transaction: &Transaction) -> ResultEngine<()> {
        self.transactions.push(transaction.clone());
        Ok(())
    }
}

/// Append-only file with one JSON encoded transaction per line.
#[derive(Debug, Clone)]
pub struct JsonlJournal {
    path: PathBuf,
}

impl JsonlJournal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Journal for JsonlJournal {
    fn load_all(&self) -> ResultEngine<Vec<Transaction>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "journal not found, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let at_line = |index: usize, why: &dyn std::fmt::Display| {
            EngineError::Journal(format!("{}:{}: {why}", self.path.display(), index + 1))
        };

        let mut replay = Replay::default();
        let mut transactions = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let transaction: Transaction =
                serde_json::from_str(&line).map_err(|err| at_line(index, &err))?;
            replay
                .check(&transaction)
                .map_err(|why| at_line(index, &why))?;
            transactions.push(transaction);
        }

        tracing::info!(
            path = %self.path.display(),
            count = transactions.len(),
            "journal loaded"
        );
        Ok(transactions)
    }

    fn persist(&mut self, transaction: &Transaction) -> ResultEngine<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let mut line = serde_json::to_string(transaction)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}
