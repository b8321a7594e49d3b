//! Display-ready account view
//!
//! Assembled only once both the account snapshot and the history fetch have
//! completed; there is no partially-populated variant.

use crate::{Account, Direction, TransferRecord};
use serde::Serialize;

/// Number of history entries shown on the dashboard
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// A history record tagged relative to the viewed account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferEntry {
    pub record: TransferRecord,
    pub direction: Direction,
}

impl TransferEntry {
    /// The counterparty account number from the viewer's perspective
    pub fn counterparty(&self) -> &str {
        match self.direction {
            Direction::Debit => &self.record.to_account_number,
            Direction::Credit => &self.record.from_account_number,
        }
    }

    /// Amount signed by direction (debits negative)
    pub fn signed_amount(&self) -> i64 {
        match self.direction {
            Direction::Debit => self.record.amount.saturating_neg(),
            Direction::Credit => self.record.amount,
        }
    }
}

/// Account snapshot plus its recent history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountView {
    pub account: Account,
    pub transfers: Vec<TransferEntry>,
}

impl AccountView {
    /// Reconcile a snapshot with raw history
    ///
    /// Keeps the first `limit` records in server order (most recent first)
    /// and tags each one against the snapshot's account number.
    pub fn reconcile(account: Account, records: Vec<TransferRecord>, limit: usize) -> Self {
        let transfers = records
            .into_iter()
            .take(limit)
            .map(|record| {
                let direction = record.direction_for(&account.account_number);
                TransferEntry { record, direction }
            })
            .collect();

        Self { account, transfers }
    }

    pub fn debits(&self) -> impl Iterator<Item = &TransferEntry> {
        self.transfers.iter().filter(|e| e.direction.is_debit())
    }

    pub fn credits(&self) -> impl Iterator<Item = &TransferEntry> {
        self.transfers.iter().filter(|e| !e.direction.is_debit())
    }
}
