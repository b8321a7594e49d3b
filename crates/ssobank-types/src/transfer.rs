//! Transfer requests and records
//!
//! A `TransferRequest` is what the client submits; a `TransferRecord` is
//! what the banking service reports back in the history. The two are never
//! linked synchronously.

use crate::deserialize_positive_units;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of client-generated idempotency keys
pub const TRANSACTION_ID_PREFIX: &str = "TX-";

/// Idempotency key attached to a transfer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub String);

impl TransactionId {
    /// Key derived from a wall-clock timestamp in milliseconds
    pub fn from_millis(millis: i64) -> Self {
        Self(format!("{}{}", TRANSACTION_ID_PREFIX, millis))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `POST /transfers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub to_account_number: String,
    pub amount: i64,
    pub transaction_id: TransactionId,
    pub description: String,
}

/// A completed transfer as reported by `GET /transfers/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    pub transaction_id: TransactionId,
    pub from_account_number: String,
    pub to_account_number: String,
    #[serde(deserialize_with = "deserialize_positive_units")]
    pub amount: i64,
    pub transferred_at: NaiveDateTime,
}

impl TransferRecord {
    /// Direction of this record relative to the given account
    pub fn direction_for(&self, account_number: &str) -> Direction {
        if self.from_account_number == account_number {
            Direction::Debit
        } else {
            Direction::Credit
        }
    }
}

/// Whether money left or entered an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Outgoing
    Debit,
    /// Incoming
    Credit,
}

impl Direction {
    pub fn is_debit(&self) -> bool {
        matches!(self, Self::Debit)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debit => write!(f, "debit"),
            Self::Credit => write!(f, "credit"),
        }
    }
}

/// Envelope of `GET /transfers/me`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferHistory {
    #[serde(default)]
    pub data: Option<Vec<TransferRecord>>,
}

impl TransferHistory {
    pub fn into_records(self) -> Vec<TransferRecord> {
        self.data.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(from: &str, to: &str) -> TransferRecord {
        TransferRecord {
            transaction_id: TransactionId::from_millis(1),
            from_account_number: from.to_string(),
            to_account_number: to.to_string(),
            amount: 100,
            transferred_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_transaction_id_format() {
        let id = TransactionId::from_millis(1_700_000_000_000);
        assert_eq!(id.as_str(), "TX-1700000000000");
        assert_eq!(id.to_string(), "TX-1700000000000");
    }

    #[test]
    fn test_request_wire_shape() {
        let req = TransferRequest {
            to_account_number: "123-456-789".to_string(),
            amount: 1000,
            transaction_id: TransactionId::from_millis(1_700_000_000_000),
            description: "Bank Transfer".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "toAccountNumber": "123-456-789",
                "amount": 1000,
                "transactionId": "TX-1700000000000",
                "description": "Bank Transfer"
            })
        );
    }

    #[test]
    fn test_direction_relative_to_account() {
        assert_eq!(record("A", "B").direction_for("A"), Direction::Debit);
        assert_eq!(record("B", "A").direction_for("A"), Direction::Credit);
        // Neither side matches: not outgoing, so credit
        assert_eq!(record("B", "C").direction_for("A"), Direction::Credit);
        // Self-transfer counts as outgoing
        assert_eq!(record("A", "A").direction_for("A"), Direction::Debit);
    }

    #[test]
    fn test_history_decoding() {
        let history: TransferHistory = serde_json::from_str(
            r#"{"status":"SUCCESS","message":null,"data":[
                {"transactionId":"TX-1","fromAccountNumber":"A","toAccountNumber":"B",
                 "amount":5000.00,"transferredAt":"2024-05-01T09:30:00.123456"}
            ]}"#,
        )
        .unwrap();
        let records = history.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, 5000);
        assert_eq!(records[0].transaction_id.as_str(), "TX-1");
    }

    #[test]
    fn test_history_without_data_is_empty() {
        let history: TransferHistory =
            serde_json::from_str(r#"{"status":"SUCCESS"}"#).unwrap();
        assert!(history.into_records().is_empty());
    }

    #[test]
    fn test_history_rejects_non_positive_amount() {
        let result = serde_json::from_str::<TransferHistory>(
            r#"{"data":[
                {"transactionId":"TX-1","fromAccountNumber":"A","toAccountNumber":"B",
                 "amount":-500,"transferredAt":"2024-05-01T09:30:00"}
            ]}"#,
        );
        assert!(result.is_err());
    }
}
