//! Account snapshots returned by the banking service

use crate::deserialize_whole_units;
use serde::{Deserialize, Serialize};

/// Account balance at the moment of the fetch
///
/// Snapshots are never cached; every view refetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_number: String,
    #[serde(deserialize_with = "deserialize_whole_units")]
    pub balance: i64,
}

/// Account payload as returned by either account endpoint
///
/// `/accounts/me` answers with the bare object, while the by-number lookup
/// wraps it in the `{status, message, data}` envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AccountPayload {
    Wrapped { data: Account },
    Bare(Account),
}

impl AccountPayload {
    pub fn into_account(self) -> Account {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(account) => account,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_account_with_decimal_balance() {
        let payload: AccountPayload = serde_json::from_str(
            r#"{"accountNumber":"110-234-567890","balance":150000.00,"userUuid":"u-1"}"#,
        )
        .unwrap();
        let account = payload.into_account();
        assert_eq!(account.account_number, "110-234-567890");
        assert_eq!(account.balance, 150000);
    }

    #[test]
    fn test_wrapped_account() {
        let payload: AccountPayload = serde_json::from_str(
            r#"{"status":"SUCCESS","message":null,"data":{"accountNumber":"1","balance":5}}"#,
        )
        .unwrap();
        assert_eq!(
            payload.into_account(),
            Account {
                account_number: "1".to_string(),
                balance: 5
            }
        );
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert!(serde_json::from_str::<AccountPayload>(r#"{"balance":5}"#).is_err());
    }
}
