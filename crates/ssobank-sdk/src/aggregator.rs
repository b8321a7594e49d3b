//! Account view loading
//!
//! The account snapshot and the transfer history are fetched concurrently
//! and only combined once both have arrived. Either failure fails the whole
//! load; there is no partial view.

use crate::client::AuthenticatedClient;
use crate::error::{ClientError, FetchResult};
use crate::guard::ViewTicket;
use reqwest::Url;
use ssobank_types::{AccountPayload, AccountView, TransferHistory, ValidationError};

const OWN_ACCOUNT_PATH: &str = "/accounts/me";
const ACCOUNTS_BASE: &str = "http://localhost/accounts";
const HISTORY_PATH: &str = "/transfers/me";

#[derive(Clone)]
pub struct AccountAggregator {
    client: AuthenticatedClient,
    history_limit: usize,
}

impl AccountAggregator {
    pub fn new(client: AuthenticatedClient, history_limit: usize) -> Self {
        Self {
            client,
            history_limit,
        }
    }

    /// Load the account and its most recent transfers
    ///
    /// With no hint the caller's own account is loaded; with a hint the
    /// account is looked up by number.
    pub async fn load(&self, account_hint: Option<&str>) -> FetchResult<AccountView> {
        let account_path = match account_hint.map(str::trim).filter(|n| !n.is_empty()) {
            Some(number) => account_path(number)?,
            None => OWN_ACCOUNT_PATH.to_string(),
        };

        let (payload, history) = tokio::try_join!(
            self.client.get_json::<AccountPayload>(&account_path),
            self.client.get_json::<TransferHistory>(HISTORY_PATH),
        )
        .map_err(|err| {
            tracing::warn!(path = %account_path, error = %err, "Account view load failed");
            err
        })?;

        let view = AccountView::reconcile(
            payload.into_account(),
            history.into_records(),
            self.history_limit,
        );
        tracing::debug!(
            transfers = view.transfers.len(),
            "Account view loaded"
        );

        Ok(view)
    }

    /// Load for a view that may be discarded while the fetch is in flight
    ///
    /// `Ok(None)` means the ticket was superseded and the result dropped.
    pub async fn load_guarded(
        &self,
        account_hint: Option<&str>,
        ticket: &ViewTicket,
    ) -> FetchResult<Option<AccountView>> {
        let result = self.load(account_hint).await;
        match ticket.apply(result) {
            Some(result) => result.map(Some),
            None => {
                tracing::debug!("Discarding account view for a stale ticket");
                Ok(None)
            }
        }
    }
}

/// Path of an account looked up by number
///
/// The number is percent-encoded as one path segment, so `/`, `?` and `#`
/// cannot leave `/accounts/`. Dot segments are refused outright.
fn account_path(number: &str) -> FetchResult<String> {
    let invalid = || ClientError::from(ValidationError::InvalidAccountNumber(number.to_string()));
    if matches!(number, "." | "..") {
        return Err(invalid());
    }

    let mut url = Url::parse(ACCOUNTS_BASE).map_err(|_| invalid())?;
    url.path_segments_mut().map_err(|_| invalid())?.push(number);
    Ok(url.path().to_string())
}
