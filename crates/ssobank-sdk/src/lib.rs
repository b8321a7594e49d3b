//! SSO Bank SDK - client-side session and transfer logic
//!
//! The SDK talks to two services: an identity service that issues access
//! tokens (`/login`, `/signup`) and a banking service that serves accounts
//! and transfers. Presentation lives elsewhere; callers use the components
//! here and render what they return.
//!
//! # Components
//!
//! - [`AuthenticatedClient`]: attaches the stored bearer token to every
//!   request and reports a 401 as [`ClientError::AuthExpired`]
//! - [`AuthClient`]: login, signup and logout against the identity service
//! - [`TransferSubmitter`]: validated transfers with an idempotency key
//! - [`AccountAggregator`]: account snapshot and history, fetched together
//!
//! # Quick Start
//!
//! ```ignore
//! use ssobank_sdk::{BankingClient, ClientConfig, Classify};
//! use ssobank_session::FileSessionStore;
//! use ssobank_types::Credentials;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let session = Arc::new(FileSessionStore::open("session.json"));
//!     let bank = BankingClient::new(ClientConfig::from_env()?, session)?;
//!
//!     bank.auth().login(&Credentials::new("a@b.com", "pw123456")).await?;
//!
//!     match bank.accounts().load(None).await {
//!         Ok(view) => println!("{}: {}", view.account.account_number, view.account.balance),
//!         Err(err) => {
//!             bank.auth().expire_if_needed(&err);
//!         }
//!     }
//!
//!     bank.transfers().submit("123-456-789", 1000).await?;
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod guard;
pub mod transfer;
pub mod transport;

#[cfg(test)]
mod mock;

pub use aggregator::AccountAggregator;
pub use auth::AuthClient;
pub use client::{AuthenticatedClient, PublicClient, MALFORMED_RESPONSE_MESSAGE};
pub use config::{ClientConfig, ConfigError};
pub use error::{
    Classify, ClientError, ClientResult, ErrorKind, FetchError, FetchResult, Operation,
    SubmitError, SubmitResult, SESSION_EXPIRED_MESSAGE,
};
pub use guard::{ViewGuard, ViewTicket};
pub use transfer::{Clock, FixedClock, SystemClock, TransferSubmitter};
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport, TransportError};

use ssobank_session::SessionStore;
use std::sync::Arc;

/// All client components wired to one session store and transport
#[derive(Clone)]
pub struct BankingClient {
    config: Arc<ClientConfig>,
    session: Arc<dyn SessionStore>,
    auth: AuthClient,
    transfers: TransferSubmitter,
    accounts: AccountAggregator,
}

impl BankingClient {
    /// Build with a `reqwest` transport
    pub fn new(config: ClientConfig, session: Arc<dyn SessionStore>) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
        Ok(Self::with_transport(config, session, transport))
    }

    /// Build over any transport
    pub fn with_transport(
        config: ClientConfig,
        session: Arc<dyn SessionStore>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let public = PublicClient::new(config.auth_base_url.clone(), transport.clone());
        let banking = AuthenticatedClient::new(
            config.banking_base_url.clone(),
            transport,
            session.clone(),
        );

        tracing::debug!(
            auth_url = %config.auth_base_url,
            banking_url = %config.banking_base_url,
            "Banking client ready"
        );

        Self {
            auth: AuthClient::new(public, session.clone()),
            transfers: TransferSubmitter::new(banking.clone(), config.transfer_description.clone()),
            accounts: AccountAggregator::new(banking, config.history_limit),
            session,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub fn auth(&self) -> &AuthClient {
        &self.auth
    }

    pub fn transfers(&self) -> &TransferSubmitter {
        &self.transfers
    }

    pub fn accounts(&self) -> &AccountAggregator {
        &self.accounts
    }
}
