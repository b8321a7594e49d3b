//! Session acquisition and release

use crate::client::PublicClient;
use crate::error::{Classify, ClientError, ClientResult};
use ssobank_session::SessionStore;
use ssobank_types::{Credentials, LoginResponse, SignupRequest};
use std::sync::Arc;

const LOGIN_PATH: &str = "/login";
const SIGNUP_PATH: &str = "/signup";

#[derive(Clone)]
pub struct AuthClient {
    client: PublicClient,
    session: Arc<dyn SessionStore>,
}

impl AuthClient {
    pub fn new(client: PublicClient, session: Arc<dyn SessionStore>) -> Self {
        Self { client, session }
    }

    /// Exchange credentials for an access token and store it
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<LoginResponse> {
        let response: LoginResponse = self.client.post_json(LOGIN_PATH, credentials).await?;

        if response.access_token.trim().is_empty() {
            tracing::warn!("Login response carried an empty token");
            return Err(ClientError::server(200, None));
        }

        self.session.set(&response.access_token);
        tracing::info!("Logged in");
        Ok(response)
    }

    /// Register a new user; does not log in
    pub async fn signup(&self, request: &SignupRequest) -> ClientResult<()> {
        self.client.post(SIGNUP_PATH, request).await?;
        tracing::info!("Signed up");
        Ok(())
    }

    pub fn logout(&self) {
        self.session.clear();
    }

    /// Drop the stored credential if `err` means the session expired
    ///
    /// Returns whether the store was cleared.
    pub fn expire_if_needed<E: Classify>(&self, err: &E) -> bool {
        if err.is_auth_expired() {
            self.session.clear();
            true
        } else {
            false
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}
