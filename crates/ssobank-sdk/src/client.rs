//! Request dispatch
//!
//! `AuthenticatedClient` reads the session store on every call and attaches
//! the bearer credential when one is present. `PublicClient` serves the
//! identity endpoints and never sends a credential.

use crate::error::{ClientError, ClientResult, ErrorBody};
use crate::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use ssobank_session::SessionStore;
use std::sync::Arc;

/// Message carried by a 2xx response whose body could not be decoded
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Malformed response from server.";

/// How a 401 is classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unauthorized {
    SessionExpired,
    Rejected,
}

/// Dispatcher for the banking service
#[derive(Clone)]
pub struct AuthenticatedClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    session: Arc<dyn SessionStore>,
}

impl AuthenticatedClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            session,
        }
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Send a request with the current credential, if any
    ///
    /// Returns the 2xx response. A 401 is `AuthExpired`; the store is left
    /// untouched so the caller decides what to do.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ClientResult<HttpResponse> {
        let authorization = self.session.get().bearer();
        dispatch(
            self.transport.as_ref(),
            &self.base_url,
            method,
            path,
            authorization,
            body,
            Unauthorized::SessionExpired,
        )
        .await
    }

    /// GET and decode a JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let resp = self.request(Method::GET, path, None).await?;
        decode(&resp, path)
    }

    /// POST a JSON body, ignoring the response content
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<HttpResponse> {
        let body = encode(body)?;
        self.request(Method::POST, path, Some(body)).await
    }
}

/// Dispatcher for the identity service
#[derive(Clone)]
pub struct PublicClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl PublicClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    /// POST without a credential
    ///
    /// A 401 here means the credentials were refused and maps to `Server`.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ClientResult<HttpResponse> {
        let body = encode(body)?;
        dispatch(
            self.transport.as_ref(),
            &self.base_url,
            Method::POST,
            path,
            None,
            Some(body),
            Unauthorized::Rejected,
        )
        .await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.post(path, body).await?;
        decode(&resp, path)
    }
}

async fn dispatch(
    transport: &dyn Transport,
    base_url: &str,
    method: Method,
    path: &str,
    authorization: Option<String>,
    body: Option<serde_json::Value>,
    unauthorized: Unauthorized,
) -> ClientResult<HttpResponse> {
    let authenticated = authorization.is_some();
    let request = HttpRequest::new(method.clone(), join_url(base_url, path))
        .with_authorization(authorization)
        .with_body(body);

    let resp = match transport.send(request).await {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(
                method = %method,
                path,
                authenticated,
                error = %err,
                "Request failed without a response"
            );
            return Err(transport_error(err));
        }
    };

    tracing::debug!(
        method = %method,
        path,
        status = resp.status,
        authenticated,
        "Request completed"
    );

    if resp.is_success() {
        return Ok(resp);
    }

    if resp.status == 401 && unauthorized == Unauthorized::SessionExpired {
        tracing::info!(path, "Credential rejected, session expired");
        return Err(ClientError::AuthExpired);
    }

    Err(ClientError::server(resp.status, ErrorBody::message_from(&resp.body)))
}

fn transport_error(err: TransportError) -> ClientError {
    ClientError::Network(err.to_string())
}

fn encode<B: Serialize + ?Sized>(body: &B) -> ClientResult<serde_json::Value> {
    // Nothing was sent, so this is a request setup failure
    serde_json::to_value(body).map_err(|e| ClientError::Network(format!("failed to encode request: {}", e)))
}

pub(crate) fn decode<T: DeserializeOwned>(resp: &HttpResponse, path: &str) -> ClientResult<T> {
    serde_json::from_slice(&resp.body).map_err(|e| {
        tracing::warn!(path, status = resp.status, error = %e, "Undecodable response body");
        ClientError::server(resp.status, Some(MALFORMED_RESPONSE_MESSAGE.to_string()))
    })
}

fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Classify, ErrorKind};
    use crate::mock::MockTransport;
    use ssobank_session::MemorySessionStore;
    use ssobank_types::Account;

    fn client(mock: &Arc<MockTransport>, store: &Arc<MemorySessionStore>) -> AuthenticatedClient {
        AuthenticatedClient::new("http://bank", mock.clone(), store.clone())
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://bank/", "/accounts/me"), "http://bank/accounts/me");
        assert_eq!(join_url("http://bank", "transfers"), "http://bank/transfers");
        assert_eq!(join_url("http://gw/api", "/login"), "http://gw/api/login");
    }

    #[tokio::test]
    async fn test_bearer_attached_when_present() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(Method::GET, "/accounts/me", 200, r#"{"accountNumber":"1","balance":5}"#);
        let store = Arc::new(MemorySessionStore::with_token("T1"));

        let account: Account = client(&mock, &store).get_json("/accounts/me").await.unwrap();
        assert_eq!(account.balance, 5);

        let sent = mock.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "http://bank/accounts/me");
        assert_eq!(sent[0].authorization.as_deref(), Some("Bearer T1"));
    }

    #[tokio::test]
    async fn test_header_omitted_after_clear() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(Method::GET, "/transfers/me", 200, r#"{"data":[]}"#);
        let store = Arc::new(MemorySessionStore::with_token("T1"));
        let client = client(&mock, &store);

        client.request(Method::GET, "/transfers/me", None).await.unwrap();
        store.clear();
        client.request(Method::GET, "/transfers/me", None).await.unwrap();

        let sent = mock.requests();
        assert_eq!(sent[0].authorization.as_deref(), Some("Bearer T1"));
        assert_eq!(sent[1].authorization, None);
    }

    #[tokio::test]
    async fn test_session_read_fresh_each_call() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(Method::GET, "/accounts/me", 200, "{}");
        let store = Arc::new(MemorySessionStore::new());
        let client = client(&mock, &store);

        client.request(Method::GET, "/accounts/me", None).await.unwrap();
        store.set("T2");
        client.request(Method::GET, "/accounts/me", None).await.unwrap();

        let sent = mock.requests();
        assert_eq!(sent[0].authorization, None);
        assert_eq!(sent[1].authorization.as_deref(), Some("Bearer T2"));
    }

    #[tokio::test]
    async fn test_401_is_auth_expired_and_store_untouched() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(Method::GET, "/accounts/me", 401, "");
        let store = Arc::new(MemorySessionStore::with_token("T1"));

        let err = client(&mock, &store)
            .request(Method::GET, "/accounts/me", None)
            .await
            .unwrap_err();
        assert_eq!(err, ClientError::AuthExpired);
        assert!(store.is_authenticated());
    }

    #[tokio::test]
    async fn test_server_error_carries_message() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(
            Method::POST,
            "/transfers",
            400,
            r#"{"status":"FAIL","message":"Insufficient balance.","data":null}"#,
        );
        let store = Arc::new(MemorySessionStore::with_token("T1"));

        let err = client(&mock, &store)
            .post("/transfers", &serde_json::json!({}))
            .await
            .unwrap_err();
        assert_eq!(err, ClientError::server(400, Some("Insufficient balance.".into())));
    }

    #[tokio::test]
    async fn test_unparseable_error_body_has_no_message() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(Method::GET, "/accounts/me", 502, "<html>Bad Gateway</html>");
        let store = Arc::new(MemorySessionStore::with_token("T1"));

        let err = client(&mock, &store)
            .request(Method::GET, "/accounts/me", None)
            .await
            .unwrap_err();
        assert_eq!(err, ClientError::server(502, None));
    }

    #[tokio::test]
    async fn test_transport_failure_is_network() {
        let mock = Arc::new(MockTransport::new());
        mock.fail(Method::GET, "/accounts/me", "connection refused");
        let store = Arc::new(MemorySessionStore::with_token("T1"));

        let err = client(&mock, &store)
            .request(Method::GET, "/accounts/me", None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_server_error() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(Method::GET, "/accounts/me", 200, "not json");
        let store = Arc::new(MemorySessionStore::with_token("T1"));

        let err = client(&mock, &store)
            .get_json::<Account>("/accounts/me")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ClientError::server(200, Some(MALFORMED_RESPONSE_MESSAGE.to_string()))
        );
    }

    #[tokio::test]
    async fn test_public_client_never_sends_credential() {
        let mock = Arc::new(MockTransport::new());
        mock.reply(Method::POST, "/login", 401, r#"{"message":"Email or Password Invalid."}"#);

        let public = PublicClient::new("http://auth", mock.clone());
        let err = public
            .post("/login", &serde_json::json!({"email": "a@b.com"}))
            .await
            .unwrap_err();

        assert_eq!(err, ClientError::server(401, Some("Email or Password Invalid.".into())));
        assert!(!err.is_auth_expired());
        assert_eq!(mock.requests()[0].authorization, None);
    }
}
