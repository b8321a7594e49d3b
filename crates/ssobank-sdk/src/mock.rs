//! Recording in-process transport for unit tests

use crate::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Barrier, Semaphore};

#[derive(Debug, Clone)]
enum Route {
    Reply(HttpResponse),
    Fail(String),
    Hang,
}

/// Scripted transport keyed by method and path
///
/// Unscripted routes answer 404. Every request is recorded before the
/// scripted outcome is produced.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(Method, String), Route>>,
    requests: Mutex<Vec<HttpRequest>>,
    rendezvous: Mutex<Option<Arc<Barrier>>>,
    gate: Mutex<Option<Arc<Semaphore>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, method: Method, path: &str, status: u16, body: &str) {
        self.routes.lock().insert(
            (method, path.to_string()),
            Route::Reply(HttpResponse::new(status, body.as_bytes())),
        );
    }

    pub fn fail(&self, method: Method, path: &str, reason: &str) {
        self.routes
            .lock()
            .insert((method, path.to_string()), Route::Fail(reason.to_string()));
    }

    /// Never answer this route
    pub fn hang(&self, method: Method, path: &str) {
        self.routes.lock().insert((method, path.to_string()), Route::Hang);
    }

    /// Hold every request until `parties` requests are in flight together
    pub fn rendezvous(&self, parties: usize) {
        *self.rendezvous.lock() = Some(Arc::new(Barrier::new(parties)));
    }

    /// Hold every request after recording it until `release` lets it through
    pub fn gate(&self) {
        *self.gate.lock() = Some(Arc::new(Semaphore::new(0)));
    }

    pub fn release(&self, requests: usize) {
        if let Some(gate) = self.gate.lock().as_ref() {
            gate.add_permits(requests);
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

fn path_of(url: &str) -> String {
    reqwest::Url::parse(url)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| url.to_string())
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let key = (request.method.clone(), path_of(&request.url));
        self.requests.lock().push(request);

        let barrier = self.rendezvous.lock().clone();
        if let Some(barrier) = barrier {
            barrier.wait().await;
        }

        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }

        let route = self.routes.lock().get(&key).cloned();
        match route {
            Some(Route::Reply(resp)) => Ok(resp),
            Some(Route::Fail(reason)) => Err(TransportError::Connect(reason)),
            Some(Route::Hang) => std::future::pending().await,
            None => Ok(HttpResponse::new(404, Vec::new())),
        }
    }
}
