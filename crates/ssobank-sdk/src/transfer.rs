//! Transfer submission
//!
//! A transfer is prepared once (validation plus idempotency key) and then
//! sent. Re-sending a prepared request reuses its `transactionId`, so a
//! retried intent is applied at most once by the banking service.

use crate::client::AuthenticatedClient;
use crate::error::SubmitResult;
use ssobank_types::{AmountInput, TransactionId, TransferRequest, ValidationError};
use std::sync::Arc;

const TRANSFERS_PATH: &str = "/transfers";

/// Source of wall-clock milliseconds for idempotency keys
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

#[derive(Clone)]
pub struct TransferSubmitter {
    client: AuthenticatedClient,
    clock: Arc<dyn Clock>,
    description: String,
}

impl TransferSubmitter {
    pub fn new(client: AuthenticatedClient, description: impl Into<String>) -> Self {
        Self {
            client,
            clock: Arc::new(SystemClock),
            description: description.into(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Validate input and mint the idempotency key
    ///
    /// Performs no I/O.
    pub fn prepare(
        &self,
        to_account_number: &str,
        amount: impl Into<AmountInput>,
    ) -> SubmitResult<TransferRequest> {
        let amount = amount.into().parse_positive()?;

        let to_account_number = to_account_number.trim();
        if to_account_number.is_empty() {
            return Err(ValidationError::MissingRecipient.into());
        }

        Ok(TransferRequest {
            to_account_number: to_account_number.to_string(),
            amount,
            transaction_id: TransactionId::from_millis(self.clock.now_millis()),
            description: self.description.clone(),
        })
    }

    /// POST a prepared transfer
    pub async fn send(&self, request: &TransferRequest) -> SubmitResult<()> {
        tracing::info!(
            transaction_id = %request.transaction_id,
            amount = request.amount,
            "Submitting transfer"
        );

        match self.client.post(TRANSFERS_PATH, request).await {
            Ok(_) => {
                tracing::info!(transaction_id = %request.transaction_id, "Transfer accepted");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    transaction_id = %request.transaction_id,
                    error = %err,
                    "Transfer rejected"
                );
                Err(err.into())
            }
        }
    }

    /// Prepare and send in one step
    pub async fn submit(
        &self,
        to_account_number: &str,
        amount: impl Into<AmountInput>,
    ) -> SubmitResult<()> {
        let request = self.prepare(to_account_number, amount)?;
        self.send(&request).await
    }
}
