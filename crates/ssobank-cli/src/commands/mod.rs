//! CLI commands

pub mod account;
pub mod auth;
pub mod transfer;

use crate::display;
use ssobank_sdk::{BankingClient, Classify};
use std::fmt::Display;

/// Turn a client failure into the error `main` reports
///
/// An expired session is cleared here, so the next command starts logged
/// out.
pub(crate) fn fail<E>(bank: &BankingClient, err: E, message: String) -> anyhow::Error
where
    E: Classify + Display,
{
    tracing::debug!(error = %err, kind = ?err.kind(), "Command failed");
    if bank.auth().expire_if_needed(&err) {
        display::info("Run `ssobank login` to sign in again.");
    }
    anyhow::anyhow!(message)
}
