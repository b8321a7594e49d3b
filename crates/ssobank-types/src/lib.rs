//! SSO Banking Types - wire and domain types for the banking client
//!
//! This crate contains the foundational types shared by the session layer,
//! the SDK and the terminal front-end, with zero dependencies on other
//! ssobank crates:
//!
//! - Session and credential types exchanged with the identity service
//! - Account snapshots and transfer records returned by the banking service
//! - Transfer requests and their idempotency keys
//! - The display-ready account view assembled from both fetches
//!
//! # Wire format
//!
//! Both services speak camelCase JSON. Amounts are whole units (the banking
//! service serialises them as decimals with no fractional part), and
//! timestamps are zone-less local date-times.

pub mod account;
pub mod amount;
pub mod auth;
pub mod error;
pub mod session;
pub mod transfer;
pub mod view;

pub use account::*;
pub use amount::*;
pub use auth::*;
pub use error::*;
pub use session::*;
pub use transfer::*;
pub use view::*;
