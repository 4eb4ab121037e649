//! REST layer: authenticated request construction and dispatch.
//!
//! This module separates request mechanics from the domain façades in
//! [`v1`](crate::v1):
//! - [`request`]: credentials, passcode derivation, and assembly of a
//!   transport-ready [`ApiRequest`]
//! - [`client`]: the [`Client`] that performs exactly one network call per
//!   verb invocation and routes the raw response through a response adapter

pub mod client;
pub mod request;

pub use client::Client;
pub use request::{ApiRequest, Credentials, Method};
