//! Bambora Client: Rust bindings for the Bambora payment gateway REST API.
//!
//! This crate builds authenticated HTTP requests, dispatches them, and
//! normalizes the gateway's heterogeneous response encodings (JSON and
//! URL-encoded query strings) into a single canonical result shape with a
//! guaranteed non-throwing failure path.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │  Resource Façades    │  v1::ProfileResource, v1::ReportResource
//! │  (path + method)     │
//! └──────────┬───────────┘
//!            │ get / post / delete
//! ┌──────────▼───────────┐
//! │       Client         │  rest::Client
//! │  ┌────────────────┐  │
//! │  │ Request Builder│  │  Passcode auth header, JSON body,
//! │  │ (rest::request)│  │  deterministic query string
//! │  └───────┬────────┘  │
//! │          │ reqwest   │  exactly one network call, no retries
//! │  ┌───────▼────────┐  │
//! │  │Response Adapter│  │  adapters::{JsonAdapter, QueryStringAdapter}
//! │  │ (normalize or  │  │
//! │  │  inert failure)│  │
//! │  └────────────────┘  │
//! └──────────┬───────────┘
//!            ▼
//!       ApiResponse        Success(normalized map) | Failure{status, body}
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bambora_client::{Client, Config, v1::ProfileResource};
//! use serde_json::json;
//!
//! # async fn example() -> bambora_client::Result<()> {
//! let config = Config::from_toml(
//!     r#"
//!         base_url = "https://api.na.bambora.com"
//!         api_key = "fakekey"
//!         merchant_id = "1"
//!     "#,
//! )?;
//! let client = Client::new(config)?;
//!
//! let profiles = ProfileResource::new(&client);
//! let response = profiles
//!     .create(&json!({
//!         "language": "en",
//!         "card": {
//!             "name": "Hup Podling",
//!             "number": "4030000010001234",
//!             "expiry_month": "12",
//!             "expiry_year": "23",
//!             "cvd": "123",
//!         },
//!     }))
//!     .await?;
//!
//! if let Some(map) = response.as_map() {
//!     println!("customer_code: {}", map["customer_code"]);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Response handling
//!
//! Every call returns an [`ApiResponse`]: either a `Success` map with every
//! key normalized recursively (insertion order preserved at all depths), or
//! a `Failure` record carrying the HTTP status and the untouched original
//! body when the wire content did not parse. A decoding problem is never
//! surfaced as an error; [`BamboraError`] covers the request side and the
//! transport boundary only.
//!
//! # Concurrency
//!
//! [`Client`] is immutable after construction. Multiple callers may issue
//! concurrent requests through one shared instance without coordination;
//! each invocation is a stateless request/decode cycle.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod adapters;
pub mod config;
pub mod error;
pub mod rest;
pub mod v1;

pub use adapters::{ApiResponse, ErrorResponse, JsonAdapter, QueryStringAdapter, ResponseAdapter};
pub use config::Config;
pub use error::{BamboraError, Result};
pub use rest::Client;
