//! Version 1 gateway API surface.
//!
//! Thin domain façades over [`Client`](crate::Client): each fixes a
//! sub-path and translates a domain call into a generic client verb. All
//! authentication and response parsing is delegated; the façades contain no
//! branching beyond path and method selection.

pub mod profiles;
pub mod reports;

pub use profiles::ProfileResource;
pub use reports::ReportResource;
