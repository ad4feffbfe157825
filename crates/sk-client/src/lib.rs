//! HTTP client for the remote auth API.
//!
//! Every call passes through the [`RequestAuthorizer`] on the way out and the
//! [`FailureDetector`] on the way back.

pub(crate) mod access;
pub(crate) mod authorizer;
pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod failure_detector;
pub(crate) mod invalidation_hook;

#[cfg(test)]
mod tests;

pub use access::Access;
pub use authorizer::RequestAuthorizer;
pub use client::{ApiClient, paths};
pub use error::{ClientError, Result as ClientResult};
pub use failure_detector::FailureDetector;
pub use invalidation_hook::{InvalidationHook, NoopInvalidationHook};
