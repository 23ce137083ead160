//! dSIPRouter API client.
//!
//! Translates each logical operation into exactly one HTTP request/response
//! cycle against the platform's versioned REST base path (`/api/v1`).
//! The client holds no state beyond its connection configuration; failures
//! propagate immediately to the caller without retries.

mod client;
mod error;

pub use client::DsipClient;
pub use error::{DsipError, DsipResult};
