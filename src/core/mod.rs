//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server:
//! configuration, error handling, the dSIPRouter API client, transport
//! security, server lifecycle management, and transport abstractions.

pub mod config;
pub mod dsip;
pub mod error;
pub mod security;
pub mod server;
pub mod transport;

pub use config::Config;
pub use dsip::{DsipClient, DsipError};
pub use error::{Error, Result};
pub use security::{TransportGuard, TransportGuardError};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
