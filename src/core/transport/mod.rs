//! Transport layer for the MCP server.
//!
//! Two transport implementations:
//! - **STDIO**: Standard input/output, the default MCP mode
//! - **HTTP**: JSON-RPC over POST requests (streamable HTTP hosting)
//!
//! Each transport handles the connection lifecycle and delegates
//! message processing to the MCP server handler.

mod config;
mod error;
mod service;

pub mod http;
pub mod stdio;

pub use config::{HttpConfig, TransportConfig};
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
