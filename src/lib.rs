//! dSIPRouter MCP Server Library
//!
//! This crate exposes a dSIPRouter SIP routing platform to LLM agents over
//! the Model Context Protocol. Every tool is a thin adaptation: it shapes a
//! handful of scalar parameters into a JSON payload, performs exactly one
//! HTTP call against the platform's REST API, and returns the JSON response
//! pretty-printed. Routing decisions stay inside dSIPRouter/Kamailio.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the dSIPRouter API client,
//!   transport security, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: One MCP tool per dSIPRouter operation
//!   - **resources**: The read-only connection configuration resource
//!   - **prompts**: Canned carrier/PBX setup prompt templates
//!
//! # Example
//!
//! ```rust,no_run
//! use dsiprouter_mcp::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
