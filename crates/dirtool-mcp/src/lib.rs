//! MCP stdio server for the Admin SDK Directory API.
//!
//! Speaks JSON-RPC 2.0 over stdin/stdout, one message per line, and
//! publishes every endpoint in `dirtool-catalog` as a callable tool.

pub mod error;
pub mod jsonrpc;
pub mod protocol;
pub mod server;

pub use error::{McpError, McpResult};
pub use server::{serve_stdio, McpServer};
