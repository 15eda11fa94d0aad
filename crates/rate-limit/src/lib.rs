//! Rate limiting functionality for the LiveScore MCP server.
//!
//! Every client IP gets its own token bucket, created on first sight and
//! dropped again by a periodic sweep once the IP has been idle long enough.

#![deny(missing_docs)]

mod error;
mod manager;

pub use error::RateLimitError;
pub use manager::RateLimitManager;
