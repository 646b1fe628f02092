//! Core utilities for the NBA clustering CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `http`: request headers and endpoint resolution
//! - `progress`: console progress output

pub mod http;
pub mod progress;

// Re-export commonly used items for convenience
pub use http::{build_headers, resolve_base_url, resolve_user_agent, DEFAULT_USER_AGENT};
pub use progress::Progress;
