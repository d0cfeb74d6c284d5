//! Linklet - A minimalist in-memory URL shortener service
//!
//! This library provides the core functionality for the Linklet service:
//! an in-memory mapping store with TTL-driven expiry, a random short-code
//! generator, and the HTTP services layered on top.
//!
//! # Architecture
//! - `store`: the concurrent mapping store (short code -> target URL)
//! - `api`: HTTP services and payload types
//! - `config`: environment-based configuration
//! - `system`: logging initialization
//! - `utils`: short-code generation and URL validation

pub mod api;
pub mod config;
pub mod errors;
pub mod store;
pub mod system;
pub mod utils;
