//! Echotime
//!
//! Tiny HTTP endpoint that answers every request with the server time and
//! the caller's address. This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
