use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use serde::Serialize;
use std::net::SocketAddr;

/// Body returned for every request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhoAmIResponse {
    /// Time the request was handled, RFC3339 with whole seconds
    pub timestamp: String,
    /// Peer address as reported by the transport, including the port
    pub ip: String,
}

impl WhoAmIResponse {
    /// Capture the current local time for a request from `remote`.
    pub fn now(remote: SocketAddr) -> Self {
        Self::at(&Local::now(), remote)
    }

    /// Build a record for an explicit instant.
    pub fn at<Tz: TimeZone>(instant: &DateTime<Tz>, remote: SocketAddr) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            timestamp: instant.to_rfc3339_opts(SecondsFormat::Secs, true),
            ip: remote.to_string(),
        }
    }
}
