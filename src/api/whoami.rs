use axum::{
    extract::ConnectInfo,
    response::{IntoResponse, Json},
};
use std::net::SocketAddr;

use crate::models::WhoAmIResponse;

/// Report the server time and the caller's address
///
/// Method, path and body of the request are ignored.
pub async fn handle_whoami(ConnectInfo(remote): ConnectInfo<SocketAddr>) -> impl IntoResponse {
    let response = WhoAmIResponse::now(remote);
    tracing::debug!(ip = %response.ip, timestamp = %response.timestamp, "Answering whoami");
    Json(response)
}
