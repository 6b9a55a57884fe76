use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of `POST /start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartRequest {
    pub query: String,
    pub max_pages: u32,
}

/// Body returned by `POST /start`.
///
/// `message` is optional at this layer so a reply that omits it can still be
/// reported to the caller, which decides how to treat it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub connections_sent: Option<u32>,
}

/// Body returned by `POST /cancel`. An empty body decodes to the default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelReply {
    #[serde(default)]
    pub connections_sent: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    StartFinished(Result<StartReply, ServiceError>),
    CancelFinished(Result<CancelReply, ServiceError>),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("invalid service url: {0}")]
    InvalidUrl(String),
    #[error("could not build request: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("malformed response: {0}")]
    ResponseShape(String),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build service client: {0}")]
    Client(#[from] ServiceError),
}
