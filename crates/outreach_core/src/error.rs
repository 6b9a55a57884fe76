use std::fmt;

/// Reasons the form is rejected before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyQuery,
    InvalidPageCount,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyQuery => write!(f, "search query is empty"),
            ValidationError::InvalidPageCount => {
                write!(f, "page count must be an integer greater than 0")
            }
        }
    }
}

/// Why a request to the automation service did not produce a usable reply.
///
/// The panel reports all of these with the same fixed message; the kind is
/// kept for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Timeout,
    HttpStatus(u16),
    ResponseShape,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::ResponseShape => write!(f, "malformed response"),
        }
    }
}
