// SPDX-License-Identifier: MPL-2.0
//! Failures of a single catalog page request.

use std::fmt;

/// Reasons a page request can fail.
///
/// The `Display` output is the exact text shown in the error banner, so it
/// is never translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Server answered with a non-success status.
    Http {
        /// Numeric status code (e.g. 500).
        status: u16,
        /// Canonical reason phrase (e.g. "Internal Server Error"), may be empty.
        reason: String,
    },

    /// Connection, DNS, TLS or body read failure.
    Transport(String),

    /// The body was received but is not valid JSON.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http { status, reason } => write!(f, "Error: {status} {reason}"),
            FetchError::Transport(msg) | FetchError::Parse(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_shows_status_and_reason() {
        let err = FetchError::Http {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "Error: 500 Internal Server Error");
    }

    #[test]
    fn http_error_without_reason_keeps_trailing_space() {
        let err = FetchError::Http {
            status: 599,
            reason: String::new(),
        };
        assert_eq!(err.to_string(), "Error: 599 ");
    }

    #[test]
    fn transport_and_parse_show_underlying_message() {
        let transport = FetchError::Transport("connection refused".into());
        let parse = FetchError::Parse("expected value at line 1 column 1".into());
        assert_eq!(transport.to_string(), "connection refused");
        assert_eq!(parse.to_string(), "expected value at line 1 column 1");
    }
}
