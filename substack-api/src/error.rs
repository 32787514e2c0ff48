//! Error types for the Substack API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Substack API.
#[derive(Debug, Error)]
pub enum SubstackError {
    /// HTTP transport error (connection refused, timeout, TLS failure, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The login request failed, either at the transport level or with a
    /// non-2xx status. The wrapped error is [`Http`](Self::Http) or
    /// [`Api`](Self::Api).
    #[error("login failed: {0}")]
    Auth(#[source] Box<SubstackError>),

    /// The server answered with a status outside `200..300`.
    ///
    /// The body is never decoded for these responses. Rate limiting and
    /// permission failures both end up here with their raw status:
    /// - `401`/`403` — missing or expired session cookie
    /// - `404` — unknown publication or draft
    /// - `429` — too many requests
    #[error("Substack API error: {status} - {reason}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status (e.g. `Not Found`).
        reason: String,
    },

    /// A 2xx response whose body does not match the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// File I/O error (reading the credential file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SubstackError {
    /// HTTP status carried by this error, looking through [`Auth`](Self::Auth).
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Auth(inner) => inner.status(),
            Self::Decode(_) | Self::Io(_) => None,
        }
    }
}

/// Convenience alias for `Result<T, SubstackError>`.
pub type Result<T> = std::result::Result<T, SubstackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_mentions_status() {
        let err = SubstackError::Api {
            status: 404,
            reason: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "Substack API error: 404 - Not Found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn auth_error_exposes_inner_status() {
        let err = SubstackError::Auth(Box::new(SubstackError::Api {
            status: 401,
            reason: "Unauthorized".into(),
        }));
        assert_eq!(err.status(), Some(401));
        assert!(err.to_string().starts_with("login failed:"));
    }
}
