//! API Error Taxonomy
//!
//! Every backend response is normalized into `Result<T, ApiError>` before
//! any screen logic sees it. A screen only ever matches on these variants
//! or renders their display text.

use thiserror::Error;

/// Failure of one gateway call. All failures are terminal for that action;
/// the user re-triggers manually.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No session token was present, so no request was sent.
    #[error("Not signed in, please log in first")]
    NotAuthenticated,

    /// The transport itself failed (DNS, connection refused, timeout). The
    /// inner detail goes to the console, not to the user.
    #[error("Server error, please try again later")]
    Network(String),

    /// The backend rejected the session token (401/403). The stored token
    /// has already been cleared by the time this is returned.
    #[error("{0}")]
    AuthRejected(String),

    /// The backend reported a failure; its detail is surfaced verbatim.
    #[error("{0}")]
    Backend(String),

    /// The response arrived with a success status but could not be decoded.
    #[error("Unexpected response from server")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_detail_is_surfaced_verbatim() {
        let err = ApiError::Backend("Username 'bob' is already exist".to_string());
        assert_eq!(err.to_string(), "Username 'bob' is already exist");
    }

    #[test]
    fn transport_detail_stays_out_of_the_display_text() {
        let err = ApiError::Network("dns error: no such host".to_string());
        assert_eq!(err.to_string(), "Server error, please try again later");
    }

    #[test]
    fn missing_token_message_is_fixed() {
        assert_eq!(
            ApiError::NotAuthenticated.to_string(),
            "Not signed in, please log in first"
        );
    }
}
