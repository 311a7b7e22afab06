// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failure reported by (or while reaching) the remote authentication service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No service endpoint is configured.
    NotConfigured,
    /// The service could not be reached or timed out.
    Network(String),
    /// The service refused the request; the message comes from the service.
    Rejected(String),
    /// The service answered with something that could not be understood.
    InvalidResponse(String),
}

impl AuthError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AuthError::NotConfigured => "error-auth-not-configured",
            AuthError::Network(_) => "error-auth-network",
            AuthError::Rejected(_) => "error-auth-rejected",
            AuthError::InvalidResponse(_) => "error-auth-invalid-response",
        }
    }

    /// Message as reported by the service, when there is one.
    #[must_use]
    pub fn service_message(&self) -> Option<&str> {
        match self {
            AuthError::Rejected(msg) if !msg.trim().is_empty() => Some(msg),
            _ => None,
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NotConfigured => write!(f, "Authentication service is not configured"),
            AuthError::Network(msg) => write!(f, "Authentication service unreachable: {msg}"),
            AuthError::Rejected(msg) => f.write_str(msg),
            AuthError::InvalidResponse(msg) => {
                write!(f, "Unexpected authentication service response: {msg}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_displays_service_text_verbatim() {
        let err = AuthError::Rejected("Wrong password.".into());
        assert_eq!(err.to_string(), "Wrong password.");
        assert_eq!(err.service_message(), Some("Wrong password."));
    }

    #[test]
    fn blank_rejection_has_no_service_message() {
        assert_eq!(AuthError::Rejected("  ".into()).service_message(), None);
        assert_eq!(AuthError::NotConfigured.service_message(), None);
    }
}
