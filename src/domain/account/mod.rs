// SPDX-License-Identifier: MPL-2.0
//! Account domain: the password change request and its local rules.
//!
//! Validation runs before any remote call. The rules are checked in a fixed
//! order and the first failing rule wins.

use std::fmt;

/// The three plain-text fields of a password change. Never persisted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

// Hand-written so passwords never reach a log line through `{:?}`.
impl fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChange")
            .field("current", &"<redacted>")
            .field("new", &"<redacted>")
            .field("confirm", &"<redacted>")
            .finish()
    }
}

/// A request that passed local validation.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidatedChange {
    current: String,
    new: String,
}

impl ValidatedChange {
    /// Password to send to the verify step.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Password to send to the update step.
    #[must_use]
    pub fn new_password(&self) -> &str {
        &self.new
    }
}

impl fmt::Debug for ValidatedChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValidatedChange(<redacted>)")
    }
}

/// Local validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    CurrentMissing,
    NewMissing,
    Mismatch,
}

impl ValidationError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ValidationError::CurrentMissing => "password-error-current-missing",
            ValidationError::NewMissing => "password-error-new-missing",
            ValidationError::Mismatch => "password-error-mismatch",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValidationError::CurrentMissing => "Current Password must be set.",
            ValidationError::NewMissing => "New Password must be set.",
            ValidationError::Mismatch => "New Passwords must be the same.",
        })
    }
}

impl std::error::Error for ValidationError {}

impl PasswordChange {
    #[must_use]
    pub fn new(
        current: impl Into<String>,
        new: impl Into<String>,
        confirm: impl Into<String>,
    ) -> Self {
        Self {
            current: current.into(),
            new: new.into(),
            confirm: confirm.into(),
        }
    }

    /// Checks the local rules: current set, new set, new equals confirm.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] that applies.
    pub fn validate(&self) -> Result<ValidatedChange, ValidationError> {
        if self.current.is_empty() {
            return Err(ValidationError::CurrentMissing);
        }
        if self.new.is_empty() {
            return Err(ValidationError::NewMissing);
        }
        if self.new != self.confirm {
            return Err(ValidationError::Mismatch);
        }

        Ok(ValidatedChange {
            current: self.current.clone(),
            new: self.new.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_current_is_rejected_first() {
        let change = PasswordChange::new("", "x", "x");
        assert_eq!(change.validate(), Err(ValidationError::CurrentMissing));
        assert_eq!(
            ValidationError::CurrentMissing.to_string(),
            "Current Password must be set."
        );
    }

    #[test]
    fn empty_new_is_rejected() {
        let change = PasswordChange::new("old", "", "");
        assert_eq!(change.validate(), Err(ValidationError::NewMissing));
    }

    #[test]
    fn mismatch_is_rejected() {
        let change = PasswordChange::new("old", "a", "b");
        assert_eq!(change.validate(), Err(ValidationError::Mismatch));
        assert_eq!(
            ValidationError::Mismatch.to_string(),
            "New Passwords must be the same."
        );
    }

    #[test]
    fn all_empty_reports_current_missing() {
        assert_eq!(
            PasswordChange::default().validate(),
            Err(ValidationError::CurrentMissing)
        );
    }

    #[test]
    fn whitespace_counts_as_set() {
        let validated = PasswordChange::new(" ", "n", "n").validate().unwrap();
        assert_eq!(validated.current(), " ");
        assert_eq!(validated.new_password(), "n");
    }

    #[test]
    fn debug_output_redacts_passwords() {
        let change = PasswordChange::new("secret-old", "secret-new", "secret-new");
        let rendered = format!("{change:?}");
        assert!(!rendered.contains("secret"));
        let validated = change.validate().unwrap();
        assert!(!format!("{validated:?}").contains("secret"));
    }
}
