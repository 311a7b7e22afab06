// SPDX-License-Identifier: MPL-2.0
//! Password change state machine.
//!
//! ```text
//! Editing --submit--> (validate) --ok--> Verifying --ok--> Updating --ok--> Succeeded
//!    ^                   |                  |                 |
//!    +------invalid------+-------failed-----+------failed-----+
//! ```
//!
//! Each remote stage yields a typed result that drives exactly one
//! transition. Results that do not match the current stage are ignored.

use crate::domain::account::{PasswordChange, ValidationError};
use crate::domain::error::AuthError;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Verifying,
    Updating,
    Succeeded,
}

impl Phase {
    /// A remote request is outstanding.
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, Phase::Verifying | Phase::Updating)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Current,
    New,
    Confirm,
}

/// Remote stage a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Verify,
    Update,
}

/// Remote call to issue next.
#[derive(Clone, PartialEq, Eq)]
pub enum RemoteRequest {
    Verify(String),
    Update(String),
}

impl RemoteRequest {
    #[must_use]
    pub fn step(&self) -> Step {
        match self {
            RemoteRequest::Verify(_) => Step::Verify,
            RemoteRequest::Update(_) => Step::Update,
        }
    }
}

impl fmt::Debug for RemoteRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteRequest::Verify(_) => f.write_str("Verify(<redacted>)"),
            RemoteRequest::Update(_) => f.write_str("Update(<redacted>)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A request is already in flight, or the form is done.
    Busy,
    Invalid(ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Next(RemoteRequest),
    Failed(AuthError),
    Succeeded,
    /// The result does not belong to the current stage.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct FormState {
    phase: Phase,
    fields: PasswordChange,
    /// New password kept between verify and update.
    pending_new: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Editing,
            fields: PasswordChange::default(),
            pending_new: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Current => &self.fields.current,
            Field::New => &self.fields.new,
            Field::Confirm => &self.fields.confirm,
        }
    }

    /// Edits are dropped while a request is outstanding.
    pub fn set_value(&mut self, field: Field, value: String) {
        if self.phase != Phase::Editing {
            return;
        }
        match field {
            Field::Current => self.fields.current = value,
            Field::New => self.fields.new = value,
            Field::Confirm => self.fields.confirm = value,
        }
    }

    /// Validates locally and, on success, moves to `Verifying`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Busy`] outside `Editing` and
    /// [`SubmitError::Invalid`] when a rule fails; the phase is unchanged.
    pub fn submit(&mut self) -> Result<RemoteRequest, SubmitError> {
        if self.phase != Phase::Editing {
            return Err(SubmitError::Busy);
        }
        let validated = self.fields.validate().map_err(SubmitError::Invalid)?;
        self.pending_new = Some(validated.new_password().to_string());
        self.phase = Phase::Verifying;
        Ok(RemoteRequest::Verify(validated.current().to_string()))
    }

    /// Feeds the result of a remote stage.
    pub fn complete(&mut self, step: Step, result: Result<(), AuthError>) -> Transition {
        match (self.phase, step) {
            (Phase::Verifying, Step::Verify) => match result {
                Ok(()) => match self.pending_new.take() {
                    Some(new_password) => {
                        self.phase = Phase::Updating;
                        Transition::Next(RemoteRequest::Update(new_password))
                    }
                    None => {
                        self.phase = Phase::Editing;
                        Transition::Ignored
                    }
                },
                Err(err) => {
                    self.pending_new = None;
                    self.phase = Phase::Editing;
                    Transition::Failed(err)
                }
            },
            (Phase::Updating, Step::Update) => match result {
                Ok(()) => {
                    self.phase = Phase::Succeeded;
                    Transition::Succeeded
                }
                Err(err) => {
                    self.phase = Phase::Editing;
                    Transition::Failed(err)
                }
            },
            _ => Transition::Ignored,
        }
    }
}
