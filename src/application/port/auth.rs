// SPDX-License-Identifier: MPL-2.0
//! Remote authentication port.
//!
//! Unlike the other ports these calls are network-bound, so they return
//! boxed futures that the UI runs through `iced::Task::perform`.

use crate::domain::error::AuthError;
use futures_util::future::BoxFuture;

/// Future returned by every [`AuthService`] call.
pub type AuthFuture = BoxFuture<'static, Result<(), AuthError>>;

/// Password operations on the remote authentication service.
///
/// Implementations must not log the password arguments.
pub trait AuthService: Send + Sync {
    /// Verifies that `password` is the account's current password.
    fn check_password(&self, password: String) -> AuthFuture;

    /// Replaces the account password with `password`.
    fn update_password(&self, password: String) -> AuthFuture;
}
