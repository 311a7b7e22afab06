// SPDX-License-Identifier: MPL-2.0
//! "Change Password" screen.
//!
//! Validation is local and synchronous; the remote part is two sequential
//! calls (verify current, then update) driven by [`state::FormState`].

pub mod component;
pub mod state;

pub use component::{perform, Effect, Message, PasswordForm, RemoteCall};
pub use state::{Field, Phase, RemoteRequest, Step};
