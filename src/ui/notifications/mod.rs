// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Validation failures, remote errors and the password success message are
//! all reported as toasts in the bottom-right corner.
//!
//! - [`notification`] - `Notification` with severity and text
//! - [`manager`] - `Manager` for queuing and auto-dismiss
//! - [`toast`] - Toast rendering
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-password-changed"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Durations: 3s for success/info, 5s for warnings and errors. Errors are
//! transient so a failed request never leaves a stale toast behind. At most
//! 3 toasts are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, NotificationText, Severity};
pub use toast::Toast;
