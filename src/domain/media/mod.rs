// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! Pixel buffers and media kinds, independent of any presentation or
//! infrastructure concerns.

pub mod types;

pub use types::{MediaKind, RawImage};
