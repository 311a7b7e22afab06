// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! These services do not modify state; they build read-only projections
//! from the ports.
//!
//! - [`gallery`]: Photo/video item list for one chat (`load_gallery`)

pub mod gallery;

pub use gallery::{load_gallery, GalleryItem};
