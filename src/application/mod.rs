// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (read-side)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use chat_lens::application::port::{MediaResolver, MessageStore};
//! use chat_lens::application::query::gallery::load_gallery;
//!
//! let items = load_gallery(&store, &resolver, &chat_id);
//! ```

pub mod port;
pub mod query;
