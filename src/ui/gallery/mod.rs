// SPDX-License-Identifier: MPL-2.0
//! "All Media" screen: a virtualised grid of photo and video thumbnails.

pub mod component;
pub mod state;

pub use component::{Effect, Gallery, Message, SCROLLABLE_ID};
pub use state::{ApplyOutcome, BindContext, BindTicket, GridSettings, PendingThumbnail, Selection};

use crate::application::port::{
    ImageDecoder, ImageScaler, MediaResolver, MessageStore, ThumbnailExtractor,
};
use std::sync::Arc;

/// Adapters the gallery needs, shared with background tasks.
#[derive(Clone)]
pub struct GalleryServices {
    pub store: Arc<dyn MessageStore>,
    pub resolver: Arc<dyn MediaResolver>,
    pub extractor: Arc<dyn ThumbnailExtractor>,
    pub decoder: Arc<dyn ImageDecoder>,
    pub scaler: Arc<dyn ImageScaler>,
}

impl GalleryServices {
    /// Borrowed view of the ports used for synchronous binding.
    #[must_use]
    pub fn bind_context(&self) -> BindContext<'_> {
        BindContext {
            resolver: self.resolver.as_ref(),
            decoder: self.decoder.as_ref(),
            scaler: self.scaler.as_ref(),
        }
    }
}

impl std::fmt::Debug for GalleryServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryServices").finish_non_exhaustive()
    }
}
