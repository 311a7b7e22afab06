// SPDX-License-Identifier: MPL-2.0
//! Virtualised grid state and the thumbnail binding protocol.
//!
//! The grid owns a fixed pool of cell slots sized for the visible rows plus
//! an overscan margin. Item `i` is always shown by slot `i % pool_len`, so
//! scrolling rebinds the slots that leave the window to the items entering
//! it.
//!
//! Every bind draws a fresh generation from a counter that only grows.
//! Video thumbnails are decoded off the update loop and come back tagged
//! with the [`BindTicket`] issued at bind time; a result is applied only if
//! its slot still carries that generation and message. A slot that was
//! rebound in the meantime silently drops the late result.

use crate::application::port::{ImageDecoder, ImageScaler, MediaResolver};
use crate::application::query::GalleryItem;
use crate::domain::error::MediaError;
use crate::domain::media::{MediaKind, RawImage};
use crate::domain::message::{ChatId, MessageId};
use crate::media::image::to_handle;
use iced::widget::image;
use std::ops::Range;
use std::path::PathBuf;

/// Identifies one bind of one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindTicket {
    pub slot: usize,
    pub generation: u64,
    pub message_id: MessageId,
}

/// A video thumbnail that still has to be extracted off the update loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingThumbnail {
    pub ticket: BindTicket,
    pub path: PathBuf,
}

/// Outcome of delivering a decoded thumbnail to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// Decode failed; the cell stays blank.
    Failed,
    /// The slot was rebound (or removed) after the ticket was issued.
    Stale,
}

/// Ports used to produce photo thumbnails synchronously at bind time.
#[derive(Clone, Copy)]
pub struct BindContext<'a> {
    pub resolver: &'a dyn MediaResolver,
    pub decoder: &'a dyn ImageDecoder,
    pub scaler: &'a dyn ImageScaler,
}

/// One reusable visual cell.
#[derive(Debug, Clone)]
pub struct Cell {
    pub item_index: usize,
    pub message_id: MessageId,
    pub kind: MediaKind,
    pub generation: u64,
    image: Option<image::Handle>,
}

impl Cell {
    #[must_use]
    pub fn image(&self) -> Option<&image::Handle> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// Grid geometry settings, already clamped by the config layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSettings {
    pub columns: usize,
    pub overscan_rows: usize,
    pub thumbnail_size: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        use crate::app::config::{DEFAULT_COLUMNS, DEFAULT_OVERSCAN_ROWS, DEFAULT_THUMBNAIL_SIZE};
        Self {
            columns: DEFAULT_COLUMNS as usize,
            overscan_rows: DEFAULT_OVERSCAN_ROWS as usize,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
        }
    }
}

/// What to open after a cell is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Photo {
        chat_id: ChatId,
        message_id: MessageId,
        path: PathBuf,
        created_at: i64,
    },
    Video {
        message_id: MessageId,
        path: PathBuf,
    },
}

/// Number of slots needed to cover the viewport plus overscan.
#[must_use]
pub fn pool_len(viewport_height: f32, cell_side: f32, settings: GridSettings) -> usize {
    visible_row_span(viewport_height, cell_side, settings.overscan_rows) * settings.columns.max(1)
}

fn visible_row_span(viewport_height: f32, cell_side: f32, overscan_rows: usize) -> usize {
    let rows_on_screen = if cell_side > 0.0 {
        (viewport_height.max(0.0) / cell_side).ceil() as usize
    } else {
        0
    };
    // One extra row for a partially scrolled top row.
    rows_on_screen + 1 + 2 * overscan_rows
}

/// Item indices that should be bound for the given scroll position.
///
/// The range never holds more items than [`pool_len`] slots, so no two
/// items in it share a slot.
#[must_use]
pub fn visible_window(
    item_count: usize,
    columns: usize,
    cell_side: f32,
    viewport_height: f32,
    scroll_y: f32,
    overscan_rows: usize,
) -> Range<usize> {
    let columns = columns.max(1);
    if item_count == 0 || cell_side <= 0.0 {
        return 0..0;
    }

    let total_rows = item_count.div_ceil(columns);
    let top_row = (scroll_y.max(0.0) / cell_side).floor() as usize;
    let rows_on_screen = (viewport_height.max(0.0) / cell_side).ceil() as usize + 1;

    let first_row = top_row.saturating_sub(overscan_rows).min(total_rows);
    let end_row = (top_row + rows_on_screen + overscan_rows).min(total_rows);

    let start = first_row * columns;
    let end = (end_row * columns).min(item_count);
    start..end.max(start)
}

#[derive(Debug)]
pub struct State {
    chat_id: ChatId,
    items: Vec<GalleryItem>,
    slots: Vec<Option<Cell>>,
    next_generation: u64,
    settings: GridSettings,
    viewport_width: f32,
    viewport_height: f32,
    scroll_y: f32,
    loading: bool,
}

impl State {
    #[must_use]
    pub fn new(chat_id: ChatId, settings: GridSettings) -> Self {
        Self {
            chat_id,
            items: Vec::new(),
            slots: Vec::new(),
            next_generation: 0,
            settings,
            viewport_width: 0.0,
            viewport_height: 0.0,
            scroll_y: 0.0,
            loading: false,
        }
    }

    #[must_use]
    pub fn chat_id(&self) -> &ChatId {
        &self.chat_id
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn settings(&self) -> GridSettings {
        self.settings
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Side of a square cell: viewport width divided by the column count.
    #[must_use]
    pub fn cell_side(&self) -> f32 {
        self.viewport_width / self.settings.columns.max(1) as f32
    }

    /// Total scrollable content height.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.items.len().div_ceil(self.settings.columns.max(1)) as f32 * self.cell_side()
    }

    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn slot(&self, slot: usize) -> Option<&Cell> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Cell currently showing `item_index`, if that item is bound.
    #[must_use]
    pub fn cell_for_item(&self, item_index: usize) -> Option<&Cell> {
        let pool = self.slots.len();
        if pool == 0 {
            return None;
        }
        self.slot(item_index % pool)
            .filter(|cell| cell.item_index == item_index)
    }

    #[must_use]
    pub fn window(&self) -> Range<usize> {
        visible_window(
            self.items.len(),
            self.settings.columns,
            self.cell_side(),
            self.viewport_height,
            self.scroll_y,
            self.settings.overscan_rows,
        )
    }

    /// Replaces the item list wholesale and rebinds the visible window.
    pub fn set_items(
        &mut self,
        items: Vec<GalleryItem>,
        ctx: BindContext<'_>,
    ) -> Vec<PendingThumbnail> {
        self.items = items;
        self.loading = false;
        for slot in &mut self.slots {
            *slot = None;
        }
        let max_scroll = (self.content_height() - self.viewport_height).max(0.0);
        self.scroll_y = self.scroll_y.min(max_scroll);
        self.sync_window(ctx)
    }

    /// Updates the viewport size, resizing the slot pool when needed.
    pub fn set_viewport(
        &mut self,
        width: f32,
        height: f32,
        ctx: BindContext<'_>,
    ) -> Vec<PendingThumbnail> {
        self.viewport_width = width.max(0.0);
        self.viewport_height = height.max(0.0);

        let wanted = if self.viewport_width > 0.0 {
            pool_len(self.viewport_height, self.cell_side(), self.settings)
        } else {
            0
        };
        if wanted != self.slots.len() {
            // The slot mapping changes with the pool size; start over.
            self.slots = vec![None; wanted];
        }
        self.sync_window(ctx)
    }

    /// Applies a scrollable viewport report: size and offset in one pass.
    pub fn set_bounds(
        &mut self,
        width: f32,
        height: f32,
        scroll_y: f32,
        ctx: BindContext<'_>,
    ) -> Vec<PendingThumbnail> {
        self.scroll_y = scroll_y.max(0.0);
        self.set_viewport(width, height, ctx)
    }

    /// Updates the scroll offset and rebinds slots entering the window.
    pub fn set_scroll(&mut self, scroll_y: f32, ctx: BindContext<'_>) -> Vec<PendingThumbnail> {
        self.scroll_y = scroll_y.max(0.0);
        self.sync_window(ctx)
    }

    fn sync_window(&mut self, ctx: BindContext<'_>) -> Vec<PendingThumbnail> {
        let pool = self.slots.len();
        if pool == 0 {
            return Vec::new();
        }

        let mut pending = Vec::new();
        for item_index in self.window() {
            let slot = item_index % pool;
            let bound = self.slots[slot]
                .as_ref()
                .is_some_and(|cell| cell.item_index == item_index);
            if !bound {
                pending.extend(self.bind(slot, item_index, ctx));
            }
        }
        pending
    }

    /// Binds `item_index` to `slot`.
    ///
    /// The slot's image is cleared and a new generation drawn before any
    /// media work. Photos are decoded and scaled right away, from the cached
    /// preview when the resolver has one; videos return a
    /// [`PendingThumbnail`] for the caller to extract in the background.
    /// Items whose media no longer resolves stay blank.
    pub fn bind(
        &mut self,
        slot: usize,
        item_index: usize,
        ctx: BindContext<'_>,
    ) -> Option<PendingThumbnail> {
        let item = self.items.get(item_index)?;
        if slot >= self.slots.len() {
            return None;
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        let message_id = item.message_id.clone();
        let kind = item.kind;

        self.slots[slot] = Some(Cell {
            item_index,
            message_id: message_id.clone(),
            kind,
            generation,
            image: None,
        });

        let path = ctx.resolver.resolve(&message_id, kind)?;
        match kind {
            MediaKind::Photo => {
                let side = self.settings.thumbnail_size;
                let source = ctx.resolver.resolve_thumbnail(&message_id).unwrap_or(path);
                match ctx.decoder.decode(&source) {
                    Ok(raw) => {
                        let thumb = ctx.scaler.square(&raw, side);
                        if let Some(cell) = self.slots[slot].as_mut() {
                            cell.image = Some(to_handle(thumb));
                        }
                    }
                    Err(err) => {
                        tracing::debug!(message = %message_id, error = %err, "photo thumbnail failed");
                    }
                }
                None
            }
            MediaKind::Video => Some(PendingThumbnail {
                ticket: BindTicket {
                    slot,
                    generation,
                    message_id,
                },
                path,
            }),
        }
    }

    /// Delivers a background thumbnail result to the slot named by `ticket`.
    pub fn apply_thumbnail(
        &mut self,
        ticket: &BindTicket,
        result: Result<RawImage, MediaError>,
    ) -> ApplyOutcome {
        let Some(cell) = self.slots.get_mut(ticket.slot).and_then(Option::as_mut) else {
            tracing::debug!(slot = ticket.slot, "thumbnail for missing slot dropped");
            return ApplyOutcome::Stale;
        };
        if cell.generation != ticket.generation || cell.message_id != ticket.message_id {
            tracing::debug!(
                slot = ticket.slot,
                ticket_generation = ticket.generation,
                slot_generation = cell.generation,
                "stale thumbnail dropped"
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(raw) => {
                cell.image = Some(to_handle(raw));
                ApplyOutcome::Applied
            }
            Err(err) => {
                tracing::debug!(message = %ticket.message_id, error = %err, "video thumbnail failed");
                ApplyOutcome::Failed
            }
        }
    }

    /// Re-resolves the media of `item_index` and returns what to open.
    ///
    /// Returns `None` if the media disappeared since the list was loaded.
    #[must_use]
    pub fn select(&self, item_index: usize, resolver: &dyn MediaResolver) -> Option<Selection> {
        let item = self.items.get(item_index)?;
        let path = resolver.resolve(&item.message_id, item.kind)?;
        Some(match item.kind {
            MediaKind::Photo => Selection::Photo {
                chat_id: item.chat_id.clone(),
                message_id: item.message_id.clone(),
                path,
                created_at: item.created_at,
            },
            MediaKind::Video => Selection::Video {
                message_id: item.message_id.clone(),
                path,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::ChatId;
    use std::collections::HashSet;
    use std::path::Path;
    use std::sync::Mutex;

    /// Resolves every id except those marked missing.
    #[derive(Default)]
    struct FakeResolver {
        missing: Mutex<HashSet<String>>,
        previews: Mutex<HashSet<String>>,
    }

    impl FakeResolver {
        fn remove(&self, id: &str) {
            self.missing.lock().unwrap().insert(id.to_string());
        }

        fn cache_preview(&self, id: &str) {
            self.previews.lock().unwrap().insert(id.to_string());
        }
    }

    impl MediaResolver for FakeResolver {
        fn resolve(&self, id: &MessageId, kind: MediaKind) -> Option<PathBuf> {
            (!self.missing.lock().unwrap().contains(id.as_str()))
                .then(|| PathBuf::from(format!("/m/{id}.{}", kind.extension())))
        }

        fn resolve_thumbnail(&self, id: &MessageId) -> Option<PathBuf> {
            self.previews
                .lock()
                .unwrap()
                .contains(id.as_str())
                .then(|| PathBuf::from(format!("/thumbs/{id}-small.jpg")))
        }
    }

    struct SolidDecoder;

    impl ImageDecoder for SolidDecoder {
        fn decode(&self, path: &Path) -> Result<RawImage, MediaError> {
            if path.to_string_lossy().contains("broken") {
                return Err(MediaError::DecodingFailed("bad".into()));
            }
            RawImage::from_rgba(4, 2, vec![9u8; 4 * 2 * 4])
        }
    }

    struct NaiveScaler;

    impl ImageScaler for NaiveScaler {
        fn square(&self, _image: &RawImage, side: u32) -> RawImage {
            RawImage::from_rgba(side, side, vec![0u8; (side * side * 4) as usize]).unwrap()
        }
    }

    fn ctx(resolver: &FakeResolver) -> BindContext<'_> {
        BindContext {
            resolver,
            decoder: &SolidDecoder,
            scaler: &NaiveScaler,
        }
    }

    fn item(id: &str, kind: MediaKind) -> GalleryItem {
        GalleryItem {
            message_id: MessageId::new(id),
            chat_id: ChatId::new("chat"),
            kind,
            created_at: 0,
            path: PathBuf::from(format!("/m/{id}")),
        }
    }

    fn settings(overscan_rows: usize) -> GridSettings {
        GridSettings {
            columns: 2,
            overscan_rows,
            thumbnail_size: 8,
        }
    }

    fn frame() -> RawImage {
        RawImage::from_rgba(8, 8, vec![1u8; 8 * 8 * 4]).unwrap()
    }

    #[test]
    fn window_covers_visible_rows_plus_overscan() {
        // 100 items, 2 columns, 100px cells, 250px viewport.
        assert_eq!(visible_window(100, 2, 100.0, 250.0, 0.0, 0), 0..8);
        assert_eq!(visible_window(100, 2, 100.0, 250.0, 0.0, 2), 0..12);
        // Scrolled to row 10: overscan reaches back two rows.
        assert_eq!(visible_window(100, 2, 100.0, 250.0, 1000.0, 2), 16..32);
    }

    #[test]
    fn window_is_clipped_to_item_count() {
        assert_eq!(visible_window(3, 2, 100.0, 1000.0, 0.0, 2), 0..3);
        assert_eq!(visible_window(0, 2, 100.0, 1000.0, 0.0, 2), 0..0);
        assert_eq!(visible_window(10, 2, 0.0, 1000.0, 0.0, 2), 0..0);
    }

    #[test]
    fn window_never_exceeds_pool() {
        let s = settings(1);
        for scroll in [0.0, 37.0, 150.0, 999.0, 4321.0] {
            let window = visible_window(500, 2, 90.0, 333.0, scroll, 1);
            assert!(window.len() <= pool_len(333.0, 90.0, s));
        }
    }

    #[test]
    fn cell_side_follows_viewport_width() {
        let resolver = FakeResolver::default();
        let mut state = State::new(ChatId::new("chat"), settings(0));
        state.set_viewport(400.0, 300.0, ctx(&resolver));
        assert_eq!(state.cell_side(), 200.0);
        // ceil(300 / 200) + 1 rows, two columns
        assert_eq!(state.pool_len(), 6);
    }

    #[test]
    fn photos_bind_synchronously_videos_go_pending() {
        let resolver = FakeResolver::default();
        let mut state = State::new(ChatId::new("chat"), settings(0));
        state.set_viewport(200.0, 100.0, ctx(&resolver));

        let pending = state.set_items(
            vec![item("p", MediaKind::Photo), item("v", MediaKind::Video)],
            ctx(&resolver),
        );

        assert!(state.cell_for_item(0).unwrap().image().is_some());
        let video = state.cell_for_item(1).unwrap();
        assert!(video.image().is_none());
        assert!(video.is_video());
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].ticket.message_id.as_str(), "v");
        assert_eq!(pending[0].path, PathBuf::from("/m/v.mp4"));
    }

    #[test]
    fn matching_ticket_is_applied() {
        let resolver = FakeResolver::default();
        let mut state = State::new(ChatId::new("chat"), settings(0));
        state.set_viewport(200.0, 100.0, ctx(&resolver));
        let pending = state.set_items(vec![item("v", MediaKind::Video)], ctx(&resolver));

        let outcome = state.apply_thumbnail(&pending[0].ticket, Ok(frame()));

        assert_eq!(outcome, ApplyOutcome::Applied);
        assert!(state.cell_for_item(0).unwrap().image().is_some());
    }

    #[test]
    fn rebinding_a_slot_drops_the_earlier_video_result() {
        let resolver = FakeResolver::default();
        let mut state = State::new(ChatId::new("chat"), settings(0));
        state.set_viewport(200.0, 100.0, ctx(&resolver));
        let pool = state.pool_len();
        let mut items: Vec<GalleryItem> = (0..pool * 3)
            .map(|i| item(&format!("v{i}"), MediaKind::Video))
            .collect();
        items[pool] = item("m2", MediaKind::Video);
        items[0] = item("m1", MediaKind::Video);
        let first = state.set_items(items, ctx(&resolver));
        let m1_ticket = first
            .iter()
            .find(|p| p.ticket.message_id.as_str() == "m1")
            .unwrap()
            .ticket
            .clone();

        // Scroll far enough that item `pool` (m2) takes over slot 0.
        let cell = state.cell_side();
        let second = state.set_scroll(cell * (pool / 2) as f32, ctx(&resolver));
        let m2_ticket = second
            .iter()
            .find(|p| p.ticket.message_id.as_str() == "m2")
            .unwrap()
            .ticket
            .clone();
        assert_eq!(m2_ticket.slot, m1_ticket.slot);
        assert!(m2_ticket.generation > m1_ticket.generation);

        // M1 finishes late.
        assert_eq!(
            state.apply_thumbnail(&m1_ticket, Ok(frame())),
            ApplyOutcome::Stale
        );
        let slot = state.slot(m1_ticket.slot).unwrap();
        assert_eq!(slot.message_id.as_str(), "m2");
        assert!(slot.image().is_none());

        assert_eq!(
            state.apply_thumbnail(&m2_ticket, Ok(frame())),
            ApplyOutcome::Applied
        );
    }

    #[test]
    fn explicit_rebind_to_same_message_still_rejects_old_generation() {
        let resolver = FakeResolver::default();
        let mut state = State::new(ChatId::new("chat"), settings(0));
        state.set_viewport(200.0, 100.0, ctx(&resolver));
        let old = state.set_items(vec![item("v", MediaKind::Video)], ctx(&resolver));
        let new = state.bind(0, 0, ctx(&resolver)).unwrap();

        assert_eq!(
            state.apply_thumbnail(&old[0].ticket, Ok(frame())),
            ApplyOutcome::Stale
        );
        assert_eq!(
            state.apply_thumbnail(&new.ticket, Ok(frame())),
            ApplyOutcome::Applied
        );
    }

    #[test]
    fn reload_invalidates_outstanding_tickets() {
        let resolver = FakeResolver::default();
        let mut state = State::new(ChatId::new("chat"), settings(0));
        state.set_viewport(200.0, 100.0, ctx(&resolver));
        let before = state.set_items(vec![item("v", MediaKind::Video)], ctx(&resolver));
        state.set_items(vec![item("v", MediaKind::Video)], ctx(&resolver));

        assert_eq!(
            state.apply_thumbnail(&before[0].ticket, Ok(frame())),
            ApplyOutcome::Stale
        );
    }

    #[test]
    fn ticket_for_removed_slot_is_stale() {
        let resolver = FakeResolver::default();
        let mut state = State::new(ChatId::new("chat"), settings(0));
        state.set_viewport(200.0, 100.0, ctx(&resolver));
        let pending = state.set_items(vec![item("v", MediaKind::Video)], ctx(&resolver));
        state.set_viewport(0.0, 0.0, ctx(&resolver));

        assert_eq!(state.pool_len(), 0);
        assert_eq!(
            state.apply_thumbnail(&pending[0].ticket, Ok(frame())),
            ApplyOutcome::Stale
        );
    }

    #[test]
    fn failed_decode_leaves_cell_blank() {
        let resolver = FakeResolver::default();
        let mut state = State::new(ChatId::new("chat"), settings(0));
        state.set_viewport(200.0, 100.0, ctx(&resolver));
        let pending = state.set_items(
            vec![item("broken", MediaKind::Photo), item("v", MediaKind::Video)],
            ctx(&resolver),
        );

        assert!(state.cell_for_item(0).unwrap().image().is_none());
        assert_eq!(
            state.apply_thumbnail(
                &pending[0].ticket,
                Err(MediaError::NoFrame)
            ),
            ApplyOutcome::Failed
        );
        assert!(state.cell_for_item(1).unwrap().image().is_none());
    }

    #[test]
    fn generations_only_grow() {
        let resolver = FakeResolver::default();
        let mut state = State::new(ChatId::new("chat"), settings(0));
        state.set_viewport(200.0, 100.0, ctx(&resolver));
        state.set_items(vec![item("p", MediaKind::Photo)], ctx(&resolver));
        let g1 = state.slot(0).unwrap().generation;
        state.bind(0, 0, ctx(&resolver));
        let g2 = state.slot(0).unwrap().generation;
        state.set_items(vec![item("p", MediaKind::Photo)], ctx(&resolver));
        let g3 = state.slot(0).unwrap().generation;
        assert!(g1 < g2 && g2 < g3);
    }

    #[test]
    fn select_re_resolves_media() {
        let resolver = FakeResolver::default();
        let mut state = State::new(ChatId::new("chat"), settings(0));
        state.set_viewport(200.0, 100.0, ctx(&resolver));
        state.set_items(
            vec![item("p", MediaKind::Photo), item("v", MediaKind::Video)],
            ctx(&resolver),
        );

        assert_eq!(
            state.select(0, &resolver),
            Some(Selection::Photo {
                chat_id: ChatId::new("chat"),
                message_id: MessageId::new("p"),
                path: PathBuf::from("/m/p.jpg"),
                created_at: 0,
            })
        );
        assert!(matches!(state.select(1, &resolver), Some(Selection::Video { .. })));

        resolver.remove("p");
        assert_eq!(state.select(0, &resolver), None);
        assert_eq!(state.select(99, &resolver), None);
    }

    #[test]
    fn bind_with_missing_media_keeps_slot_blank_without_work() {
        let resolver = FakeResolver::default();
        let mut state = State::new(ChatId::new("chat"), settings(0));
        state.set_viewport(200.0, 100.0, ctx(&resolver));
        resolver.remove("v");

        let pending = state.set_items(vec![item("v", MediaKind::Video)], ctx(&resolver));

        assert!(pending.is_empty());
        assert_eq!(state.cell_for_item(0).unwrap().message_id.as_str(), "v");
    }

    #[test]
    fn photo_prefers_cached_preview_over_full_image() {
        let resolver = FakeResolver::default();
        let mut state = State::new(ChatId::new("chat"), settings(0));
        state.set_viewport(200.0, 100.0, ctx(&resolver));
        // The full-size file of this photo cannot be decoded.
        resolver.cache_preview("broken");

        let pending = state.set_items(
            vec![item("broken", MediaKind::Photo), item("broken2", MediaKind::Photo)],
            ctx(&resolver),
        );

        assert!(pending.is_empty());
        assert!(state.cell_for_item(0).unwrap().image.is_some());
        assert!(state.cell_for_item(1).unwrap().image.is_none());
    }

    #[test]
    fn cached_preview_does_not_make_missing_photo_visible() {
        let resolver = FakeResolver::default();
        let mut state = State::new(ChatId::new("chat"), settings(0));
        state.set_viewport(200.0, 100.0, ctx(&resolver));
        resolver.cache_preview("p");
        resolver.remove("p");

        state.set_items(vec![item("p", MediaKind::Photo)], ctx(&resolver));

        assert!(state.cell_for_item(0).unwrap().image.is_none());
        assert_eq!(state.select(0, &resolver), None);
    }
}
