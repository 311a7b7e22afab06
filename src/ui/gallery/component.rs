// SPDX-License-Identifier: MPL-2.0
//! Gallery component: owns the grid state and schedules background work.

use super::state::{ApplyOutcome, BindTicket, GridSettings, PendingThumbnail, Selection, State};
use super::GalleryServices;
use crate::application::query::{load_gallery, GalleryItem};
use crate::domain::error::MediaError;
use crate::domain::media::RawImage;
use crate::domain::message::{ChatId, MessageId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::widget::{button, container, image, Column, Container, Id, Row, Scrollable, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Rectangle, Size, Task};
use std::path::PathBuf;
use std::sync::Arc;

/// Identifier used for the grid scrollable widget.
pub const SCROLLABLE_ID: &str = "gallery-grid-scrollable";

#[derive(Debug, Clone)]
pub enum Message {
    Reload,
    ItemsLoaded(Vec<GalleryItem>),
    ViewportChanged {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    /// Space available to the grid after the window was resized.
    Resized(Size),
    CellPressed(usize),
    ThumbnailDecoded {
        ticket: BindTicket,
        result: Result<RawImage, MediaError>,
    },
}

/// Side effects the application should perform after a gallery message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    OpenPhoto {
        chat_id: ChatId,
        message_id: MessageId,
        path: PathBuf,
        created_at: i64,
    },
    OpenVideo {
        message_id: MessageId,
        path: PathBuf,
    },
}

pub struct Gallery {
    state: State,
    services: GalleryServices,
}

impl Gallery {
    #[must_use]
    pub fn new(chat_id: ChatId, settings: GridSettings, services: GalleryServices) -> Self {
        Self {
            state: State::new(chat_id, settings),
            services,
        }
    }

    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Rebuilds the item list off the update loop.
    pub fn load(&mut self) -> Task<Message> {
        self.state.set_loading(true);
        let store = Arc::clone(&self.services.store);
        let resolver = Arc::clone(&self.services.resolver);
        let chat = self.state.chat_id().clone();

        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || {
                    load_gallery(store.as_ref(), resolver.as_ref(), &chat)
                })
                .await
                .unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "gallery load task failed");
                    Vec::new()
                })
            },
            Message::ItemsLoaded,
        )
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Reload => (Effect::None, self.load()),
            Message::ItemsLoaded(items) => {
                let pending = self.state.set_items(items, self.services.bind_context());
                (Effect::None, self.spawn_thumbnails(pending))
            }
            Message::ViewportChanged { bounds, offset } => {
                let pending = self.state.set_bounds(
                    bounds.width,
                    bounds.height,
                    offset.y,
                    self.services.bind_context(),
                );
                (Effect::None, self.spawn_thumbnails(pending))
            }
            Message::Resized(size) => {
                let pending =
                    self.state
                        .set_viewport(size.width, size.height, self.services.bind_context());
                (Effect::None, self.spawn_thumbnails(pending))
            }
            Message::CellPressed(index) => {
                let effect = match self.state.select(index, self.services.resolver.as_ref()) {
                    Some(Selection::Photo {
                        chat_id,
                        message_id,
                        path,
                        created_at,
                    }) => Effect::OpenPhoto {
                        chat_id,
                        message_id,
                        path,
                        created_at,
                    },
                    Some(Selection::Video { message_id, path }) => {
                        Effect::OpenVideo { message_id, path }
                    }
                    None => {
                        tracing::debug!(index, "selected media no longer available");
                        Effect::None
                    }
                };
                (effect, Task::none())
            }
            Message::ThumbnailDecoded { ticket, result } => {
                if self.state.apply_thumbnail(&ticket, result) == ApplyOutcome::Applied {
                    tracing::trace!(message = %ticket.message_id, "video thumbnail applied");
                }
                (Effect::None, Task::none())
            }
        }
    }

    /// One background extraction per pending video cell.
    fn spawn_thumbnails(&self, pending: Vec<PendingThumbnail>) -> Task<Message> {
        if pending.is_empty() {
            return Task::none();
        }
        let side = self.state.settings().thumbnail_size;

        Task::batch(pending.into_iter().map(|PendingThumbnail { ticket, path }| {
            let extractor = Arc::clone(&self.services.extractor);
            let scaler = Arc::clone(&self.services.scaler);
            Task::perform(
                async move {
                    tokio::task::spawn_blocking(move || {
                        extractor
                            .extract(&path)
                            .map(|frame| scaler.square(&frame, side))
                    })
                    .await
                    .map_err(|e| MediaError::DecodingFailed(e.to_string()))?
                },
                move |result| Message::ThumbnailDecoded { ticket, result },
            )
        }))
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        if self.state.items().is_empty() {
            return empty_view(i18n, self.state.is_loading());
        }

        let columns = self.state.settings().columns.max(1);
        let side = self.state.cell_side();
        let window = self.state.window();
        let first_row = window.start / columns;
        let end_row = window.end.div_ceil(columns);
        let total_rows = self.state.items().len().div_ceil(columns);

        let mut grid = Column::new().width(Length::Fill);
        grid = grid.push(Space::new().height(Length::Fixed(first_row as f32 * side)));

        for row in first_row..end_row {
            let start = row * columns;
            let end = (start + columns).min(self.state.items().len());
            let cells = (start..end).fold(Row::new(), |cells, index| {
                cells.push(self.cell_view(index, side))
            });
            grid = grid.push(cells);
        }

        grid = grid.push(Space::new().height(Length::Fixed(
            total_rows.saturating_sub(end_row) as f32 * side,
        )));

        Scrollable::new(grid)
            .id(Id::new(SCROLLABLE_ID))
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport: Viewport| Message::ViewportChanged {
                bounds: viewport.bounds(),
                offset: viewport.absolute_offset(),
            })
            .into()
    }

    fn cell_view(&self, index: usize, side: f32) -> Element<'_, Message> {
        let inner = (side - sizing::GRID_GAP).max(0.0);

        let picture: Element<'_, Message> =
            match self.state.cell_for_item(index).and_then(|cell| cell.image()) {
                Some(handle) => image(handle.clone())
                    .width(Length::Fixed(inner))
                    .height(Length::Fixed(inner))
                    .content_fit(ContentFit::Cover)
                    .into(),
                None => Container::new(Space::new())
                    .width(Length::Fixed(inner))
                    .height(Length::Fixed(inner))
                    .style(styles::container::placeholder)
                    .into(),
            };

        let is_video = self
            .state
            .items()
            .get(index)
            .is_some_and(GalleryItem::is_video);

        let content: Element<'_, Message> = if is_video {
            let badge = Container::new(Text::new("▶").size(typography::CAPTION))
                .width(Length::Fixed(sizing::VIDEO_BADGE))
                .height(Length::Fixed(sizing::VIDEO_BADGE))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::video_badge);
            Stack::new()
                .push(picture)
                .push(
                    container(badge)
                        .width(Length::Fixed(inner))
                        .height(Length::Fixed(inner))
                        .align_x(alignment::Horizontal::Center)
                        .align_y(alignment::Vertical::Center),
                )
                .into()
        } else {
            picture
        };

        button(content)
            .padding(sizing::GRID_GAP / 2.0)
            .width(Length::Fixed(side))
            .height(Length::Fixed(side))
            .style(styles::button::cell)
            .on_press(Message::CellPressed(index))
            .into()
    }
}

fn empty_view(i18n: &I18n, loading: bool) -> Element<'_, Message> {
    let content = if loading {
        Column::new().push(
            Text::new(i18n.tr("gallery-loading"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
    } else {
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(i18n.tr("gallery-empty"))
                    .size(typography::TITLE_SM)
                    .color(palette::GRAY_400),
            )
            .push(
                button(Text::new(i18n.tr("gallery-reload")))
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::primary)
                    .on_press(Message::Reload),
            )
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
