// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above the gallery and the password form.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// i18n key of the screen title.
    pub title_key: &'static str,
    /// Gallery actions are shown only on the gallery screen.
    pub show_gallery_actions: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenPassword,
    Reload,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    OpenPassword,
    Reload,
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenPassword => Event::OpenPassword,
        Message::Reload => Event::Reload,
    }
}

/// Render the navigation bar.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr(ctx.title_key)).size(typography::TITLE_MD);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([0.0, spacing::SM])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill));

    if ctx.show_gallery_actions {
        row = row
            .push(
                button(Text::new(ctx.i18n.tr("navbar-reload")).size(typography::BODY))
                    .style(styles::button::secondary)
                    .on_press(Message::Reload),
            )
            .push(
                button(Text::new(ctx.i18n.tr("navbar-change-password")).size(typography::BODY))
                    .style(styles::button::secondary)
                    .on_press(Message::OpenPassword),
            );
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_map_to_events() {
        assert_eq!(update(Message::OpenPassword), Event::OpenPassword);
        assert_eq!(update(Message::Reload), Event::Reload);
    }
}
