// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery and the password form sit below the navbar; viewers take the
//! whole window. Toasts are stacked on top of every screen.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::gallery::Gallery;
use crate::ui::media_viewer::Viewer;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::password::PasswordForm;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub gallery: &'a Gallery,
    pub viewer: Option<&'a Viewer>,
    pub password: Option<&'a PasswordForm>,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match (ctx.screen, ctx.viewer, ctx.password) {
        (Screen::Viewer, Some(viewer), _) => viewer.view(ctx.i18n).map(Message::Viewer),
        (Screen::Password, _, Some(form)) => with_navbar(
            ctx.i18n,
            Screen::Password,
            form.view(ctx.i18n).map(Message::Password),
        ),
        _ => with_navbar(
            ctx.i18n,
            Screen::Gallery,
            ctx.gallery.view(ctx.i18n).map(Message::Gallery),
        ),
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}

fn with_navbar<'a>(
    i18n: &'a I18n,
    screen: Screen,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n,
        title_key: screen.title_key(),
        show_gallery_actions: screen == Screen::Gallery,
    })
    .map(Message::Navbar);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}
