// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Gallery,
    Viewer,
    Password,
}

impl Screen {
    /// i18n key of the screen title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Screen::Gallery | Screen::Viewer => "gallery-title",
            Screen::Password => "password-title",
        }
    }
}
