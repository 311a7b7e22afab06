// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, the
//! full-screen viewers and the password form.
//!
//! The `App` struct wires together the screens, localization and the
//! adapters behind the application ports, and translates component effects
//! into navigation, background tasks and toasts.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::AuthService;
use crate::domain::message::ChatId;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{
    FfmpegThumbnailExtractor, HttpAuthService, MediaDirectory, SqliteMessageStore,
    UnavailableStore, UnconfiguredAuthService,
};
use crate::media::image::ImageProcessor;
use crate::ui::design_tokens::sizing;
use crate::ui::gallery::{self, Gallery, GalleryServices, GridSettings};
use crate::ui::media_viewer::Viewer;
use crate::ui::notifications::{self, Notification};
use crate::ui::password::PasswordForm;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Chat shown when `--chat` is not given.
pub const DEFAULT_CHAT_ID: &str = "default";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    gallery: Gallery,
    viewer: Option<Viewer>,
    password: Option<PasswordForm>,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    services: GalleryServices,
    auth: Arc<dyn AuthService>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("items", &self.gallery.state().items().len())
            .field("viewer_open", &self.viewer.is_some())
            .field("password_open", &self.password.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Space left to the grid in a window of `window` size.
fn grid_size(window: Size) -> Size {
    Size::new(window.width, (window.height - sizing::NAVBAR_HEIGHT).max(0.0))
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Adapters resolved from flags and config, plus any startup warnings.
struct Wiring {
    services: GalleryServices,
    auth: Arc<dyn AuthService>,
    warnings: Vec<Notification>,
}

fn wire(flags: &Flags, config: &Config) -> Wiring {
    let mut warnings = Vec::new();
    let data_dir = paths::get_app_data_dir();

    let database = flags
        .database
        .clone()
        .or_else(|| config.storage.database_path(data_dir.as_deref()));
    let store: Arc<dyn crate::application::port::MessageStore> = match database {
        Some(path) => match SqliteMessageStore::open(&path) {
            Ok(store) => Arc::new(store),
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "cannot open message store");
                warnings.push(Notification::error(err.i18n_key()));
                Arc::new(UnavailableStore::new(err.to_string()))
            }
        },
        None => {
            tracing::error!("no data directory for the message store");
            Arc::new(UnavailableStore::new("no data directory"))
        }
    };

    let media_root = flags
        .media_dir
        .clone()
        .or_else(|| config.storage.media_dir(data_dir.as_deref()))
        .unwrap_or_else(|| {
            tracing::warn!("no media directory, using the working directory");
            PathBuf::from(".")
        });
    tracing::info!(root = %media_root.display(), "media directory");

    let auth: Arc<dyn AuthService> = match config.auth.base_url() {
        Some(url) => match HttpAuthService::new(url, paths::auth_token(), config.auth.timeout()) {
            Ok(service) => Arc::new(service),
            Err(err) => {
                tracing::error!(error = %err, "cannot build auth client");
                Arc::new(UnconfiguredAuthService)
            }
        },
        None => {
            tracing::info!("no auth base_url configured, password changes are disabled");
            Arc::new(UnconfiguredAuthService)
        }
    };

    let processor = Arc::new(ImageProcessor);
    Wiring {
        services: GalleryServices {
            store,
            resolver: Arc::new(MediaDirectory::new(media_root)),
            extractor: Arc::new(FfmpegThumbnailExtractor),
            decoder: processor.clone(),
            scaler: processor,
        },
        auth,
        warnings,
    }
}

impl App {
    /// Builds the app around explicit adapters. Used by `new` and by tests.
    pub fn with_services(
        i18n: I18n,
        config: &Config,
        chat: ChatId,
        services: GalleryServices,
        auth: Arc<dyn AuthService>,
    ) -> Self {
        let settings = GridSettings {
            columns: config.gallery.columns() as usize,
            overscan_rows: config.gallery.overscan_rows() as usize,
            thumbnail_size: config.gallery.thumbnail_size(),
        };
        Self {
            i18n,
            screen: Screen::Gallery,
            gallery: Gallery::new(chat, settings, services.clone()),
            viewer: None,
            password: None,
            notifications: notifications::Manager::new(),
            theme_mode: config.general.theme_mode,
            services,
            auth,
        }
    }

    /// Initializes application state from `Flags` and starts the first
    /// gallery load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let Wiring {
            services,
            auth,
            warnings,
        } = wire(&flags, &config);

        let chat = ChatId::new(flags.chat.clone().unwrap_or_else(|| DEFAULT_CHAT_ID.into()));
        tracing::info!(chat = %chat, locale = %i18n.current_locale(), "starting");

        let mut app = Self::with_services(i18n, &config, chat, services, auth);
        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }
        for warning in warnings {
            app.notifications.push(warning);
        }

        let initial = grid_size(window_settings().size);
        let _ = app.gallery.handle_message(gallery::Message::Resized(initial));
        let mut tasks = vec![app.gallery.load().map(Message::Gallery)];
        if flags.open_password {
            tasks.push(app.open_password());
        }
        (app, Task::batch(tasks))
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn password(&self) -> Option<&PasswordForm> {
        self.password.as_ref()
    }

    pub fn viewer(&self) -> Option<&Viewer> {
        self.viewer.as_ref()
    }

    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    fn title(&self) -> String {
        format!("{} - {}", self.i18n.tr(self.screen.title_key()), paths::APP_NAME)
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
            subscription::create_viewer_subscription(self.viewer.as_ref()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            gallery: &self.gallery,
            viewer: self.viewer.as_ref(),
            password: self.password.as_ref(),
            notifications: &self.notifications,
        })
    }
}
