// SPDX-License-Identifier: MPL-2.0
//! Application root state hosting a server-rendered page.
//!
//! The `App` owns the page tree, arms the toast manager once from its boot
//! hook (the page content is available at that point), ticks the manager
//! while toasts are pending, and routes delete requests through the
//! confirmation prompt.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, DEFAULT_TOAST_SELECTOR};
use crate::i18n::fluent::I18n;
use crate::page::{markup, Document, Selector};
use crate::ui::confirm::{self, NativePrompt, Prompt};
use crate::ui::notifications::{DismissTiming, Manager};
use crate::ui::page_view;
use iced::{window, Element, Subscription, Task};
use std::fmt;
use std::path::Path;
use std::time::Instant;

/// Page shown when no markup file is given on the command line.
const DEMO_PAGE: &str = include_str!("../../assets/pages/demo.xhtml");

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    document: Document,
    /// Display name of the hosted page, used in the window title.
    page_name: Option<String>,
    notifications: Manager,
    prompt: Box<dyn Prompt>,
    /// Instant of the latest tick; transitions are sampled at this time.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page_name", &self.page_name)
            .field("pending_toasts", &self.notifications.pending_count())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot function; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration, localization and the page, then arms the toast
    /// manager. This is the one-time initialization hook of the page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("using default settings, config could not be loaded: {warning}");
        }
        let i18n = I18n::new(flags.lang, &config);

        let (document, page_name) = match flags.page_path.as_deref() {
            Some(path) => (load_page(path, &i18n), file_name(path)),
            None => (parse_page(DEMO_PAGE, &i18n), None),
        };

        let prompt = Box::new(NativePrompt::localized(&i18n));
        let mut app = Self::with_page(config, i18n, document, prompt);
        app.page_name = page_name;
        (app, Task::none())
    }

    /// Builds the application around an already loaded page and arms the
    /// toast manager at the current instant.
    pub fn with_page(config: Config, i18n: I18n, document: Document, prompt: Box<dyn Prompt>) -> Self {
        let mut notifications = Manager::with_timing(DismissTiming::from_config(&config.toasts));
        let now = Instant::now();
        if let Some(selector) = toast_selector(&config) {
            notifications.arm(&document, &selector, now);
        }

        Self {
            i18n,
            document,
            page_name: None,
            notifications,
            prompt,
            now,
        }
    }

    fn title(&self) -> String {
        match &self.page_name {
            Some(name) => self
                .i18n
                .tr_with_args("app-title-with-page", &[("page", name.as_str())]),
            None => self.i18n.tr("app-title"),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.notifications.has_pending(),
            self.document.is_animating(self.now),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                self.now = now;
                self.notifications.tick(&mut self.document, now);
            }
            Message::Page(page_view::Message::DeleteRequested(node)) => {
                self.handle_delete_request(node);
            }
        }
        Task::none()
    }

    fn handle_delete_request(&mut self, node: crate::page::NodeId) {
        if !self.document.is_attached(node) {
            return;
        }
        let message = page_view::confirm_message(&self.document, node).map(str::to_string);
        let accepted = confirm::confirm_delete(self.prompt.as_mut(), &self.i18n, message.as_deref());
        if !accepted {
            return;
        }

        if let Some(target) = page_view::deletion_target(&self.document, node) {
            self.document.remove(target);
            log::info!("removed page element after confirmed deletion");
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            document: &self.document,
            notifications: &self.notifications,
            now: self.now,
        })
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }
}

/// Parses the configured toast pattern, falling back to the default one.
fn toast_selector(config: &Config) -> Option<Selector> {
    let source = config
        .toasts
        .selector
        .as_deref()
        .unwrap_or(DEFAULT_TOAST_SELECTOR);
    Selector::parse(source)
        .or_else(|err| {
            log::warn!("{err}; using `{DEFAULT_TOAST_SELECTOR}`");
            Selector::parse(DEFAULT_TOAST_SELECTOR)
        })
        .map_err(|err| log::error!("toast dismissal disabled: {err}"))
        .ok()
}

fn load_page(path: &Path, i18n: &I18n) -> Document {
    match markup::load_from_path(path) {
        Ok(document) => document,
        Err(err) => {
            log::error!("failed to load {}: {err}", path.display());
            error_page(i18n, &err.to_string())
        }
    }
}

fn parse_page(source: &str, i18n: &I18n) -> Document {
    markup::parse(source).unwrap_or_else(|err| {
        log::error!("failed to parse page: {err}");
        error_page(i18n, &err.to_string())
    })
}

/// A page made of a single paragraph explaining why loading failed.
fn error_page(i18n: &I18n, reason: &str) -> Document {
    let mut document = Document::new();
    let root = document.root();
    let paragraph = document.append_element(root, "p", &["error"]);
    document.append_text(
        paragraph,
        &i18n.tr_with_args("page-load-error", &[("reason", reason)]),
    );
    document
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
