//! Application Context
//!
//! Shared state provided via Leptos Context API: the current page, the
//! transient status line, and the site configuration.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_core::{DomainResult, SiteConfig};

/// How long a status message stays visible
const STATUS_MILLIS: u32 = 3_000;

/// Top-level pages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Gallery,
    Services,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [Page::Home, Page::About, Page::Gallery, Page::Services, Page::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Gallery => "Gallery",
            Page::Services => "Services",
            Page::Contact => "Contact",
        }
    }
}

/// One-line feedback after an edit
#[derive(Clone, Debug, PartialEq)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
    seq: u32,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Status line - read
    pub status: ReadSignal<Option<Status>>,
    /// Status line - write
    set_status: WriteSignal<Option<Status>>,
    config: StoredValue<SiteConfig>,
}

impl AppContext {
    pub fn new(config: SiteConfig) -> Self {
        let (page, set_page) = signal(Page::Home);
        let (status, set_status) = signal(None::<Status>);
        Self {
            page,
            set_page,
            status,
            set_status,
            config: StoredValue::new(config),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    /// Read one value out of the config without cloning all of it
    pub fn with_config<U>(&self, f: impl FnOnce(&SiteConfig) -> U) -> U {
        self.config.with_value(f)
    }

    pub fn notify(&self, text: impl Into<String>) {
        self.show(text.into(), false);
    }

    pub fn notify_error(&self, text: impl Into<String>) {
        self.show(text.into(), true);
    }

    /// Surface the outcome of a collection operation. Returns the value on success.
    pub fn report<T>(&self, result: DomainResult<T>, success: &str) -> Option<T> {
        match result {
            Ok(value) => {
                self.notify(success);
                Some(value)
            }
            Err(e) => {
                log::warn!("{}", e);
                self.notify_error(e.to_string());
                None
            }
        }
    }

    fn show(&self, text: String, is_error: bool) {
        let seq = self.status.get_untracked().map_or(0, |s| s.seq.wrapping_add(1));
        self.set_status.set(Some(Status { text, is_error, seq }));

        let status = self.status;
        let set_status = self.set_status;
        spawn_local(async move {
            TimeoutFuture::new(STATUS_MILLIS).await;
            // A newer message owns the line now
            if status.get_untracked().is_some_and(|s| s.seq == seq) {
                set_status.set(None);
            }
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
