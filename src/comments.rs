//! Comment widget configuration and bootstrap.
//!
//! Two presets share one initializer: the dynamic preset namespaces the
//! thread with the server's deployment identifier (`/fastcode-<uuid>`), the
//! static preset uses a fixed path and makes no network call.
//!
//! The widget handle is returned to the caller rather than parked in a
//! global; [`crate::components::comment_section::CommentSection`] owns it.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::net::api;

pub const THREAD_PREFIX: &str = "/fastcode-";
pub const DEFAULT_STATIC_PATH: &str = "/fastcode";
pub const DEFAULT_MOUNT: &str = "#waline";
pub const DEFAULT_SERVER_URL: &str = "https://walinejs.comment.lithub.cc";
pub const DARK_SELECTOR: &str = r#"html[data-theme="dark"]"#;

const EMOJI_PACKS: [&str; 2] = [
    "https://cdn.jsdelivr.net/gh/walinejs/emojis/weibo",
    "https://cdn.jsdelivr.net/gh/walinejs/emojis/bilibili",
];

/// Waline `login` option. Omitted from the config to get the library default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginMode {
    Enable,
    Disable,
    Force,
}

/// Where the comment thread path comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThreadSource {
    /// `/fastcode-<uuid>` with the uuid from `/api/uuid`.
    Remote,
    Fixed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentSettings {
    pub mount: String,
    pub server_url: String,
    pub lang: String,
    pub login: Option<LoginMode>,
    pub dark_selector: String,
    pub page_size: u32,
    pub placeholder: String,
    pub pageview: bool,
    pub emoji: Vec<String>,
    pub thread: ThreadSource,
}

impl CommentSettings {
    fn shared(login: Option<LoginMode>, thread: ThreadSource) -> Self {
        Self {
            mount: DEFAULT_MOUNT.to_owned(),
            server_url: DEFAULT_SERVER_URL.to_owned(),
            lang: "zh-CN".to_owned(),
            login,
            dark_selector: DARK_SELECTOR.to_owned(),
            page_size: 10,
            placeholder: "分享你的使用体验...".to_owned(),
            pageview: true,
            emoji: EMOJI_PACKS.iter().map(|&url| url.to_owned()).collect(),
            thread,
        }
    }

    /// Per-deployment thread, login required.
    pub fn dynamic_path() -> Self {
        Self::shared(Some(LoginMode::Force), ThreadSource::Remote)
    }

    /// Fixed thread, library-default login.
    pub fn static_path(path: impl Into<String>) -> Self {
        Self::shared(None, ThreadSource::Fixed(path.into()))
    }

    /// Element id for the mount selector (`#waline` -> `waline`).
    pub fn mount_id(&self) -> &str {
        self.mount.strip_prefix('#').unwrap_or(&self.mount)
    }
}

impl Default for CommentSettings {
    fn default() -> Self {
        Self::dynamic_path()
    }
}

/// Options object handed to `Waline.init`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    pub el: String,
    #[serde(rename = "serverURL")]
    pub server_url: String,
    pub lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<LoginMode>,
    pub dark: String,
    pub path: String,
    pub page_size: u32,
    pub placeholder: String,
    pub pageview: bool,
    pub emoji: Vec<String>,
}

pub fn thread_path(identifier: &str) -> String {
    format!("{THREAD_PREFIX}{identifier}")
}

pub fn widget_config(settings: &CommentSettings, path: String) -> WidgetConfig {
    WidgetConfig {
        el: settings.mount.clone(),
        server_url: settings.server_url.clone(),
        lang: settings.lang.clone(),
        login: settings.login,
        dark: settings.dark_selector.clone(),
        path,
        page_size: settings.page_size,
        placeholder: settings.placeholder.clone(),
        pageview: settings.pageview,
        emoji: settings.emoji.clone(),
    }
}

/// Resolve the thread path, calling `fetch` only for [`ThreadSource::Remote`].
pub async fn resolve_path_with<F, Fut>(settings: &CommentSettings, fetch: F) -> String
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, ApiError>>,
{
    match &settings.thread {
        ThreadSource::Fixed(path) => path.clone(),
        ThreadSource::Remote => thread_path(&api::identifier_or_unknown(fetch().await)),
    }
}

pub async fn resolve_path(settings: &CommentSettings) -> String {
    resolve_path_with(settings, api::fetch_uuid).await
}

/// Build the config for `settings` and initialize the widget once.
#[cfg(feature = "csr")]
pub async fn bootstrap(settings: CommentSettings) -> Option<crate::net::waline::WalineInstance> {
    let path = resolve_path(&settings).await;
    let config = widget_config(&settings, path);
    log::debug!("initializing comments at {} for {}", config.el, config.path);
    crate::net::waline::init(&config)
}
