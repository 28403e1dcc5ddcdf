//! Page-level configuration.
//!
//! The host page may embed
//! `<script id="fastcode-config" type="application/json">{...}</script>`;
//! every field is optional and missing ones take the defaults below. A
//! missing element or unparseable JSON falls back to [`SiteConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::comments::{CommentSettings, DEFAULT_STATIC_PATH, LoginMode};

pub const CONFIG_ELEMENT_ID: &str = "fastcode-config";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentPreset {
    #[default]
    Dynamic,
    Static,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    pub comment_preset: CommentPreset,
    pub static_path: String,
    pub server_url: Option<String>,
    pub login: Option<LoginMode>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "FastCode".to_owned(),
            comment_preset: CommentPreset::Dynamic,
            static_path: DEFAULT_STATIC_PATH.to_owned(),
            server_url: None,
            login: None,
        }
    }
}

impl SiteConfig {
    /// Parse an embedded config document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed input.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Parse `text`, logging and falling back to defaults on error.
    pub fn from_json_or_default(text: &str) -> Self {
        Self::from_json(text).unwrap_or_else(|err| {
            log::warn!("ignoring invalid #{CONFIG_ELEMENT_ID}: {err}");
            Self::default()
        })
    }

    /// Read the config embedded in the current document.
    pub fn load() -> Self {
        #[cfg(feature = "csr")]
        {
            let text = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match text {
                Some(text) if !text.trim().is_empty() => Self::from_json_or_default(&text),
                _ => {
                    log::debug!("no #{CONFIG_ELEMENT_ID} element, using defaults");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }

    /// Comment settings for the selected preset with overrides applied.
    pub fn comment_settings(&self) -> CommentSettings {
        let mut settings = match self.comment_preset {
            CommentPreset::Dynamic => CommentSettings::dynamic_path(),
            CommentPreset::Static => CommentSettings::static_path(self.static_path.clone()),
        };
        if let Some(url) = &self.server_url {
            settings.server_url.clone_from(url);
        }
        if self.login.is_some() {
            settings.login = self.login;
        }
        settings
    }
}
