//! Light/dark theme initialization and toggle.
//!
//! Reads the preference from `localStorage` (key `theme`), falling back to
//! `(prefers-color-scheme: dark)` and then to light. The chosen value is
//! written to the `data-theme` attribute on `<html>` and persisted back, so
//! the attribute and the stored value always agree after any operation.
//!
//! TRADE-OFFS
//! ==========
//! Storage and attribute writes are best-effort. Without a browser (non-`csr`
//! builds) [`BrowserTheme`] reads nothing and writes nowhere.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

const DARK_ICON_PATH: &str = r#"<path d="M12 3a9 9 0 0 0-9 9 9.75 9.75 0 0 0 6.74 9A9.75 9.75 0 0 0 12 21h.75a.75.75 0 0 0 .75-.75v-1.5a.75.75 0 0 0-.75-.75H12a8.25 8.25 0 0 1-8.25-8.25A8.25 8.25 0 0 1 12 4.5h.75a.75.75 0 0 0 .75-.75V2.25a.75.75 0 0 0-.75-.75H12Zm-9 9a9 9 0 0 0 4.5 7.74V18a.75.75 0 0 0-.75-.75H12A9 9 0 0 0 3 12Zm9 0a9 9 0 0 0-4.5-7.74V6a.75.75 0 0 0 .75-.75H12a9 9 0 0 0 9 9Z" fill="currentColor"></path>"#;
const LIGHT_ICON_PATH: &str = r#"<path d="M12 2.5a9.5 9.5 0 1 0 9.5 9.5A9.51 9.51 0 0 0 12 2.5zm0 17a7.5 7.5 0 1 1 7.5-7.5 7.5 7.5 0 0 1-7.5 7.5z" fill="currentColor"></path>"#;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored or attribute value. Anything other than the two
    /// canonical strings is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Inner SVG markup for the toggle icon.
    pub fn icon_path(self) -> &'static str {
        match self {
            Self::Light => LIGHT_ICON_PATH,
            Self::Dark => DARK_ICON_PATH,
        }
    }
}

/// Initial theme by precedence: stored value, OS preference, light.
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Theme {
    if let Some(theme) = stored.and_then(Theme::parse) {
        return theme;
    }
    if prefers_dark { Theme::Dark } else { Theme::Light }
}

/// Theme that follows the current `data-theme` value.
///
/// Only an explicit `light` flips to dark; a missing or unknown attribute
/// resets to light.
pub fn next_from_attribute(current: Option<&str>) -> Theme {
    if current == Some(Theme::Light.as_str()) {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Environment the controller reads from and writes to.
pub trait ThemeHost {
    fn stored(&self) -> Option<String>;
    fn store(&mut self, theme: Theme);
    fn prefers_dark(&self) -> bool;
    fn attribute(&self) -> Option<String>;
    fn set_attribute(&mut self, theme: Theme);
}

/// Keeps the root attribute and the persisted preference in lockstep.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeController<H> {
    host: H,
}

impl<H: ThemeHost> ThemeController<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Resolve the starting theme and write it to the document and storage.
    pub fn initialize(&mut self) -> Theme {
        let stored = self.host.stored();
        let theme = resolve_initial(stored.as_deref(), self.host.prefers_dark());
        self.apply(theme);
        theme
    }

    /// Flip the theme currently on the document root.
    pub fn toggle(&mut self) -> Theme {
        let current = self.host.attribute();
        let next = next_from_attribute(current.as_deref());
        self.apply(next);
        next
    }

    fn apply(&mut self, theme: Theme) {
        self.host.set_attribute(theme);
        self.host.store(theme);
    }
}

/// [`ThemeHost`] backed by `localStorage` and `document.documentElement`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTheme;

impl ThemeHost for BrowserTheme {
    fn stored(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn store(&mut self, theme: Theme) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(STORAGE_KEY, theme.as_str());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = theme;
        }
    }

    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }

    fn attribute(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
                .and_then(|el| el.get_attribute(THEME_ATTRIBUTE))
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set_attribute(&mut self, theme: Theme) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let _ = el.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = theme;
        }
    }
}
