//! "Open URL" form support.
//!
//! The typed value is appended to the current page's directory (everything
//! up to and including the last `/` of `location.href`) and opened in a new
//! browsing context. Blank input never navigates.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

pub const SUBMIT_KEY: &str = "Enter";

/// Build the absolute target for `input` relative to `href`.
///
/// Returns `None` when the trimmed input is empty.
pub fn resolve_target(href: &str, input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let base = href.rfind('/').map_or("", |idx| &href[..=idx]);
    Some(format!("{base}{input}"))
}

pub fn is_submit_key(key: &str) -> bool {
    key == SUBMIT_KEY
}

/// Current `location.href`, or an empty string outside the browser.
pub fn current_href() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Open `url` in a new tab/window.
pub fn open_in_new_context(url: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.open_with_url_and_target(url, "_blank") {
            log::warn!("failed to open {url}: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}

/// Resolve `input` against the current page and open it. Returns the URL
/// that was opened, if any.
pub fn submit(input: &str) -> Option<String> {
    let target = resolve_target(&current_href(), input)?;
    log::debug!("opening {target}");
    open_in_new_context(&target);
    Some(target)
}
