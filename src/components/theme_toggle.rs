//! Header button that flips between the light and dark themes.

use leptos::prelude::*;

use crate::util::theme::{BrowserTheme, ThemeController};

/// Theme toggle with an inline SVG icon.
///
/// The theme is resolved and applied to `<html>` when the component is
/// created, so the page never renders with a stale attribute.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let mut controller = ThemeController::new(BrowserTheme);
    let theme = RwSignal::new(controller.initialize());

    let on_toggle = move |_| {
        theme.set(controller.toggle());
    };

    view! {
        <button
            id="theme-toggle"
            class="btn theme-toggle"
            on:click=on_toggle
            title="Toggle theme"
            aria-label="Toggle theme"
        >
            <svg
                id="theme-icon"
                class="theme-toggle__icon"
                viewBox="0 0 24 24"
                width="20"
                height="20"
                inner_html=move || theme.get().icon_path()
            ></svg>
        </button>
    }
}
