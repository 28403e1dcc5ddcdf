//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    comment_section::CommentSection, redirect_form::RedirectForm, theme_toggle::ThemeToggle,
    version_badge::VersionBadge,
};
use crate::config::SiteConfig;

/// Landing page: header with theme toggle, URL form, comments, footer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::load();
    let comments = config.comment_settings();
    let title = config.title;

    view! {
        <Title text=title.clone()/>

        <header class="site-header">
            <span class="site-header__title">{title}</span>
            <span class="site-header__spacer"></span>
            <ThemeToggle/>
        </header>

        <main class="site-main">
            <RedirectForm/>
            <CommentSection settings=comments/>
        </main>

        <footer class="site-footer">
            <VersionBadge/>
        </footer>
    }
}
