//! Footer badge showing the server build from `/api/version`.

use leptos::prelude::*;

#[component]
pub fn VersionBadge() -> impl IntoView {
    let label = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_version().await {
                Ok(info) => {
                    let _ = label.try_set(info.label());
                }
                Err(err) => log::debug!("version unavailable: {err}"),
            }
        });
    });

    view! {
        <Show when=move || !label.get().is_empty()>
            <span class="version-badge">{move || label.get()}</span>
        </Show>
    }
}
