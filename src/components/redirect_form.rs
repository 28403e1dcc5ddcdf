//! URL entry form that opens the proxied address in a new tab.

use leptos::prelude::*;

use crate::util::redirect;

#[component]
pub fn RedirectForm() -> impl IntoView {
    let url = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        redirect::submit(&url.get_untracked());
    };

    // Enter is handled here so the browser's implicit submission never
    // navigates the current tab.
    let on_keypress = move |ev: leptos::ev::KeyboardEvent| {
        if redirect::is_submit_key(&ev.key()) {
            ev.prevent_default();
            redirect::submit(&url.get_untracked());
        }
    };

    view! {
        <form class="redirect-form" on:submit=on_submit>
            <input
                id="url-input"
                class="redirect-form__input"
                type="text"
                autocomplete="off"
                placeholder="https://github.com/user/repo/releases/download/..."
                prop:value=move || url.get()
                on:input=move |ev| url.set(event_target_value(&ev))
                on:keypress=on_keypress
            />
            <button class="btn redirect-form__submit" type="submit">
                "下载"
            </button>
        </form>
    }
}
