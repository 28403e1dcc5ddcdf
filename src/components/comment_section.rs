//! Mount point and lifecycle for the Waline comment widget.

use leptos::prelude::*;

use crate::comments::CommentSettings;

/// Renders the widget mount and bootstraps Waline into it once mounted.
///
/// The instance handle lives in this component and is destroyed on cleanup.
#[component]
pub fn CommentSection(settings: CommentSettings) -> impl IntoView {
    let mount_id = settings.mount_id().to_owned();

    #[cfg(feature = "csr")]
    {
        use crate::net::waline::WalineInstance;

        let instance = StoredValue::new_local(None::<WalineInstance>);

        Effect::new(move || {
            let settings = settings.clone();
            leptos::task::spawn_local(async move {
                let Some(handle) = crate::comments::bootstrap(settings).await else {
                    return;
                };
                // Component already gone: tear the widget down immediately.
                if let Some(Some(orphan)) = instance.try_set_value(Some(handle)) {
                    orphan.destroy();
                }
            });
        });

        on_cleanup(move || {
            instance.try_update_value(|slot| {
                if let Some(handle) = slot.take() {
                    handle.destroy();
                }
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = settings;
    }

    view! {
        <section class="comments">
            <h3 class="comments__title">"评论"</h3>
            <div id=mount_id></div>
        </section>
    }
}
