//! Notice Banner Component

use leptos::prelude::*;

use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = use_ui_store();

    view! {
        {move || {
            ui.notice().get().map(|notice| view! {
                <div class=notice.kind.css_class() role="status">
                    <span class="notice-text">{notice.text}</span>
                    <button class="notice-close" on:click=move |_| ui.notice().set(None)>"×"</button>
                </div>
            })
        }}
    }
}
