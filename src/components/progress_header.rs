//! Progress Header Component

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ProgressHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let progress = Memo::new(move |_| ctx.tracker.with(|t| t.progress()));

    view! {
        <div class="progress-header">
            <div class="progress-text">
                <span class="progress-count">{move || progress.get().label()}</span>
                " gilded"
                <span class="progress-percent">{move || format!("{}%", progress.get().percent())}</span>
            </div>
            <div class="progress-track">
                <div
                    class="progress-fill"
                    style:width=move || format!("{}%", progress.get().percent())
                ></div>
            </div>
        </div>
    }
}
