//! Toolbar Component
//!
//! Bulk actions, export/import, and the snapshot controls.

use gild_board_core::SnapshotStyle;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use super::confirm_button::ConfirmButton;
use super::snapshot_panel::take_snapshot;
use crate::commands;
use crate::context::AppContext;
use crate::store::{NoticeKind, UiStateStoreFields};

#[component]
pub fn Toolbar(snapshot_canvas: NodeRef<html::Canvas>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let ui = ctx.ui;

    let on_import = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        // Reset so picking the same file again fires another change event
        input.set_value("");
        let Some(file) = file else {
            return;
        };
        log::info!("import: reading {}", file.name());
        spawn_local(async move {
            match commands::read_file_text(file).await {
                Ok(text) => ctx.import_progress(&text),
                Err(e) => {
                    log::error!("import read failed: {}", e);
                    ctx.notify(NoticeKind::Error, format!("Failed to read the file: {}", e));
                }
            }
        });
    };

    let style_button = move |style: SnapshotStyle, label: &'static str| {
        view! {
            <button
                class="style-btn"
                class:active=move || ui.snapshot_style().get() == style
                on:click=move |_| ui.snapshot_style().set(style)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="toolbar">
            <button class="toolbar-btn" on:click=move |_| ctx.reset_board()>
                "Reset board"
            </button>
            <ConfirmButton
                label="Gild all"
                prompt="Mark every Joker as gilded?"
                button_class="toolbar-btn"
                on_confirm=Callback::new(move |_| ctx.gild_all())
            />
            <button class="toolbar-btn" on:click=move |_| ctx.export_progress()>
                "Export"
            </button>
            <label class="toolbar-btn file-btn">
                "Import"
                <input
                    type="file"
                    accept=".json,application/json"
                    class="hidden-file-input"
                    on:change=on_import
                />
            </label>
            <span class="toolbar-divider"></span>
            <span class="style-toggle">
                {style_button(SnapshotStyle::Thumbnails, "Cards")}
                {style_button(SnapshotStyle::Text, "Text")}
            </span>
            <button
                class="toolbar-btn snapshot-btn"
                prop:disabled=move || ui.snapshot_busy().get()
                on:click=move |_| take_snapshot(ctx, snapshot_canvas)
            >
                {move || if ui.snapshot_busy().get() { "Generating..." } else { "Snapshot" }}
            </button>
            <button class="toolbar-btn log-btn" title="Download recent log lines" on:click=move |_| ctx.export_log()>
                "Log"
            </button>
        </div>
    }
}
