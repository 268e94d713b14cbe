//! Joker Card Component
//!
//! One catalog item with art, name, and effect text. Used by both the board
//! and the collection; the click behavior differs per surface.

use gild_board_core::Item;
use leptos::prelude::*;

use crate::context::AppContext;

/// Shown when the card art is missing or blocked
pub const PLACEHOLDER_ART: &str = "data:image/svg+xml;charset=utf-8,%3Csvg xmlns='http://www.w3.org/2000/svg' width='71' height='95' viewBox='0 0 71 95'%3E%3Crect width='71' height='95' rx='6' fill='%231a2332'/%3E%3Ctext x='35.5' y='54' font-size='28' text-anchor='middle' fill='%238a99ab'%3E%3F%3C/text%3E%3C/svg%3E";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSurface {
    /// Click marks the item complete, removing it from the board
    Board,
    /// Click toggles completion
    Collection,
}

#[component]
pub fn JokerCard(
    item: Item,
    surface: CardSurface,
    /// Completion shown on the card; the board only renders outstanding items
    completed: bool,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = item.id.clone();
    let mut class = format!("joker-card rarity-{}", item.category.css_token());
    if completed {
        class.push_str(" gilded");
    }
    let title = match surface {
        CardSurface::Board => "Click to mark as gilded",
        CardSurface::Collection => "Click to toggle gilded",
    };

    view! {
        <div
            class=class
            title=title
            on:click=move |_| match surface {
                CardSurface::Board => ctx.mark_complete(id.clone()),
                CardSurface::Collection => ctx.toggle(id.clone()),
            }
        >
            <img
                class="joker-art"
                src=item.image_ref.clone()
                alt=item.name.clone()
                loading="lazy"
                on:error=move |ev| {
                    let img: web_sys::HtmlImageElement = event_target(&ev);
                    if img.src() != PLACEHOLDER_ART {
                        img.set_src(PLACEHOLDER_ART);
                    }
                }
            />
            <span class="joker-rarity">{item.category.as_str()}</span>
            <div class="joker-name">{item.name.clone()}</div>
            <div class="joker-effect">{item.description.clone()}</div>
        </div>
    }
}
