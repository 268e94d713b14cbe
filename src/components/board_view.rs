//! Board View Component
//!
//! Outstanding items grouped by category. Empty groups are hidden; when
//! nothing is outstanding a completion message replaces the board.

use gild_board_core::{Category, Item};
use leptos::prelude::*;

use super::joker_card::{CardSurface, JokerCard};
use crate::context::AppContext;

#[component]
pub fn BoardView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let outstanding = Memo::new(move |_| ctx.tracker.with(|t| t.board().outstanding_total()));

    view! {
        <section class="board">
            <h2>{move || format!("Still to gild ({})", outstanding.get())}</h2>
            <Show when=move || outstanding.get() == 0>
                <div class="board-complete">"All Jokers gilded! 🎉"</div>
            </Show>
            {Category::ALL
                .into_iter()
                .map(|category| view! { <BoardGroupView category=category /> })
                .collect_view()}
        </section>
    }
}

#[component]
fn BoardGroupView(category: Category) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let items = Memo::new(move |_| {
        ctx.tracker.with(|t| {
            t.board()
                .group(category)
                .map(|group| group.items.iter().map(|item| (*item).clone()).collect::<Vec<Item>>())
                .unwrap_or_default()
        })
    });

    view! {
        <div
            class=format!("board-group rarity-{}", category.css_token())
            class:hidden=move || items.with(|items| items.is_empty())
        >
            <h3 class="board-group-header">
                {move || format!("{} ({})", category, items.with(|items| items.len()))}
            </h3>
            <div class="card-grid">
                <For
                    each=move || items.get()
                    key=|item| item.id.clone()
                    children=move |item| view! {
                        <JokerCard item=item surface=CardSurface::Board completed=false />
                    }
                />
            </div>
        </div>
    }
}
