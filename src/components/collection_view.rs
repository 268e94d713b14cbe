//! Collection View Component
//!
//! Every catalog item with its completion state, narrowed by the category
//! filter and the search box.

use gild_board_core::{CategoryFilter, Item};
use leptos::prelude::*;

use super::joker_card::{CardSurface, JokerCard};
use crate::context::AppContext;
use crate::store::{store_view_filter, UiStateStoreFields};

#[component]
pub fn CollectionView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let ui = ctx.ui;

    let entries = Memo::new(move |_| {
        let view = store_view_filter(&ui);
        ctx.tracker.with(|t| {
            t.collection(&view)
                .into_iter()
                .map(|entry| (entry.item.clone(), entry.completed))
                .collect::<Vec<(Item, bool)>>()
        })
    });

    view! {
        <section class="collection">
            <h2>"Collection"</h2>
            <div class="filter-bar">
                <div class="filter-buttons">
                    {CategoryFilter::CHOICES
                        .into_iter()
                        .map(move |choice| view! {
                            <button
                                class="filter-btn"
                                class:active=move || ui.category_filter().get() == choice
                                on:click=move |_| ui.category_filter().set(choice)
                            >
                                {choice.label()}
                            </button>
                        })
                        .collect_view()}
                </div>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search by name or effect..."
                    prop:value=move || ui.search_text().get()
                    on:input=move |ev| ui.search_text().set(event_target_value(&ev))
                />
            </div>
            <p class="collection-count">{move || format!("{} shown", entries.with(|e| e.len()))}</p>
            <div class="card-grid">
                <For
                    each=move || entries.get()
                    key=|(item, completed)| (item.id.clone(), *completed)
                    children=move |(item, completed)| view! {
                        <JokerCard item=item surface=CardSurface::Collection completed=completed />
                    }
                />
            </div>
        </section>
    }
}
