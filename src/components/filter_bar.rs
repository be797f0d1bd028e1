//! Filter Bar Component
//!
//! Search, price-bracket filter, price-sort toggle and the save-as-PDF
//! action. Each control replaces the whole derivation, so the last control
//! touched wins.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::query::{DroneQuery, PriceBand, SortDirection};
use crate::store::{use_app_store, AppStateStoreFields};

/// Price bracket options (control value, label)
const PRICE_BANDS: &[(&str, &str)] = &[
    ("all", "Kaikki hintaluokat"),
    ("budget", "Alle 500 €"),
    ("mid", "500-1500 €"),
    ("pro", "Yli 1500 €"),
];

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let on_search = move |ev| {
        ctx.set_query(DroneQuery::Search(event_target_value(&ev)));
    };

    let on_band = move |ev| match PriceBand::from_value(&event_target_value(&ev)) {
        Some(band) => ctx.set_query(DroneQuery::Band(band)),
        None => ctx.set_query(DroneQuery::All),
    };

    let on_sort = move |_| {
        let direction = if store.sort_ascending().get_untracked() {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        ctx.set_query(DroneQuery::SortByPrice(direction));
        store.sort_ascending().update(|asc| *asc = !*asc);
    };

    // The arrow shows the direction the next click applies
    let sort_label = move || {
        let direction = if store.sort_ascending().get() {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        format!("Järjestä hinnan mukaan {}", direction.arrow())
    };

    let on_print = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    };

    view! {
        <div class="filter-bar">
            <input
                type="text"
                class="search-input"
                placeholder="Hae mallin nimellä..."
                on:input=on_search
            />
            <select class="price-filter" on:change=on_band>
                {PRICE_BANDS.iter().map(|(value, label)| {
                    view! { <option value=*value>{*label}</option> }
                }).collect_view()}
            </select>
            <button class="sort-btn" on:click=on_sort>{sort_label}</button>
            <button class="save-pdf-btn" on:click=on_print>"Tallenna PDF"</button>
        </div>
    }
}
