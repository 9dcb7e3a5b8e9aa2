//! Category Filter Component
//!
//! "All" plus one button per category; the active one is highlighted.

use leptos::prelude::*;
use portfolio_core::{Category, CategoryFilter};

#[component]
pub fn CategoryFilterBar<C>(selected: RwSignal<CategoryFilter<C>>) -> impl IntoView
where
    C: Category,
{
    view! {
        <div class="category-filter">
            {CategoryFilter::<C>::catalog().into_iter().map(|filter| {
                let is_selected = move || selected.get() == filter;
                view! {
                    <button
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| selected.set(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// `<option>`s for a category `<select>`
pub fn category_options<C: Category>() -> impl IntoView {
    C::ALL
        .iter()
        .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
        .collect_view()
}
