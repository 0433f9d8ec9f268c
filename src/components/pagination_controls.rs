//! Pagination Controls Component

use leptos::prelude::*;

use crate::news_board::NewsBoard;

/// Previous/next buttons with a page indicator. Disabled with one page or fewer.
#[component]
pub fn PaginationControls(board: RwSignal<NewsBoard>) -> impl IntoView {
    let disabled = move || board.with(|b| !b.can_paginate());
    let indicator = move || {
        board.with(|b| match b.total_pages() {
            0 => "No news yet".to_string(),
            total => format!("Page {} / {}", b.current_page() + 1, total),
        })
    };

    view! {
        <div class="pagination">
            <button
                class="pagination-btn"
                prop:disabled=disabled
                on:click=move |_| board.update(|b| b.prev_page())
            >
                "‹"
            </button>
            <span class="pagination-indicator">{indicator}</span>
            <button
                class="pagination-btn"
                prop:disabled=disabled
                on:click=move |_| board.update(|b| b.next_page())
            >
                "›"
            </button>
        </div>
    }
}
