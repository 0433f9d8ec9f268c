//! News Section Component
//!
//! Owns the news board: header, admin toolbar, paginated cards, detail
//! overlay and the hidden edit-mode trigger.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{AdminTrigger, NewsCard, NewsModal, PaginationControls};
use crate::context::use_site_context;
use crate::dates;
use crate::dialogs::BrowserDialogs;
use crate::models::{NewsDraft, NewsId};
use crate::news_board::NewsBoard;
use crate::seed;

#[component]
pub fn NewsSection() -> impl IntoView {
    let ctx = use_site_context();
    let board = RwSignal::new(NewsBoard::new(seed::news(), ctx.config));
    log::debug!("[NEWS] Board ready with {} items", board.with_untracked(|b| b.len()));

    let edit_mode = move || board.with(|b| b.is_edit_mode());

    // Escape closes the overlay
    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            board.try_update(|b| b.deselect_item());
        }
    });
    on_cleanup(move || escape.remove());

    let add_news = move |_| {
        let draft = NewsDraft::placeholder(dates::today());
        if let Some(id) = board.try_update(|b| b.add_item(draft)).flatten() {
            log::info!("[NEWS] Added news {}", id);
        }
    };
    let select = move |id: NewsId| board.update(|b| b.select_item(id));
    let edit = move |id: NewsId| {
        board.update(|b| {
            b.edit_item_interactively(id, &BrowserDialogs);
        })
    };
    let delete = move |id: NewsId| {
        board.update(|b| {
            if b.remove_item(id, &BrowserDialogs) {
                log::info!("[NEWS] Deleted news {}", id);
            }
        })
    };

    view! {
        <section class="news-section">
            <div class="news-header">
                <h2>"Latest " <span class="accent-green">"News"</span></h2>
                <p class="news-subtitle">"Stay updated with the latest events, updates, and announcements"</p>
                <Show when=edit_mode>
                    <div class="news-admin-toolbar">
                        <button class="add-btn" on:click=add_news>"➕ Add News"</button>
                    </div>
                </Show>
            </div>

            <div class="news-grid">
                {move || {
                    let editing = edit_mode();
                    board.with(|b| b.page_items().to_vec())
                        .into_iter()
                        .map(|item| view! {
                            <NewsCard
                                item=item
                                edit_mode=editing
                                on_select=select
                                on_edit=edit
                                on_delete=delete
                            />
                        })
                        .collect_view()
                }}
            </div>

            <PaginationControls board=board />

            {move || board.with(|b| b.selected_item().cloned()).map(|item| view! {
                <NewsModal item=item on_close=move |_| board.update(|b| b.deselect_item()) />
            })}

            <AdminTrigger board=board />
        </section>
    }
}
