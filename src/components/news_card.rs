//! News Card Component
//!
//! One news item on the board, with admin Edit/Delete buttons in edit mode.

use leptos::prelude::*;

use crate::dates::display_date;
use crate::models::{NewsId, NewsItem};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// News card
///
/// # Arguments
/// * `edit_mode` - Show the Edit/Delete buttons
/// * `on_select` - Card clicked (opens the detail overlay)
/// * `on_edit` / `on_delete` - Admin buttons; their clicks don't reach the card
#[component]
pub fn NewsCard(
    item: NewsItem,
    edit_mode: bool,
    #[prop(into)] on_select: Callback<NewsId>,
    #[prop(into)] on_edit: Callback<NewsId>,
    #[prop(into)] on_delete: Callback<NewsId>,
) -> impl IntoView {
    let id = item.id;
    let image = if item.image_ref.is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        item.image_ref.clone()
    };

    view! {
        <article class="news-card" on:click=move |_| on_select.run(id)>
            <div class="news-card-image">
                <img src=image alt=item.title.clone() />
            </div>
            <div class="news-card-meta">
                <span class="news-date">"📅 " {display_date(&item.published_date)}</span>
                <span class="news-author">"👤 " {item.author}</span>
            </div>
            <h3 class="news-card-title">{item.title}</h3>
            <p class="news-card-summary">{item.summary}</p>
            {edit_mode.then(|| view! {
                <div class="news-card-admin">
                    <button
                        class="edit-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_edit.run(id);
                        }
                    >
                        "Edit"
                    </button>
                    <button
                        class="delete-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_delete.run(id);
                        }
                    >
                        "Delete"
                    </button>
                </div>
            })}
        </article>
    }
}
