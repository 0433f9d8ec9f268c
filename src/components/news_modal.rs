//! News Modal Component
//!
//! Detail overlay showing the full body of a news item.

use leptos::prelude::*;

use crate::dates::display_date;
use crate::markdown::parse_markdown;
use crate::models::NewsItem;

/// Detail overlay. Closes on the × button or a click on the backdrop.
#[component]
pub fn NewsModal(
    item: NewsItem,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let body_html = parse_markdown(&item.body);

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="news-modal" on:click=|ev| ev.stop_propagation()>
                <div class="news-modal-header">
                    <h2 class="news-modal-title">{item.title.clone()}</h2>
                    <button class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                {(!item.image_ref.is_empty()).then(|| view! {
                    <img class="news-modal-image" src=item.image_ref.clone() alt=item.title.clone() />
                })}
                <div class="news-card-meta">
                    <span class="news-date">"📅 " {display_date(&item.published_date)}</span>
                    <span class="news-author">"👤 " {item.author.clone()}</span>
                </div>
                <div class="news-modal-body" inner_html=body_html></div>
            </div>
        </div>
    }
}
