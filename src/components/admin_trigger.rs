//! Hidden Admin Trigger
//!
//! Unlabeled, nearly transparent button in the bottom-right corner. Enough
//! clicks in a row bring up the edit-mode password prompt.

use leptos::prelude::*;

use crate::dialogs::BrowserDialogs;
use crate::news_board::{Activation, NewsBoard};

const TRIGGER_STYLE: &str = "position: fixed; bottom: 10px; right: 10px; width: 30px; height: 30px; \
     opacity: 0.1; background: green; border: none; border-radius: 50%; z-index: 9999;";

#[component]
pub fn AdminTrigger(board: RwSignal<NewsBoard>) -> impl IntoView {
    let on_click = move |_| {
        let outcome = board
            .try_update(|b| b.register_activation_click(&BrowserDialogs))
            .unwrap_or(Activation::Rejected);
        log::debug!("[ADMIN] Activation click: {:?}", outcome);
    };

    view! {
        <button class="admin-trigger" style=TRIGGER_STYLE aria-hidden="true" on:click=on_click></button>
    }
}
