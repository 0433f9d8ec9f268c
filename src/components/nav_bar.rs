//! Navigation Bar Component
//!
//! Buttons for switching between the News and Staff pages.

use leptos::prelude::*;

use crate::context::{use_site_context, SiteView};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_site_context();

    view! {
        <nav class="site-nav">
            <span class="site-title">"DonutSMP"</span>
            {SiteView::ALL.iter().map(|&view| {
                let is_active = move || ctx.current_view.get() == view;
                view! {
                    <button
                        class=move || if is_active() { "nav-tab active" } else { "nav-tab" }
                        on:click=move |_| ctx.navigate(view)
                    >
                        {view.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
