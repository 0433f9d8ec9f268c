//! DonutSMP Site App
//!
//! Top navigation plus the News and Staff pages.

use leptos::prelude::*;

use crate::components::{NavBar, NewsSection, StaffPage};
use crate::config::SiteConfig;
use crate::context::{SiteContext, SiteView};

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let current_view = signal(SiteView::Home);

    let ctx = SiteContext::new(config, current_view);
    provide_context(ctx);

    view! {
        <div class="site-layout">
            <NavBar />
            <main class="site-content">
                {move || match ctx.current_view.get() {
                    SiteView::Home => view! { <NewsSection /> }.into_any(),
                    SiteView::Staff => view! { <StaffPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
