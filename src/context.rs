//! Site Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::SiteConfig;

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteView {
    Home,
    Staff,
}

impl SiteView {
    pub const ALL: [SiteView; 2] = [SiteView::Home, SiteView::Staff];

    pub fn label(&self) -> &'static str {
        match self {
            SiteView::Home => "News",
            SiteView::Staff => "Staff",
        }
    }
}

/// Site-wide values provided via context
#[derive(Clone, Copy)]
pub struct SiteContext {
    /// Compile-time configuration
    pub config: SiteConfig,
    /// Page currently shown - read
    pub current_view: ReadSignal<SiteView>,
    /// Page currently shown - write
    set_current_view: WriteSignal<SiteView>,
}

impl SiteContext {
    pub fn new(config: SiteConfig, current_view: (ReadSignal<SiteView>, WriteSignal<SiteView>)) -> Self {
        Self {
            config,
            current_view: current_view.0,
            set_current_view: current_view.1,
        }
    }

    /// Switch to another page
    pub fn navigate(&self, view: SiteView) {
        log::debug!("[NAV] -> {:?}", view);
        self.set_current_view.set(view);
    }
}

/// Get the site context
pub fn use_site_context() -> SiteContext {
    expect_context::<SiteContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_carries_given_config() {
        let config = SiteConfig {
            admin_secret: Some("redstone"),
            page_size: 4,
            ..SiteConfig::from_env()
        };
        let ctx = SiteContext::new(config, signal(SiteView::Home));
        assert_eq!(ctx.config, config);
        assert!(ctx.config.secret_matches("redstone"));

        ctx.navigate(SiteView::Staff);
        assert_eq!(ctx.current_view.get_untracked(), SiteView::Staff);
    }
}
