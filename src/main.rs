//! DonutSMP Site Entry Point

use donutsmp_site::{config::SiteConfig, logging, App};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = SiteConfig::from_env();
    logging::init(config.log_level);
    log::info!("[APP] Mounting site");
    mount_to_body(move || view! { <App config=config /> });
}
