//! DonutSMP Site
//!
//! Leptos frontend: staff roster and a paginated news board with a hidden,
//! client-only edit mode.

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod dates;
pub mod dialogs;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod models;
pub mod news_board;
pub mod pagination;
pub mod seed;
pub mod staff;

pub use app::App;
