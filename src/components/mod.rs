//! UI Components
//!
//! Leptos components for the news board and staff roster.

mod admin_trigger;
mod nav_bar;
mod news_card;
mod news_modal;
mod news_section;
mod pagination_controls;
mod staff_page;

pub use admin_trigger::AdminTrigger;
pub use nav_bar::NavBar;
pub use news_card::NewsCard;
pub use news_modal::NewsModal;
pub use news_section::NewsSection;
pub use pagination_controls::PaginationControls;
pub use staff_page::StaffPage;
