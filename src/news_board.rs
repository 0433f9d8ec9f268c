//! News Board
//!
//! Paginated, admin-editable list of news items plus its view state
//! (current page, selected item, edit mode, activation clicks).
//!
//! Edit mode is unlocked by clicking a hidden control a fixed number of
//! times and answering a password prompt. The secret is compiled into the
//! client, so this gate is cosmetic only.

use std::collections::HashSet;

use crate::config::SiteConfig;
use crate::dialogs::Dialogs;
use crate::models::{NewsDraft, NewsId, NewsItem, NewsPatch};
use crate::pagination;

const PASSWORD_PROMPT: &str = "Enter admin password:";
const DELETE_CONFIRM: &str = "Delete this news?";
const UNLOCKED_NOTICE: &str = "Admin mode activated!";
const REJECTED_NOTICE: &str = "Wrong password!";

/// Result of one click on the hidden activation control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Below the threshold; carries the click count so far
    Counting(u32),
    Unlocked,
    Rejected,
    /// Edit mode was already on; click ignored
    AlreadyUnlocked,
}

#[derive(Debug, Clone)]
pub struct NewsBoard {
    items: Vec<NewsItem>,
    config: SiteConfig,
    current_page: usize,
    selected: Option<NewsId>,
    edit_mode: bool,
    activation_clicks: u32,
    /// `None` once the id counter has passed `NewsId::MAX`
    next_id: Option<NewsId>,
}

impl NewsBoard {
    /// Build a board from seed items, dropping any repeated ids
    pub fn new(seed: Vec<NewsItem>, config: SiteConfig) -> Self {
        let mut seen = HashSet::new();
        let items: Vec<NewsItem> = seed
            .into_iter()
            .filter(|item| {
                let fresh = seen.insert(item.id);
                if !fresh {
                    log::warn!("[NEWS] Dropping seed item with duplicate id {}", item.id);
                }
                fresh
            })
            .collect();
        let next_id = items
            .iter()
            .map(|i| i.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));

        Self {
            items,
            config,
            current_page: 0,
            selected: None,
            edit_mode: false,
            activation_clicks: 0,
            next_id,
        }
    }

    // ========================
    // Read access
    // ========================

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: NewsId) -> Option<&NewsItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.items.len(), self.config.page_size)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Items on the current page
    pub fn page_items(&self) -> &[NewsItem] {
        pagination::list_page(&self.items, self.current_page, self.config.page_size)
    }

    /// Previous/next controls are enabled only with more than one page
    pub fn can_paginate(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn activation_clicks(&self) -> u32 {
        self.activation_clicks
    }

    pub fn selected_id(&self) -> Option<NewsId> {
        self.selected
    }

    /// Item shown in the detail overlay
    pub fn selected_item(&self) -> Option<&NewsItem> {
        self.selected.and_then(|id| self.get(id))
    }

    // ========================
    // Navigation
    // ========================

    pub fn next_page(&mut self) {
        self.current_page = pagination::next_page(self.current_page, self.total_pages());
    }

    pub fn prev_page(&mut self) {
        self.current_page = pagination::prev_page(self.current_page, self.total_pages());
    }

    pub fn select_item(&mut self, id: NewsId) {
        if self.get(id).is_some() {
            self.selected = Some(id);
        }
    }

    pub fn deselect_item(&mut self) {
        self.selected = None;
    }

    // ========================
    // Edit mode gate
    // ========================

    /// Count a click on the hidden control; at the threshold, prompt for
    /// the secret. The counter resets after every attempt.
    pub fn register_activation_click(&mut self, dialogs: &impl Dialogs) -> Activation {
        if self.edit_mode {
            return Activation::AlreadyUnlocked;
        }

        self.activation_clicks += 1;
        if self.activation_clicks < self.config.activation_threshold {
            return Activation::Counting(self.activation_clicks);
        }

        self.activation_clicks = 0;
        let answer = dialogs.prompt(PASSWORD_PROMPT, "");
        if answer.is_some_and(|input| self.config.secret_matches(&input)) {
            self.edit_mode = true;
            log::info!("[NEWS] Edit mode enabled");
            dialogs.alert(UNLOCKED_NOTICE);
            Activation::Unlocked
        } else {
            log::info!("[NEWS] Edit mode activation rejected");
            dialogs.alert(REJECTED_NOTICE);
            Activation::Rejected
        }
    }

    fn require_edit_mode(&self, action: &str) -> bool {
        if !self.edit_mode {
            log::warn!("[NEWS] {} ignored: edit mode is off", action);
        }
        self.edit_mode
    }

    /// Next fresh id. Counts up from the largest id seen; once that runs
    /// out, falls back to the smallest id not currently in use.
    fn allocate_id(&mut self) -> Option<NewsId> {
        if let Some(id) = self.next_id {
            self.next_id = id.checked_add(1);
            return Some(id);
        }
        let used: HashSet<NewsId> = self.items.iter().map(|i| i.id).collect();
        let id = (0..=NewsId::MAX).find(|candidate| !used.contains(candidate));
        if id.is_none() {
            log::error!("[NEWS] No free news id left");
        }
        id
    }

    // ========================
    // Mutations (edit mode only)
    // ========================

    /// Prepend a new item. Returns its id.
    pub fn add_item(&mut self, draft: NewsDraft) -> Option<NewsId> {
        if !self.require_edit_mode("add") {
            return None;
        }
        let id = self.allocate_id()?;
        self.items.insert(0, draft.into_item(id));
        log::debug!("[NEWS] Added item {}, {} total", id, self.items.len());
        Some(id)
    }

    /// Apply `patch` to the item with `id`. Unknown ids are ignored.
    pub fn update_item(&mut self, id: NewsId, patch: &NewsPatch) -> bool {
        if !self.require_edit_mode("update") {
            return false;
        }
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                patch.apply_to(item);
                log::debug!("[NEWS] Updated item {}", id);
                true
            }
            None => false,
        }
    }

    /// Prompt for each field, pre-filled with the current value. Cancelled
    /// or empty answers keep the current value.
    pub fn edit_item_interactively(&mut self, id: NewsId, dialogs: &impl Dialogs) -> bool {
        if !self.require_edit_mode("edit") {
            return false;
        }
        let Some(item) = self.get(id) else {
            return false;
        };

        let ask = |label: &str, current: &str| {
            dialogs
                .prompt(label, current)
                .filter(|answer| !answer.is_empty())
        };
        let patch = NewsPatch {
            title: ask("Title:", &item.title),
            summary: ask("Excerpt:", &item.summary),
            body: ask("Content:", &item.body),
            author: ask("Author:", &item.author),
            published_date: ask("Date (YYYY-MM-DD):", &item.published_date),
            image_ref: ask("Image URL:", &item.image_ref),
        };
        if patch.is_empty() {
            log::debug!("[NEWS] Edit of {} left every field unchanged", id);
            return false;
        }
        self.update_item(id, &patch)
    }

    /// Remove the item with `id` after the user confirms
    pub fn remove_item(&mut self, id: NewsId, dialogs: &impl Dialogs) -> bool {
        if !self.require_edit_mode("remove") {
            return false;
        }
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };
        if !dialogs.confirm(DELETE_CONFIRM) {
            return false;
        }

        self.items.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.current_page = pagination::clamp_page(self.current_page, self.total_pages());
        log::debug!("[NEWS] Removed item {}, {} left", id, self.items.len());
        true
    }
}
