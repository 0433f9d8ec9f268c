//! Blocking Dialogs
//!
//! Prompt/confirm/alert seam used by the news board. The browser
//! implementation wraps `window.prompt` and friends.

/// Blocking modal interactions
pub trait Dialogs {
    /// Ask for a line of text. `None` when the user cancels.
    fn prompt(&self, message: &str, default: &str) -> Option<String>;
    /// Yes/no question
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// `window.prompt` / `window.confirm` / `window.alert`
#[derive(Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        let window = web_sys::window()?;
        match window.prompt_with_message_and_default(message, default) {
            Ok(answer) => answer,
            Err(e) => {
                log::warn!("prompt failed: {:?}", e);
                None
            }
        }
    }

    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window.confirm_with_message(message).unwrap_or_else(|e| {
            log::warn!("confirm failed: {:?}", e);
            false
        })
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {:?}", e);
            }
        }
    }
}

#[cfg(test)]
pub use scripted::ScriptedDialogs;

#[cfg(test)]
mod scripted {
    use super::Dialogs;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned answers and records what was asked
    #[derive(Default)]
    pub struct ScriptedDialogs {
        prompts: RefCell<VecDeque<Option<String>>>,
        confirms: RefCell<VecDeque<bool>>,
        pub asked: RefCell<Vec<String>>,
        pub alerts: RefCell<Vec<String>>,
    }

    impl ScriptedDialogs {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn answer(self, value: Option<&str>) -> Self {
            self.prompts.borrow_mut().push_back(value.map(str::to_string));
            self
        }

        pub fn confirm_with(self, yes: bool) -> Self {
            self.confirms.borrow_mut().push_back(yes);
            self
        }
    }

    impl Dialogs for ScriptedDialogs {
        fn prompt(&self, message: &str, _default: &str) -> Option<String> {
            self.asked.borrow_mut().push(message.to_string());
            self.prompts.borrow_mut().pop_front().flatten()
        }

        fn confirm(&self, message: &str) -> bool {
            self.asked.borrow_mut().push(message.to_string());
            self.confirms.borrow_mut().pop_front().unwrap_or(false)
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }
}
