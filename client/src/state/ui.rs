//! Local UI chrome state (sidebar, notifications panel).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of auth state so the shell
//! controls can evolve independently. Not persisted across reloads.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_open: bool,
    pub notifications_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sidebar_open: true, notifications_open: false }
    }
}

impl UiState {
    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn set_notifications_open(&mut self, open: bool) {
        self.notifications_open = open;
    }

    pub fn open_notifications(&mut self) {
        self.notifications_open = true;
    }

    pub fn close_notifications(&mut self) {
        self.notifications_open = false;
    }
}
