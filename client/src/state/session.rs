//! Session flags owned by the root component.
//!
//! DESIGN
//! ======
//! The root `App` holds one `RwSignal<SessionState>` and provides it through
//! context. Views read it and call the setters below; nothing else keeps a
//! copy of the flags, so the rendered screen always follows this value.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Which top-level screen is on display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    /// Email/password form.
    #[default]
    Login,
    /// Authenticated landing page.
    Main,
}

/// Authentication and theme flags for the current browser tab.
///
/// Lives only as long as the page; nothing here is persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
    pub dark_mode: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { authenticated: false, dark_mode: true }
    }
}

impl SessionState {
    /// Flip the theme flag and return the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn set_authenticated(&mut self, value: bool) {
        self.authenticated = value;
    }

    /// Screen selection. Depends on `authenticated` only.
    pub fn active_view(&self) -> ActiveView {
        if self.authenticated { ActiveView::Main } else { ActiveView::Login }
    }
}
