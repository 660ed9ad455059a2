//! Auth view state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the display-side route guard and by logout; read by the
//! protected-content gate and identity-aware components. The authoritative
//! session lives in the guard's `SessionCache`, this is its reactive mirror.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use guard::Session;

/// Where the current navigation stands with the guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// No protected navigation has been checked yet.
    #[default]
    Idle,
    Verifying,
    Verified,
    Rejected,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub status: AuthStatus,
}

impl AuthState {
    /// Initial state from the bootstrap payload. A session the server already
    /// verified counts as verified.
    #[must_use]
    pub fn seeded(session: Option<Session>) -> Self {
        let status = if session.is_some() { AuthStatus::Verified } else { AuthStatus::Idle };
        Self { session, status }
    }

    pub fn begin_verification(&mut self) {
        self.status = AuthStatus::Verifying;
    }

    /// Guard allowed the navigation. `None` keeps the previous session.
    pub fn verified(&mut self, session: Option<Session>) {
        if session.is_some() {
            self.session = session;
        }
        self.status = AuthStatus::Verified;
    }

    pub fn rejected(&mut self) {
        self.session = None;
        self.status = AuthStatus::Rejected;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.status == AuthStatus::Verified
    }

    /// Name to show in the shell: display name, else email.
    #[must_use]
    pub fn display_label(&self) -> Option<&str> {
        let session = self.session.as_ref()?;
        let name = session.display_name.trim();
        if name.is_empty() { Some(session.email.as_str()) } else { Some(name) }
    }
}
