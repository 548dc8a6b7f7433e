//! View routing guarded by the current session.
//!
//! The client has four views. [`View::Dashboard`] and [`View::Board`] need a
//! signed-in session; asking for either without one resolves to
//! [`View::Login`]. Unknown paths and the root path also resolve to the
//! login view.

use crate::account::domain::{Session, SessionState};
use std::fmt;

/// A navigable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Account registration form.
    Register,
    /// Login form.
    Login,
    /// Task statistics summary.
    Dashboard,
    /// Kanban board.
    Board,
}

impl View {
    /// Every view in navigation-bar order.
    pub const ALL: [Self; 4] = [Self::Register, Self::Login, Self::Dashboard, Self::Board];

    /// Returns the canonical path for the view.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Register => "/register",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Board => "/kanban",
        }
    }

    /// Resolves a path to a view.
    ///
    /// Trailing slashes are ignored. The root path and unknown paths map to
    /// [`View::Login`].
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let normalized = path.trim().trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|view| view.path() == normalized)
            .unwrap_or(Self::Login)
    }

    /// Returns `true` when the view needs a signed-in session.
    #[must_use]
    pub const fn requires_session(self) -> bool {
        matches!(self, Self::Dashboard | Self::Board)
    }

    /// Returns the view actually shown when `self` is requested under
    /// `session`.
    #[must_use]
    pub const fn resolve(self, session: &SessionState) -> Self {
        if self.requires_session() && !session.is_authenticated() {
            Self::Login
        } else {
            self
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Tracks the current view and the session that guards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: View,
    session: SessionState,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Starts signed out on the login view.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: View::Login,
            session: SessionState::new(),
        }
    }

    /// Returns the view being shown.
    #[must_use]
    pub const fn current(&self) -> View {
        self.current
    }

    /// Returns the session state.
    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    /// Navigates to `path`, applying the session guard, and returns the view
    /// now shown.
    pub fn navigate(&mut self, path: &str) -> View {
        let requested = View::from_path(path);
        let resolved = requested.resolve(&self.session);
        if resolved != requested {
            tracing::debug!(requested = %requested, "redirecting to login");
        }
        self.current = resolved;
        resolved
    }

    /// Installs `session` and lands on the dashboard.
    pub fn sign_in(&mut self, session: Session) -> View {
        tracing::info!(user_id = %session.user_id(), "signed in");
        self.session.sign_in(session);
        self.current = View::Dashboard;
        self.current
    }

    /// Ends the session and returns to the login view.
    pub fn sign_out(&mut self) -> Option<Session> {
        let ended = self.session.sign_out();
        if let Some(session) = &ended {
            tracing::info!(user_id = %session.user_id(), "signed out");
        }
        self.current = View::Login;
        ended
    }
}
