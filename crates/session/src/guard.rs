//! Role-aware navigation state.
//!
//! `NavGuard` starts `Unresolved` on every mount and renders nothing until
//! `resolve_role` has read the persisted token once. Resolution never
//! touches the network and never fails: anything unexpected falls back to
//! the applicant menu.

use shared_types::{menu_for, MenuItem, Role, EXACT_MATCH_PATHS};

use crate::provider::SessionProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPhase {
    /// Role not known yet. Nothing is rendered, so the wrong menu never
    /// flashes.
    Unresolved,
    Resolved {
        role: Role,
        /// Whether a token was present. Anonymous visitors get the
        /// applicant menu like signed-in applicants do.
        authenticated: bool,
    },
}

/// Navigation state owned by the guard component.
#[derive(Debug, Clone, PartialEq)]
pub struct NavGuard {
    is_open: bool,
    phase: NavPhase,
    login_route: String,
}

impl NavGuard {
    pub fn new(login_route: impl Into<String>) -> Self {
        Self {
            is_open: false,
            phase: NavPhase::Unresolved,
            login_route: login_route.into(),
        }
    }

    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    /// `None` while unresolved.
    pub fn role(&self) -> Option<Role> {
        match self.phase {
            NavPhase::Unresolved => None,
            NavPhase::Resolved { role, .. } => Some(role),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(
            self.phase,
            NavPhase::Resolved {
                authenticated: true,
                ..
            }
        )
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Read the token once and fix the role for the rest of this mount.
    /// Later calls return the already-resolved role without reading storage.
    pub fn resolve_role(&mut self, session: &SessionProvider) -> Role {
        if let NavPhase::Resolved { role, .. } = self.phase {
            return role;
        }
        let (role, authenticated) = session.resolve();
        tracing::debug!(role = %role, authenticated, "Navigation role resolved");
        self.phase = NavPhase::Resolved {
            role,
            authenticated,
        };
        role
    }

    /// Flip the collapsed/expanded presentation. Does not affect the role.
    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Menu for the resolved role; `None` while unresolved.
    pub fn menu(&self) -> Option<&'static [MenuItem]> {
        self.role().map(menu_for)
    }

    /// Clear the persisted token and return the route to redirect to.
    /// The guard goes back to `Unresolved`; the next resolution yields the
    /// default role.
    pub fn logout(&mut self, session: &SessionProvider) -> &str {
        session.clear();
        self.phase = NavPhase::Unresolved;
        self.is_open = false;
        tracing::info!("Signed out");
        &self.login_route
    }
}

/// Whether the menu entry at `item_path` is highlighted for `current_path`.
///
/// Listing paths in [`EXACT_MATCH_PATHS`] only match exactly; every other
/// entry also matches its sub-paths. Highlighting only, never access
/// control.
pub fn is_active(current_path: &str, item_path: &str) -> bool {
    let current = normalize(current_path);
    let item = normalize(item_path);
    if EXACT_MATCH_PATHS.contains(&item) {
        return current == item;
    }
    current == item
        || current
            .strip_prefix(item)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Drop query string, fragment and trailing slash.
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}
