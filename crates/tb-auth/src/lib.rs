//! # tb-auth
//!
//! Session and role gate for protected views. The session marker is two
//! values in the key-value backend (the current username and an active
//! flag) written by the login flow and cleared on logout. The guard
//! only ever reads and reports; state transitions happen on external
//! login/logout events.
//!
//! Any read error from the session source gates exactly like "no
//! session": the guard fails closed, never open.

use std::sync::Arc;
use tb_core::error::Result;
use tb_core::models::Role;
use tb_core::traits::KeyValueBackend;
use tracing::{info, warn};

/// Storage key holding the logged-in username.
pub const SESSION_USER_KEY: &str = "session-user";
/// Storage key holding the active flag.
pub const SESSION_ACTIVE_KEY: &str = "session-active";
/// Storage key holding the remember-me flag.
pub const SESSION_REMEMBER_KEY: &str = "session-remember";

const ACTIVE: &str = "active";

/// Maps a username to its role. Injected so the composition root can
/// consult the users collection; the guard hard-codes nothing.
pub type RoleResolver = Box<dyn Fn(&str) -> Option<Role> + Send + Sync>;

/// Where to send a visitor the gate turns away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTargets {
    /// Target when there is no session at all.
    pub login: String,
    /// Target when a session exists but the role does not fit.
    pub fallback: String,
}

impl Default for RedirectTargets {
    fn default() -> Self {
        Self {
            login: "login".to_string(),
            fallback: "home".to_string(),
        }
    }
}

/// What the session marker currently says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    NoSession,
    SessionNoRole { user: String },
    SessionWithRole { user: String, role: Role },
}

/// Outcome of a gate check. `Redirect` is the only place a failure
/// becomes visible control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(String),
}

pub struct SessionGuard {
    backend: Arc<dyn KeyValueBackend>,
    resolver: RoleResolver,
    targets: RedirectTargets,
}

impl SessionGuard {
    pub fn new(
        backend: Arc<dyn KeyValueBackend>,
        resolver: RoleResolver,
        targets: RedirectTargets,
    ) -> Self {
        Self {
            backend,
            resolver,
            targets,
        }
    }

    /// Reads the session marker. Both values must be present and the
    /// flag must say `active`; anything else, including a backend
    /// read error, is `NoSession`.
    pub fn state(&self) -> SessionState {
        let user = match self.backend.get(SESSION_USER_KEY) {
            Ok(value) => value,
            Err(err) => {
                warn!(%err, "session read failed, failing closed");
                return SessionState::NoSession;
            }
        };
        let flag = match self.backend.get(SESSION_ACTIVE_KEY) {
            Ok(value) => value,
            Err(err) => {
                warn!(%err, "session read failed, failing closed");
                return SessionState::NoSession;
            }
        };

        match (user, flag) {
            (Some(user), Some(flag)) if flag == ACTIVE && !user.is_empty() => {
                match (self.resolver)(&user) {
                    Some(role) => SessionState::SessionWithRole { user, role },
                    None => SessionState::SessionNoRole { user },
                }
            }
            _ => SessionState::NoSession,
        }
    }

    /// Gate for views that only need a logged-in visitor.
    pub fn require_session(&self) -> Access {
        match self.state() {
            SessionState::NoSession => Access::Redirect(self.targets.login.clone()),
            _ => Access::Allow,
        }
    }

    /// Gate for views restricted to one role. No session sends the
    /// visitor to login; a missing or mismatched role sends them to
    /// the fallback target.
    pub fn require_role(&self, expected: Role) -> Access {
        match self.state() {
            SessionState::NoSession => Access::Redirect(self.targets.login.clone()),
            SessionState::SessionNoRole { .. } => {
                Access::Redirect(self.targets.fallback.clone())
            }
            SessionState::SessionWithRole { role, .. } if role == expected => Access::Allow,
            SessionState::SessionWithRole { .. } => {
                Access::Redirect(self.targets.fallback.clone())
            }
        }
    }

    /// The external login event: writes the session marker. With
    /// `remember`, the username sticks around for form pre-fill after
    /// the session ends.
    pub fn start_session(&self, username: &str, remember: bool) -> Result<()> {
        self.backend.set(SESSION_USER_KEY, username)?;
        self.backend.set(SESSION_ACTIVE_KEY, ACTIVE)?;
        if remember {
            self.backend.set(SESSION_REMEMBER_KEY, "true")?;
        }
        info!(username, "session started");
        Ok(())
    }

    /// The external logout event: clears the whole marker, remember
    /// flag included.
    pub fn end_session(&self) -> Result<()> {
        self.backend.remove(SESSION_USER_KEY)?;
        self.backend.remove(SESSION_ACTIVE_KEY)?;
        self.backend.remove(SESSION_REMEMBER_KEY)?;
        info!("session ended");
        Ok(())
    }
}
