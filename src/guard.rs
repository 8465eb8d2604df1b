//! Route guard: may this session enter this route?
//!
//! DESIGN
//! ======
//! A pure function of (session snapshot, requirement). No I/O and no memory
//! of earlier decisions, so it is safe to re-run on every navigation,
//! including history back/forward.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::collections::BTreeSet;

use crate::routes::{HOME_PATH, LOGIN_PATH};
use crate::session::{Role, Session};

/// Roles permitted on a protected route. An empty set admits any
/// authenticated session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteRequirement {
    roles: BTreeSet<Role>,
}

impl RouteRequirement {
    /// Protected, but not role-gated.
    #[must_use]
    pub fn authenticated() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self { roles: roles.into_iter().collect() }
    }

    /// ADMIN, EDITOR and REDATOR.
    #[must_use]
    pub fn staff() -> Self {
        Self::roles(Role::STAFF)
    }

    #[must_use]
    pub fn is_role_gated(&self) -> bool {
        !self.roles.is_empty()
    }

    #[must_use]
    pub fn admits(&self, role: Option<Role>) -> bool {
        role.is_some_and(|role| self.roles.contains(&role))
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// No session: send the user to the login view.
    RedirectLogin,
    /// Signed in but not privileged enough: send the user home rather than
    /// back to a login they already passed.
    RedirectHome,
}

impl Decision {
    /// Where to navigate instead, if anywhere.
    #[must_use]
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectLogin => Some(LOGIN_PATH),
            Self::RedirectHome => Some(HOME_PATH),
        }
    }
}

/// Decide a navigation to a protected route. First match wins:
/// no token → login; no roles declared → allow; role admitted → allow;
/// otherwise → home.
#[must_use]
pub fn decide(session: &Session, requirement: &RouteRequirement) -> Decision {
    if session.token().is_none() {
        return Decision::RedirectLogin;
    }
    if !requirement.is_role_gated() {
        return Decision::Allow;
    }
    if requirement.admits(session.role()) {
        return Decision::Allow;
    }
    Decision::RedirectHome
}

/// Like [`decide`], but `None` marks a public route that everyone may enter.
#[must_use]
pub fn check(session: &Session, requirement: Option<&RouteRequirement>) -> Decision {
    requirement.map_or(Decision::Allow, |requirement| decide(session, requirement))
}
