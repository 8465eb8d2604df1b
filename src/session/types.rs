//! Session snapshot types shared by the store, the route guard and the views.
//!
//! DESIGN
//! ======
//! `Session` is an enum rather than a pair of options so an identity can never
//! exist without a token (and vice versa).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Staff and reader roles issued by the backend (`tipo` on the wire).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "EDITOR")]
    Editor,
    #[serde(rename = "REDATOR")]
    Redator,
    #[serde(rename = "LEITOR", alias = "READER")]
    Reader,
}

impl Role {
    /// Roles allowed into the editorial dashboard.
    pub const STAFF: [Role; 3] = [Role::Admin, Role::Editor, Role::Redator];

    /// Parse a backend role name. Unknown names map to `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Some(Self::Admin),
            "EDITOR" => Some(Self::Editor),
            "REDATOR" => Some(Self::Redator),
            "LEITOR" | "READER" => Some(Self::Reader),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Editor => "EDITOR",
            Self::Redator => "REDATOR",
            Self::Reader => "LEITOR",
        }
    }

    #[must_use]
    pub fn is_staff(self) -> bool {
        Self::STAFF.contains(&self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lenient decoder for `tipo`: unrecognized strings become "no role" instead of
/// failing the whole payload, so they can never grant a privileged role.
pub(crate) fn deserialize_optional_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Role::parse))
}

/// Who is behind the current token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Backend user id, when supplied.
    pub id: Option<i64>,
    pub display_name: String,
    pub email: Option<String>,
    /// `None` when the backend sent no role or one this client does not know.
    pub role: Option<Role>,
}

/// Snapshot of the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { token: String, identity: Identity },
}

impl Session {
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { token, .. } => Some(token),
        }
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { identity, .. } => Some(identity),
        }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.identity().and_then(|identity| identity.role)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Lifecycle label without the credential, for logs and assertions.
    #[must_use]
    pub fn state(&self) -> SessionState {
        match self {
            Self::Anonymous => SessionState::Anonymous,
            Self::Authenticated { identity, .. } => SessionState::Authenticated(identity.role),
        }
    }
}

/// Session lifecycle state as the route guard sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated(Option<Role>),
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("anonymous"),
            Self::Authenticated(Some(role)) => write!(f, "authenticated({role})"),
            Self::Authenticated(None) => f.write_str("authenticated(no role)"),
        }
    }
}
