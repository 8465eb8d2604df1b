//! Route table of the newspaper front end and who may open each route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by the browser client (to guard its pages) and the CLI (`check`).
//! Role gates mirror the backend's own rules for the matching endpoints, so
//! a view is never offered to someone whose API calls would be refused.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::guard::RouteRequirement;
use crate::session::Role;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/admin/login";
pub const DASHBOARD_PATH: &str = "/admin/dashboard";
pub const REGISTER_PATH: &str = "/cadastro";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Any signed-in user.
    Authenticated,
    /// ADMIN, EDITOR or REDATOR.
    Staff,
    AdminOrEditor,
    Admin,
}

impl Access {
    /// `None` for public routes.
    #[must_use]
    pub fn requirement(self) -> Option<RouteRequirement> {
        match self {
            Self::Public => None,
            Self::Authenticated => Some(RouteRequirement::authenticated()),
            Self::Staff => Some(RouteRequirement::staff()),
            Self::AdminOrEditor => Some(RouteRequirement::roles([Role::Admin, Role::Editor])),
            Self::Admin => Some(RouteRequirement::roles([Role::Admin])),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    /// Path pattern; `:name` segments match any single segment.
    pub pattern: &'static str,
    pub title: &'static str,
    pub access: Access,
}

pub const ROUTES: &[RouteDef] = &[
    RouteDef { pattern: HOME_PATH, title: "Início", access: Access::Public },
    RouteDef { pattern: "/editais", title: "Editais", access: Access::Public },
    RouteDef { pattern: "/eventos", title: "Eventos", access: Access::Public },
    RouteDef { pattern: "/categorias", title: "Categorias", access: Access::Public },
    RouteDef { pattern: "/noticia/:id", title: "Notícia", access: Access::Public },
    RouteDef { pattern: REGISTER_PATH, title: "Cadastro", access: Access::Public },
    RouteDef { pattern: LOGIN_PATH, title: "Login", access: Access::Public },
    RouteDef { pattern: DASHBOARD_PATH, title: "Painel", access: Access::Staff },
    RouteDef { pattern: "/admin/artigos/novo", title: "Novo artigo", access: Access::Staff },
    RouteDef { pattern: "/admin/artigos/editar/:id", title: "Editar artigo", access: Access::Staff },
    RouteDef { pattern: "/admin/editais/novo", title: "Novo edital", access: Access::AdminOrEditor },
    RouteDef { pattern: "/admin/comentarios", title: "Comentários", access: Access::AdminOrEditor },
    RouteDef { pattern: "/admin/categorias", title: "Categorias (admin)", access: Access::Admin },
    RouteDef { pattern: "/admin/usuarios", title: "Usuários", access: Access::Admin },
];

/// Strip query, fragment and trailing slash.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}

/// Whether `path` matches `pattern`, segment by segment.
#[must_use]
pub fn matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = normalize(pattern).split('/');
    let mut path_segments = normalize(path).split('/');
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) if p.starts_with(':') => {
                if s.is_empty() {
                    return false;
                }
            }
            (Some(p), Some(s)) if p == s => {}
            _ => return false,
        }
    }
}

#[must_use]
pub fn find_route(path: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|route| matches(route.pattern, path))
}

/// Requirement for `path`. Unknown paths are public; the view layer renders
/// its not-found page for them.
#[must_use]
pub fn requirement_for(path: &str) -> Option<RouteRequirement> {
    find_route(path).and_then(|route| route.access.requirement())
}

/// Where to go right after a successful login: staff to the dashboard,
/// everyone else home.
#[must_use]
pub fn landing_path(role: Option<Role>) -> &'static str {
    if role.is_some_and(Role::is_staff) { DASHBOARD_PATH } else { HOME_PATH }
}
