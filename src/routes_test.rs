use super::*;

// =============================================================
// matches
// =============================================================

#[test]
fn matches_static_paths() {
    assert!(matches("/editais", "/editais"));
    assert!(!matches("/editais", "/eventos"));
    assert!(matches("/", "/"));
}

#[test]
fn matches_ignores_trailing_slash_query_and_fragment() {
    assert!(matches("/editais", "/editais/"));
    assert!(matches("/editais", "/editais?page=2"));
    assert!(matches("/", "/#topo"));
}

#[test]
fn matches_param_segments() {
    assert!(matches("/noticia/:id", "/noticia/42"));
    assert!(matches("/admin/artigos/editar/:id", "/admin/artigos/editar/abc"));
    assert!(!matches("/noticia/:id", "/noticia"));
    assert!(!matches("/noticia/:id", "/noticia/42/comentarios"));
}

#[test]
fn root_does_not_match_everything() {
    assert!(!matches("/", "/editais"));
}

// =============================================================
// requirement_for
// =============================================================

#[test]
fn public_routes_have_no_requirement() {
    for path in ["/", "/editais", "/eventos", "/categorias", "/noticia/7", "/cadastro", "/admin/login"] {
        assert_eq!(requirement_for(path), None, "{path}");
    }
}

#[test]
fn dashboard_and_articles_are_staff_only() {
    for path in ["/admin/dashboard", "/admin/artigos/novo", "/admin/artigos/editar/3"] {
        assert_eq!(requirement_for(path), Some(RouteRequirement::staff()), "{path}");
    }
}

#[test]
fn notices_and_comments_need_admin_or_editor() {
    let expected = Some(RouteRequirement::roles([Role::Admin, Role::Editor]));
    assert_eq!(requirement_for("/admin/editais/novo"), expected);
    assert_eq!(requirement_for("/admin/comentarios"), expected);
}

#[test]
fn category_and_user_admin_need_admin() {
    let expected = Some(RouteRequirement::roles([Role::Admin]));
    assert_eq!(requirement_for("/admin/categorias"), expected);
    assert_eq!(requirement_for("/admin/usuarios"), expected);
}

#[test]
fn public_categories_differ_from_admin_categories() {
    assert_eq!(find_route("/categorias").map(|r| r.access), Some(Access::Public));
    assert_eq!(find_route("/admin/categorias").map(|r| r.access), Some(Access::Admin));
}

#[test]
fn unknown_paths_are_public() {
    assert_eq!(find_route("/sobre"), None);
    assert_eq!(requirement_for("/sobre"), None);
}

#[test]
fn authenticated_access_is_open_requirement() {
    assert_eq!(Access::Authenticated.requirement(), Some(RouteRequirement::authenticated()));
}

#[test]
fn every_pattern_is_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.pattern, b.pattern);
        }
    }
}

// =============================================================
// landing_path
// =============================================================

#[test]
fn staff_land_on_dashboard() {
    assert_eq!(landing_path(Some(Role::Admin)), DASHBOARD_PATH);
    assert_eq!(landing_path(Some(Role::Editor)), DASHBOARD_PATH);
    assert_eq!(landing_path(Some(Role::Redator)), DASHBOARD_PATH);
}

#[test]
fn readers_and_unknown_roles_land_home() {
    assert_eq!(landing_path(Some(Role::Reader)), HOME_PATH);
    assert_eq!(landing_path(None), HOME_PATH);
}
