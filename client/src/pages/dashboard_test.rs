use super::*;

fn patterns(role: Option<Role>) -> Vec<&'static str> {
    section_links(role).into_iter().map(|route| route.pattern).collect()
}

#[test]
fn admin_sees_every_section() {
    assert_eq!(
        patterns(Some(Role::Admin)),
        vec![
            "/admin/artigos/novo",
            "/admin/editais/novo",
            "/admin/comentarios",
            "/admin/categorias",
            "/admin/usuarios",
        ]
    );
}

#[test]
fn editor_sees_articles_notices_and_comments() {
    assert_eq!(
        patterns(Some(Role::Editor)),
        vec!["/admin/artigos/novo", "/admin/editais/novo", "/admin/comentarios"]
    );
}

#[test]
fn redator_sees_articles_only() {
    assert_eq!(patterns(Some(Role::Redator)), vec!["/admin/artigos/novo"]);
}

#[test]
fn readers_and_unknown_roles_see_nothing() {
    assert!(patterns(Some(Role::Reader)).is_empty());
    assert!(patterns(None).is_empty());
}
