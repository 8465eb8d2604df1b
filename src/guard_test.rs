use super::*;
use crate::session::Identity;

const ALL_ROLES: [Role; 4] = [Role::Admin, Role::Editor, Role::Redator, Role::Reader];

fn signed_in(role: Option<Role>) -> Session {
    Session::Authenticated {
        token: "T".to_owned(),
        identity: Identity { id: Some(1), display_name: "A".to_owned(), email: None, role },
    }
}

/// Every requirement shape worth checking: open, each single role, staff, all.
fn requirements() -> Vec<RouteRequirement> {
    let mut reqs = vec![RouteRequirement::authenticated(), RouteRequirement::staff(), RouteRequirement::roles(ALL_ROLES)];
    reqs.extend(ALL_ROLES.iter().map(|role| RouteRequirement::roles([*role])));
    reqs
}

fn sessions() -> Vec<Session> {
    let mut sessions: Vec<Session> = ALL_ROLES.iter().map(|role| signed_in(Some(*role))).collect();
    sessions.push(signed_in(None));
    sessions
}

// =============================================================
// decide
// =============================================================

#[test]
fn anonymous_always_redirects_to_login() {
    for req in requirements() {
        assert_eq!(decide(&Session::Anonymous, &req), Decision::RedirectLogin, "{req:?}");
    }
}

#[test]
fn authenticated_with_open_requirement_is_allowed() {
    for session in sessions() {
        assert_eq!(decide(&session, &RouteRequirement::authenticated()), Decision::Allow, "{session:?}");
    }
}

#[test]
fn member_role_is_allowed_and_non_member_goes_home() {
    for session in sessions() {
        for req in requirements().into_iter().filter(RouteRequirement::is_role_gated) {
            let expected = if req.admits(session.role()) { Decision::Allow } else { Decision::RedirectHome };
            assert_eq!(decide(&session, &req), expected, "{session:?} {req:?}");
        }
    }
}

#[test]
fn reader_is_sent_home_from_staff_routes() {
    assert_eq!(decide(&signed_in(Some(Role::Reader)), &RouteRequirement::staff()), Decision::RedirectHome);
}

#[test]
fn missing_role_never_satisfies_a_role_gate() {
    assert_eq!(
        decide(&signed_in(None), &RouteRequirement::roles(ALL_ROLES)),
        Decision::RedirectHome
    );
}

#[test]
fn editor_admitted_to_admin_editor_route() {
    let req = RouteRequirement::roles([Role::Admin, Role::Editor]);
    assert_eq!(decide(&signed_in(Some(Role::Editor)), &req), Decision::Allow);
    assert_eq!(decide(&signed_in(Some(Role::Redator)), &req), Decision::RedirectHome);
}

#[test]
fn decide_is_repeatable() {
    let session = signed_in(Some(Role::Redator));
    let req = RouteRequirement::roles([Role::Admin]);
    let first = decide(&session, &req);
    for _ in 0..3 {
        assert_eq!(decide(&session, &req), first);
    }
}

// =============================================================
// check / redirect paths
// =============================================================

#[test]
fn public_routes_allow_everyone() {
    assert_eq!(check(&Session::Anonymous, None), Decision::Allow);
    assert_eq!(check(&signed_in(Some(Role::Reader)), None), Decision::Allow);
}

#[test]
fn check_delegates_for_protected_routes() {
    let req = RouteRequirement::staff();
    assert_eq!(check(&Session::Anonymous, Some(&req)), Decision::RedirectLogin);
    assert_eq!(check(&signed_in(Some(Role::Admin)), Some(&req)), Decision::Allow);
}

#[test]
fn redirect_paths() {
    assert_eq!(Decision::Allow.redirect_path(), None);
    assert_eq!(Decision::RedirectLogin.redirect_path(), Some(LOGIN_PATH));
    assert_eq!(Decision::RedirectHome.redirect_path(), Some(HOME_PATH));
}

#[test]
fn staff_requirement_lists_three_roles() {
    let roles: Vec<Role> = RouteRequirement::staff().iter().collect();
    assert_eq!(roles, vec![Role::Admin, Role::Editor, Role::Redator]);
}
