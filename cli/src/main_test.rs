use super::*;
use theclub::session::{Identity, Role};

fn signed_in(role: Option<Role>, email: Option<&str>) -> Session {
    Session::Authenticated {
        token: "T".to_owned(),
        identity: Identity {
            id: Some(1),
            display_name: "Ana".to_owned(),
            email: email.map(str::to_owned),
            role,
        },
    }
}

#[test]
fn explicit_token_file_wins() {
    let path = resolve_token_file(Some(PathBuf::from("/tmp/t")), Some(Path::new("/home/ana"))).unwrap();
    assert_eq!(path, PathBuf::from("/tmp/t"));
}

#[test]
fn token_file_defaults_under_home() {
    let path = resolve_token_file(None, Some(Path::new("/home/ana"))).unwrap();
    assert_eq!(path, Path::new("/home/ana").join(".theclub").join("token"));
}

#[test]
fn token_file_without_home_is_an_error() {
    assert!(matches!(resolve_token_file(None, None), Err(CliError::NoHomeDir)));
}

#[test]
fn decisions_render_their_redirect() {
    assert_eq!(describe_decision(Decision::Allow), "allow");
    assert_eq!(describe_decision(Decision::RedirectLogin), "redirect /admin/login");
    assert_eq!(describe_decision(Decision::RedirectHome), "redirect /");
}

#[test]
fn access_labels() {
    assert_eq!(access_label(None), "public");
    assert_eq!(access_label(Some(&RouteRequirement::authenticated())), "signed in");
    assert_eq!(access_label(Some(&RouteRequirement::staff())), "ADMIN,EDITOR,REDATOR");
}

#[test]
fn route_lines_cover_every_route() {
    let lines = route_lines();
    assert_eq!(lines.len(), ROUTES.len());
    assert!(lines.iter().any(|line| line.starts_with("/admin/usuarios") && line.contains("ADMIN")));
}

#[test]
fn session_descriptions() {
    assert_eq!(describe_session(&Session::Anonymous), "anonymous");
    assert_eq!(describe_session(&signed_in(Some(Role::Editor), Some("ana@b.com"))), "Ana <ana@b.com> (EDITOR)");
    assert_eq!(describe_session(&signed_in(None, None)), "Ana (no role)");
}

#[test]
fn login_command_parses() {
    let cli = Cli::try_parse_from(["theclub", "login", "--email", "a@b.com", "--senha", "x"]).unwrap();
    let Command::Login(args) = cli.command else {
        panic!("expected login");
    };
    assert_eq!(args.email, "a@b.com");
    assert_eq!(args.senha, "x");
}

#[test]
fn check_command_takes_a_path() {
    let cli = Cli::try_parse_from(["theclub", "--token-file", "/tmp/t", "check", "/admin/usuarios"]).unwrap();
    assert_eq!(cli.token_file, Some(PathBuf::from("/tmp/t")));
    assert!(matches!(cli.command, Command::Check { path } if path == "/admin/usuarios"));
}
