//! # theclub
//!
//! Command-line client for The Club newspaper API: log in, log out, inspect
//! the current session and check which routes it opens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the same `SessionStore` as the browser client, with the token kept
//! in a file (`~/.theclub/token` by default) instead of `localStorage`. Every
//! command other than `login`, `register` and `routes` starts by hydrating
//! from that file, so each run sees what the backend currently says about
//! the token.
//!
//! DESIGN
//! ======
//! One `run_*` function per subcommand. Session outcomes the store reports as
//! values become `CliError`s here so the process exits non-zero on them.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use theclub::config::ConfigError;
use theclub::guard::RouteRequirement;
use theclub::routes::{ROUTES, find_route, landing_path, requirement_for};
use theclub::session::{ClearReason, FileStorage, HydrateOutcome, LoginOutcome, SessionStore};
use theclub::{ApiClient, ApiConfig, BackendError, Decision, LoginFailure, Session, check};
use tracing_subscriber::filter::LevelFilter;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

/// Token file location under the home directory.
const TOKEN_FILE_SUFFIX: [&str; 2] = [".theclub", "token"];

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http client setup failed: {0}")]
    Backend(#[from] BackendError),
    #[error("{0}")]
    Failure(#[from] LoginFailure),
    #[error("cannot locate home directory; pass --token-file or set THECLUB_TOKEN_FILE")]
    NoHomeDir,
    #[error("not logged in")]
    NotLoggedIn,
    #[error("stored session discarded ({0:?}); log in again")]
    SessionDiscarded(ClearReason),
    #[error("login result discarded")]
    Superseded,
}

#[derive(Parser, Debug)]
#[command(name = "theclub", about = "Staff session tool for The Club newspaper API")]
struct Cli {
    /// API base URL, e.g. http://localhost:8081/api
    #[arg(long, env = "THECLUB_API_BASE_URL")]
    base_url: Option<String>,

    /// Where the session token is kept between runs.
    #[arg(long, env = "THECLUB_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and keep the token for later commands.
    Login(LoginArgs),
    Logout,
    /// Show who the stored token belongs to.
    Whoami,
    /// Show what the route guard decides for a path.
    Check { path: String },
    /// Create a reader account.
    Register(RegisterArgs),
    /// List known routes and who may open them.
    Routes,
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long, env = "THECLUB_SENHA", hide_env_values = true)]
    senha: String,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    nome: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "THECLUB_SENHA", hide_env_values = true)]
    senha: String,
}

type Store = SessionStore<ApiClient, FileStorage>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if matches!(cli.command, Command::Routes) {
        for line in route_lines() {
            println!("{line}");
        }
        return Ok(());
    }

    let store = build_store(cli.base_url.as_deref(), cli.token_file)?;
    match cli.command {
        Command::Login(args) => run_login(&store, args).await,
        Command::Logout => run_logout(&store).await,
        Command::Whoami => run_whoami(&store).await,
        Command::Check { path } => run_check(&store, &path).await,
        Command::Register(args) => run_register(&store, args).await,
        Command::Routes => Ok(()),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_store(base_url: Option<&str>, token_file: Option<PathBuf>) -> Result<Store, CliError> {
    let mut config = ApiConfig::from_env()?;
    if let Some(base_url) = base_url {
        config = ApiConfig { timeouts: config.timeouts, ..ApiConfig::new(base_url)? };
    }
    let token_file = resolve_token_file(token_file, dirs::home_dir().as_deref())?;
    tracing::debug!(base_url = %config.base_url, token_file = %token_file.display(), "cli configured");
    Ok(SessionStore::new(ApiClient::new(&config)?, FileStorage::new(token_file)))
}

fn resolve_token_file(explicit: Option<PathBuf>, home: Option<&Path>) -> Result<PathBuf, CliError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let home = home.ok_or(CliError::NoHomeDir)?;
    Ok(TOKEN_FILE_SUFFIX.iter().fold(home.to_path_buf(), |path, part| path.join(part)))
}

async fn run_login(store: &Store, args: LoginArgs) -> Result<(), CliError> {
    match store.login(&args.email, &args.senha).await {
        LoginOutcome::Success { role } => {
            println!("{}", describe_session(&store.current_session()));
            println!("landing: {}", landing_path(role));
            Ok(())
        }
        LoginOutcome::Failure(failure) => Err(failure.into()),
        LoginOutcome::Superseded => Err(CliError::Superseded),
    }
}

async fn run_logout(store: &Store) -> Result<(), CliError> {
    // Restore first so the backend can be told which session ended.
    store.hydrate().await;
    store.logout().await;
    println!("logged out");
    Ok(())
}

async fn run_whoami(store: &Store) -> Result<(), CliError> {
    match store.hydrate().await {
        HydrateOutcome::Restored { .. } => {
            println!("{}", describe_session(&store.current_session()));
            Ok(())
        }
        HydrateOutcome::Cleared(reason) => Err(CliError::SessionDiscarded(reason)),
        HydrateOutcome::NoToken | HydrateOutcome::Superseded => Err(CliError::NotLoggedIn),
    }
}

async fn run_check(store: &Store, path: &str) -> Result<(), CliError> {
    store.hydrate().await;
    let session = store.current_session();
    let decision = check(&session, requirement_for(path).as_ref());
    let title = find_route(path).map_or("unknown route", |route| route.title);
    println!("{path} [{title}]: {}", describe_decision(decision));
    Ok(())
}

async fn run_register(store: &Store, args: RegisterArgs) -> Result<(), CliError> {
    let msg = store.register(&args.nome, &args.email, &args.senha).await?;
    println!("{}", msg.as_deref().unwrap_or("registered; log in to continue"));
    Ok(())
}

fn describe_session(session: &Session) -> String {
    match session.identity() {
        Some(identity) => {
            let role = identity.role.map_or("no role", |role| role.as_str());
            match &identity.email {
                Some(email) if *email != identity.display_name => {
                    format!("{} <{}> ({})", identity.display_name, email, role)
                }
                _ => format!("{} ({})", identity.display_name, role),
            }
        }
        None => "anonymous".to_owned(),
    }
}

fn describe_decision(decision: Decision) -> String {
    match decision.redirect_path() {
        None => "allow".to_owned(),
        Some(path) => format!("redirect {path}"),
    }
}

fn access_label(requirement: Option<&RouteRequirement>) -> String {
    match requirement {
        None => "public".to_owned(),
        Some(req) if !req.is_role_gated() => "signed in".to_owned(),
        Some(req) => req.iter().map(|role| role.as_str()).collect::<Vec<_>>().join(","),
    }
}

fn route_lines() -> Vec<String> {
    let width = ROUTES.iter().map(|route| route.pattern.len()).max().unwrap_or_default();
    ROUTES
        .iter()
        .map(|route| {
            let access = access_label(route.access.requirement().as_ref());
            format!("{:width$}  {:24}  {}", route.pattern, access, route.title)
        })
        .collect()
}
