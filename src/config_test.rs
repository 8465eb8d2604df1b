use std::sync::{Mutex, MutexGuard};

use super::*;

// Env vars are process-global; every test in this file holds this lock.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`env_lock`].
unsafe fn clear_api_env() {
    unsafe {
        std::env::remove_var("THECLUB_API_BASE_URL");
        std::env::remove_var("THECLUB_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("THECLUB_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_defaults() {
    let _guard = env_lock();
    unsafe { clear_api_env() };

    let cfg = ApiConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        ApiTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg, ApiConfig::default());
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_lock();
    unsafe {
        clear_api_env();
        std::env::set_var("THECLUB_API_BASE_URL", "https://jornal.example.edu/api/");
        std::env::set_var("THECLUB_REQUEST_TIMEOUT_SECS", "5");
        std::env::set_var("THECLUB_CONNECT_TIMEOUT_SECS", "2");
    }

    let cfg = ApiConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "https://jornal.example.edu/api");
    assert_eq!(cfg.timeouts, ApiTimeouts { request_secs: 5, connect_secs: 2 });

    unsafe { clear_api_env() };
}

#[test]
fn from_env_ignores_unparsable_timeouts() {
    let _guard = env_lock();
    unsafe {
        clear_api_env();
        std::env::set_var("THECLUB_REQUEST_TIMEOUT_SECS", "soon");
    }

    let cfg = ApiConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);

    unsafe { clear_api_env() };
}

#[test]
fn from_env_rejects_non_http_base_url() {
    let _guard = env_lock();
    unsafe {
        clear_api_env();
        std::env::set_var("THECLUB_API_BASE_URL", "localhost:8081");
    }

    assert_eq!(
        ApiConfig::from_env().unwrap_err(),
        ConfigError::InvalidBaseUrl("localhost:8081".to_owned())
    );

    unsafe { clear_api_env() };
}

#[test]
fn new_trims_trailing_slashes() {
    let cfg = ApiConfig::new("http://127.0.0.1:8081/api//").unwrap();
    assert_eq!(cfg.base_url, "http://127.0.0.1:8081/api");
}
