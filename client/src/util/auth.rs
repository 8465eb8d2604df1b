//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page installs the same guard, so redirects behave identically on
//! first load, after logout, and on history navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use theclub::check;
use theclub::routes::requirement_for;

use crate::state::session::SessionView;

/// Where the guard sends the user for `path`, if anywhere. Nothing is
/// decided before hydrate completes.
pub fn guard_target(view: &SessionView, path: &str) -> Option<&'static str> {
    if !view.hydrated {
        return None;
    }
    check(&view.session, requirement_for(path).as_ref()).redirect_path()
}

/// Whether `path` may render for this session right now.
pub fn is_allowed(view: &SessionView, path: &str) -> bool {
    view.hydrated && guard_target(view, path).is_none()
}

/// Re-run the guard whenever the session or location changes and replace the
/// history entry with the redirect target.
pub fn install_route_guard<F>(session: RwSignal<SessionView>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let view = session.get();
        let path = pathname.get();
        if let Some(target) = guard_target(&view, &path) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
