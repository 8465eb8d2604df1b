//! Staff dashboard: who is signed in, the admin sections their role opens,
//! and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing route for staff after login. The guard keeps readers and
//! anonymous visitors out, and after logout it is what moves the page to the
//! login view.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use theclub::routes::{Access, DASHBOARD_PATH, ROUTES, RouteDef};
use theclub::session::Role;

use crate::state::session::SessionHandle;
use crate::util::auth::{install_route_guard, is_allowed};

/// Admin sections `role` may open, dashboard excluded. Parameterised routes
/// (editing a given article) are reached from their lists, not linked here.
pub fn section_links(role: Option<Role>) -> Vec<&'static RouteDef> {
    ROUTES
        .iter()
        .filter(|route| route.access != Access::Public)
        .filter(|route| route.pattern != DASHBOARD_PATH && !route.pattern.contains(':'))
        .filter(|route| route.access.requirement().is_some_and(|req| !req.is_role_gated() || req.admits(role)))
        .collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let handle = expect_context::<SessionHandle>();
    let session = handle.view;
    let location = use_location();
    let navigate = use_navigate();

    install_route_guard(session, location.pathname, navigate);

    // The guard sends the now-anonymous session to the login view.
    let on_logout = move |_| handle.logout();

    view! {
        <Show
            when=move || is_allowed(&session.get(), DASHBOARD_PATH)
            fallback=|| view! { <div class="dashboard-page"><p>"Redirecionando..."</p></div> }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__title">"Painel"</span>
                    <span class="toolbar__spacer"></span>
                    <span class="toolbar__self">{move || session.get().badge().unwrap_or_default()}</span>
                    <button class="btn toolbar__logout" on:click=on_logout title="Sair">
                        "Sair"
                    </button>
                </header>
                <nav class="dashboard-page__sections">
                    {move || {
                        section_links(session.get().role())
                            .into_iter()
                            .map(|route| {
                                view! {
                                    <a class="dashboard-page__section" href=route.pattern>
                                        {route.title}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>
            </div>
        </Show>
    }
}
