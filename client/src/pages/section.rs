//! Frame for every other route in the table: public sections and the admin
//! screens past the dashboard. Content comes from their own views; this page
//! owns the guard and the heading.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use theclub::routes::{DASHBOARD_PATH, find_route};

use crate::state::session::SessionHandle;
use crate::util::auth::{install_route_guard, is_allowed};

/// Heading for `path`, falling back to the section root.
pub fn section_title(path: &str) -> &'static str {
    find_route(path).map_or("The Club", |route| route.title)
}

#[component]
pub fn SectionPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>().view;
    let location = use_location();
    let pathname = location.pathname;

    install_route_guard(session, pathname, use_navigate());

    view! {
        <Show
            when=move || is_allowed(&session.get(), &pathname.get())
            fallback=|| view! { <div class="section-page"><p>"Redirecionando..."</p></div> }
        >
            <div class="section-page">
                <header class="section-page__header">
                    <h1>{move || section_title(&pathname.get())}</h1>
                    <Show when=move || pathname.get().starts_with("/admin/")>
                        <a href=DASHBOARD_PATH>"Voltar ao painel"</a>
                    </Show>
                </header>
            </div>
        </Show>
    }
}
