//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use theclub::config::DEFAULT_API_BASE_URL;
use theclub::{ApiClient, ApiConfig, SessionStore};

use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, register::RegisterPage, section::SectionPage,
};
use crate::state::session::{AppStore, SessionHandle};
use crate::util::storage::BrowserStorage;

/// API base URL baked in at build time.
fn api_base_url() -> &'static str {
    option_env!("THECLUB_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}

fn build_store() -> Option<AppStore> {
    let config = match ApiConfig::new(api_base_url()) {
        Ok(config) => config,
        Err(_e) => {
            #[cfg(feature = "csr")]
            log::error!("{_e}; falling back to {DEFAULT_API_BASE_URL}");
            ApiConfig::default()
        }
    };
    match ApiClient::new(&config) {
        Ok(client) => Some(SessionStore::new(client, BrowserStorage)),
        Err(_e) => {
            #[cfg(feature = "csr")]
            log::error!("api client unavailable: {_e}");
            None
        }
    }
}

/// Root application component.
///
/// Builds the one session store, restores the persisted session, and only
/// then renders routes, so no guard ever decides against a half-loaded
/// session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let handle = SessionHandle::new(build_store());
    provide_context(handle);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = handle.hydrate().await;
        log::debug!("session hydrate: {outcome:?}");
    });

    view! {
        <Title text="The Club"/>

        <Router>
            <Show
                when=move || handle.view.get().hydrated
                fallback=|| view! { <p class="app-loading">"Carregando..."</p> }
            >
                <Routes fallback=|| "Página não encontrada.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("editais") view=SectionPage/>
                    <Route path=StaticSegment("eventos") view=SectionPage/>
                    <Route path=StaticSegment("categorias") view=SectionPage/>
                    <Route path=(StaticSegment("noticia"), ParamSegment("id")) view=SectionPage/>
                    <Route path=StaticSegment("cadastro") view=RegisterPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("login")) view=LoginPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=DashboardPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("artigos"), StaticSegment("novo"))
                        view=SectionPage
                    />
                    <Route
                        path=(
                            StaticSegment("admin"),
                            StaticSegment("artigos"),
                            StaticSegment("editar"),
                            ParamSegment("id"),
                        )
                        view=SectionPage
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("editais"), StaticSegment("novo"))
                        view=SectionPage
                    />
                    <Route path=(StaticSegment("admin"), StaticSegment("comentarios")) view=SectionPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("categorias")) view=SectionPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("usuarios")) view=SectionPage/>
                </Routes>
            </Show>
        </Router>
    }
}
