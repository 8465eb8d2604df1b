//! Public front page.

use leptos::prelude::*;
use theclub::routes::{DASHBOARD_PATH, LOGIN_PATH, REGISTER_PATH};

use crate::state::session::SessionHandle;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionHandle>().view;

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"The Club"</h1>
                {move || {
                    let view = session.get();
                    match view.badge() {
                        Some(badge) => {
                            let staff = view.role().is_some_and(|role| role.is_staff());
                            view! {
                                <span class="home-page__self">
                                    {badge}
                                    <Show when=move || staff>
                                        " · "
                                        <a href=DASHBOARD_PATH>"Painel"</a>
                                    </Show>
                                </span>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <span class="home-page__self">
                                    <a href=LOGIN_PATH>"Entrar"</a>
                                    " · "
                                    <a href=REGISTER_PATH>"Criar conta"</a>
                                </span>
                            }
                                .into_any()
                        }
                    }
                }}
            </header>
            <nav class="home-page__sections">
                <a href="/editais">"Editais"</a>
                <a href="/eventos">"Eventos"</a>
                <a href="/categorias">"Categorias"</a>
            </nav>
        </div>
    }
}
