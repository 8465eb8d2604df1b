//! Staff login with email and password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use theclub::LoginOutcome;
use theclub::routes::{REGISTER_PATH, landing_path};
use theclub::session::validate_credentials;

use crate::state::session::SessionHandle;

/// Trimmed email and the password as typed, or the message to show.
pub fn validate_login_input(email: &str, senha: &str) -> Result<(String, String), String> {
    validate_credentials(email, senha)
        .map(|(email, senha)| (email.to_owned(), senha.to_owned()))
        .map_err(|failure| failure.message)
}

/// Where to go after `outcome`, or the message to show. `Ok(None)` means the
/// result was discarded and the page should do nothing.
pub fn resolve_outcome(outcome: LoginOutcome) -> Result<Option<&'static str>, String> {
    match outcome {
        LoginOutcome::Success { role } => Ok(Some(landing_path(role))),
        LoginOutcome::Failure(failure) => Err(failure.message),
        LoginOutcome::Superseded => Ok(None),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let handle = expect_context::<SessionHandle>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // A login still in flight when the page goes away must not land later.
    on_cleanup(move || handle.cancel_pending_login());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, senha_value) = match validate_login_input(&email.get(), &senha.get()) {
            Ok(input) => input,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = handle.login(email_value, senha_value).await;
            match resolve_outcome(outcome) {
                Ok(Some(target)) => navigate(target, NavigateOptions::default()),
                Ok(None) => {}
                Err(message) => {
                    error.set(Some(message));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"The Club"</h1>
                <p class="login-card__subtitle">"Área restrita"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="voce@exemplo.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Senha"
                        prop:value=move || senha.get()
                        on:input=move |ev| senha.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
                {move || error.get().map(|message| view! { <p class="login-error">{message}</p> })}
                <a class="login-card__link" href=REGISTER_PATH>"Criar conta"</a>
            </div>
        </div>
    }
}
