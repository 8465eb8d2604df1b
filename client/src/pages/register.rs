//! Reader sign-up. New accounts log in separately afterwards.

use leptos::prelude::*;
use theclub::routes::LOGIN_PATH;

use crate::state::session::SessionHandle;

/// Shown when the backend confirms without a message of its own.
const REGISTERED: &str = "Cadastro realizado. Faça login.";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let handle = expect_context::<SessionHandle>();

    let nome = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let info = RwSignal::new(None::<String>);
    let done = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set(None);
        let (nome_value, email_value, senha_value) = (nome.get(), email.get(), senha.get());
        leptos::task::spawn_local(async move {
            match handle.register(nome_value, email_value, senha_value).await {
                Ok(msg) => {
                    info.set(Some(msg.unwrap_or_else(|| REGISTERED.to_owned())));
                    done.set(true);
                }
                Err(failure) => info.set(Some(failure.message)),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Criar conta"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Nome"
                        prop:value=move || nome.get()
                        on:input=move |ev| nome.set(event_target_value(&ev))
                    />
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
                    <button class="login-button" type="submit" disabled=move || busy.get() || done.get()>
                        "Cadastrar"
                    </button>
                </form>
                {move || info.get().map(|message| view! { <p class="login-info">{message}</p> })}
                <a class="login-card__link" href=LOGIN_PATH>"Já tenho conta"</a>
            </div>
        </div>
    }
}
