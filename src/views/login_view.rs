use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth_context;
use crate::router::Route;
use crate::services::auth_service;
use crate::utils::{remove_from_storage, STORAGE_KEY_AUTH};
use web_sys::HtmlInputElement;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let auth = use_auth_context();
    let navigator = use_navigator().expect("router no montado");

    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let auth = auth.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *loading {
                return;
            }

            let email_val = (*email).clone();
            let password_val = (*password).clone();
            if email_val.is_empty() || password_val.is_empty() {
                error.set(Some("Completa correo y contraseña".to_string()));
                return;
            }

            error.set(None);
            loading.set(true);

            let error = error.clone();
            let loading = loading.clone();
            let auth = auth.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::login(&auth.client, &email_val, &password_val).await {
                    Ok(session) => {
                        log::info!("✅ Sesión iniciada: {}", email_val);
                        auth.login.emit(session);
                        navigator.push(&Route::Dashboard);
                    }
                    Err(api_error) => {
                        log::error!("❌ Error en login: {}", api_error);
                        // Credenciales viejas fuera: nada queda persistido
                        remove_from_storage(STORAGE_KEY_AUTH).ok();
                        error.set(Some(api_error.to_string()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let on_go_register = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Register))
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <div class="auth-logo">
                    <img src="/imgs/app_user_logo.png" alt="Logo" />
                </div>

                if let Some(message) = (*error).clone() {
                    <div class="error-banner">
                        <p>{message}</p>
                    </div>
                }

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Correo electrónico"}</label>
                        <input
                            id="email"
                            type="email"
                            autocomplete="email"
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            id="password"
                            type="password"
                            autocomplete="current-password"
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>

                    <div class="auth-actions">
                        <button type="submit" class="primary" disabled={*loading}>
                            if *loading {
                                {"Validando..."}
                            } else {
                                {"Ingresar"}
                            }
                        </button>
                        <button type="button" class="secondary" onclick={on_go_register}>
                            {"Registrar"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
