use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth_context;
use crate::models::{password_strength, RegisterRequest};
use crate::router::Route;
use crate::services::auth_service;

/// Espera antes de volver a /login tras un registro exitoso.
const REDIRECT_DELAY_MS: u32 = 2_000;

#[function_component(RegisterView)]
pub fn register_view() -> Html {
    let auth = use_auth_context();
    let navigator = use_navigator().expect("router no montado");

    let form = use_state(RegisterRequest::default);
    let field_errors = use_state(HashMap::<String, String>::new);
    let global_error = use_state(|| None::<String>);
    let success = use_state(|| false);
    let loading = use_state(|| false);

    let update_field = {
        let form = form.clone();
        move |apply: fn(&mut RegisterRequest, String)| {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut current = (*form).clone();
                apply(&mut current, input.value());
                form.set(current);
            })
        }
    };

    let on_name = update_field(|f, v| f.name = v);
    let on_email = update_field(|f, v| f.email = v);
    let on_password = update_field(|f, v| f.password = v);
    let on_confirmation = update_field(|f, v| f.password_confirmation = v);

    let on_submit = {
        let form = form.clone();
        let field_errors = field_errors.clone();
        let global_error = global_error.clone();
        let success = success.clone();
        let loading = loading.clone();
        let auth = auth.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *loading {
                return;
            }

            global_error.set(None);
            let request = (*form).clone();

            let client_errors = request.validate();
            if !client_errors.is_empty() {
                field_errors.set(client_errors);
                global_error.set(Some(
                    "Por favor corrige los errores en el formulario".to_string(),
                ));
                return;
            }
            field_errors.set(HashMap::new());
            loading.set(true);

            let field_errors = field_errors.clone();
            let global_error = global_error.clone();
            let success = success.clone();
            let loading = loading.clone();
            let auth = auth.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::register(&auth.client, &request).await {
                    Ok(()) => {
                        success.set(true);
                        let navigator = navigator.clone();
                        Timeout::new(REDIRECT_DELAY_MS, move || {
                            navigator.push(&Route::Login);
                        })
                        .forget();
                    }
                    Err(error) => {
                        log::error!("❌ Error al registrar: {}", error);
                        match error.field_errors() {
                            // Errores del backend con forma reconocida: en línea
                            Some(backend_errors) => field_errors.set(backend_errors.clone()),
                            None => global_error.set(Some(error.to_string())),
                        }
                        loading.set(false);
                    }
                }
            });
        })
    };

    let strength = password_strength(&form.password);
    let strength_class = match strength {
        0 | 1 => "strength weak",
        2 | 3 => "strength medium",
        _ => "strength strong",
    };

    let field_error = |name: &str| -> Html {
        match field_errors.get(name) {
            Some(message) => html! { <p class="field-error">{message.clone()}</p> },
            None => html! {},
        }
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <div class="auth-logo">
                    <img src="/imgs/app_user_logo.png" alt="Logo" />
                </div>

                if let Some(message) = (*global_error).clone() {
                    <div class="error-banner"><p>{message}</p></div>
                }
                if *success {
                    <div class="success-banner"><p>{"¡Registro exitoso! Redirigiendo..."}</p></div>
                }

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="name">{"Nombre completo"}</label>
                        <input id="name" type="text" value={form.name.clone()} oninput={on_name} />
                        {field_error("name")}
                    </div>

                    <div class="form-group">
                        <label for="email">{"Correo electrónico"}</label>
                        <input id="email" type="email" value={form.email.clone()} oninput={on_email} />
                        {field_error("email")}
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input id="password" type="password" value={form.password.clone()} oninput={on_password} />
                        if !form.password.is_empty() {
                            <div class={strength_class}>
                                <div class="strength-bar" style={format!("width: {}%", strength as u32 * 25)}></div>
                            </div>
                        }
                        {field_error("password")}
                    </div>

                    <div class="form-group">
                        <label for="password_confirmation">{"Confirmar contraseña"}</label>
                        <input
                            id="password_confirmation"
                            type="password"
                            value={form.password_confirmation.clone()}
                            oninput={on_confirmation}
                        />
                        {field_error("password_confirmation")}
                    </div>

                    <div class="auth-actions">
                        <button type="submit" class="primary" disabled={*loading}>
                            if *loading { {"Registrando..."} } else { {"Crear cuenta"} }
                        </button>
                        <Link<Route> to={Route::Login} classes="secondary link-button">
                            {"Volver al login"}
                        </Link<Route>>
                    </div>
                </form>
            </div>
        </div>
    }
}
