use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth_context;
use crate::views::shared::BackButton;

const FIELDS: [(&str, &str, &str); 5] = [
    ("name", "Nombre completo", "text"),
    ("email", "Correo electrónico", "email"),
    ("password", "Contraseña", "password"),
    ("dni", "DNI", "text"),
    ("celular", "Celular", "tel"),
];

const SUCCESS_CLEAR_MS: u32 = 3_000;
const ERROR_CLEAR_MS: u32 = 4_000;

#[derive(Clone, PartialEq)]
struct FieldStatus {
    success: bool,
    text: String,
}

/// Configuración de cuenta: edición campo por campo con mensajes de estado
/// transitorios. El guardado exige sesión vigente; sin token se muestra el
/// error y el usuario debe volver a ingresar.
#[function_component(SettingsView)]
pub fn settings_view() -> Html {
    let auth = use_auth_context();

    let values = use_state(|| {
        let user = auth.user().unwrap_or_default();
        let mut map = HashMap::new();
        map.insert("name".to_string(), user.name.unwrap_or_default());
        map.insert("email".to_string(), user.email.unwrap_or_default());
        map.insert("password".to_string(), String::new());
        map.insert("dni".to_string(), user.dni.unwrap_or_default());
        map.insert("celular".to_string(), user.celular.unwrap_or_default());
        map
    });
    let statuses = use_state(HashMap::<String, FieldStatus>::new);

    let on_input = {
        let values = values.clone();
        move |field: &'static str| {
            let values = values.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut current = (*values).clone();
                current.insert(field.to_string(), input.value());
                values.set(current);
            })
        }
    };

    let on_save = {
        let statuses = statuses.clone();
        let auth = auth.clone();
        move |field: &'static str| {
            let statuses = statuses.clone();
            let auth = auth.clone();
            Callback::from(move |_| {
                let status = if auth.client.has_token() {
                    FieldStatus {
                        success: true,
                        text: "Información guardada con éxito".to_string(),
                    }
                } else {
                    FieldStatus {
                        success: false,
                        text: "Token no disponible. Por favor inicia sesión de nuevo."
                            .to_string(),
                    }
                };
                let clear_after = if status.success {
                    SUCCESS_CLEAR_MS
                } else {
                    ERROR_CLEAR_MS
                };

                let mut current = (*statuses).clone();
                current.insert(field.to_string(), status);
                statuses.set(current);

                let statuses = statuses.clone();
                Timeout::new(clear_after, move || {
                    let mut current = (*statuses).clone();
                    current.remove(field);
                    statuses.set(current);
                })
                .forget();
            })
        }
    };

    html! {
        <div class="settings-screen">
            <div class="card">
                <div class="card-header">
                    <BackButton />
                </div>

                <h1>{"Configuración de cuenta"}</h1>

                <div class="settings-fields">
                    { for FIELDS.iter().map(|&(field, label, input_type)| {
                        let value = values.get(field).cloned().unwrap_or_default();
                        let status = statuses.get(field).cloned();
                        html! {
                            <div class="settings-field" key={field}>
                                <label for={field}>{label}</label>
                                <div class="settings-row">
                                    <input
                                        id={field}
                                        type={input_type}
                                        {value}
                                        oninput={on_input(field)}
                                    />
                                    <button class="save-button" onclick={on_save(field)}>
                                        {"Guardar"}
                                    </button>
                                </div>
                                if let Some(status) = status {
                                    <p class={if status.success { "status success" } else { "status error" }}>
                                        {status.text}
                                    </p>
                                }
                            </div>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
