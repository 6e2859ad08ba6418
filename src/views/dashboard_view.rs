use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth_context;
use crate::models::User;
use crate::router::Route;
use crate::services::auth_service;
use crate::utils::{format_date_es, CancelFlag};
use crate::views::recent_requests::RecentRequests;
use crate::views::shared::LoadingIndicator;

#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    let auth = use_auth_context();

    let user_data = use_state(|| None::<User>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    // Validar la sesión contra el backend al entrar al dashboard
    {
        let auth = auth.clone();
        let user_data = user_data.clone();
        let loading = loading.clone();
        let error = error.clone();
        let token = auth.state.session.as_ref().map(|s| s.token.clone());

        use_effect_with(token, move |_| {
            let cancel = CancelFlag::new();
            let in_flight = cancel.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::fetch_current_user(&auth.client).await {
                    Ok(Some(user)) => {
                        if !in_flight.is_cancelled() {
                            user_data.set(Some(user));
                            loading.set(false);
                        }
                    }
                    Ok(None) => {
                        // Respuesta sin perfil: usar el de la sesión guardada
                        if !in_flight.is_cancelled() {
                            user_data.set(auth.user());
                            loading.set(false);
                        }
                    }
                    Err(api_error) if api_error.is_unauthorized() => auth.handle_unauthorized(),
                    Err(api_error) => {
                        log::error!("❌ Error al obtener datos: {}", api_error);
                        if !in_flight.is_cancelled() {
                            error.set(Some(api_error.to_string()));
                            loading.set(false);
                        }
                    }
                }
            });

            move || cancel.cancel()
        });
    }

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_| auth.logout.emit(()))
    };

    if *loading {
        return html! { <LoadingIndicator message="Cargando dashboard..." /> };
    }

    if let Some(message) = (*error).clone() {
        return html! {
            <div class="dashboard-screen">
                <div class="error-panel">
                    <p class="error-title">{"Error"}</p>
                    <p>{message}</p>
                    <button class="danger" onclick={on_logout}>{"Volver al Login"}</button>
                </div>
            </div>
        };
    }

    let display_name = user_data
        .as_ref()
        .and_then(|u| u.name.clone())
        .unwrap_or_else(|| "Usuario".to_string());
    let display_email = user_data.as_ref().and_then(|u| u.email.clone());
    let display_role = user_data.as_ref().and_then(|u| u.role.clone());
    let member_since = user_data
        .as_ref()
        .and_then(|u| u.created_at.as_deref())
        .map(format_date_es);

    html! {
        <div class="dashboard-screen">
            <div class="card">
                <h1 class="user-name">{display_name}</h1>
                if let Some(email) = display_email {
                    <p class="user-detail muted">{email}</p>
                }
                if let Some(role) = display_role {
                    <p class="user-detail muted">{role}</p>
                }
                if let Some(joined) = member_since {
                    <p class="user-detail muted">{format!("Miembro desde el {}", joined)}</p>
                }

                <nav class="dashboard-nav">
                    <Link<Route> to={Route::Settings}>{"Configuración"}</Link<Route>>
                    <Link<Route> to={Route::AddRequest}>{"Añadir requerimiento"}</Link<Route>>
                    <button class="logout-button" onclick={on_logout}>{"Cerrar sesión"}</button>
                </nav>

                <RecentRequests />
            </div>
        </div>
    }
}
