// ============================================================================
// USE_AUTH - Session store
// ============================================================================
// Una sola clave en localStorage ({ user, token }). Al arrancar se valida el
// token contra GET /user; un 401 desmonta la sesión. El cliente API sale
// derivado del estado: con sesión lleva token, sin sesión no lleva nada.
// ============================================================================

use yew::prelude::*;

use crate::models::{AuthSession, User};
use crate::services::{auth_service, ApiClient};
use crate::utils::{
    load_from_storage, remove_from_storage, save_to_storage, CancelFlag, STORAGE_KEY_AUTH,
};

#[derive(Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<AuthSession>,
    /// true mientras la restauración de arranque sigue en vuelo
    pub restoring: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthState>,
    /// Cliente API derivado de la sesión vigente
    pub client: ApiClient,
    pub login: Callback<AuthSession>,
    pub logout: Callback<()>,
}

impl UseAuthHandle {
    pub fn is_authenticated(&self) -> bool {
        self.state.session.is_some()
    }

    pub fn user(&self) -> Option<User> {
        self.state.session.as_ref().map(|s| s.user.clone())
    }

    /// Teardown por 401 en cualquier llamada autenticada: storage limpio,
    /// cliente sin Authorization, y el guard del router redirige a /login.
    pub fn handle_unauthorized(&self) {
        log::warn!("🔒 401 recibido, desmontando sesión");
        self.logout.emit(());
    }
}

/// Cliente para el estado de sesión dado. Configuración explícita por
/// cliente: no existe un mapa global de cabeceras.
pub fn client_for(session: Option<&AuthSession>) -> ApiClient {
    match session {
        Some(session) => ApiClient::new().with_token(&session.token),
        None => ApiClient::new(),
    }
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let state = use_state(|| {
        let saved = load_from_storage::<AuthSession>(STORAGE_KEY_AUTH);
        let restoring = saved.is_some();
        AuthState { session: saved, restoring }
    });

    // Restaurar sesión al arrancar. La señal se apaga al desmontar para que
    // una respuesta tardía no toque estado de una pantalla ida.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let cancel = CancelFlag::new();
            let in_flight = cancel.clone();

            if let Some(session) = (*state).session.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    let client = ApiClient::new().with_token(&session.token);
                    match auth_service::fetch_current_user(&client).await {
                        Ok(user) => {
                            let refreshed = AuthSession {
                                user: user.unwrap_or_else(|| session.user.clone()),
                                token: session.token.clone(),
                            };
                            save_to_storage(STORAGE_KEY_AUTH, &refreshed).ok();
                            log::info!("✅ Sesión restaurada desde storage");
                            if !in_flight.is_cancelled() {
                                state.set(AuthState {
                                    session: Some(refreshed),
                                    restoring: false,
                                });
                            }
                        }
                        Err(error) if error.is_unauthorized() => {
                            log::warn!("🔒 Token vencido, desmontando sesión");
                            remove_from_storage(STORAGE_KEY_AUTH).ok();
                            if !in_flight.is_cancelled() {
                                state.set(AuthState { session: None, restoring: false });
                            }
                        }
                        Err(error) => {
                            // Restauración fallida: terminal para esta carga.
                            // El storage queda intacto para el próximo intento.
                            log::error!("❌ No se pudo validar la sesión: {}", error);
                            if !in_flight.is_cancelled() {
                                state.set(AuthState { session: None, restoring: false });
                            }
                        }
                    }
                });
            }

            move || cancel.cancel()
        });
    }

    let login = {
        let state = state.clone();
        Callback::from(move |session: AuthSession| {
            if let Err(error) = save_to_storage(STORAGE_KEY_AUTH, &session) {
                log::error!("❌ No se pudo persistir la sesión: {}", error);
            }
            state.set(AuthState {
                session: Some(session),
                restoring: false,
            });
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            remove_from_storage(STORAGE_KEY_AUTH).ok();
            state.set(AuthState { session: None, restoring: false });
        })
    };

    let client = client_for((*state).session.as_ref());

    UseAuthHandle {
        state,
        client,
        login,
        logout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> AuthSession {
        AuthSession {
            user: User {
                email: Some("ana@acme.pe".into()),
                ..User::default()
            },
            token: "tok-abc".into(),
        }
    }

    #[test]
    fn con_sesion_el_cliente_lleva_token() {
        let client = client_for(Some(&session()));
        assert!(client.has_token());
    }

    #[test]
    fn tras_desmontar_la_sesion_no_hay_authorization() {
        // Propiedad del teardown por 401: el cliente derivado del estado
        // vacío no lleva credenciales en ninguna llamada posterior.
        let client = client_for(None);
        assert!(!client.has_token());
    }
}
