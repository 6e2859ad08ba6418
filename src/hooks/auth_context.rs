// ============================================================================
// AUTH CONTEXT - Compartir la sesión entre pantallas
// ============================================================================
// Usa Context API de Yew para exponer UseAuthHandle a toda la app.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth::{use_auth, UseAuthHandle};

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app y publica el estado de sesión.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth = use_auth();

    html! {
        <ContextProvider<UseAuthHandle> context={auth}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

#[hook]
pub fn use_auth_context() -> UseAuthHandle {
    use_context::<UseAuthHandle>().expect("AuthProvider no montado")
}
