use yew::prelude::*;

use crate::hooks::use_auth::UseAuthHandle;
use crate::models::RecentRequest;
use crate::services::request_service;
use crate::utils::CancelFlag;

#[derive(Clone, PartialEq)]
pub struct RecentRequestsState {
    pub requests: Vec<RecentRequest>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Requerimientos recientes del dashboard. Un solo fetch al montar; el error
/// se muestra en la propia sección, sin reintento.
#[hook]
pub fn use_recent_requests(auth: &UseAuthHandle) -> UseStateHandle<RecentRequestsState> {
    let state = use_state(|| RecentRequestsState {
        requests: Vec::new(),
        loading: true,
        error: None,
    });

    {
        let state = state.clone();
        let auth = auth.clone();
        use_effect_with((), move |_| {
            let cancel = CancelFlag::new();
            let in_flight = cancel.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match request_service::fetch_recent_requests(&auth.client).await {
                    Ok(requests) => {
                        if !in_flight.is_cancelled() {
                            state.set(RecentRequestsState {
                                requests,
                                loading: false,
                                error: None,
                            });
                        }
                    }
                    Err(error) if error.is_unauthorized() => auth.handle_unauthorized(),
                    Err(error) => {
                        log::error!("❌ Error al cargar requerimientos: {}", error);
                        if !in_flight.is_cancelled() {
                            state.set(RecentRequestsState {
                                requests: Vec::new(),
                                loading: false,
                                error: Some(
                                    "No se pudieron cargar los requerimientos.".to_string(),
                                ),
                            });
                        }
                    }
                }
            });

            move || cancel.cancel()
        });
    }

    state
}
