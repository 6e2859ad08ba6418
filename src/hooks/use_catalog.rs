// ============================================================================
// USE_CATALOG - Datos de referencia del formulario
// ============================================================================
// Carga el catálogo completo al montar (fetch conjunto, asignación
// determinista) y los solicitantes filtrados cada vez que cambia la empresa.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth::UseAuthHandle;
use crate::models::{Catalog, CatalogItem};
use crate::services::catalog_service;
use crate::utils::{alert, CancelFlag};

#[derive(Clone, PartialEq)]
pub struct CatalogState {
    pub catalog: Catalog,
    pub loading: bool,
    /// Catálogo ilegible o inalcanzable: las acciones dependientes quedan
    /// deshabilitadas en silencio
    pub load_failed: bool,
    pub filtered_representatives: Vec<CatalogItem>,
}

#[derive(Clone, PartialEq)]
pub struct UseCatalogHandle {
    pub state: UseStateHandle<CatalogState>,
    /// Notificar el cambio de empresa seleccionada (None limpia el filtro)
    pub on_company_change: Callback<Option<u64>>,
}

#[hook]
pub fn use_catalog(auth: &UseAuthHandle) -> UseCatalogHandle {
    let state = use_state(|| CatalogState {
        catalog: Catalog::default(),
        loading: true,
        load_failed: false,
        filtered_representatives: Vec::new(),
    });

    // Una sola señal de vigencia para todo lo asíncrono del hook: la carga
    // inicial y los fetches disparados desde el callback. Se apaga al
    // desmontar la pantalla.
    let cancel = (*use_memo((), |_| CancelFlag::new())).clone();

    {
        let state = state.clone();
        let auth = auth.clone();
        let cancel = cancel.clone();
        use_effect_with((), move |_| {
            let in_flight = cancel.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match catalog_service::load_catalog(&auth.client).await {
                    Ok(catalog) => {
                        if !in_flight.is_cancelled() {
                            let mut current = (*state).clone();
                            current.catalog = catalog;
                            current.loading = false;
                            state.set(current);
                        }
                    }
                    Err(error) if error.is_unauthorized() => auth.handle_unauthorized(),
                    Err(error) => {
                        log::error!("❌ Error al cargar catálogo: {}", error);
                        alert(
                            "No se pudo conectar con el servidor. Verifica tu conexión o backend.",
                        );
                        if !in_flight.is_cancelled() {
                            let mut current = (*state).clone();
                            current.loading = false;
                            current.load_failed = true;
                            state.set(current);
                        }
                    }
                }
            });

            move || cancel.cancel()
        });
    }

    let on_company_change = {
        let state = state.clone();
        let auth = auth.clone();
        let cancel = cancel.clone();
        Callback::from(move |company_id: Option<u64>| {
            let Some(company_id) = company_id else {
                let mut current = (*state).clone();
                current.filtered_representatives.clear();
                state.set(current);
                return;
            };

            let state = state.clone();
            let auth = auth.clone();
            let in_flight = cancel.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match catalog_service::load_company_representatives(&auth.client, company_id)
                    .await
                {
                    Ok(representatives) => {
                        if !in_flight.is_cancelled() {
                            let mut current = (*state).clone();
                            current.filtered_representatives = representatives;
                            state.set(current);
                        }
                    }
                    Err(error) if error.is_unauthorized() => auth.handle_unauthorized(),
                    Err(error) => {
                        // Falla silenciosa: el select queda vacío
                        log::error!("❌ Error al cargar solicitantes: {}", error);
                        if !in_flight.is_cancelled() {
                            let mut current = (*state).clone();
                            current.filtered_representatives.clear();
                            state.set(current);
                        }
                    }
                }
            });
        })
    };

    UseCatalogHandle {
        state,
        on_company_change,
    }
}
