// ============================================================================
// USE_REQUEST_BUILDER - Armado y envío del requerimiento
// ============================================================================
// Acumula partidas sobre el borrador, deriva precios del tarifario y maneja
// la secuencia de envío: Draft → Preview → ConfirmPending → Submitted →
// Redirected. Al confirmar: POST del payload, descarga del PDF de la orden
// y redirección diferida al dashboard.
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_auth::UseAuthHandle;
use crate::models::{LineItem, RequestDraft, RequisitionPayload};
use crate::pricing;
use crate::router::Route;
use crate::services::request_service;
use crate::utils::{alert, download};

/// Espera antes de volver al dashboard tras un envío exitoso.
const REDIRECT_DELAY_MS: u32 = 2_000;

/// Etapas del envío. Las transiciones son iniciadas por el usuario salvo
/// Submitted → Redirected, que corre sola tras la descarga.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SubmitStage {
    Draft,
    Preview,
    ConfirmPending,
    Submitted,
    Redirected,
}

impl SubmitStage {
    pub fn open_preview(self) -> Self {
        match self {
            SubmitStage::Draft => SubmitStage::Preview,
            other => other,
        }
    }

    pub fn back_to_draft(self) -> Self {
        match self {
            SubmitStage::Preview | SubmitStage::ConfirmPending => SubmitStage::Draft,
            other => other,
        }
    }

    pub fn open_confirm(self) -> Self {
        match self {
            SubmitStage::Preview => SubmitStage::ConfirmPending,
            other => other,
        }
    }

    pub fn cancel_confirm(self) -> Self {
        match self {
            SubmitStage::ConfirmPending => SubmitStage::Preview,
            other => other,
        }
    }
}

/// Lista ordenada de partidas con total corrido.
///
/// Invariante: el total siempre es la suma de los subtotales de las partidas
/// restantes. La baja descuenta el subtotal ALMACENADO de la partida, no el
/// precio por unidad.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LineItemList {
    items: Vec<LineItem>,
    total: u64,
}

impl LineItemList {
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Alta de partida desde el borrador. Si el rango no tiene precio o el
    /// subtotal no se puede derivar, no pasa nada: es una guardia, no un
    /// error.
    pub fn add(&mut self, draft: &RequestDraft, unit_name: Option<&str>) -> bool {
        let Some(unit_name) = unit_name else {
            return false;
        };
        let Some(unit_price) = pricing::unit_price(unit_name) else {
            return false;
        };
        let Some(subtotal) = pricing::subtotal(unit_name, draft.duration, draft.quantity)
        else {
            return false;
        };

        self.items.push(LineItem {
            provider_id: draft.provider_id,
            service_id: draft.service_id,
            quantity: draft.quantity,
            unit_id: draft.unit_id,
            duration: draft.duration,
            unit_price,
            subtotal,
        });
        self.total += subtotal;
        true
    }

    /// Baja por índice; descuenta el subtotal almacenado de la partida.
    pub fn remove(&mut self, index: usize) -> Option<LineItem> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.total -= removed.subtotal;
        Some(removed)
    }
}

#[derive(Clone, PartialEq)]
pub struct BuilderState {
    pub draft: RequestDraft,
    pub items: LineItemList,
    pub stage: SubmitStage,
    /// true mientras el POST está en vuelo (bloquea el doble envío)
    pub submitting: bool,
}

#[derive(Clone, PartialEq)]
pub struct UseRequestBuilderHandle {
    pub state: UseStateHandle<BuilderState>,
    pub set_draft: Callback<RequestDraft>,
    /// Recibe el nombre del rango seleccionado (resuelto contra el catálogo)
    pub add_item: Callback<Option<String>>,
    pub remove_item: Callback<usize>,
    pub open_preview: Callback<()>,
    pub back_to_draft: Callback<()>,
    pub open_confirm: Callback<()>,
    pub cancel_confirm: Callback<()>,
    pub confirm: Callback<()>,
}

#[hook]
pub fn use_request_builder(auth: &UseAuthHandle) -> UseRequestBuilderHandle {
    let navigator = use_navigator().expect("router no montado");
    let state = use_state(|| BuilderState {
        draft: RequestDraft::new(),
        items: LineItemList::default(),
        stage: SubmitStage::Draft,
        submitting: false,
    });

    let set_draft = {
        let state = state.clone();
        Callback::from(move |draft: RequestDraft| {
            let mut current = (*state).clone();
            current.draft = draft;
            state.set(current);
        })
    };

    let add_item = {
        let state = state.clone();
        Callback::from(move |unit_name: Option<String>| {
            let mut current = (*state).clone();
            let draft = current.draft.clone();
            if current.items.add(&draft, unit_name.as_deref()) {
                state.set(current);
            }
        })
    };

    let remove_item = {
        let state = state.clone();
        Callback::from(move |index: usize| {
            let mut current = (*state).clone();
            if current.items.remove(index).is_some() {
                state.set(current);
            }
        })
    };

    let open_preview = stage_callback(&state, SubmitStage::open_preview);
    let back_to_draft = stage_callback(&state, SubmitStage::back_to_draft);
    let open_confirm = stage_callback(&state, SubmitStage::open_confirm);
    let cancel_confirm = stage_callback(&state, SubmitStage::cancel_confirm);

    let confirm = {
        let state = state.clone();
        let auth = auth.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let current = (*state).clone();
            if current.submitting || current.stage != SubmitStage::ConfirmPending {
                return;
            }

            // El payload se arma una sola vez y queda inmutable
            let payload = RequisitionPayload::from_parts(
                &current.draft,
                current.items.items(),
                current.items.total(),
            );

            let mut next = current;
            next.submitting = true;
            state.set(next);

            let state = state.clone();
            let auth = auth.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match request_service::submit_request(&auth.client, &payload).await {
                    Ok(response) => {
                        let mut current = (*state).clone();
                        current.stage = SubmitStage::Submitted;
                        current.submitting = false;
                        state.set(current);

                        let redirect = {
                            let state = state.clone();
                            let navigator = navigator.clone();
                            move || {
                                Timeout::new(REDIRECT_DELAY_MS, move || {
                                    let mut current = (*state).clone();
                                    current.stage = SubmitStage::Redirected;
                                    state.set(current);
                                    navigator.push(&Route::Dashboard);
                                })
                                .forget();
                            }
                        };

                        // El envío ya está aceptado; lo que sigue solo afecta
                        // a la descarga de la orden
                        let Some(request_id) = response.request_id else {
                            alert(
                                "La solicitud fue enviada, pero no se pudo descargar la orden de servicio.",
                            );
                            redirect();
                            return;
                        };

                        match request_service::fetch_service_order_pdf(&auth.client, request_id)
                            .await
                        {
                            Ok(bytes) => {
                                let filename = format!("orden_servicio_{}.pdf", request_id);
                                if let Err(error) =
                                    download::save_file(&bytes, &filename, "application/pdf")
                                {
                                    alert(&error);
                                }
                                redirect();
                            }
                            Err(error) if error.is_unauthorized() => auth.handle_unauthorized(),
                            Err(error) => {
                                // La secuencia se detiene; sin reintento
                                alert(&format!(
                                    "No se pudo descargar la orden de servicio. {}",
                                    error
                                ));
                            }
                        }
                    }
                    Err(error) if error.is_unauthorized() => auth.handle_unauthorized(),
                    Err(error) => {
                        log::error!("❌ Error al enviar solicitud: {}", error);
                        alert(
                            "La solicitud no pudo enviarse. Revisa los campos o contacta al admin.",
                        );
                        let mut current = (*state).clone();
                        current.stage = SubmitStage::Draft;
                        current.submitting = false;
                        state.set(current);
                    }
                }
            });
        })
    };

    UseRequestBuilderHandle {
        state,
        set_draft,
        add_item,
        remove_item,
        open_preview,
        back_to_draft,
        open_confirm,
        cancel_confirm,
        confirm,
    }
}

fn stage_callback(
    state: &UseStateHandle<BuilderState>,
    transition: fn(SubmitStage) -> SubmitStage,
) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |_| {
        let mut current = (*state).clone();
        current.stage = transition(current.stage);
        state.set(current);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(unit_id: u64, duration: u32, quantity: u32) -> RequestDraft {
        RequestDraft {
            company_id: Some(1),
            representative_id: Some(2),
            provider_id: Some(3),
            service_id: Some(4),
            unit_id: Some(unit_id),
            duration,
            quantity,
            ..RequestDraft::new()
        }
    }

    fn sum_of(items: &LineItemList) -> u64 {
        items.items().iter().map(|item| item.subtotal).sum()
    }

    #[test]
    fn subtotal_meses_dos_por_tres() {
        let mut items = LineItemList::default();
        assert!(items.add(&draft(1, 2, 3), Some("meses")));
        assert_eq!(items.items()[0].unit_price, 1100);
        assert_eq!(items.items()[0].subtotal, 6600);
        assert_eq!(items.total(), 6600);
    }

    #[test]
    fn rango_desconocido_no_muta_nada() {
        let mut items = LineItemList::default();
        assert!(!items.add(&draft(9, 2, 3), Some("lustros")));
        assert!(!items.add(&draft(9, 2, 3), None));
        assert!(items.is_empty());
        assert_eq!(items.total(), 0);
    }

    #[test]
    fn la_baja_descuenta_el_subtotal_almacenado() {
        // Regresión: la versión anterior descontaba un campo `price` que la
        // partida almacenada no tiene; el campo correcto es `subtotal`.
        let mut items = LineItemList::default();
        items.add(&draft(1, 2, 3), Some("meses")); // 6600
        items.add(&draft(2, 1, 2), Some("semanas")); // 600
        items.add(&draft(5, 1, 1), Some("años")); // 13200

        let removed = items.remove(1).unwrap();
        assert_eq!(removed.subtotal, 600);
        assert_eq!(items.total(), 19_800);
        assert_eq!(items.total(), sum_of(&items));
    }

    #[test]
    fn el_total_siempre_es_la_suma_de_los_subtotales() {
        // Secuencia arbitraria de altas y bajas
        let mut items = LineItemList::default();
        items.add(&draft(1, 1, 1), Some("meses"));
        items.add(&draft(2, 4, 2), Some("semanas"));
        assert_eq!(items.total(), sum_of(&items));

        items.remove(0);
        assert_eq!(items.total(), sum_of(&items));

        items.add(&draft(3, 2, 2), Some("trimestres"));
        items.add(&draft(4, 1, 3), Some("semestres"));
        assert_eq!(items.total(), sum_of(&items));

        items.remove(2);
        items.remove(0);
        assert_eq!(items.total(), sum_of(&items));

        items.remove(0);
        assert!(items.is_empty());
        assert_eq!(items.total(), 0);
    }

    #[test]
    fn baja_fuera_de_rango_es_inocua() {
        let mut items = LineItemList::default();
        items.add(&draft(1, 1, 1), Some("meses"));
        assert!(items.remove(5).is_none());
        assert_eq!(items.items().len(), 1);
        assert_eq!(items.total(), 1100);
    }

    #[test]
    fn transiciones_de_etapa() {
        let stage = SubmitStage::Draft;
        let stage = stage.open_preview();
        assert_eq!(stage, SubmitStage::Preview);
        let stage = stage.open_confirm();
        assert_eq!(stage, SubmitStage::ConfirmPending);
        assert_eq!(stage.cancel_confirm(), SubmitStage::Preview);
        assert_eq!(stage.back_to_draft(), SubmitStage::Draft);

        // Transiciones fuera de orden no mueven la etapa
        assert_eq!(SubmitStage::Draft.open_confirm(), SubmitStage::Draft);
        assert_eq!(SubmitStage::Submitted.back_to_draft(), SubmitStage::Submitted);
    }
}
