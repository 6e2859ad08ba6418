// ============================================================================
// REQUEST PREVIEW - Orden de servicio antes de confirmar
// ============================================================================
// Renderiza los mismos datos que van en el payload (cabecera, partidas y
// total), el modal de confirmación y el aviso de envío exitoso.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_catalog::CatalogState;
use crate::hooks::{SubmitStage, UseRequestBuilderHandle};
use crate::models::name_of;

#[derive(Properties, PartialEq)]
pub struct RequestPreviewProps {
    pub builder: UseRequestBuilderHandle,
    pub catalog: CatalogState,
}

#[function_component(RequestPreview)]
pub fn request_preview(props: &RequestPreviewProps) -> Html {
    let builder = &props.builder;
    let catalog = &props.catalog.catalog;
    let state = (*builder.state).clone();
    let draft = &state.draft;

    let company = name_of(&catalog.companies, draft.company_id).unwrap_or("—");
    let representative = name_of(&catalog.representatives, draft.representative_id)
        .or_else(|| name_of(&props.catalog.filtered_representatives, draft.representative_id))
        .unwrap_or("—");

    let on_back = {
        let builder = builder.clone();
        Callback::from(move |_| builder.back_to_draft.emit(()))
    };
    let on_open_confirm = {
        let builder = builder.clone();
        Callback::from(move |_| builder.open_confirm.emit(()))
    };
    let on_cancel = {
        let builder = builder.clone();
        Callback::from(move |_| builder.cancel_confirm.emit(()))
    };
    let on_confirm = {
        let builder = builder.clone();
        Callback::from(move |_| builder.confirm.emit(()))
    };

    let submitted =
        state.stage == SubmitStage::Submitted || state.stage == SubmitStage::Redirected;

    html! {
        <div class="preview-screen">
            <div class="card">
                <h2>{"Orden de Servicio"}</h2>

                <div class="preview-header">
                    <p><strong>{"Empresa: "}</strong>{company}</p>
                    <p><strong>{"Solicitante: "}</strong>{representative}</p>
                    <p><strong>{"Área: "}</strong>{draft.requesting_area.clone()}</p>
                    <p><strong>{"Justificación: "}</strong>{draft.justification.clone()}</p>
                </div>

                <table class="preview-table">
                    <thead>
                        <tr>
                            <th>{"Servicio"}</th>
                            <th>{"Proveedor"}</th>
                            <th>{"Cantidad"}</th>
                            <th>{"Rango"}</th>
                            <th>{"Duración"}</th>
                            <th>{"Precio"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for state.items.items().iter().enumerate().map(|(index, item)| {
                            let service = name_of(&catalog.services, item.service_id).unwrap_or("—").to_string();
                            let provider = name_of(&catalog.providers, item.provider_id).unwrap_or("—").to_string();
                            let unit = name_of(&catalog.units, item.unit_id).unwrap_or("—").to_string();
                            html! {
                                <tr key={index.to_string()}>
                                    <td>{service}</td>
                                    <td>{provider}</td>
                                    <td>{item.quantity}</td>
                                    <td>{unit}</td>
                                    <td>{item.duration}</td>
                                    <td>{format!("{} PEN", item.subtotal)}</td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>

                <div class="preview-total">
                    {format!("Total: {} PEN", state.items.total())}
                </div>

                <div class="preview-actions">
                    <button class="secondary" onclick={on_back}>{"Regresar"}</button>
                    <button class="primary" onclick={on_open_confirm}>{"Confirmar solicitud"}</button>
                </div>

                if submitted {
                    <div class="success-banner">
                        <p>{"Solicitud enviada con éxito"}</p>
                    </div>
                }

                if state.stage == SubmitStage::ConfirmPending {
                    <div class="modal-backdrop">
                        <div class="modal">
                            <h2>{"¿Estás seguro?"}</h2>
                            <p>{"¿En serio deseas realizar la solicitud?"}</p>
                            <div class="modal-actions">
                                <button class="secondary" onclick={on_cancel} disabled={state.submitting}>
                                    {"Cancelar"}
                                </button>
                                <button class="primary" onclick={on_confirm} disabled={state.submitting}>
                                    if state.submitting { {"Enviando..."} } else { {"Confirmar"} }
                                </button>
                            </div>
                        </div>
                    </div>
                }
            </div>
        </div>
    }
}
