// ============================================================================
// ADD REQUEST - Pantalla de armado del requerimiento
// ============================================================================
// Etapa Draft: formulario de cabecera + partidas. El precio se deriva del
// tarifario al vuelo; sin precio el alta queda deshabilitada. "Solicitar"
// pasa a la vista previa (ver preview.rs).
// ============================================================================

pub mod preview;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::{use_auth_context, use_catalog, use_request_builder, SubmitStage};
use crate::models::{name_of, CatalogItem, RequestDraft};
use crate::pricing;
use crate::views::add_request::preview::RequestPreview;
use crate::views::shared::BackButton;

fn options(items: &[CatalogItem], selected: Option<u64>) -> Html {
    html! {
        <>
            <option value="" selected={selected.is_none()}>{"Seleccionar"}</option>
            { for items.iter().map(|item| {
                html! {
                    <option
                        key={item.id.to_string()}
                        value={item.id.to_string()}
                        selected={selected == Some(item.id)}
                    >
                        {item.name.clone()}
                    </option>
                }
            })}
        </>
    }
}

fn parse_id(e: &Event) -> Option<u64> {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value().parse().ok()
}

#[function_component(AddRequestView)]
pub fn add_request_view() -> Html {
    let auth = use_auth_context();
    let builder = use_request_builder(&auth);
    let catalog = use_catalog(&auth);

    // Las etapas posteriores al borrador viven en la vista previa
    if builder.state.stage != SubmitStage::Draft {
        return html! {
            <RequestPreview builder={builder.clone()} catalog={(*catalog.state).clone()} />
        };
    }

    let draft = builder.state.draft.clone();
    let unit_name = catalog
        .state
        .catalog
        .unit_name(draft.unit_id)
        .map(|name| name.to_string());
    let current_unit_price = unit_name.as_deref().and_then(pricing::unit_price);
    let current_subtotal = unit_name
        .as_deref()
        .and_then(|name| pricing::subtotal(name, draft.duration, draft.quantity));
    let can_add = current_unit_price.is_some() && current_subtotal.is_some();

    let set_field = {
        let builder = builder.clone();
        move |apply: fn(&mut RequestDraft, Option<u64>)| {
            let builder = builder.clone();
            Callback::from(move |e: Event| {
                let mut draft = builder.state.draft.clone();
                apply(&mut draft, parse_id(&e));
                builder.set_draft.emit(draft);
            })
        }
    };

    let on_company = {
        let builder = builder.clone();
        let on_company_change = catalog.on_company_change.clone();
        Callback::from(move |e: Event| {
            let company_id = parse_id(&e);
            let mut draft = builder.state.draft.clone();
            draft.company_id = company_id;
            draft.representative_id = None;
            builder.set_draft.emit(draft);
            on_company_change.emit(company_id);
        })
    };
    let on_representative = set_field(|d, v| d.representative_id = v);
    let on_provider = set_field(|d, v| d.provider_id = v);
    let on_service = set_field(|d, v| d.service_id = v);
    let on_unit = set_field(|d, v| d.unit_id = v);

    let on_area = {
        let builder = builder.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut draft = builder.state.draft.clone();
            draft.requesting_area = input.value();
            builder.set_draft.emit(draft);
        })
    };

    let on_justification = {
        let builder = builder.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut draft = builder.state.draft.clone();
            draft.justification = area.value();
            builder.set_draft.emit(draft);
        })
    };

    let on_quantity = {
        let builder = builder.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut draft = builder.state.draft.clone();
            // Un valor ilegible queda en cero y deshabilita el alta
            draft.quantity = input.value().parse().unwrap_or(0);
            builder.set_draft.emit(draft);
        })
    };

    let on_duration = {
        let builder = builder.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut draft = builder.state.draft.clone();
            draft.duration = input.value().parse().unwrap_or(0);
            builder.set_draft.emit(draft);
        })
    };

    let on_add = {
        let builder = builder.clone();
        let unit_name = unit_name.clone();
        Callback::from(move |_| builder.add_item.emit(unit_name.clone()))
    };

    let on_request = {
        let builder = builder.clone();
        Callback::from(move |_| builder.open_preview.emit(()))
    };

    let catalog_state = (*catalog.state).clone();
    let services = catalog_state.catalog.services.clone();
    let units = catalog_state.catalog.units.clone();

    html! {
        <div class="add-request-screen">
            <div class="card">
                <div class="card-header">
                    <BackButton />
                </div>

                <h1>{"Añadir requerimiento"}</h1>

                if catalog_state.loading {
                    <p class="muted">{"Cargando catálogo..."}</p>
                } else if catalog_state.load_failed {
                    <p class="error-text">{"Catálogo no disponible. Recarga la página para reintentar."}</p>
                }

                <div class="request-form">
                    <div class="form-group">
                        <label>{"Empresa / Institución"}</label>
                        <select onchange={on_company}>
                            {options(&catalog_state.catalog.companies, draft.company_id)}
                        </select>
                    </div>

                    <div class="form-group">
                        <label>{"Solicitante"}</label>
                        <select onchange={on_representative}>
                            {options(&catalog_state.filtered_representatives, draft.representative_id)}
                        </select>
                    </div>

                    <div class="form-group">
                        <label>{"Área"}</label>
                        <input type="text" value={draft.requesting_area.clone()} oninput={on_area} />
                    </div>

                    <div class="form-group">
                        <label>{"Justificación"}</label>
                        <textarea value={draft.justification.clone()} oninput={on_justification}></textarea>
                    </div>

                    <div class="line-item-form">
                        <div class="form-group">
                            <label>{"Proveedor"}</label>
                            <select onchange={on_provider}>
                                {options(&catalog_state.catalog.providers, draft.provider_id)}
                            </select>
                        </div>

                        <div class="form-group">
                            <label>{"Servicio"}</label>
                            <select onchange={on_service}>
                                {options(&services, draft.service_id)}
                            </select>
                        </div>

                        <div class="form-group">
                            <label>{"Cantidad"}</label>
                            <input type="number" min="1" value={draft.quantity.to_string()} oninput={on_quantity} />
                        </div>

                        <div class="line-item-grid">
                            <div class="form-group">
                                <label>{"Rango"}</label>
                                <select onchange={on_unit}>
                                    {options(&units, draft.unit_id)}
                                </select>
                            </div>
                            <div class="form-group">
                                <label>{"Duración"}</label>
                                <input type="number" min="1" value={draft.duration.to_string()} oninput={on_duration} />
                            </div>
                            <div class="form-group">
                                <label>{"Precio"}</label>
                                if let Some(subtotal) = current_subtotal {
                                    <div class="price-box">{format!("{} PEN", subtotal)}</div>
                                } else {
                                    <div class="price-hint">{"Completa los campos para calcular"}</div>
                                }
                            </div>
                        </div>

                        <button class="add-button" onclick={on_add} disabled={!can_add}>
                            {"Agregar"}
                        </button>
                    </div>

                    if !builder.state.items.is_empty() {
                        <div class="line-items">
                        { for builder.state.items.items().iter().enumerate().map(|(index, item)| {
                            let service = name_of(&services, item.service_id).unwrap_or("—").to_string();
                            let unit = name_of(&units, item.unit_id).unwrap_or("—").to_string();
                            let on_remove = {
                                let builder = builder.clone();
                                Callback::from(move |_| builder.remove_item.emit(index))
                            };
                            html! {
                                <div class="line-item" key={index.to_string()}>
                                    <span>
                                        {format!("{} × {} ({} × {})", service, item.quantity, unit, item.duration)}
                                    </span>
                                    <div class="line-item-actions">
                                        <span>{format!("{} PEN", item.subtotal)}</span>
                                        <button class="remove-button" onclick={on_remove} title="Eliminar">
                                            {"×"}
                                        </button>
                                    </div>
                                </div>
                            }
                        })}
                        </div>
                    }

                    <div class="request-footer">
                        <div class="total-box">
                            {format!("Total: {} PEN", builder.state.items.total())}
                        </div>
                        <button class="primary" onclick={on_request}>{"Solicitar"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
