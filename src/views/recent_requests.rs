use yew::prelude::*;

use crate::hooks::{use_auth_context, use_recent_requests};
use crate::utils::dates::format_date_es;

/// Sección "Requerimientos agregados recientemente" del dashboard.
#[function_component(RecentRequests)]
pub fn recent_requests() -> Html {
    let auth = use_auth_context();
    let state = use_recent_requests(&auth);

    if state.loading {
        return html! { <p class="muted">{"Cargando requerimientos..."}</p> };
    }

    if let Some(message) = state.error.clone() {
        return html! { <p class="error-text">{message}</p> };
    }

    html! {
        <div class="recent-requests">
            <div class="section-header">
                <h2>{"Requerimientos agregados recientemente"}</h2>
            </div>

            if state.requests.is_empty() {
                <p class="muted">{"No hay requerimientos recientes."}</p>
            } else {
                <ul class="recent-list">
                    { for state.requests.iter().map(|request| {
                        let date = request
                            .date
                            .as_deref()
                            .map(format_date_es)
                            .unwrap_or_default();
                        html! {
                            <li key={request.id.to_string()} class="recent-item">
                                <div class="recent-info">
                                    <h3>{request.company_name()}</h3>
                                    <p>{request.first_service_name()}</p>
                                    <span class="recent-date">{date}</span>
                                </div>
                                <span class="recent-total">
                                    {format!("{:.2} PEN", request.total_pen())}
                                </span>
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}
