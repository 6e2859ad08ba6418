use crate::models::{RecentRequest, RequisitionPayload, SubmitResponse};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

/// Envía el requerimiento armado; el backend responde con el id de la orden.
pub async fn submit_request(
    client: &ApiClient,
    payload: &RequisitionPayload,
) -> Result<SubmitResponse, ApiError> {
    log::info!(
        "📨 Enviando requerimiento ({} partidas, total {})",
        payload.details.len(),
        payload.total
    );
    client.post_json("/add_request", payload).await
}

/// Descarga el PDF de la orden de servicio generada. El token bearer sale
/// del cliente ya configurado (misma fuente que el resto de llamadas).
pub async fn fetch_service_order_pdf(
    client: &ApiClient,
    request_id: u64,
) -> Result<Vec<u8>, ApiError> {
    log::info!("📄 Descargando orden de servicio #{}", request_id);
    client
        .get_bytes(&format!("/requests/{}/orden-servicio/pdf", request_id))
        .await
}

/// Requerimientos agregados recientemente para el dashboard.
pub async fn fetch_recent_requests(client: &ApiClient) -> Result<Vec<RecentRequest>, ApiError> {
    client.get_json("/requests/recent").await
}
