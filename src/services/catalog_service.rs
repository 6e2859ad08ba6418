use crate::models::{Catalog, CatalogItem};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

/// Carga conjunta del catálogo del formulario. Los cinco listados se esperan
/// en orden y se asignan de una vez: no hay fetches sueltos compitiendo ni
/// last-write-wins por campo.
pub async fn load_catalog(client: &ApiClient) -> Result<Catalog, ApiError> {
    let companies = client.get_json("/companies").await?;
    let representatives = client.get_json("/representatives").await?;
    let providers = client.get_json("/providers").await?;
    let services = client.get_json("/services").await?;
    let units = client.get_json("/units").await?;

    log::info!("📋 Catálogo cargado");
    Ok(Catalog {
        companies,
        representatives,
        providers,
        services,
        units,
    })
}

/// Solicitantes asociados a una empresa; cambia cada vez que cambia la
/// empresa seleccionada en el formulario.
pub async fn load_company_representatives(
    client: &ApiClient,
    company_id: u64,
) -> Result<Vec<CatalogItem>, ApiError> {
    client
        .get_json(&format!("/company_representatives/{}", company_id))
        .await
}
