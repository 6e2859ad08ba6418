use crate::models::{AuthSession, LoginRequest, RegisterRequest, User, UserEnvelope};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;

/// Intercambio de credenciales. Tolera las dos formas de respuesta del
/// backend (`token`/`access_token`, `user`/`data`); sin token es un error.
pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<AuthSession, ApiError> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    log::info!("🔐 Iniciando sesión para: {}", email);

    let response: crate::models::LoginResponse = client.post_json("/login", &request).await?;
    response
        .into_session(email)
        .ok_or_else(|| ApiError::Decode("No se recibió token de autenticación".to_string()))
}

/// Alta de cuenta. Los errores de validación del backend llegan como
/// ApiError::Validation y se muestran campo por campo.
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<(), ApiError> {
    log::info!("📝 Registrando cuenta: {}", request.email);
    let _: serde_json::Value = client.post_json("/register", request).await?;
    Ok(())
}

/// Valida/refresca la sesión contra GET /user. Un 401 aquí significa token
/// vencido: el llamador desmonta la sesión.
pub async fn fetch_current_user(client: &ApiClient) -> Result<Option<User>, ApiError> {
    let envelope: UserEnvelope = client.get_json("/user").await?;
    Ok(envelope.user)
}
