// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP. El token va como
// configuración explícita del cliente, no como cabecera global mutable:
// quien necesita llamadas autenticadas recibe un cliente construido con token.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::services::error::{parse_error_message, parse_validation_errors, ApiError};
use crate::utils::constants::API_URL;

/// Cliente API con configuración por instancia (base URL + token opcional).
#[derive(Clone, PartialEq, Debug)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(API_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Copia del cliente con token bearer.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            base_url: self.base_url.clone(),
            token: Some(token.into()),
        }
    }

    /// Copia del cliente sin credenciales (tras desmontar la sesión ninguna
    /// llamada debe llevar Authorization).
    pub fn without_token(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            token: None,
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .apply_headers(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode_json(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .apply_headers(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode_json(response).await
    }

    /// Descarga binaria (documentos generados por el backend).
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self
            .apply_headers(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(&response).await?;
        response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        Self::check_status(&response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn check_status(response: &Response) -> Result<(), ApiError> {
        if response.status() == 401 {
            return Err(ApiError::Unauthorized);
        }
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            if let Some(fields) = parse_validation_errors(&body) {
                return Err(ApiError::Validation(fields));
            }
            let message =
                parse_error_message(&body).unwrap_or_else(|| response.status_text());
            return Err(ApiError::Status {
                code: response.status(),
                message,
            });
        }
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_token_es_configuracion_por_cliente() {
        let anonymous = ApiClient::with_base_url("http://backend/api");
        assert!(!anonymous.has_token());

        let authed = anonymous.with_token("tok-123");
        assert!(authed.has_token());
        // El original quedaba intacto; no hay estado global compartido
        assert!(!anonymous.has_token());

        let stripped = authed.without_token();
        assert!(!stripped.has_token());
    }

    #[test]
    fn arma_la_url_sobre_la_base() {
        let client = ApiClient::with_base_url("http://backend/api");
        assert_eq!(client.url("/companies"), "http://backend/api/companies");
    }
}
