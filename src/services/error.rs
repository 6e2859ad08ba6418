use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

/// Taxonomía de errores del cliente API.
///
/// - `Network`: fallo de conectividad; alerta al usuario y se aborta.
/// - `Unauthorized`: 401; se desmonta la sesión y se redirige a /login.
/// - `Validation`: errores por campo reconocidos del backend; se muestran
///   en línea junto al campo.
/// - `Status`: cualquier otro HTTP no exitoso; mensaje global.
/// - `Decode`: cuerpo ilegible; para datos de referencia deshabilita la
///   acción dependiente en silencio.
///
/// Ningún error se reintenta automáticamente.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("No se pudo conectar con el servidor: {0}")]
    Network(String),
    #[error("Sesión expirada o no autorizada")]
    Unauthorized,
    #[error("Hay errores en los campos del formulario")]
    Validation(HashMap<String, String>),
    #[error("Error del servidor ({code}): {message}")]
    Status { code: u16, message: String },
    #[error("Respuesta ilegible del servidor: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    pub fn field_errors(&self) -> Option<&HashMap<String, String>> {
        match self {
            ApiError::Validation(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Extrae errores por campo con la forma `{ "errors": { campo: [msgs] } }`
/// que devuelve el backend en validaciones de registro y de envío.
pub fn parse_validation_errors(body: &str) -> Option<HashMap<String, String>> {
    let value: Value = serde_json::from_str(body).ok()?;
    let errors = value.get("errors")?.as_object()?;

    let mut fields = HashMap::new();
    for (field, messages) in errors {
        let text = match messages {
            Value::Array(items) => items
                .iter()
                .filter_map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            Value::String(s) => s.clone(),
            _ => continue,
        };
        if !text.is_empty() {
            fields.insert(field.clone(), text);
        }
    }

    if fields.is_empty() {
        None
    } else {
        Some(fields)
    }
}

/// Mensaje global de error (`message` o `error`) si el cuerpo lo trae.
pub fn parse_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(|m| m.as_str())
        .map(|m| m.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errores_por_campo_estilo_laravel() {
        let body = r#"{"message":"The given data was invalid.","errors":{"email":["Ya está en uso.","Formato inválido."],"name":["Obligatorio."]}}"#;
        let fields = parse_validation_errors(body).unwrap();
        assert_eq!(fields["email"], "Ya está en uso. Formato inválido.");
        assert_eq!(fields["name"], "Obligatorio.");
    }

    #[test]
    fn errores_por_campo_como_cadena_suelta() {
        let body = r#"{"errors":{"total":"Debe ser mayor a cero"}}"#;
        let fields = parse_validation_errors(body).unwrap();
        assert_eq!(fields["total"], "Debe ser mayor a cero");
    }

    #[test]
    fn forma_no_reconocida_no_da_campos() {
        assert!(parse_validation_errors(r#"{"detail":"boom"}"#).is_none());
        assert!(parse_validation_errors("no-json").is_none());
        assert!(parse_validation_errors(r#"{"errors":{}}"#).is_none());
    }

    #[test]
    fn mensaje_global() {
        assert_eq!(
            parse_error_message(r#"{"message":"Credenciales inválidas"}"#).as_deref(),
            Some("Credenciales inválidas")
        );
        assert_eq!(
            parse_error_message(r#"{"error":"fuera de servicio"}"#).as_deref(),
            Some("fuera de servicio")
        );
        assert!(parse_error_message("{}").is_none());
    }

    #[test]
    fn clasificacion_basica() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::Network("x".into()).is_unauthorized());

        let mut fields = HashMap::new();
        fields.insert("email".to_string(), "inválido".to_string());
        let error = ApiError::Validation(fields);
        assert!(error.field_errors().unwrap().contains_key("email"));
        assert!(ApiError::Unauthorized.field_errors().is_none());
    }
}
