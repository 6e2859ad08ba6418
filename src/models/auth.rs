use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Perfil del usuario autenticado. El backend no siempre devuelve todos los
/// campos, por eso todo es opcional salvo lo mínimo.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct User {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub dni: Option<String>,
    #[serde(default)]
    pub celular: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Sesión persistida en localStorage bajo una única clave (`auth`).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Respuesta de login/registro. Distintas versiones del backend usan
/// `token` o `access_token`, y `user` o `data`; se aceptan ambas.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub data: Option<User>,
}

impl LoginResponse {
    /// Convierte la respuesta en sesión. Sin token no hay sesión; sin perfil
    /// se arma uno mínimo con el correo usado para ingresar.
    pub fn into_session(self, fallback_email: &str) -> Option<AuthSession> {
        let token = self.token.or(self.access_token)?;
        let user = self.user.or(self.data).unwrap_or_else(|| User {
            email: Some(fallback_email.to_string()),
            ..User::default()
        });
        Some(AuthSession { user, token })
    }
}

/// Envoltura de GET /user: `{ "user": { ... } }`.
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct UserEnvelope {
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegisterRequest {
    /// Validación de campos en el cliente; devuelve errores por campo.
    /// El backend puede agregar los suyos (ver ApiError::Validation).
    pub fn validate(&self) -> HashMap<String, String> {
        let mut errors = HashMap::new();
        if self.name.trim().is_empty() {
            errors.insert("name".to_string(), "El nombre es obligatorio".to_string());
        }
        if !self.email.contains('@') || self.email.trim().is_empty() {
            errors.insert("email".to_string(), "Correo inválido".to_string());
        }
        if self.password.len() < 8 {
            errors.insert(
                "password".to_string(),
                "Mínimo 8 caracteres".to_string(),
            );
        }
        if self.password_confirmation != self.password {
            errors.insert(
                "password_confirmation".to_string(),
                "No coincide".to_string(),
            );
        }
        errors
    }
}

/// Medidor de fortaleza de contraseña (0 a 4) para el formulario de registro.
pub fn password_strength(password: &str) -> u8 {
    let mut score = 0u8;
    if password.len() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_con_token_y_user() {
        let body = r#"{"token":"abc","user":{"id":1,"name":"Ana","email":"ana@acme.pe"}}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        let session = response.into_session("ana@acme.pe").unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.user.name.as_deref(), Some("Ana"));
    }

    #[test]
    fn login_response_con_access_token_y_data() {
        let body = r#"{"access_token":"xyz","data":{"email":"b@b.pe"}}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        let session = response.into_session("b@b.pe").unwrap();
        assert_eq!(session.token, "xyz");
        assert_eq!(session.user.email.as_deref(), Some("b@b.pe"));
    }

    #[test]
    fn login_response_sin_token_no_da_sesion() {
        let body = r#"{"user":{"email":"c@c.pe"}}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        assert!(response.into_session("c@c.pe").is_none());
    }

    #[test]
    fn login_response_sin_perfil_arma_uno_minimo() {
        let body = r#"{"token":"t"}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        let session = response.into_session("d@d.pe").unwrap();
        assert_eq!(session.user.email.as_deref(), Some("d@d.pe"));
        assert!(session.user.id.is_none());
    }

    #[test]
    fn registro_valida_campos() {
        let request = RegisterRequest {
            name: "".into(),
            email: "sin-arroba".into(),
            password: "corta".into(),
            password_confirmation: "otra".into(),
        };
        let errors = request.validate();
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("password"));
        assert!(errors.contains_key("password_confirmation"));

        let request = RegisterRequest {
            name: "Ana".into(),
            email: "ana@acme.pe".into(),
            password: "segura123".into(),
            password_confirmation: "segura123".into(),
        };
        assert!(request.validate().is_empty());
    }

    #[test]
    fn fortaleza_de_contrasena() {
        assert_eq!(password_strength("abc"), 0);
        assert_eq!(password_strength("abcdefgh"), 1);
        assert_eq!(password_strength("Abcdefg1!"), 4);
    }
}
