/// URL base del backend (incluye el prefijo /api)
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://127.0.0.1:8000/api (por defecto)
/// - Producción: via API_URL en .env (ver build.rs)
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8000/api",
};

/// Clave única de sesión en localStorage: un JSON `{ user, token }`.
/// La clave suelta de token que usaba la descarga del PDF quedó unificada aquí.
pub const STORAGE_KEY_AUTH: &str = "auth";
