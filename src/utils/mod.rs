// Utils compartidos

pub mod cancel;
pub mod constants;
pub mod dates;
pub mod download;
pub mod storage;

pub use cancel::CancelFlag;
pub use constants::{API_URL, STORAGE_KEY_AUTH};
pub use dates::{format_date_es, today_iso};
pub use storage::{load_from_storage, remove_from_storage, save_to_storage};

/// Alerta bloqueante al usuario (fallos de red y de envío, ver diseño de
/// errores). No hay reintento automático en ningún flujo.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}
