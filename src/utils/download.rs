// ============================================================================
// DOWNLOAD - Guardado local de archivos generados por el backend
// ============================================================================
// Crea un Blob con los bytes recibidos y dispara la descarga con un enlace
// temporal. El object URL se revoca al terminar.
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Guarda `bytes` como una descarga local del navegador.
pub fn save_file(bytes: &[u8], filename: &str, mime: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("window no disponible")?;
    let document = window.document().ok_or("document no disponible")?;

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let props = BlobPropertyBag::new();
    props.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &props)
        .map_err(|_| "No se pudo crear el blob de descarga".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "No se pudo crear el object URL".to_string())?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "No se pudo crear el enlace de descarga".to_string())?
        .dyn_into()
        .map_err(|_| "Elemento inesperado al crear el enlace".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document.body().ok_or("body no disponible")?;
    body.append_child(&anchor)
        .map_err(|_| "No se pudo montar el enlace de descarga".to_string())?;
    anchor.click();
    anchor.remove();

    Url::revoke_object_url(&url).ok();
    Ok(())
}
