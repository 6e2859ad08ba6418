// ============================================================================
// PORTAL DE REQUERIMIENTOS - Frontend Yew (CSR)
// ============================================================================
// - views: pantallas (login, registro, dashboard, configuración, requerimiento)
// - hooks: estado compartido (sesión, catálogo, armado del requerimiento)
// - services: SOLO comunicación API
// - models: estructuras compartidas con el backend
// ============================================================================

pub mod app;
pub mod hooks;
pub mod models;
pub mod pricing;
pub mod router;
pub mod services;
pub mod utils;
pub mod views;
