// ============================================================================
// ROUTER - Mapeo de rutas a pantallas
// ============================================================================
// Una sola guardia (¿autenticado?) decide las redirecciones. La raíz reparte
// según haya sesión; las rutas desconocidas vuelven a la raíz.
// ============================================================================

use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/configuracion")]
    Settings,
    #[at("/add-request")]
    AddRequest,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Redirección que corresponde a una ruta según el estado de sesión, o None
/// si la ruta se renderiza tal cual.
pub fn resolve_route(route: &Route, authenticated: bool) -> Option<Route> {
    match route {
        Route::Root => Some(if authenticated {
            Route::Dashboard
        } else {
            Route::Login
        }),
        Route::Login if authenticated => Some(Route::Dashboard),
        Route::Login | Route::Register => None,
        Route::Dashboard | Route::Settings | Route::AddRequest if !authenticated => {
            Some(Route::Login)
        }
        Route::NotFound => Some(Route::Root),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn la_raiz_reparte_por_sesion() {
        assert_eq!(resolve_route(&Route::Root, true), Some(Route::Dashboard));
        assert_eq!(resolve_route(&Route::Root, false), Some(Route::Login));
    }

    #[test]
    fn rutas_protegidas_sin_sesion_van_a_login() {
        for route in [Route::Dashboard, Route::Settings, Route::AddRequest] {
            assert_eq!(resolve_route(&route, false), Some(Route::Login));
        }
    }

    #[test]
    fn rutas_protegidas_con_sesion_se_renderizan() {
        for route in [Route::Dashboard, Route::Settings, Route::AddRequest] {
            assert_eq!(resolve_route(&route, true), None);
        }
    }

    #[test]
    fn login_con_sesion_redirige_a_dashboard() {
        assert_eq!(resolve_route(&Route::Login, true), Some(Route::Dashboard));
        assert_eq!(resolve_route(&Route::Login, false), None);
    }

    #[test]
    fn registro_siempre_accesible() {
        assert_eq!(resolve_route(&Route::Register, true), None);
        assert_eq!(resolve_route(&Route::Register, false), None);
    }

    #[test]
    fn ruta_desconocida_vuelve_a_la_raiz() {
        assert_eq!(resolve_route(&Route::NotFound, true), Some(Route::Root));
        assert_eq!(resolve_route(&Route::NotFound, false), Some(Route::Root));
    }
}
