use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_auth_context, AuthProvider};
use crate::router::{resolve_route, Route};
use crate::views::{AddRequestView, DashboardView, LoginView, RegisterView, SettingsView};
use crate::views::shared::LoadingIndicator;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <Switch<Route> render={switch} />
            </AuthProvider>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    html! { <RouteScreen {route} /> }
}

#[derive(Properties, PartialEq)]
struct RouteScreenProps {
    route: Route,
}

/// Aplica la guardia de sesión y renderiza la pantalla de la ruta.
#[function_component(RouteScreen)]
fn route_screen(props: &RouteScreenProps) -> Html {
    let auth = use_auth_context();

    // Mientras la restauración de sesión está en vuelo no se decide nada
    if auth.state.restoring {
        return html! { <LoadingIndicator message="Cargando..." /> };
    }

    if let Some(target) = resolve_route(&props.route, auth.is_authenticated()) {
        return html! { <Redirect<Route> to={target} /> };
    }

    match props.route {
        Route::Login => html! { <LoginView /> },
        Route::Register => html! { <RegisterView /> },
        Route::Dashboard => html! { <DashboardView /> },
        Route::Settings => html! { <SettingsView /> },
        Route::AddRequest => html! { <AddRequestView /> },
        // Root y NotFound siempre redirigen en resolve_route
        Route::Root | Route::NotFound => html! {},
    }
}
