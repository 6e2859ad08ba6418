use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingIndicatorProps {
    #[prop_or("Cargando...".into())]
    pub message: AttrValue,
}

/// Indicador de carga mientras una llamada de red está en vuelo; la región
/// afectada no es interactiva durante la suspensión.
#[function_component(LoadingIndicator)]
pub fn loading_indicator(props: &LoadingIndicatorProps) -> Html {
    html! {
        <div class="loading-screen">
            <div class="spinner"></div>
            <p>{props.message.clone()}</p>
        </div>
    }
}

/// Botón de regreso del encabezado (equivale a "atrás" del navegador).
#[function_component(BackButton)]
pub fn back_button() -> Html {
    let navigator = use_navigator().expect("router no montado");
    let onclick = Callback::from(move |_| navigator.back());

    html! {
        <button class="back-button" {onclick} aria-label="Regresar">{"←"}</button>
    }
}
