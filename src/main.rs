use requisition_pwa::app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Portal de requerimientos iniciando...");

    yew::Renderer::<App>::new().render();
}
