use focus_landing::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    if web_sys::window().is_none() {
        gloo_console::error!("No window to mount the landing page into");
        return;
    }
    log::info!("Mounting FOCUS landing page");
    yew::Renderer::<App>::new().render();
}
