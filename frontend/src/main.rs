use aurora_landing::{config, App};
use log::info;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::warn_1(&format!("logging unavailable: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
