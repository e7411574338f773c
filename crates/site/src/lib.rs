mod web_app;

pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
const STARTUP_BANNER: &str = "Test App - Iced Plugin Demo";

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
fn boot_host_services() -> window_host::HostServices {
    use std::rc::Rc;

    let mut services = window_host_web::build_host_services();
    if let Some(config) = launcher_runtime::current_browser_e2e_config() {
        services.window_host = Rc::new(launcher_runtime::scripted_window_host_service(&config));
    }
    services
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    use window_host::DevConsole;

    console_error_panic_hook::set_once();

    let host = boot_host_services();
    host.console.info(STARTUP_BANNER);

    leptos::mount_to_body(|| leptos::view! { <SiteApp /> });

    let _ = launcher_runtime::install_launch_binding(&host);
}
