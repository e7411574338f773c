//! Webview host-command bridge for `window_host_web` service adapters.

mod interop;

pub async fn create_iced_window() -> Result<(), String> {
    interop::create_iced_window().await
}
