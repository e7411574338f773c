//! Window-creation host-service adapters for browser and desktop-webview contexts.

use window_host::{WindowHostFuture, WindowHostService};

use crate::bridge;

const BROWSER_WINDOWS_UNAVAILABLE: &str =
    "native window creation is not available in browser contexts";

#[derive(Debug, Clone, Copy, Default)]
/// Browser window-host adapter; browsers expose no native window backend.
pub struct WebWindowHostService;

impl WindowHostService for WebWindowHostService {
    fn create_iced_window<'a>(&'a self) -> WindowHostFuture<'a, Result<(), String>> {
        Box::pin(async { Err(BROWSER_WINDOWS_UNAVAILABLE.to_string()) })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Desktop-webview window-host adapter backed by the Tauri command transport.
pub struct TauriWindowHostService;

impl WindowHostService for TauriWindowHostService {
    fn create_iced_window<'a>(&'a self) -> WindowHostFuture<'a, Result<(), String>> {
        Box::pin(async move { bridge::create_iced_window().await })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_tauri_window_adapter_matches_bridge_fallback_behavior() {
        let service = TauriWindowHostService;
        let service_obj: &dyn WindowHostService = &service;
        assert_eq!(
            block_on(service_obj.create_iced_window()).expect_err("create should fail"),
            "Host window commands are only available when compiled for wasm32"
        );
    }

    #[test]
    fn browser_window_adapter_reports_missing_native_backend() {
        let service = WebWindowHostService;
        let service_obj: &dyn WindowHostService = &service;
        let err = block_on(service_obj.create_iced_window()).expect_err("create should fail");
        assert_eq!(err, BROWSER_WINDOWS_UNAVAILABLE);
    }
}
