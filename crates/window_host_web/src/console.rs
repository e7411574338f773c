//! Developer console adapter for browser and desktop-webview contexts.

use window_host::DevConsole;

#[derive(Debug, Clone, Copy, Default)]
/// Console adapter writing through the webview developer console.
pub struct WebDevConsole;

impl DevConsole for WebDevConsole {
    fn info(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsValue;
            web_sys::console::info_1(&JsValue::from_str(message));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            println!("{message}");
        }
    }

    fn error(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsValue;
            web_sys::console::error_1(&JsValue::from_str(message));
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            eprintln!("{message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_console_writes_are_best_effort() {
        let console = WebDevConsole;
        let console_obj: &dyn DevConsole = &console;
        console_obj.info("info line");
        console_obj.error("error line");
    }
}
