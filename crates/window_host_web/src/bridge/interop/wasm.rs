use wasm_bindgen::{prelude::wasm_bindgen, JsValue};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

fn format_host_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

pub async fn create_iced_window() -> Result<(), String> {
    invoke("create_iced_window", JsValue::UNDEFINED)
        .await
        .map(|_| ())
        .map_err(format_host_error)
}
