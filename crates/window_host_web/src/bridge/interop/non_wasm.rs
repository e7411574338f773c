fn unsupported() -> String {
    "Host window commands are only available when compiled for wasm32".to_string()
}

pub async fn create_iced_window() -> Result<(), String> {
    Err(unsupported())
}
