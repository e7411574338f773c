//! Browser (`wasm32`) implementations of [`window_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for native window creation and
//! the developer console. Host-command bindings live under `bridge/`, with `bridge::interop`
//! holding the shared wasm/non-wasm transport glue.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Feature-driven host-strategy selection and the adapter factories runtime wiring uses.
pub mod adapters;
mod bridge;
pub mod console;
pub mod window;

pub use adapters::{
    build_host_services, dev_console, host_capabilities, host_strategy_name,
    selected_host_strategy, window_host_service, WindowHostServiceAdapter,
};
pub use console::WebDevConsole;
pub use window::{TauriWindowHostService, WebWindowHostService};
