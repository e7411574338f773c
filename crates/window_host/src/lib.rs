//! Typed host-domain contracts shared by the launcher runtime and browser adapters.
//!
//! This crate is the API-first boundary for host services: the native window-creation
//! contract and the developer console channels live here, while concrete browser/webview
//! adapters live in `window_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod console;
pub mod host;
pub mod window;

pub use console::{ConsoleEntry, ConsoleLevel, DevConsole, MemoryDevConsole, NoopDevConsole};
pub use host::{CapabilityStatus, HostCapabilities, HostServices, HostStrategy};
pub use window::{
    MemoryWindowHostService, NoopWindowHostService, WindowHostFuture, WindowHostService,
};
