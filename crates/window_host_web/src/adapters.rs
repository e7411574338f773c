use std::rc::Rc;

use window_host::{
    HostCapabilities, HostServices, HostStrategy, NoopWindowHostService, WindowHostFuture,
    WindowHostService,
};

use crate::{TauriWindowHostService, WebDevConsole, WebWindowHostService};

#[cfg(all(feature = "desktop-host-stub", feature = "desktop-host-tauri"))]
compile_error!(
    "host-strategy features `desktop-host-tauri` and `desktop-host-stub` cannot be combined"
);

/// Host strategy baked into the active build by the crate's feature selection.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-tauri")]
    {
        HostStrategy::DesktopTauri
    }

    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::DesktopStub
    }

    #[cfg(not(any(feature = "desktop-host-stub", feature = "desktop-host-tauri")))]
    {
        HostStrategy::Browser
    }
}

/// Stable string token for the selected host strategy.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete window-host backend behind [`WindowHostService`].
#[derive(Debug, Clone, Copy)]
pub enum WindowHostServiceAdapter {
    /// Browser contexts without a native window backend.
    Browser(WebWindowHostService),
    /// Native desktop window creation through Tauri command transport.
    DesktopTauri(TauriWindowHostService),
    /// No-op backend for stubbed desktop builds.
    DesktopStub(NoopWindowHostService),
}

impl WindowHostService for WindowHostServiceAdapter {
    fn create_iced_window<'a>(&'a self) -> WindowHostFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.create_iced_window(),
            Self::DesktopTauri(service) => service.create_iced_window(),
            Self::DesktopStub(service) => service.create_iced_window(),
        }
    }
}

/// Builds the window-host adapter for the compile-time selected host strategy.
pub fn window_host_service() -> WindowHostServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => WindowHostServiceAdapter::Browser(WebWindowHostService),
        HostStrategy::DesktopTauri => {
            WindowHostServiceAdapter::DesktopTauri(TauriWindowHostService)
        }
        HostStrategy::DesktopStub => WindowHostServiceAdapter::DesktopStub(NoopWindowHostService),
    }
}

/// Builds the developer console adapter shared by all host strategies.
pub fn dev_console() -> WebDevConsole {
    WebDevConsole
}

/// Returns the capability snapshot for the compile-time selected host strategy.
pub const fn host_capabilities() -> HostCapabilities {
    match selected_host_strategy() {
        HostStrategy::Browser => HostCapabilities::browser(),
        HostStrategy::DesktopTauri => HostCapabilities::desktop_tauri(),
        HostStrategy::DesktopStub => HostCapabilities::desktop_stub(),
    }
}

/// Builds the full host-service bundle for the compile-time selected host strategy.
pub fn build_host_services() -> HostServices {
    HostServices {
        window_host: Rc::new(window_host_service()),
        console: Rc::new(dev_console()),
        capabilities: host_capabilities(),
        host_strategy: selected_host_strategy(),
    }
}
