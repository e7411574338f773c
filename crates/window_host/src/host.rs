//! Host strategy, capability snapshot, and the injected service bundle.

use std::rc::Rc;

use crate::{DevConsole, WindowHostService};

/// Host environment the active build was composed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Plain browser page with no native host attached.
    Browser,
    /// Desktop webview hosted by the Tauri shell.
    DesktopTauri,
    /// Desktop build with the native transport stubbed out.
    DesktopStub,
}

impl HostStrategy {
    /// Stable token for diagnostics and log lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::DesktopTauri => "desktop-tauri",
            Self::DesktopStub => "desktop-stub",
        }
    }
}

/// Whether one optional host feature has a working backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityStatus {
    /// Capability is implemented and usable on the active host.
    Available,
    /// Capability has no working backend on the active host.
    Unavailable,
}

impl CapabilityStatus {
    /// Whether the capability can be exercised immediately.
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Coarse capability snapshot handed to runtime wiring and the mounted page.
///
/// Page code branches on this posture instead of importing host-specific adapter
/// types, so the snapshot stays identical in shape across browser and desktop builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Native secondary-window creation availability.
    pub native_windows: CapabilityStatus,
}

impl HostCapabilities {
    /// Posture of a plain browser page.
    pub const fn browser() -> Self {
        Self {
            native_windows: CapabilityStatus::Unavailable,
        }
    }

    /// Posture with the Tauri host attached.
    pub const fn desktop_tauri() -> Self {
        Self {
            native_windows: CapabilityStatus::Available,
        }
    }

    /// Posture of the stubbed desktop build.
    pub const fn desktop_stub() -> Self {
        Self {
            native_windows: CapabilityStatus::Unavailable,
        }
    }
}

/// Injected host service bundle the launcher runtime works against.
///
/// Environment-specific service selection finishes before this bundle is handed to
/// `launcher_runtime`, keeping the runtime and page free of browser/desktop adapter
/// details.
#[derive(Clone)]
pub struct HostServices {
    /// Native window-creation service.
    pub window_host: Rc<dyn WindowHostService>,
    /// Developer console log channels.
    pub console: Rc<dyn DevConsole>,
    /// Availability snapshot for optional host features.
    pub capabilities: HostCapabilities,
    /// Strategy the bundle was composed for.
    pub host_strategy: HostStrategy,
}
