//! Launcher runtime: launch cycle, trigger binding, page composition, and browser E2E scenes.

pub mod components;
pub mod e2e;
pub mod launch;

pub use components::LauncherPage;
pub use e2e::{
    current_browser_e2e_config, scripted_window_host_service, BrowserE2eConfig, BrowserE2eScene,
};
pub use launch::{
    install_launch_binding, run_launch_cycle, spawn_launch, LaunchBindingStatus,
    LAUNCH_TRIGGER_DOM_ID,
};
