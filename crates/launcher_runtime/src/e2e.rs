//! Browser-only E2E scene configuration shared by the site entrypoint and launch flow.

use serde::{Deserialize, Serialize};

use window_host::MemoryWindowHostService;

const DEFAULT_SCRIPTED_FAILURE: &str = "scripted launch failure";

/// Canonical browser E2E scenes supported by the deterministic launch validation workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrowserE2eScene {
    /// Launch trigger wired to a backend that resolves every call successfully.
    LaunchSuccess,
    /// Launch trigger wired to a backend that fails every call with a scripted message.
    LaunchFailure,
}

impl BrowserE2eScene {
    /// Canonical query-string id for this scene.
    pub const fn id(self) -> &'static str {
        match self {
            Self::LaunchSuccess => "launch-success",
            Self::LaunchFailure => "launch-failure",
        }
    }

    #[cfg(any(test, target_arch = "wasm32"))]
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "launch-success" => Some(Self::LaunchSuccess),
            "launch-failure" => Some(Self::LaunchFailure),
            _ => None,
        }
    }
}

/// Browser E2E configuration decoded from the page query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserE2eConfig {
    /// Requested canonical scene.
    pub scene: BrowserE2eScene,
    /// Optional scripted failure message for the launch-failure scene.
    pub failure_message: Option<String>,
}

#[cfg(any(test, target_arch = "wasm32"))]
fn parse_message(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(any(test, target_arch = "wasm32"))]
/// Decodes an E2E configuration from a raw query string.
pub fn parse_browser_e2e_from_query(query: &str) -> Option<BrowserE2eConfig> {
    let mut scene = None;
    let mut failure_message = None;

    for pair in query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
    {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "e2e-scene" => {
                scene = BrowserE2eScene::parse(value);
            }
            "e2e-failure-message" => {
                failure_message = parse_message(value);
            }
            _ => {}
        }
    }

    scene.map(|scene| BrowserE2eConfig {
        scene,
        failure_message,
    })
}

/// Reads the current URL and returns the E2E configuration it requests, if any.
pub fn current_browser_e2e_config() -> Option<BrowserE2eConfig> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let location = window.location();
        let search = location.search().ok()?;
        parse_browser_e2e_from_query(&search)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Builds the scripted window host backend requested by an E2E configuration.
pub fn scripted_window_host_service(config: &BrowserE2eConfig) -> MemoryWindowHostService {
    match config.scene {
        BrowserE2eScene::LaunchSuccess => MemoryWindowHostService::default(),
        BrowserE2eScene::LaunchFailure => MemoryWindowHostService::failing(
            config
                .failure_message
                .as_deref()
                .unwrap_or(DEFAULT_SCRIPTED_FAILURE),
        ),
    }
}
