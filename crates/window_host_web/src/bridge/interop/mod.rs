//! Transport interop for the host-command bridge.
//!
//! Routes each command to the target-specific implementation behind one uniform
//! signature, so bridge callers never branch on the compilation target.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn create_iced_window() -> Result<(), String> {
    imp::create_iced_window().await
}
