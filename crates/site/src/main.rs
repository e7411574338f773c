//! Binary entrypoint for the browser-hosted `site` demo.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary targets the browser/WASM workflow. Use `cargo dev` to serve the demo locally or build `site_app` for wasm32 with the `csr` feature."
    );
}
