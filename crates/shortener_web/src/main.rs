#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod bridge;

#[cfg(target_arch = "wasm32")]
mod platform;

#[cfg(target_arch = "wasm32")]
fn main() {
    platform::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("shortener_web runs in the browser; build it for wasm32-unknown-unknown.");
}
