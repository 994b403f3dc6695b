//! Browser console logging.
//!
//! On the host (unit tests, native builds) there is no console to talk to,
//! so these compile to nothing there.

#[cfg(target_arch = "wasm32")]
pub fn info(message: &str) {
    gloo::console::log!(message);
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    gloo::console::warn!(message);
}

#[cfg(target_arch = "wasm32")]
pub fn error(message: &str) {
    gloo::console::error!(message);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn info(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn error(_message: &str) {}
