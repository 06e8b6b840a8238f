//! Cropframe WASM - WebAssembly bindings for the crop region editor
//!
//! This crate exposes cropframe-core to JavaScript/TypeScript so a web UI
//! can drive the crop box with pointer events and read back the crop in
//! source image pixels.
//!
//! # Module Structure
//!
//! - `editor` - `JsRegionEditor`, the interactive crop box
//! - `types` - WASM-compatible wrapper types for rectangles and updates
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsRegionEditor } from '@cropframe/wasm';
//!
//! await init();
//!
//! const editor = new JsRegionEditor(4000, 3000, 1000, 800);
//! editor.grant("bottomRight");
//! editor.move_by("bottomRight", 50, 20);
//! const final = editor.release();
//! const crop = editor.pixel_crop();
//! ```

use wasm_bindgen::prelude::*;

mod editor;
mod types;

pub use editor::JsRegionEditor;
pub use types::{JsEmission, JsPixelRegion, JsRect};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"cropframe: logger already initialized".into());
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
