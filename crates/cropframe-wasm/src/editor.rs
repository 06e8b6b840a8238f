//! WASM bindings for the region editor.
//!
//! Exposes [`RegionEditor`] to JavaScript as `JsRegionEditor`. A web UI
//! forwards pointer events to it and drains one update per animation frame.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const editor = new JsRegionEditor(photo.width, photo.height, box.width, box.height);
//! editor.set_on_change((rect, terminal) => drawCropBox(rect));
//!
//! canvas.onpointerdown = (e) => editor.grant_at(e.offsetX, e.offsetY);
//! canvas.onpointermove = (e) => {
//!   const handle = editor.active_handle;
//!   if (handle) editor.move_to(handle, e.offsetX, e.offsetY);
//! };
//! canvas.onpointerup = () => editor.release();
//!
//! const tick = () => { editor.flush_frame(); requestAnimationFrame(tick); };
//! requestAnimationFrame(tick);
//!
//! // On confirm
//! const crop = editor.pixel_crop();
//! ```

use crate::types::{parse_handle, JsEmission, JsPixelRegion, JsRect};
use cropframe_core::{EditorConfig, FrameStats, Point, RegionEditor, Size};
use wasm_bindgen::prelude::*;

/// Interactive crop box over a letterboxed image.
#[wasm_bindgen]
pub struct JsRegionEditor {
    inner: RegionEditor<FrameStats>,
    on_change: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl JsRegionEditor {
    /// Create an editor with the default configuration.
    ///
    /// # Arguments
    /// * `image_width`, `image_height` - Native pixel size of the photo
    /// * `container_width`, `container_height` - Size of the preview area
    ///
    /// # Errors
    /// Returns an error if any dimension is zero, negative or not finite.
    #[wasm_bindgen(constructor)]
    pub fn new(
        image_width: f64,
        image_height: f64,
        container_width: f64,
        container_height: f64,
    ) -> Result<JsRegionEditor, JsValue> {
        Self::build(
            image_width,
            image_height,
            container_width,
            container_height,
            EditorConfig::default(),
        )
    }

    /// Create an editor with configuration overrides.
    ///
    /// `config` is a plain object; missing fields keep their defaults:
    /// `{ min_size: 40, initial_width_fraction: 0.6, initial_height_fraction: 0.3, handle_size: 30 }`
    pub fn with_config(
        image_width: f64,
        image_height: f64,
        container_width: f64,
        container_height: f64,
        config: JsValue,
    ) -> Result<JsRegionEditor, JsValue> {
        let config: EditorConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid editor config: {}", e)))?;
        Self::build(
            image_width,
            image_height,
            container_width,
            container_height,
            config,
        )
    }

    /// Current crop box in display units.
    #[wasm_bindgen(getter)]
    pub fn region(&self) -> JsRect {
        self.inner.region().into()
    }

    /// The displayed image area inside the container.
    #[wasm_bindgen(getter)]
    pub fn image_bounds(&self) -> JsRect {
        self.inner.placement().bounds().into()
    }

    #[wasm_bindgen(getter)]
    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    /// Name of the handle being dragged, `undefined` when idle.
    #[wasm_bindgen(getter)]
    pub fn active_handle(&self) -> Option<String> {
        self.inner.active_handle().map(|h| h.as_str().to_string())
    }

    /// Name of the handle under a pointer position, `undefined` on a miss.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<String> {
        self.inner
            .hit_test(Point::new(x, y))
            .map(|h| h.as_str().to_string())
    }

    /// Start dragging `handle`. Returns false if a gesture is already active.
    pub fn grant(&mut self, handle: &str) -> Result<bool, JsValue> {
        let handle = parse_handle(handle)?;
        Ok(self.inner.grant(handle))
    }

    /// Start dragging whatever is under the pointer. Returns the handle name.
    pub fn grant_at(&mut self, x: f64, y: f64) -> Option<String> {
        self.inner
            .grant_at(Point::new(x, y))
            .map(|h| h.as_str().to_string())
    }

    /// Apply the total drag displacement since the gesture started.
    pub fn move_by(&mut self, handle: &str, dx: f64, dy: f64) -> Result<JsRect, JsValue> {
        let handle = parse_handle(handle)?;
        Ok(self.inner.move_by(handle, dx, dy).into())
    }

    /// Apply a move given as the absolute pointer position.
    pub fn move_to(&mut self, handle: &str, x: f64, y: f64) -> Result<JsRect, JsValue> {
        let handle = parse_handle(handle)?;
        Ok(self.inner.move_to(handle, Point::new(x, y)).into())
    }

    /// End the gesture. The returned rectangle is authoritative.
    pub fn release(&mut self) -> JsRect {
        self.inner.release().into()
    }

    /// Abandon the gesture (e.g. pointer capture lost).
    pub fn cancel(&mut self) -> bool {
        self.inner.cancel()
    }

    /// Take the pending update for this frame, `undefined` if none.
    pub fn next_frame(&mut self) -> Option<JsEmission> {
        self.inner.next_frame().map(JsEmission::from)
    }

    /// Register `callback(rect, terminal)` invoked by [`flush_frame`](Self::flush_frame).
    pub fn set_on_change(&mut self, callback: js_sys::Function) {
        self.on_change = Some(callback);
    }

    /// Deliver the pending update to the registered callback.
    ///
    /// Call from `requestAnimationFrame`. Returns true if an update was
    /// delivered.
    pub fn flush_frame(&mut self) -> bool {
        let Some(callback) = &self.on_change else {
            return false;
        };
        let Some(emission) = self.inner.next_frame() else {
            return false;
        };

        let rect = JsValue::from(JsRect::from(emission.rect));
        let terminal = JsValue::from_bool(emission.terminal);
        if let Err(err) = callback.call2(&JsValue::NULL, &rect, &terminal) {
            web_sys::console::error_2(&"onCropChange callback failed:".into(), &err);
        }
        true
    }

    /// The preview area changed size. The selection keeps covering the same
    /// part of the image.
    pub fn resize_container(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        let container = Size::new(width, height).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.resize_container(container);
        Ok(())
    }

    /// Switch to a new photo; the crop box returns to its default.
    pub fn load_image(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        let image = Size::new(width, height).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.load_image(image);
        Ok(())
    }

    /// Put the crop box back to its default position.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Current crop in source image pixels (fractional).
    pub fn image_crop(&self) -> JsRect {
        self.inner.image_crop().into()
    }

    /// Current crop rounded to whole source pixels.
    pub fn pixel_crop(&self) -> JsPixelRegion {
        self.inner.pixel_crop().into()
    }

    /// Current crop relative to the image size: `x`/`y`/`width`/`height`
    /// hold left/top/width/height in 0..1.
    pub fn normalized_crop(&self) -> JsRect {
        let n = self.inner.normalized_crop();
        JsRect::new(n.left, n.top, n.width, n.height)
    }

    /// Move processing statistics as a plain object.
    pub fn frame_summary(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.observer().summary())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsRegionEditor {
    fn build(
        image_width: f64,
        image_height: f64,
        container_width: f64,
        container_height: f64,
        config: EditorConfig,
    ) -> Result<JsRegionEditor, JsValue> {
        let image = Size::new(image_width, image_height);
        let container = Size::new(container_width, container_height);
        let inner = image
            .and_then(|image| {
                container.and_then(|container| {
                    RegionEditor::with_observer(image, container, config, FrameStats::new())
                })
            })
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(JsRegionEditor {
            inner,
            on_change: None,
        })
    }
}


/// WASM-specific tests that require JsValue.
///
/// These tests exercise error paths and JS callbacks and can only run on
/// wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use serde::Serialize;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Serialize)]
    struct TestConfig {
        min_size: f64,
    }

    #[wasm_bindgen_test]
    fn test_rejects_invalid_dimensions() {
        assert!(JsRegionEditor::new(0.0, 3000.0, 1000.0, 800.0).is_err());
        assert!(JsRegionEditor::new(4000.0, 3000.0, 1000.0, -1.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_rejects_unknown_handle() {
        let mut e = JsRegionEditor::new(4000.0, 3000.0, 1000.0, 800.0).unwrap();
        assert!(e.grant("center").is_err());
        assert!(e.move_by("center", 1.0, 1.0).is_err());
    }

    #[wasm_bindgen_test]
    fn test_with_config_overrides_min_size() {
        let config = serde_wasm_bindgen::to_value(&TestConfig { min_size: 100.0 }).unwrap();
        let mut e = JsRegionEditor::with_config(4000.0, 3000.0, 1000.0, 800.0, config).unwrap();
        e.grant("bottomRight").unwrap();
        let r = e.move_by("bottomRight", 0.0, -400.0).unwrap();
        assert_eq!(r.height(), 100.0);
    }

    #[wasm_bindgen_test]
    fn test_with_config_rejects_bad_values() {
        let config = serde_wasm_bindgen::to_value(&TestConfig { min_size: 0.0 }).unwrap();
        assert!(JsRegionEditor::with_config(4000.0, 3000.0, 1000.0, 800.0, config).is_err());
    }

    #[wasm_bindgen_test]
    fn test_flush_frame_invokes_callback() {
        let mut e = JsRegionEditor::new(4000.0, 3000.0, 1000.0, 800.0).unwrap();
        let callback = js_sys::Function::new_with_args("rect, terminal", "globalThis.__lastTerminal = terminal;");
        e.set_on_change(callback);

        assert!(e.flush_frame());
        assert!(!e.flush_frame());

        e.grant("move").unwrap();
        e.move_by("move", 10.0, 0.0).unwrap();
        e.release();
        assert!(e.flush_frame());

        let last = js_sys::Reflect::get(&js_sys::global(), &"__lastTerminal".into()).unwrap();
        assert_eq!(last.as_bool(), Some(true));
    }

    #[wasm_bindgen_test]
    fn test_frame_summary_serializes() {
        let mut e = JsRegionEditor::new(4000.0, 3000.0, 1000.0, 800.0).unwrap();
        e.grant("move").unwrap();
        e.move_by("move", 1.0, 1.0).unwrap();
        e.release();
        assert!(e.frame_summary().unwrap().is_object());
    }
}
