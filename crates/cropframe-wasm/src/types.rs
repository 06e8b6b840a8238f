//! WASM-compatible wrapper types for editor geometry.
//!
//! These types wrap the core geometry types and expose them to JavaScript
//! as plain classes with read-only getters.

use cropframe_core::{Emission, HandleType, PixelRegion, Rect};
use wasm_bindgen::prelude::*;

/// A rectangle for JavaScript (display units or image pixels, depending on
/// the method that produced it).
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[wasm_bindgen]
impl JsRect {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> JsRect {
        JsRect {
            x,
            y,
            width,
            height,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl From<Rect> for JsRect {
    fn from(r: Rect) -> Self {
        Self::new(r.x, r.y, r.width, r.height)
    }
}

/// A crop region in whole source pixels.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsPixelRegion {
    inner: PixelRegion,
}

#[wasm_bindgen]
impl JsPixelRegion {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u32 {
        self.inner.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u32 {
        self.inner.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }
}

impl From<PixelRegion> for JsPixelRegion {
    fn from(inner: PixelRegion) -> Self {
        Self { inner }
    }
}

/// One coalesced crop box update.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsEmission {
    rect: JsRect,
    terminal: bool,
}

#[wasm_bindgen]
impl JsEmission {
    #[wasm_bindgen(getter)]
    pub fn rect(&self) -> JsRect {
        self.rect
    }

    /// True for the final value of a gesture (pointer released).
    #[wasm_bindgen(getter)]
    pub fn terminal(&self) -> bool {
        self.terminal
    }
}

impl From<Emission> for JsEmission {
    fn from(e: Emission) -> Self {
        Self {
            rect: e.rect.into(),
            terminal: e.terminal,
        }
    }
}

/// Parse a handle name coming from JavaScript.
///
/// Accepted names: `move`, `topLeft`, `topRight`, `bottomLeft`, `bottomRight`.
pub(crate) fn parse_handle(name: &str) -> Result<HandleType, JsValue> {
    name.parse::<HandleType>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_rect_from_rect() {
        let r: JsRect = Rect::new(1.0, 2.0, 3.0, 4.0).into();
        assert_eq!(r.x(), 1.0);
        assert_eq!(r.y(), 2.0);
        assert_eq!(r.width(), 3.0);
        assert_eq!(r.height(), 4.0);
    }

    #[test]
    fn test_js_pixel_region() {
        let p: JsPixelRegion = PixelRegion {
            x: 800,
            y: 1050,
            width: 2400,
            height: 900,
        }
        .into();
        assert_eq!(p.x(), 800);
        assert_eq!(p.y(), 1050);
        assert_eq!(p.width(), 2400);
        assert_eq!(p.height(), 900);
    }

    #[test]
    fn test_js_emission() {
        let e: JsEmission = Emission {
            rect: Rect::new(0.0, 0.0, 40.0, 40.0),
            terminal: true,
        }
        .into();
        assert!(e.terminal());
        assert_eq!(e.rect().width(), 40.0);
    }

    #[test]
    fn test_parse_valid_handles() {
        assert_eq!(parse_handle("move").ok(), Some(HandleType::Move));
        assert_eq!(parse_handle("bottomRight").ok(), Some(HandleType::BottomRight));
    }
}
