//! Platform abstraction layer
//!
//! Browser bindings for the DOM pieces around the canvas:
//! - Element lookup with setup errors reported as `JsValue`
//! - Score and banner elements (`Hud`)
//! - Document language (`Locale`)

#[cfg(target_arch = "wasm32")]
pub mod web;
