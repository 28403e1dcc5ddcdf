//! Bindings for the hosted Waline client (`waline.umd.js`), which exposes a
//! global `Waline` object.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::comments::WidgetConfig;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Waline, js_name = init, catch)]
    fn waline_init(options: JsValue) -> Result<JsValue, JsValue>;

    /// Handle returned by `Waline.init`.
    #[derive(Debug, Clone)]
    pub type WalineInstance;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &WalineInstance);
}

/// Call `Waline.init` with `config`.
///
/// Returns `None` when the library is missing, throws, or cannot find the
/// mount element (it returns `null` in that case).
pub fn init(config: &WidgetConfig) -> Option<WalineInstance> {
    let options = match serde_wasm_bindgen::to_value(config) {
        Ok(options) => options,
        Err(err) => {
            log::error!("failed to encode comment widget options: {err}");
            return None;
        }
    };
    match waline_init(options) {
        Ok(handle) if handle.is_null() || handle.is_undefined() => {
            log::warn!("comment widget mount {} not found", config.el);
            None
        }
        Ok(handle) => Some(handle.unchecked_into()),
        Err(err) => {
            log::error!("Waline.init failed: {err:?}");
            None
        }
    }
}
