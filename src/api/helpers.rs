//! Shared helpers for the WASM API
//!
//! Console logging, serde conversions at the JS boundary and error
//! conversion into `JsValue`.

use js_sys::{Array, Function, Number};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::TooltipError;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

pub fn log_warn(msg: &str) {
    warn(&format!("[tooltip] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[tooltip] ❌ {}", msg));
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// `undefined` and `null` both mean "not given"
pub fn is_absent(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

/// String form of a primitive, the way DOM setters stringify it
///
/// Numbers use JavaScript's own formatting (`0.9`, not `0.9000000000000000`).
/// Objects and functions give `None`.
pub fn to_text(value: &JsValue) -> Option<String> {
    if let Some(text) = value.as_string() {
        return Some(text);
    }
    if let Some(n) = value.as_f64() {
        return Number::from(n).to_string(10).ok().map(String::from);
    }
    value.as_bool().map(|b| b.to_string())
}

/// Call a user function with the `show` argument list
pub fn apply(func: &Function, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let array: Array = args.iter().collect();
    func.apply(&JsValue::NULL, &array)
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a validation error to a JsValue
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log_error(&msg);
    JsValue::from_str(&msg)
}

impl From<TooltipError> for JsValue {
    fn from(err: TooltipError) -> Self {
        validation_error(err.to_string())
    }
}
