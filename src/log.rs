//! Browser console logging.
//!
//! `console_log!` takes `format!` arguments. On native targets the arguments
//! are still type-checked but nothing is printed.

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($arg:tt)*) => {
        ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($arg)*)))
    };
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}
