//! WebAssembly snake-extraction solver and level editor core.
//!
//! Exports a `TestSession` (step, undo and auto-play through snake removals)
//! and a `LevelEditor` (paint, load, export) to JavaScript via wasm-bindgen.
//! Grid data crosses the boundary as a flat `Uint8Array` in row-major
//! layout: `cells[y * width + x]` maps to JS `grid[y][x]`.

#[macro_use]
mod log;

pub mod autoplay;
pub mod config;
pub mod editor;
pub mod exit;
pub mod finder;
pub mod history;
pub mod level;
pub mod scan;
pub mod session;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub use wasm_exports::{wasm_ping, LevelEditor, TestSession};

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::autoplay::IntervalTimer;
    use crate::config::{EditorConfig, SessionConfig};
    use crate::editor::{Editor, Tool};
    use crate::session::{Render, Session};
    use crate::types::{Grid, Snake};

    type BrowserSession = Session<BrowserTimer, JsRenderer>;

    fn config_from_js<T>(value: JsValue) -> Result<T, JsValue>
    where
        T: Default + serde::de::DeserializeOwned,
    {
        if value.is_undefined() || value.is_null() {
            return Ok(T::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
    }

    /// `window.setInterval` driven timer. The tick callback is created once
    /// per session and reused for every start.
    struct BrowserTimer {
        callback: Option<Closure<dyn FnMut()>>,
    }

    impl IntervalTimer for BrowserTimer {
        type Handle = i32;

        fn start(&mut self, period_ms: u32) -> Option<i32> {
            let callback = self.callback.as_ref()?;
            let window = web_sys::window()?;
            match window.set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period_ms.min(i32::MAX as u32) as i32,
            ) {
                Ok(id) => Some(id),
                Err(err) => {
                    web_sys::console::error_1(&err);
                    None
                }
            }
        }

        fn cancel(&mut self, handle: i32) {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
        }
    }

    /// Calls `render(width, height, cells, active)` where `active` is
    /// `{ head: {x, y}, body: [{x, y}, ...] }` or `null`.
    struct JsRenderer {
        callback: js_sys::Function,
    }

    impl Render for JsRenderer {
        fn render(&mut self, grid: &Grid, active: Option<&Snake>) {
            let cells = js_sys::Uint8Array::from(grid.codes().as_slice());
            let active = match active.map(serde_wasm_bindgen::to_value) {
                Some(Ok(value)) => value,
                Some(Err(err)) => {
                    web_sys::console::error_1(&JsValue::from(err));
                    JsValue::NULL
                }
                None => JsValue::NULL,
            };

            let args = js_sys::Array::new();
            args.push(&JsValue::from(grid.width as u32));
            args.push(&JsValue::from(grid.height as u32));
            args.push(&cells.into());
            args.push(&active);

            if let Err(err) = self.callback.apply(&JsValue::NULL, &args) {
                web_sys::console::error_1(&err);
            }
        }
    }

    /// Test view over a parsed level.
    ///
    /// The render callback must not call back into the session.
    #[wasm_bindgen]
    pub struct TestSession {
        inner: Rc<RefCell<BrowserSession>>,
    }

    #[wasm_bindgen]
    impl TestSession {
        /// Parse `level`, compute the first active snake and render once.
        /// `config` is `{ tickMs?: number }` or undefined.
        #[wasm_bindgen(constructor)]
        pub fn new(level: &str, render: js_sys::Function, config: JsValue) -> Result<TestSession, JsValue> {
            let config: SessionConfig = config_from_js(config)?;
            let session = Session::from_level(
                level,
                BrowserTimer { callback: None },
                JsRenderer { callback: render },
                config,
            )
            .map_err(|err| JsValue::from_str(&err.to_string()))?;

            let inner = Rc::new(RefCell::new(session));
            let weak: Weak<RefCell<BrowserSession>> = Rc::downgrade(&inner);
            let tick = Closure::wrap(Box::new(move || {
                let Some(session) = weak.upgrade() else { return };
                let Ok(mut session) = session.try_borrow_mut() else {
                    console_log!("tick skipped: session busy");
                    return;
                };
                session.tick();
            }) as Box<dyn FnMut()>);
            inner.borrow_mut().timer_mut().callback = Some(tick);

            Ok(TestSession { inner })
        }

        pub fn advance(&self) -> bool {
            self.inner.borrow_mut().advance().is_some()
        }

        pub fn retreat(&self) -> bool {
            self.inner.borrow_mut().retreat().is_some()
        }

        #[wasm_bindgen(js_name = "toggleAutoPlay")]
        pub fn toggle_auto_play(&self) -> bool {
            self.inner.borrow_mut().toggle_auto_play()
        }

        #[wasm_bindgen(js_name = "isAutoPlaying")]
        pub fn is_auto_playing(&self) -> bool {
            self.inner.borrow().is_auto_playing()
        }

        #[wasm_bindgen(js_name = "historyLength")]
        pub fn history_length(&self) -> u32 {
            self.inner.borrow().history_len() as u32
        }

        #[wasm_bindgen(js_name = "isSolved")]
        pub fn is_solved(&self) -> bool {
            self.inner.borrow().is_solved()
        }

        #[wasm_bindgen(js_name = "exportLevel")]
        pub fn export_level(&self) -> String {
            self.inner.borrow().export()
        }
    }

    impl Drop for TestSession {
        // The interval must not fire into a freed callback.
        fn drop(&mut self) {
            if let Ok(mut session) = self.inner.try_borrow_mut() {
                session.stop_auto_play();
            }
        }
    }

    /// Editor grid behind the paint canvas.
    #[wasm_bindgen]
    pub struct LevelEditor {
        editor: Editor,
    }

    #[wasm_bindgen]
    impl LevelEditor {
        /// `config` is `{ width?: number, height?: number }` or undefined.
        #[wasm_bindgen(constructor)]
        pub fn new(config: JsValue) -> Result<LevelEditor, JsValue> {
            let config: EditorConfig = config_from_js(config)?;
            let editor =
                Editor::from_config(&config).map_err(|err| JsValue::from_str(&err.to_string()))?;
            Ok(LevelEditor { editor })
        }

        /// Replace the grid with an empty one. Sizes of 0 become 1; oversized
        /// grids are refused and the current grid is kept.
        pub fn resize(&mut self, width: usize, height: usize) -> Result<(), JsValue> {
            self.editor
                .resize(width, height)
                .map_err(|err| JsValue::from_str(&err.to_string()))
        }

        /// Apply a toolbar tool (`pan`, `black`, `white`, `red`, `bg`).
        /// Returns whether the grid changed.
        pub fn paint(&mut self, x: usize, y: usize, tool: &str) -> bool {
            match Tool::from_name(tool) {
                Some(tool) => self.editor.paint(x, y, tool),
                None => {
                    console_log!("paint ignored: unknown tool={}", tool);
                    false
                }
            }
        }

        #[wasm_bindgen(js_name = "toolPaints")]
        pub fn tool_paints(tool: &str) -> bool {
            Tool::from_name(tool).is_some_and(Tool::paints)
        }

        #[wasm_bindgen(js_name = "stampHead")]
        pub fn stamp_head(&mut self, x: usize, y: usize) -> bool {
            self.editor.stamp_head(x, y)
        }

        #[wasm_bindgen(js_name = "clearCell")]
        pub fn clear_cell(&mut self, x: usize, y: usize) -> bool {
            self.editor.clear_cell(x, y)
        }

        /// Load level text. Malformed text leaves the grid as it was.
        pub fn load(&mut self, text: &str) -> bool {
            match self.editor.load(text) {
                Ok(()) => true,
                Err(err) => {
                    console_log!("load ignored: {}", err);
                    false
                }
            }
        }

        #[wasm_bindgen(js_name = "exportLevel")]
        pub fn export_level(&self) -> String {
            self.editor.export()
        }

        pub fn cells(&self) -> js_sys::Uint8Array {
            js_sys::Uint8Array::from(self.editor.grid().codes().as_slice())
        }

        pub fn width(&self) -> usize {
            self.editor.grid().width
        }

        pub fn height(&self) -> usize {
            self.editor.grid().height
        }

        #[wasm_bindgen(js_name = "isHeadSlot")]
        pub fn is_head_slot(x: usize, y: usize) -> bool {
            Editor::is_head_slot(x, y)
        }
    }

    /// Ping function to verify WASM is loaded.
    #[wasm_bindgen(js_name = "ping")]
    pub fn wasm_ping() -> String {
        "WASM snake solver ready".to_string()
    }
}
