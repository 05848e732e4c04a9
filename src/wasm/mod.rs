//! WASM bindings for the paginator

use crate::layout::{Paginator, Viewport};
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed dialogue paginator owning its message
#[wasm_bindgen]
#[derive(Default)]
pub struct WasmDialogue {
    paginator: Paginator<String>,
}

#[wasm_bindgen]
impl WasmDialogue {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a message. Over-capacity bounds are clamped; zero bounds are
    /// rejected with an error string.
    pub fn start(&mut self, text: String, width: usize, height: usize) -> Result<(), String> {
        let viewport = Viewport::clamped(width, height).map_err(|e| e.to_string())?;
        self.paginator.start(text, viewport);
        Ok(())
    }

    /// Turn the page or finish; true when the state changed
    pub fn advance(&mut self) -> bool {
        self.paginator.advance()
    }

    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.paginator.is_active()
    }

    #[wasm_bindgen(js_name = needsMoreIndicator)]
    pub fn needs_more_indicator(&self) -> bool {
        self.paginator.needs_more_indicator()
    }

    #[wasm_bindgen(js_name = lineCount)]
    pub fn line_count(&self) -> usize {
        self.paginator.line_count()
    }

    /// Line `index` of the current page
    pub fn line(&self, index: usize) -> Option<String> {
        self.paginator.line(index).map(str::to_owned)
    }

    /// Current page lines as a JS array of strings
    pub fn lines(&self) -> js_sys::Array {
        self.paginator
            .current_lines()
            .map(JsValue::from_str)
            .collect()
    }
}
