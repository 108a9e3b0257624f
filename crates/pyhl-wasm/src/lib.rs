//! WASM bindings for the pyhl tokenizer.
//!
//! Exposes a `Highlighter` class to JavaScript editors via wasm-bindgen.
//! Classification arrays cross the boundary as `Uint8Array`s of packed tags
//! (see `Tag::bits`); names, hints, errors and ranks go through
//! serde-wasm-bindgen as plain JS objects.

use pyhl_highlight::{GlobalNames, Hint, Rank, Tag, Tokenizer};
use wasm_bindgen::prelude::*;

/// Incremental highlighter for one document.
#[wasm_bindgen]
#[derive(Default)]
pub struct Highlighter {
    inner: Tokenizer,
}

#[wasm_bindgen]
impl Highlighter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Highlighter {
        Highlighter::default()
    }

    /// Tokenize a whole document, replacing all previous lines.
    #[wasm_bindgen(js_name = setSourceText)]
    pub fn set_source_text(&mut self, text: &str) {
        self.inner.set_source_text(text);
    }

    /// Re-tokenize one line. Returns one packed tag per character.
    #[wasm_bindgen(js_name = lineProp)]
    pub fn line_prop(&mut self, index: usize, text: &str) -> Vec<u8> {
        packed(self.inner.line_prop(index, text))
    }

    /// Packed tags of every line, as an array of `Uint8Array`.
    #[wasm_bindgen(js_name = lineProperties)]
    pub fn line_properties(&self) -> js_sys::Array {
        let lines = js_sys::Array::new();
        for props in self.inner.line_properties() {
            lines.push(&js_sys::Uint8Array::from(packed(props).as_slice()));
        }
        lines
    }

    #[wasm_bindgen(js_name = lineCount)]
    pub fn line_count(&self) -> usize {
        self.inner.line_count()
    }

    /// Lexical errors as `{ line, column, length, kind }` objects.
    pub fn errors(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.errors())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Rank markers as `[a, b]` pairs.
    #[wasm_bindgen(js_name = lineRanks)]
    pub fn line_ranks(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.line_ranks())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(js_name = setLineRank)]
    pub fn set_line_rank(&mut self, index: usize, a: i32, b: i32) {
        self.inner.set_line_rank(index, Rank(a, b));
    }

    /// Replace global names from `{ modules, functions, classes }`.
    /// Throws if the object has the wrong shape.
    #[wasm_bindgen(js_name = setGlobalNames)]
    pub fn set_global_names(&mut self, names: JsValue) -> Result<(), JsError> {
        let names: GlobalNames =
            serde_wasm_bindgen::from_value(names).map_err(|e| JsError::new(&e.to_string()))?;
        self.inner.set_global_names(names);
        Ok(())
    }

    /// Replace hints from an array of `{ name, line, kind }` (or the
    /// analyzer's `{ n, l, k }`) objects. Throws on an unknown kind.
    #[wasm_bindgen(js_name = setHints)]
    pub fn set_hints(&mut self, hints: JsValue) -> Result<(), JsError> {
        let hints: Vec<Hint> =
            serde_wasm_bindgen::from_value(hints).map_err(|e| JsError::new(&e.to_string()))?;
        self.inner.set_hints(hints);
        Ok(())
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn packed(tags: &[Tag]) -> Vec<u8> {
    tags.iter().map(|tag| tag.bits()).collect()
}
