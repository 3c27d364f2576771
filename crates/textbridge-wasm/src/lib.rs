// WASM bindings for the diff and spell facades.
//
// Exposes the two modules to a JavaScript host:
//
// - `diff(text1, text2)` returns the legacy flat alternating encoding
//   `[kind, text, kind, text, ...]` with kind numbers -1 / 0 / +1, for
//   byte-compatibility with existing consumers.
// - `diffEdits(text1, text2)` returns structured `{ op, text }` records
//   (the preferable encoding for new consumers), serialized with
//   serde-wasm-bindgen.
// - `class Spell` wraps one dictionary handle; its native resources are
//   released exactly once when the host garbage collector (or an explicit
//   `free()` call) drops the wasm-bindgen wrapper.
//
// Usage from JavaScript:
//
//   const script = diff("hello world", "hello there");
//   // => [0, "hello ", -1, "world", 1, "there"]
//
//   const spell = new Spell(affText, dicText);
//   spell.spell("hello");      // => true
//   spell.suggest("helo");     // => ["hello", ...]
//   spell.addWord("xyzzy");
//   spell.addDic(extraDicText);

use serde::Serialize;
use wasm_bindgen::prelude::*;

use textbridge_spell::SpellHandle;

// ============================================================================
// Diff module
// ============================================================================

/// Serializable representation of one edit operation.
#[derive(Serialize)]
struct JsEdit {
    op: i32,
    text: String,
}

/// Compute the edit script between two text buffers, flattened into the
/// alternating `[kind, text, ...]` sequence (length 2N for N operations).
#[wasm_bindgen]
pub fn diff(text1: &str, text2: &str) -> js_sys::Array {
    let out = js_sys::Array::new();
    for edit in textbridge_diff::diff(text1, text2) {
        out.push(&JsValue::from_f64(f64::from(edit.kind.code())));
        out.push(&JsValue::from_str(&edit.text));
    }
    out
}

/// Compute the edit script between two text buffers as structured
/// `{ op, text }` records.
#[wasm_bindgen(js_name = "diffEdits")]
pub fn diff_edits(text1: &str, text2: &str) -> Result<JsValue, JsError> {
    let records: Vec<JsEdit> = textbridge_diff::diff(text1, text2)
        .into_iter()
        .map(|edit| JsEdit { op: edit.kind.code(), text: edit.text })
        .collect();
    serde_wasm_bindgen::to_value(&records).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// Spell module
// ============================================================================

/// One loaded dictionary exposed to the host.
///
/// The constructor takes file contents rather than paths because the WASM
/// host owns file access; the embedding side reads the `.aff`/`.dic` pair
/// and passes the text in.
#[wasm_bindgen]
pub struct Spell {
    handle: SpellHandle,
}

#[wasm_bindgen]
impl Spell {
    /// Create a new dictionary from affix and word-list file contents.
    ///
    /// Throws if the engine rejects either input; no partial instance is
    /// left behind.
    #[wasm_bindgen(constructor)]
    pub fn new(aff: &str, dic: &str) -> Result<Spell, JsError> {
        let handle =
            SpellHandle::from_sources(aff, dic).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Spell { handle })
    }

    /// Check whether a word is accepted by this dictionary, its merged
    /// auxiliary dictionaries, and its runtime-added words.
    pub fn spell(&self, word: &str) -> bool {
        self.handle.spell(word)
    }

    /// Ranked correction candidates for a misspelled word, best first.
    /// Empty when the word is already accepted or nothing is close enough.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        self.handle.suggest(word)
    }

    /// Add a word to this dictionary's runtime vocabulary. Later `spell`
    /// and `suggest` calls on the same instance see the addition.
    #[wasm_bindgen(js_name = "addWord")]
    pub fn add_word(&mut self, word: &str) {
        self.handle.add_word(word);
    }

    /// Merge an auxiliary word list (file contents) into this dictionary,
    /// under the primary affix rules. Throws on malformed input, leaving
    /// the instance unchanged.
    #[wasm_bindgen(js_name = "addDic")]
    pub fn add_dic(&mut self, dic: &str) -> Result<(), JsError> {
        self.handle
            .add_dic_sources(dic)
            .map_err(|e| JsError::new(&e.to_string()))
    }
}
