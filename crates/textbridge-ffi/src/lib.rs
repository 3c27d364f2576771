// FFI functions are inherently unsafe -- callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// textbridge-ffi: the C-convention registration path for both facades.
//
// Two independent entry-point families are exposed:
// - `tb_diff*`: stateless edit-script computation, returned as an array
//   of structured records.
// - `tb_spell*`: construction and use of opaque dictionary capabilities.
//
// Memory management rules:
// - Opaque `TbSpell` pointer: created by `tb_spell_new`, released exactly
//   once by `tb_spell_free`.
// - Returned strings: caller frees with `tb_string_free`.
// - Returned string arrays: caller frees with `tb_string_array_free`.
// - Returned edit arrays: caller frees with `tb_edit_array_free`.
// - All input strings are UTF-8 encoded, null-terminated C strings.
//
// Every spell operation validates its capability argument (non-null and
// carrying the registered type tag) before any engine call. This is the
// one defensive check the bridge performs; the engine itself assumes a
// correctly typed handle.

use std::ffi::{CStr, CString, c_char, c_int};
use std::{ptr, slice};

use textbridge_spell::SpellHandle;

/// Type tag carried by every live [`TbSpell`]; cleared on free so a stale
/// pointer no longer validates.
const TB_SPELL_TAG: u32 = 0x7462_5350; // "tbSP"

/// Opaque dictionary capability handed to the host.
///
/// Hosts treat this as an opaque pointer; the tag field is checked by
/// every operation before the wrapped handle is touched.
pub struct TbSpell {
    tag: u32,
    handle: SpellHandle,
}

// ── Diff facade ─────────────────────────────────────────────────

/// One edit operation crossing the boundary as a structured record.
///
/// `op` uses the fixed numeric contract: DELETE = -1, INSERT = +1,
/// EQUAL = 0.
#[repr(C)]
pub struct TbEdit {
    pub op: c_int,
    pub text: *mut c_char,
}

/// An ordered edit script. `edits` is NULL when `count` is 0.
#[repr(C)]
pub struct TbEditArray {
    pub edits: *mut TbEdit,
    pub count: usize,
}

/// Compute the semantically cleaned edit script between two text buffers.
///
/// Pure function of its inputs; no state is shared between calls.
/// Returns an array with count 0 on an argument error (NULL or non-UTF-8
/// input); in that case, if `error_out` is non-NULL it receives a
/// heap-allocated error string the caller must free with `tb_string_free`.
/// Two identical (or empty) inputs also yield count 0, with no error set.
/// Caller frees the result with `tb_edit_array_free`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tb_diff(
    text1: *const c_char,
    text2: *const c_char,
    error_out: *mut *mut c_char,
) -> TbEditArray {
    let empty = TbEditArray { edits: ptr::null_mut(), count: 0 };

    let Some(text1) = cstr_to_str(text1) else {
        set_error(error_out, "text1 is null or not valid UTF-8");
        return empty;
    };
    let Some(text2) = cstr_to_str(text2) else {
        set_error(error_out, "text2 is null or not valid UTF-8");
        return empty;
    };

    let edits = textbridge_diff::diff(text1, text2);
    let count = edits.len();
    if count == 0 {
        return empty;
    }

    // into_boxed_slice guarantees the allocation length equals count, so
    // the free side can reconstruct the exact same layout.
    let records: Box<[TbEdit]> = edits
        .into_iter()
        .map(|edit| TbEdit { op: edit.kind.code(), text: str_to_c(&edit.text) })
        .collect::<Vec<TbEdit>>()
        .into_boxed_slice();

    TbEditArray { edits: Box::into_raw(records) as *mut TbEdit, count }
}

/// Free an edit array returned by `tb_diff`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tb_edit_array_free(arr: TbEditArray) {
    if arr.edits.is_null() || arr.count == 0 {
        return;
    }
    let records =
        unsafe { Box::from_raw(slice::from_raw_parts_mut(arr.edits, arr.count)) };
    for record in records {
        free_c_str(record.text);
    }
}

// ── Spell handle lifecycle ──────────────────────────────────────

/// Construct a dictionary capability from affix and word-list file paths.
///
/// - `aff_path`, `dic_path`: required paths (UTF-8 C strings)
/// - `key`: optional decryption key for encrypted dictionaries (NULL to skip)
///
/// Returns an opaque tagged pointer on success, NULL on failure. On
/// failure, if `error_out` is non-NULL it receives a heap-allocated error
/// string the caller must free with `tb_string_free`. No partial handle
/// exists after a failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tb_spell_new(
    aff_path: *const c_char,
    dic_path: *const c_char,
    key: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut TbSpell {
    let Some(aff_path) = cstr_to_str(aff_path) else {
        set_error(error_out, "aff_path is null or not valid UTF-8");
        return ptr::null_mut();
    };
    let Some(dic_path) = cstr_to_str(dic_path) else {
        set_error(error_out, "dic_path is null or not valid UTF-8");
        return ptr::null_mut();
    };
    let key = cstr_to_str(key);

    match SpellHandle::open(aff_path, dic_path, key) {
        Ok(handle) => Box::into_raw(Box::new(TbSpell { tag: TB_SPELL_TAG, handle })),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Release a capability created by `tb_spell_new`.
///
/// The tag is cleared before the native resources are dropped, so further
/// calls through a stale copy of the pointer fail validation instead of
/// reaching the engine. Must be called exactly once per capability.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tb_spell_free(handle: *mut TbSpell) {
    if handle.is_null() || unsafe { (*handle).tag } != TB_SPELL_TAG {
        return;
    }
    let mut boxed = unsafe { Box::from_raw(handle) };
    boxed.tag = 0;
    drop(boxed);
}

// ── Spell operations ────────────────────────────────────────────

/// Check whether a word is accepted by the capability's vocabulary.
/// Returns 1 for correct, 0 for incorrect, -1 on argument error (invalid
/// capability or word). No engine call happens on -1.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tb_spell_check(handle: *const TbSpell, word: *const c_char) -> c_int {
    let Some(spell) = (unsafe { live(handle) }) else {
        return -1;
    };
    let Some(word) = cstr_to_str(word) else {
        return -1;
    };
    if spell.spell(word) { 1 } else { 0 }
}

/// Generate ranked correction candidates for a misspelled word.
///
/// Returns a NULL-terminated array of C strings that the caller must free
/// with `tb_string_array_free`; the engine's own candidate list is copied
/// out and released before this function returns. Returns NULL on
/// argument error. An accepted word yields an empty (immediately
/// NULL-terminated) array, not NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tb_spell_suggest(
    handle: *const TbSpell,
    word: *const c_char,
) -> *mut *mut c_char {
    let Some(spell) = (unsafe { live(handle) }) else {
        return ptr::null_mut();
    };
    let Some(word) = cstr_to_str(word) else {
        return ptr::null_mut();
    };
    strings_to_c_array(&spell.suggest(word))
}

/// Add a word to the capability's runtime vocabulary.
/// Returns 0 on success, -1 on argument error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tb_spell_add_word(handle: *mut TbSpell, word: *const c_char) -> c_int {
    let Some(spell) = (unsafe { live_mut(handle) }) else {
        return -1;
    };
    let Some(word) = cstr_to_str(word) else {
        return -1;
    };
    spell.add_word(word);
    0
}

/// Merge an auxiliary word list into the capability's vocabulary.
///
/// Returns 0 on success, -1 on failure. On failure, if `error_out` is
/// non-NULL it receives a heap-allocated error string (free with
/// `tb_string_free`) and the capability is unchanged.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tb_spell_add_dic(
    handle: *mut TbSpell,
    dic_path: *const c_char,
    key: *const c_char,
    error_out: *mut *mut c_char,
) -> c_int {
    let Some(spell) = (unsafe { live_mut(handle) }) else {
        set_error(error_out, "invalid spell capability");
        return -1;
    };
    let Some(dic_path) = cstr_to_str(dic_path) else {
        set_error(error_out, "dic_path is null or not valid UTF-8");
        return -1;
    };
    let key = cstr_to_str(key);

    match spell.add_dic(dic_path, key) {
        Ok(()) => 0,
        Err(e) => {
            set_error(error_out, &e.to_string());
            -1
        }
    }
}

// ── Shared release functions ────────────────────────────────────

/// Free a heap-allocated C string returned through `error_out` parameters.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tb_string_free(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings returned by `tb_spell_suggest`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tb_string_array_free(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut len = 0;
    loop {
        let entry = unsafe { *arr.add(len) };
        if entry.is_null() {
            break;
        }
        free_c_str(entry);
        len += 1;
    }
    // Allocated as a boxed slice of len + 1 pointers (terminator included).
    drop(unsafe { Box::from_raw(slice::from_raw_parts_mut(arr, len + 1)) });
}

// ── Internal helpers ────────────────────────────────────────────

/// Validate a capability pointer for read access: non-null and carrying
/// the registered tag.
unsafe fn live<'a>(handle: *const TbSpell) -> Option<&'a SpellHandle> {
    if handle.is_null() || unsafe { (*handle).tag } != TB_SPELL_TAG {
        return None;
    }
    Some(unsafe { &(*handle).handle })
}

/// Validate a capability pointer for write access.
unsafe fn live_mut<'a>(handle: *mut TbSpell) -> Option<&'a mut SpellHandle> {
    if handle.is_null() || unsafe { (*handle).tag } != TB_SPELL_TAG {
        return None;
    }
    Some(unsafe { &mut (*handle).handle })
}

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe { *out = str_to_c(msg) };
    }
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    let mut ptrs: Vec<*mut c_char> = Vec::with_capacity(strings.len() + 1);
    ptrs.extend(strings.iter().map(|s| str_to_c(s)));
    ptrs.push(ptr::null_mut()); // NULL terminator
    // Boxed slice: the free side reconstructs exactly len + 1 pointers.
    Box::into_raw(ptrs.into_boxed_slice()) as *mut *mut c_char
}
