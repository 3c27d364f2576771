//! Diff facade: edit scripts between two text buffers.
//!
//! The underlying engine is the `dissimilar` crate, a diff-match-patch
//! lineage implementation that applies a semantic cleanup pass before
//! returning, so small low-information edits are already merged into
//! human-readable spans.
//!
//! This crate owns the edit-script data model shared by every host
//! registration path:
//!
//! - [`diff`] -- compute the cleaned edit script
//! - [`flatten`] -- the legacy alternating `[kind, text, ...]` host encoding
//! - [`reconstruct_source`] / [`reconstruct_target`] -- invariant helpers
//!
//! The facade is pure: each call only touches its two inputs and a freshly
//! allocated result, so it is safe to call from any thread.

use dissimilar::Chunk;

/// Kind of a single edit operation.
///
/// The numeric encoding used at host boundaries is a fixed contract with
/// existing consumers: DELETE = -1, INSERT = +1, EQUAL = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// Text present in the first buffer only.
    Delete,
    /// Text present in the second buffer only.
    Insert,
    /// Text common to both buffers.
    Equal,
}

impl EditKind {
    /// Numeric boundary encoding of this kind.
    pub fn code(self) -> i32 {
        match self {
            EditKind::Delete => -1,
            EditKind::Insert => 1,
            EditKind::Equal => 0,
        }
    }

    /// Inverse of [`EditKind::code`]. Returns `None` for any value
    /// outside the fixed {-1, 0, 1} contract.
    pub fn from_code(code: i32) -> Option<EditKind> {
        match code {
            -1 => Some(EditKind::Delete),
            1 => Some(EditKind::Insert),
            0 => Some(EditKind::Equal),
            _ => None,
        }
    }
}

/// One unit of a diff result: a deleted, inserted, or unchanged span.
///
/// Edits are immutable once produced and their order is significant:
/// concatenating the non-insert spans reproduces the first input, the
/// non-delete spans the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub kind: EditKind,
    pub text: String,
}

impl Edit {
    /// A deleted span.
    pub fn delete(text: impl Into<String>) -> Self {
        Edit { kind: EditKind::Delete, text: text.into() }
    }

    /// An inserted span.
    pub fn insert(text: impl Into<String>) -> Self {
        Edit { kind: EditKind::Insert, text: text.into() }
    }

    /// An unchanged span.
    pub fn equal(text: impl Into<String>) -> Self {
        Edit { kind: EditKind::Equal, text: text.into() }
    }
}

/// One field of the legacy flat host encoding.
///
/// Hosts that predate structured records receive the edit script as a
/// single sequence alternating kind and text; see [`flatten`].
#[derive(Debug, Clone, PartialEq)]
pub enum FlatField {
    /// An operation kind, encoded per [`EditKind::code`].
    Kind(i32),
    /// The text of the operation that the preceding kind belongs to.
    Text(String),
}

/// Compute the semantically cleaned edit script between two buffers.
///
/// Identical inputs produce a single [`EditKind::Equal`] edit covering the
/// whole buffer (or an empty script when both inputs are empty).
pub fn diff(text1: &str, text2: &str) -> Vec<Edit> {
    dissimilar::diff(text1, text2)
        .into_iter()
        .map(|chunk| match chunk {
            Chunk::Delete(text) => Edit::delete(text),
            Chunk::Insert(text) => Edit::insert(text),
            Chunk::Equal(text) => Edit::equal(text),
        })
        .collect()
}

/// Flatten an edit script into the alternating `[kind, text, ...]` host
/// encoding: for N edits the result has length 2N, with even positions
/// (0-based) holding kinds and odd positions the paired texts.
pub fn flatten(edits: &[Edit]) -> Vec<FlatField> {
    let mut out = Vec::with_capacity(edits.len() * 2);
    for edit in edits {
        out.push(FlatField::Kind(edit.kind.code()));
        out.push(FlatField::Text(edit.text.clone()));
    }
    out
}

/// Concatenate the non-insert spans, reproducing the first input buffer.
pub fn reconstruct_source(edits: &[Edit]) -> String {
    edits
        .iter()
        .filter(|e| e.kind != EditKind::Insert)
        .map(|e| e.text.as_str())
        .collect()
}

/// Concatenate the non-delete spans, reproducing the second input buffer.
pub fn reconstruct_target(edits: &[Edit]) -> String {
    edits
        .iter()
        .filter(|e| e.kind != EditKind::Delete)
        .map(|e| e.text.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_reconstructs(text1: &str, text2: &str) {
        let edits = diff(text1, text2);
        assert_eq!(reconstruct_source(&edits), text1, "source reconstruction");
        assert_eq!(reconstruct_target(&edits), text2, "target reconstruction");
    }

    #[test]
    fn identical_inputs_yield_single_equal() {
        let edits = diff("hello world", "hello world");
        assert_eq!(edits, vec![Edit::equal("hello world")]);
    }

    #[test]
    fn empty_inputs_yield_empty_script() {
        assert!(diff("", "").is_empty());
    }

    #[test]
    fn insert_into_empty() {
        let edits = diff("", "abc");
        assert_eq!(edits, vec![Edit::insert("abc")]);
    }

    #[test]
    fn delete_to_empty() {
        let edits = diff("abc", "");
        assert_eq!(edits, vec![Edit::delete("abc")]);
    }

    #[test]
    fn reconstruction_holds_for_assorted_pairs() {
        assert_reconstructs("hello world", "hello there");
        assert_reconstructs("the quick brown fox", "the slow brown dog");
        assert_reconstructs("", "only target");
        assert_reconstructs("only source", "");
        assert_reconstructs("unchanged", "unchanged");
        assert_reconstructs("a\nb\nc\n", "a\nx\nc\n");
        assert_reconstructs("päivä", "päivää");
    }

    #[test]
    fn hello_world_vs_hello_there() {
        let edits = diff("hello world", "hello there");
        // The shared prefix survives cleanup as a leading EQUAL span.
        assert_eq!(edits[0], Edit::equal("hello "));
        assert_eq!(reconstruct_source(&edits), "hello world");
        assert_eq!(reconstruct_target(&edits), "hello there");
        // Every deleted character came from "world", every inserted one
        // belongs to "there".
        let deleted: String = edits
            .iter()
            .filter(|e| e.kind == EditKind::Delete)
            .map(|e| e.text.as_str())
            .collect();
        let inserted: String = edits
            .iter()
            .filter(|e| e.kind == EditKind::Insert)
            .map(|e| e.text.as_str())
            .collect();
        assert!(!deleted.is_empty());
        assert!(deleted.chars().all(|c| "world".contains(c)));
        assert!(!inserted.is_empty());
        assert!(inserted.chars().all(|c| "there".contains(c)));
    }

    #[test]
    fn flat_encoding_is_even_and_alternating() {
        let edits = diff("hello world", "hello there");
        let flat = flatten(&edits);
        assert_eq!(flat.len(), edits.len() * 2);
        assert_eq!(flat.len() % 2, 0);
        for (i, field) in flat.iter().enumerate() {
            if i % 2 == 0 {
                match field {
                    FlatField::Kind(code) => {
                        assert!(matches!(code, -1 | 0 | 1), "kind out of domain: {code}")
                    }
                    FlatField::Text(_) => panic!("expected kind at position {i}"),
                }
            } else {
                assert!(matches!(field, FlatField::Text(_)), "expected text at position {i}");
            }
        }
    }

    #[test]
    fn flat_encoding_pairs_kind_with_text() {
        let edits = vec![Edit::equal("a"), Edit::delete("b"), Edit::insert("c")];
        let flat = flatten(&edits);
        assert_eq!(
            flat,
            vec![
                FlatField::Kind(0),
                FlatField::Text("a".into()),
                FlatField::Kind(-1),
                FlatField::Text("b".into()),
                FlatField::Kind(1),
                FlatField::Text("c".into()),
            ]
        );
    }

    #[test]
    fn kind_codes_match_fixed_contract() {
        assert_eq!(EditKind::Delete.code(), -1);
        assert_eq!(EditKind::Insert.code(), 1);
        assert_eq!(EditKind::Equal.code(), 0);
    }

    #[test]
    fn from_code_roundtrips_and_rejects_others() {
        for kind in [EditKind::Delete, EditKind::Insert, EditKind::Equal] {
            assert_eq!(EditKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(EditKind::from_code(2), None);
        assert_eq!(EditKind::from_code(-2), None);
        assert_eq!(EditKind::from_code(i32::MAX), None);
    }
}
