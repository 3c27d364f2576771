//! SpellHandle: the dictionary capability exposed to hosts.
//!
//! One handle owns one primary dictionary (an affix file plus a word
//! list), any auxiliary word lists merged in later, and the set of words
//! added at runtime. All mutating operations affect subsequent `spell` and
//! `suggest` calls on the same handle; nothing is persisted beyond the
//! handle's lifetime.
//!
//! The affix source text is retained after construction because auxiliary
//! word lists merge under the primary dictionary's affix rules, matching
//! Hunspell `add_dic` semantics.

use std::path::Path;

use hashbrown::HashSet;
use spellbook::Dictionary;

use crate::loader::{self, LoadError};

/// A loaded spell-checking dictionary plus its runtime additions.
///
/// Operations take `&self` or `&mut self`; the borrow rules provide the
/// per-handle serialization the underlying engine requires.
pub struct SpellHandle {
    /// Affix source text of the primary dictionary, reused when merging
    /// auxiliary word lists.
    aff: String,

    /// The primary dictionary engine.
    primary: Dictionary,

    /// Auxiliary dictionaries merged in with `add_dic`, in merge order.
    extra: Vec<Dictionary>,

    /// Words added at runtime with `add_word`. Checked verbatim, before
    /// the engines.
    added: HashSet<String>,
}

impl SpellHandle {
    /// Create a handle from affix and word-list file contents.
    ///
    /// This is the constructor used where no filesystem exists (the WASM
    /// bridge); [`SpellHandle::open`] layers path handling on top of it.
    pub fn from_sources(aff: &str, dic: &str) -> Result<Self, LoadError> {
        let primary =
            Dictionary::new(aff, dic).map_err(|e| LoadError::Parse(e.to_string()))?;
        Ok(SpellHandle {
            aff: aff.to_string(),
            primary,
            extra: Vec::new(),
            added: HashSet::new(),
        })
    }

    /// Create a handle from affix and word-list file paths, with an
    /// optional decryption key for encrypted dictionaries.
    ///
    /// Fails with [`LoadError`] if either file is unreadable, malformed,
    /// or a compressed container the engine cannot unlock. Construction
    /// either fully succeeds or produces nothing.
    pub fn open(
        aff_path: impl AsRef<Path>,
        dic_path: impl AsRef<Path>,
        key: Option<&str>,
    ) -> Result<Self, LoadError> {
        let aff = loader::read_dictionary_file(aff_path.as_ref(), key)?;
        let dic = loader::read_dictionary_file(dic_path.as_ref(), key)?;
        Self::from_sources(&aff, &dic)
    }

    /// True iff `word` is accepted by the loaded dictionary, any merged
    /// auxiliary dictionary, or the runtime-added words. Affix rules
    /// (stemming, suffix stripping) are applied by the engine.
    pub fn spell(&self, word: &str) -> bool {
        self.added.contains(word)
            || self.primary.check(word)
            || self.extra.iter().any(|dict| dict.check(word))
    }

    /// Ranked correction candidates for a misspelled word, best first.
    ///
    /// Returns an empty list when the word is already accepted. The
    /// engine's candidates are copied into the returned owned list; the
    /// primary dictionary's suggestions come first, then candidates from
    /// auxiliary dictionaries that the primary did not already produce.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        if self.spell(word) {
            return Vec::new();
        }
        let mut suggestions = Vec::new();
        self.primary.suggest(word, &mut suggestions);
        if !self.extra.is_empty() {
            let mut scratch = Vec::new();
            for dict in &self.extra {
                scratch.clear();
                dict.suggest(word, &mut scratch);
                for candidate in scratch.drain(..) {
                    if !suggestions.contains(&candidate) {
                        suggestions.push(candidate);
                    }
                }
            }
        }
        suggestions
    }

    /// Add `word` to the runtime vocabulary of this handle.
    ///
    /// Subsequent `spell` and `suggest` calls on the same handle see the
    /// addition. Not persisted beyond the handle's lifetime.
    pub fn add_word(&mut self, word: &str) {
        self.added.insert(word.to_string());
    }

    /// Merge an auxiliary word list into this handle's vocabulary, using
    /// the primary dictionary's affix rules.
    ///
    /// Fails with [`LoadError`] under the same conditions as
    /// [`SpellHandle::open`]; on failure the handle is unchanged.
    pub fn add_dic(&mut self, dic_path: impl AsRef<Path>, key: Option<&str>) -> Result<(), LoadError> {
        let dic = loader::read_dictionary_file(dic_path.as_ref(), key)?;
        self.add_dic_sources(&dic)
    }

    /// Content-based twin of [`SpellHandle::add_dic`], used by the WASM
    /// bridge.
    pub fn add_dic_sources(&mut self, dic: &str) -> Result<(), LoadError> {
        let dict =
            Dictionary::new(&self.aff, dic).map_err(|e| LoadError::Parse(e.to_string()))?;
        self.extra.push(dict);
        Ok(())
    }

    /// Number of auxiliary dictionaries merged into this handle.
    pub fn extra_dictionaries(&self) -> usize {
        self.extra.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_AFF: &str = "\
SET UTF-8
TRY esianrtolcdugmphbyfvkwjqxz

SFX S Y 1
SFX S 0 s .
";

    const BASE_DIC: &str = "\
4
hello
world/S
cat
dog
";

    const EXTRA_DIC: &str = "\
2
xylophone
quartz/S
";

    fn handle() -> SpellHandle {
        SpellHandle::from_sources(BASE_AFF, BASE_DIC).expect("fixture dictionary must parse")
    }

    #[test]
    fn spell_accepts_listed_words() {
        let h = handle();
        assert!(h.spell("hello"));
        assert!(h.spell("world"));
        assert!(h.spell("cat"));
    }

    #[test]
    fn spell_applies_affix_rules() {
        let h = handle();
        // "world/S" carries the plural suffix rule; "worlds" is not in the
        // word list literally.
        assert!(h.spell("worlds"));
        // "cat" carries no flag, so the rule must not fire for it.
        assert!(!h.spell("cats"));
    }

    #[test]
    fn spell_rejects_unknown_words() {
        let h = handle();
        assert!(!h.spell("xyzzy"));
        assert!(!h.spell("helloo"));
    }

    #[test]
    fn add_word_makes_word_spell_true() {
        let mut h = handle();
        assert!(!h.spell("xyzzy"));
        h.add_word("xyzzy");
        assert!(h.spell("xyzzy"));
    }

    #[test]
    fn add_word_does_not_leak_into_other_words() {
        let mut h = handle();
        h.add_word("xyzzy");
        assert!(!h.spell("xyzzyx"));
    }

    #[test]
    fn additions_never_remove_recognized_words() {
        let mut h = handle();
        let known = ["hello", "world", "worlds", "cat", "dog"];
        for word in known {
            assert!(h.spell(word));
        }
        h.add_word("xyzzy");
        h.add_dic_sources(EXTRA_DIC).unwrap();
        h.add_word("frobnicate");
        for word in known {
            assert!(h.spell(word), "{word} lost after additions");
        }
        assert!(h.spell("xyzzy"));
    }

    #[test]
    fn add_dic_sources_merges_vocabulary() {
        let mut h = handle();
        assert!(!h.spell("xylophone"));
        h.add_dic_sources(EXTRA_DIC).unwrap();
        assert!(h.spell("xylophone"));
        // Auxiliary entries use the primary affix rules.
        assert!(h.spell("quartzs"));
        assert_eq!(h.extra_dictionaries(), 1);
    }

    #[test]
    fn suggest_is_empty_for_accepted_words() {
        let mut h = handle();
        assert!(h.suggest("hello").is_empty());
        h.add_word("xyzzy");
        assert!(h.suggest("xyzzy").is_empty());
    }

    #[test]
    fn suggest_offers_the_near_miss() {
        let h = handle();
        let suggestions = h.suggest("helo");
        assert!(
            suggestions.iter().any(|s| s == "hello"),
            "expected \"hello\" among {suggestions:?}"
        );
    }

    #[test]
    fn suggest_has_no_duplicates_across_dictionaries() {
        let mut h = handle();
        h.add_dic_sources(BASE_DIC).unwrap();
        let suggestions = h.suggest("helo");
        let mut seen = hashbrown::HashSet::new();
        for s in &suggestions {
            assert!(seen.insert(s), "duplicate suggestion {s}");
        }
    }

    #[test]
    fn malformed_affix_data_is_parse_error() {
        // A suffix table with a non-numeric entry count.
        let bad_aff = "SFX S Y one\nSFX S 0 s .\n";
        let result = SpellHandle::from_sources(bad_aff, BASE_DIC);
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn failed_add_dic_leaves_handle_unchanged() {
        let mut h = handle();
        let before = h.extra_dictionaries();
        let err = h.add_dic(std::path::Path::new("/nonexistent/extra.dic"), None);
        assert!(err.is_err());
        assert_eq!(h.extra_dictionaries(), before);
        assert!(h.spell("hello"));
    }
}
