//! Spell facade: one loaded dictionary per handle, plus its runtime state.
//!
//! The spell-checking engine itself is the `spellbook` crate, which parses
//! Hunspell-compatible `.aff`/`.dic` pairs and answers affix-aware
//! membership and suggestion queries. This crate owns everything around
//! the engine:
//!
//! - [`handle`] -- the [`SpellHandle`] type: primary dictionary, merged
//!   auxiliary dictionaries, runtime-added words
//! - [`loader`] -- file reading and the [`LoadError`] taxonomy
//!
//! A handle is valid for its whole lifetime and releases its resources
//! exactly once when dropped, which the host bridges tie to the host's own
//! reference lifecycle (an explicit `free` call on the C path, the garbage
//! collector on the WASM path).

pub mod handle;
pub mod loader;

pub use handle::SpellHandle;
pub use loader::LoadError;
