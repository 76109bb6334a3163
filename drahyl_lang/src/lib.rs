// Drahyl constructed language phonology crate.
//
// Turns abstract phonological descriptions — vowel nuclei and syllables —
// into concrete accented text, and provides the vowel-raising step used by
// morphological rules. Going the other way (parsing surface text back into
// nuclei or syllables) is deliberately not provided; the closest thing is
// the per-glyph classification in `tables.rs`.
//
// Architecture:
// - `types.rs`: Core enums — `VowelQuality`, `GlyphClass`, `AccentMode`, `NucleusKind`
// - `tables.rs`: Static glyph tables (five classes × six qualities, plus glides)
// - `nucleus.rs`: `Nucleus` — short/long vowels and the two diphthong shapes,
//   with `render(mode)` and `raise()`
// - `syllable.rs`: `Syllable` — onset + nucleus + coda, validated at construction
//
// Everything here is immutable value types and pure functions. Rendering and
// raising never mutate in place, so the crate is safe to use from any thread
// without synchronization.

pub mod nucleus;
pub mod syllable;
pub mod tables;
pub mod types;

// Re-export key types at crate root for convenience.
pub use nucleus::{InvalidGlide, Nucleus};
pub use syllable::{MalformedSyllable, Syllable, SyllableDef};
pub use types::{AccentMode, GlyphClass, NucleusKind, VowelQuality};
