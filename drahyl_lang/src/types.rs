// Core Drahyl phonology types: vowel qualities, glyph classes, accent modes.
//
// These enums are the vocabulary shared by the glyph tables (`tables.rs`),
// the nucleus algebra (`nucleus.rs`), and syllable validation (`syllable.rs`).
// All of them derive `Serialize`/`Deserialize` so nuclei and syllable
// definitions can live in JSON lexicon data, the same way the rest of the
// language material does.
//
// The type hierarchy is:
// - `VowelQuality` — the six abstract vowels, ordered in two height triads
// - `GlyphClass` — which of the five accented renderings of a vowel to use
// - `AccentMode` — caller-facing selector that maps to glyph classes per nucleus shape
// - `NucleusKind` — variant tag of a `Nucleus`, used for phonotactic checks

use serde::{Deserialize, Serialize};

/// One of the six Drahyl vowel qualities.
///
/// Ordered in two height triads, {A, E, I} and {O, U, Y}. Raising moves
/// forward within a triad and saturates at its high vowel (I or Y); it
/// never crosses from one triad to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VowelQuality {
    A,
    E,
    I,
    O,
    U,
    Y,
}

impl VowelQuality {
    /// Positional index into the glyph tables (A = 0 through Y = 5).
    pub fn index(self) -> usize {
        self as usize
    }

    /// One raising step within this quality's triad: A→E→I, O→U→Y.
    /// The high vowels I and Y are fixed points.
    pub fn raised(self) -> Self {
        match self {
            VowelQuality::A => VowelQuality::E,
            VowelQuality::E => VowelQuality::I,
            VowelQuality::I => VowelQuality::I,
            VowelQuality::O => VowelQuality::U,
            VowelQuality::U => VowelQuality::Y,
            VowelQuality::Y => VowelQuality::Y,
        }
    }

    /// Whether this quality can serve as the glide of a diphthong.
    /// Only E, U, and Y have glide glyphs.
    pub fn is_glide(self) -> bool {
        matches!(self, VowelQuality::E | VowelQuality::U | VowelQuality::Y)
    }
}

/// One of the five accented glyph renderings of a vowel quality.
///
/// Every class maps every quality to exactly one glyph (see `tables.rs`),
/// so lookups by (class, quality) are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphClass {
    /// Plain short vowel: a e i o u y.
    Short,
    /// Circumflex long vowel: â ê î ô û ŷ.
    Long,
    /// Acute stressed short vowel: á é í ó ú ý.
    ShortStressed,
    /// Macron lax long vowel: ā ē ī ō ū ȳ.
    LongLax,
    /// Overdot lax short vowel: ȧ ė ị ȯ ụ ẏ.
    ShortLax,
}

/// Accent mode a caller asks a nucleus to render under.
///
/// Not every mode has a surface form for every nucleus shape; rendering
/// under an unsupported mode yields no result rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentMode {
    /// No accent mark (long vowels still carry their circumflex).
    NoAccent,
    /// Acute accent.
    VariantAccent,
    /// Macron (long) or overdot (short) accent.
    VariantAccent2,
}

/// Variant tag of a `Nucleus`.
///
/// `Syllable` construction branches on this to decide which coda rule
/// applies without matching the nucleus payload itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NucleusKind {
    Short,
    Long,
    DiphthongGlideFirst,
    DiphthongGlideSecond,
}

impl NucleusKind {
    /// Whether this kind is one of the two diphthong shapes.
    pub fn is_diphthong(self) -> bool {
        matches!(
            self,
            NucleusKind::DiphthongGlideFirst | NucleusKind::DiphthongGlideSecond
        )
    }
}
