// Drahyl vowel glyph tables.
//
// Five glyph classes × six vowel qualities, each a fixed 6-entry table, plus
// a partial glide table (only E, U, and Y have glide glyphs). The tables are
// `const` data owned by this module; nothing mutates them and lookups by
// (class, quality) are total.
//
// Also provides the reverse direction: `vowel_code` classifies a single
// accented glyph back into its (class, quality) pair, which is as far as
// surface-text analysis goes in this crate (there is no nucleus or syllable
// parser).

use crate::types::{GlyphClass, VowelQuality};

const SHORT: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];
const LONG: [char; 6] = ['â', 'ê', 'î', 'ô', 'û', 'ŷ'];
const SHORT_STRESSED: [char; 6] = ['á', 'é', 'í', 'ó', 'ú', 'ý'];
const LONG_LAX: [char; 6] = ['ā', 'ē', 'ī', 'ō', 'ū', 'ȳ'];
const SHORT_LAX: [char; 6] = ['ȧ', 'ė', 'ị', 'ȯ', 'ụ', 'ẏ'];

/// All glyph classes, in table-scan order.
const CLASSES: [GlyphClass; 5] = [
    GlyphClass::Short,
    GlyphClass::Long,
    GlyphClass::ShortStressed,
    GlyphClass::LongLax,
    GlyphClass::ShortLax,
];

/// All vowel qualities, in index order.
const QUALITIES: [VowelQuality; 6] = [
    VowelQuality::A,
    VowelQuality::E,
    VowelQuality::I,
    VowelQuality::O,
    VowelQuality::U,
    VowelQuality::Y,
];

fn class_table(class: GlyphClass) -> &'static [char; 6] {
    match class {
        GlyphClass::Short => &SHORT,
        GlyphClass::Long => &LONG,
        GlyphClass::ShortStressed => &SHORT_STRESSED,
        GlyphClass::LongLax => &LONG_LAX,
        GlyphClass::ShortLax => &SHORT_LAX,
    }
}

/// Glyph for a vowel quality in a glyph class.
///
/// Total over every (class, quality) combination; there is no failure mode.
pub fn glyph(class: GlyphClass, quality: VowelQuality) -> char {
    class_table(class)[quality.index()]
}

/// Glide glyph for a quality: E→j, U→w, Y→ẏ.
///
/// A, I, and O cannot serve as glides and yield `None`; callers treat that
/// as "no renderable output" rather than an error.
pub fn glide_glyph(quality: VowelQuality) -> Option<char> {
    match quality {
        VowelQuality::E => Some('j'),
        VowelQuality::U => Some('w'),
        VowelQuality::Y => Some('ẏ'),
        VowelQuality::A | VowelQuality::I | VowelQuality::O => None,
    }
}

/// Classify an accented vowel glyph back into its (class, quality) pair.
///
/// Returns `None` for anything outside the thirty-glyph vowel inventory
/// (consonants, glide glyphs other than ẏ, punctuation).
pub fn vowel_code(c: char) -> Option<(GlyphClass, VowelQuality)> {
    for class in CLASSES {
        if let Some(i) = class_table(class).iter().position(|&g| g == c) {
            return Some((class, QUALITIES[i]));
        }
    }
    None
}

/// Whether `c` is one of the thirty accented vowel glyphs.
pub fn is_vowel(c: char) -> bool {
    vowel_code(c).is_some()
}
