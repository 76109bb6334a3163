// Drahyl syllable nuclei: short and long vowels plus the two diphthong shapes.
//
// `Nucleus` is the vocalic core of a syllable. Rendering is partial over
// accent modes — a mode with no surface form for a nucleus shape yields
// `None`, and callers fall back to another mode or omit the syllable rather
// than substitute a default. `raise()` is the one morphological primitive:
// a single vowel-height step, with a diphthong collapsing to a long vowel
// when its raised vowel meets its glide (monophthongization).
//
// The enum variants are public, so a diphthong can be built with any glide
// quality; one whose glide has no glyph renders as `None` under every mode.
// Use the `diphthong_glide_first`/`diphthong_glide_second` constructors to
// reject such glides up front.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tables;
use crate::types::{AccentMode, GlyphClass, NucleusKind, VowelQuality};

/// The vocalic core of a syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nucleus {
    /// A single short vowel.
    Short(VowelQuality),
    /// A single long vowel.
    Long(VowelQuality),
    /// Glide-onset diphthong: glide followed by a short vowel.
    DiphthongGlideFirst {
        glide: VowelQuality,
        vowel: VowelQuality,
    },
    /// Vowel-onset diphthong: short vowel followed by a glide.
    DiphthongGlideSecond {
        vowel: VowelQuality,
        glide: VowelQuality,
    },
}

/// A diphthong was built with a quality that has no glide glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidGlide(pub VowelQuality);

impl fmt::Display for InvalidGlide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} cannot serve as a glide (only E, U, and Y have glide glyphs)",
            self.0
        )
    }
}

impl std::error::Error for InvalidGlide {}

impl Nucleus {
    /// Build a glide-onset diphthong, rejecting glides outside {E, U, Y}.
    pub fn diphthong_glide_first(
        glide: VowelQuality,
        vowel: VowelQuality,
    ) -> Result<Self, InvalidGlide> {
        if !glide.is_glide() {
            return Err(InvalidGlide(glide));
        }
        Ok(Nucleus::DiphthongGlideFirst { glide, vowel })
    }

    /// Build a vowel-onset diphthong, rejecting glides outside {E, U, Y}.
    pub fn diphthong_glide_second(
        vowel: VowelQuality,
        glide: VowelQuality,
    ) -> Result<Self, InvalidGlide> {
        if !glide.is_glide() {
            return Err(InvalidGlide(glide));
        }
        Ok(Nucleus::DiphthongGlideSecond { vowel, glide })
    }

    /// Variant tag, used by `Syllable` for its coda rules.
    pub fn kind(self) -> NucleusKind {
        match self {
            Nucleus::Short(_) => NucleusKind::Short,
            Nucleus::Long(_) => NucleusKind::Long,
            Nucleus::DiphthongGlideFirst { .. } => NucleusKind::DiphthongGlideFirst,
            Nucleus::DiphthongGlideSecond { .. } => NucleusKind::DiphthongGlideSecond,
        }
    }

    /// Surface form of this nucleus under `mode`.
    ///
    /// `None` means the mode has no surface form for this nucleus shape
    /// (e.g. a bare short vowel has no lax form), not an error:
    /// - Short: NoAccent→short, VariantAccent→stressed, VariantAccent2→none.
    /// - Long: NoAccent→long, VariantAccent2→lax long, VariantAccent→none.
    /// - Diphthongs: the vowel renders as a short vowel under all three
    ///   modes (the lax short class covers VariantAccent2), with the glide
    ///   glyph before or after it.
    pub fn render(self, mode: AccentMode) -> Option<String> {
        match self {
            Nucleus::Short(vowel) => {
                let class = match mode {
                    AccentMode::NoAccent => GlyphClass::Short,
                    AccentMode::VariantAccent => GlyphClass::ShortStressed,
                    AccentMode::VariantAccent2 => return None,
                };
                Some(tables::glyph(class, vowel).to_string())
            }
            Nucleus::Long(vowel) => {
                let class = match mode {
                    AccentMode::NoAccent => GlyphClass::Long,
                    AccentMode::VariantAccent => return None,
                    AccentMode::VariantAccent2 => GlyphClass::LongLax,
                };
                Some(tables::glyph(class, vowel).to_string())
            }
            Nucleus::DiphthongGlideFirst { glide, vowel } => {
                let g = tables::glide_glyph(glide)?;
                let v = tables::glyph(diphthong_vowel_class(mode), vowel);
                Some(format!("{}{}", g, v))
            }
            Nucleus::DiphthongGlideSecond { vowel, glide } => {
                let g = tables::glide_glyph(glide)?;
                let v = tables::glyph(diphthong_vowel_class(mode), vowel);
                Some(format!("{}{}", v, g))
            }
        }
    }

    /// One raising step: the primary vowel advances within its triad.
    ///
    /// Short and long nuclei keep their shape. A diphthong whose raised
    /// vowel equals its glide collapses into a long vowel of that quality;
    /// otherwise it keeps its shape with the glide unchanged.
    pub fn raise(self) -> Nucleus {
        match self {
            Nucleus::Short(vowel) => Nucleus::Short(vowel.raised()),
            Nucleus::Long(vowel) => Nucleus::Long(vowel.raised()),
            Nucleus::DiphthongGlideFirst { glide, vowel } => {
                let raised = vowel.raised();
                if raised == glide {
                    Nucleus::Long(raised)
                } else {
                    Nucleus::DiphthongGlideFirst {
                        glide,
                        vowel: raised,
                    }
                }
            }
            Nucleus::DiphthongGlideSecond { vowel, glide } => {
                let raised = vowel.raised();
                if raised == glide {
                    Nucleus::Long(raised)
                } else {
                    Nucleus::DiphthongGlideSecond {
                        vowel: raised,
                        glide,
                    }
                }
            }
        }
    }
}

/// Glyph class for the nuclear vowel of a diphthong. Unlike a bare short
/// vowel, diphthongs have a lax form, so every mode is covered.
fn diphthong_vowel_class(mode: AccentMode) -> GlyphClass {
    match mode {
        AccentMode::NoAccent => GlyphClass::Short,
        AccentMode::VariantAccent => GlyphClass::ShortStressed,
        AccentMode::VariantAccent2 => GlyphClass::ShortLax,
    }
}
