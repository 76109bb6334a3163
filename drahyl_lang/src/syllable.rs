// Drahyl syllables: onset + nucleus + coda with construction-time validation.
//
// A `Syllable` can only be obtained through `Syllable::new`, which enforces
// the coda phonotactics once; the value is immutable afterwards, so every
// `Syllable` in circulation is well formed. Onsets pass through unvalidated
// (onset-cluster legality is out of scope here), as does the coda text
// beyond membership in the permitted set.
//
// `SyllableDef` is the raw serde form (same split as `Syllable`/`SyllableDef`
// in the lexicon types): deserialize a `SyllableDef`, then convert through
// the validating constructor.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::nucleus::Nucleus;
use crate::types::{AccentMode, NucleusKind};

/// Codas permitted after a short-vowel nucleus: the stops, fricatives,
/// nasals, and liquids of the Drahyl consonant inventory.
pub const VALID_SHORT_CODAS: [&str; 15] = [
    "p", "t", "ṫ", "k", "f", "s", "ṡ", "ḣ", "ħ", "h", "m", "n", "ṅ", "r", "l",
];

/// Whether `coda` may follow a short-vowel nucleus (the empty coda is
/// always allowed and is not part of the set).
pub fn is_valid_short_coda(coda: &str) -> bool {
    VALID_SHORT_CODAS.contains(&coda)
}

/// A phonotactic rule was violated at syllable construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedSyllable {
    /// A diphthong nucleus cannot be followed by a coda.
    DiphthongWithCoda { coda: String },
    /// The coda is not in the permitted set for a short-vowel nucleus.
    InvalidShortCoda { coda: String },
}

impl fmt::Display for MalformedSyllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedSyllable::DiphthongWithCoda { coda } => write!(
                f,
                "a syllable cannot have both a diphthong nucleus and a coda (got coda {:?})",
                coda
            ),
            MalformedSyllable::InvalidShortCoda { coda } => {
                write!(f, "{:?} is not a valid coda after a short vowel", coda)
            }
        }
    }
}

impl std::error::Error for MalformedSyllable {}

/// A validated syllable: onset, nucleus, coda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Syllable {
    onset: String,
    nucleus: Nucleus,
    coda: String,
}

impl Syllable {
    /// Build a syllable, checking the coda phonotactics:
    /// - a diphthong nucleus takes no coda at all;
    /// - a short-vowel nucleus takes an empty coda or one from
    ///   `VALID_SHORT_CODAS`;
    /// - a long-vowel nucleus takes any coda.
    pub fn new(onset: &str, nucleus: Nucleus, coda: &str) -> Result<Self, MalformedSyllable> {
        if nucleus.kind().is_diphthong() && !coda.is_empty() {
            return Err(MalformedSyllable::DiphthongWithCoda {
                coda: coda.to_string(),
            });
        }
        if nucleus.kind() == NucleusKind::Short && !coda.is_empty() && !is_valid_short_coda(coda) {
            return Err(MalformedSyllable::InvalidShortCoda {
                coda: coda.to_string(),
            });
        }
        Ok(Syllable {
            onset: onset.to_string(),
            nucleus,
            coda: coda.to_string(),
        })
    }

    /// Build an open syllable (no coda). Cannot fail: every nucleus shape
    /// permits an empty coda.
    pub fn open(onset: &str, nucleus: Nucleus) -> Self {
        Syllable {
            onset: onset.to_string(),
            nucleus,
            coda: String::new(),
        }
    }

    pub fn onset(&self) -> &str {
        &self.onset
    }

    pub fn nucleus(&self) -> Nucleus {
        self.nucleus
    }

    pub fn coda(&self) -> &str {
        &self.coda
    }

    /// Surface text under `mode`: onset + nucleus rendering + coda,
    /// verbatim. `None` propagates from the nucleus; a syllable never
    /// renders partially.
    pub fn render(&self, mode: AccentMode) -> Option<String> {
        let nucleus = self.nucleus.render(mode)?;
        Some(format!("{}{}{}", self.onset, nucleus, self.coda))
    }
}

/// A syllable as raw data (e.g. straight out of JSON), not yet validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableDef {
    pub onset: String,
    pub nucleus: Nucleus,
    /// Empty when absent.
    #[serde(default)]
    pub coda: String,
}

impl SyllableDef {
    /// Run the raw fields through the validating constructor.
    pub fn to_syllable(&self) -> Result<Syllable, MalformedSyllable> {
        Syllable::new(&self.onset, self.nucleus, &self.coda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VowelQuality;

    #[test]
    fn test_render_short_with_coda() {
        let syl = Syllable::new("b", Nucleus::Short(VowelQuality::I), "m").unwrap();
        assert_eq!(syl.render(AccentMode::NoAccent), Some("bim".to_string()));
        assert_eq!(syl.render(AccentMode::VariantAccent), Some("bím".to_string()));
    }

    #[test]
    fn test_render_long_lax() {
        let syl = Syllable::new("b", Nucleus::Long(VowelQuality::O), "").unwrap();
        assert_eq!(syl.render(AccentMode::VariantAccent2), Some("bō".to_string()));
    }

    #[test]
    fn test_render_absence_propagates() {
        // A bare short vowel has no lax form, so the whole syllable has
        // no surface text under that mode. No partial "bm" string.
        let syl = Syllable::new("b", Nucleus::Short(VowelQuality::I), "m").unwrap();
        assert_eq!(syl.render(AccentMode::VariantAccent2), None);
    }

    #[test]
    fn test_diphthong_rejects_coda() {
        let nucleus = Nucleus::diphthong_glide_first(VowelQuality::E, VowelQuality::A).unwrap();
        let err = Syllable::new("b", nucleus, "t").unwrap_err();
        assert_eq!(
            err,
            MalformedSyllable::DiphthongWithCoda {
                coda: "t".to_string()
            }
        );
        // Without a coda the same nucleus is fine.
        assert!(Syllable::new("b", nucleus, "").is_ok());
    }

    #[test]
    fn test_short_coda_set() {
        let nucleus = Nucleus::Short(VowelQuality::A);
        let err = Syllable::new("b", nucleus, "z").unwrap_err();
        assert_eq!(
            err,
            MalformedSyllable::InvalidShortCoda {
                coda: "z".to_string()
            }
        );
        assert!(Syllable::new("b", nucleus, "").is_ok());
        for coda in VALID_SHORT_CODAS {
            assert!(
                Syllable::new("b", nucleus, coda).is_ok(),
                "coda {:?} should be permitted after a short vowel",
                coda
            );
        }
    }

    #[test]
    fn test_long_coda_unrestricted() {
        // The short-vowel coda rule does not bind long nuclei.
        let nucleus = Nucleus::Long(VowelQuality::E);
        assert!(Syllable::new("th", nucleus, "z").is_ok());
        assert!(Syllable::new("th", nucleus, "st").is_ok());
    }

    #[test]
    fn test_onset_passes_through() {
        // Onset-cluster legality is not checked; whatever text is given
        // appears verbatim in the rendering.
        let syl = Syllable::new("str", Nucleus::Short(VowelQuality::A), "n").unwrap();
        assert_eq!(syl.render(AccentMode::NoAccent), Some("stran".to_string()));
    }

    #[test]
    fn test_open_constructor() {
        let nucleus = Nucleus::diphthong_glide_second(VowelQuality::A, VowelQuality::U).unwrap();
        let syl = Syllable::open("k", nucleus);
        assert_eq!(syl.coda(), "");
        assert_eq!(syl.render(AccentMode::NoAccent), Some("kaw".to_string()));
    }

    #[test]
    fn test_render_deterministic() {
        let a = Syllable::new("m", Nucleus::Long(VowelQuality::U), "n").unwrap();
        let b = Syllable::new("m", Nucleus::Long(VowelQuality::U), "n").unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a.render(AccentMode::NoAccent),
            b.render(AccentMode::NoAccent)
        );
        assert_eq!(a.render(AccentMode::NoAccent), Some("mûn".to_string()));
    }

    #[test]
    fn test_syllable_def_validates() {
        let json = r#"{"onset": "b", "nucleus": {"short": "i"}, "coda": "m"}"#;
        let def: SyllableDef = serde_json::from_str(json).unwrap();
        let syl = def.to_syllable().unwrap();
        assert_eq!(syl.render(AccentMode::NoAccent), Some("bim".to_string()));

        let bad = r#"{"onset": "b", "nucleus": {"short": "a"}, "coda": "z"}"#;
        let def: SyllableDef = serde_json::from_str(bad).unwrap();
        assert!(def.to_syllable().is_err());
    }

    #[test]
    fn test_syllable_def_coda_defaults_empty() {
        let json = r#"{"onset": "th", "nucleus": {"long": "e"}}"#;
        let def: SyllableDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.coda, "");
        assert!(def.to_syllable().is_ok());
    }
}
