//! Sonority classification cascades.
//!
//! Every cascade is an ordered list of predicates over the parsed intervals of
//! an [`IntervalSet`]; the first match wins and the last branch always matches.
//!
//! | Code | Category |
//! |------|----------|
//! | `P` | perfect: only perfect consonances |
//! | `M` | mixed: perfect and imperfect consonances |
//! | `I` | imperfect: thirds and sixths |
//! | `B` | doubly imperfect: a third and a sixth |
//! | `D` | dissonant |
//! | `R` | rest (no sounding interval) |

use std::fmt;

use serde::{Serialize, Serializer};

use crate::interval::{Interval, Quality};
use crate::row::IntervalSet;
use crate::selection::{FourVoiceSelection, VoicePair};
use crate::texture::Texture;
use crate::variant::Variant;

/// Sonority category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// `P`
    Perfect,
    /// `M`
    Mixed,
    /// `I`
    Imperfect,
    /// `B`
    DoublyImperfect,
    /// `D`
    Dissonant,
    /// `R`
    Rest,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 6] = [
        Category::Perfect,
        Category::Mixed,
        Category::Imperfect,
        Category::DoublyImperfect,
        Category::Dissonant,
        Category::Rest,
    ];

    /// Single-letter code.
    pub fn code(&self) -> char {
        match self {
            Category::Perfect => 'P',
            Category::Mixed => 'M',
            Category::Imperfect => 'I',
            Category::DoublyImperfect => 'B',
            Category::Dissonant => 'D',
            Category::Rest => 'R',
        }
    }

    /// Parses a single-letter code.
    pub fn from_code(code: char) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Name printed in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Perfect => "Perfect",
            Category::Mixed => "Mixed",
            Category::Imperfect => "Imperfect",
            Category::DoublyImperfect => "Doubly imperfect",
            Category::Dissonant => "Dissonant",
            Category::Rest => "Rest",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            Category::Perfect => "perfect",
            Category::Mixed => "mixed",
            Category::Imperfect => "imperfect",
            Category::DoublyImperfect => "doubly_imperfect",
            Category::Dissonant => "dissonant",
            Category::Rest => "rest",
        })
    }
}

const fn iv(crossed: bool, quality: Quality, number: u8) -> Interval {
    Interval {
        crossed,
        quality,
        number,
    }
}

/// Signed pairs classified before the 3-voice cascade under [`Variant::Hartt`].
const HARTT_DISSONANT_PAIRS: [[Interval; 2]; 4] = [
    [iv(false, Quality::Perfect, 5), iv(false, Quality::Minor, 6)],
    [iv(false, Quality::Perfect, 5), iv(false, Quality::Major, 6)],
    [iv(true, Quality::Perfect, 5), iv(true, Quality::Minor, 6)],
    [iv(true, Quality::Perfect, 5), iv(true, Quality::Major, 6)],
];

/// Consonant fourths against a crossed third or sixth.
const HARTT_IMPERFECT_PAIRS: [[Interval; 2]; 4] = [
    [iv(true, Quality::Perfect, 4), iv(true, Quality::Minor, 6)],
    [iv(true, Quality::Perfect, 4), iv(true, Quality::Major, 6)],
    [iv(false, Quality::Perfect, 4), iv(true, Quality::Minor, 3)],
    [iv(false, Quality::Perfect, 4), iv(true, Quality::Major, 3)],
];

/// A consonant fourth under a crossed fifth.
const HARTT_PERFECT_PAIRS: [[Interval; 2]; 1] =
    [[iv(false, Quality::Perfect, 4), iv(true, Quality::Perfect, 5)]];

fn matches_pair(pair: [Interval; 2], table: &[[Interval; 2]]) -> bool {
    let [x, y] = pair;
    table
        .iter()
        .any(|[a, b]| (x == *a && y == *b) || (x == *b && y == *a))
}

/// Looks up the raw S-T and A-T columns of a row without rests in the
/// [`Variant::Hartt`] pair tables, in either order.
///
/// The tables are written against intervals measured from the tenor, so
/// they apply to the columns as exported, before lowest-voice selection.
pub fn hartt_special_case(soprano_tenor: Interval, alto_tenor: Interval) -> Option<Category> {
    let pair = [soprano_tenor, alto_tenor];
    if matches_pair(pair, &HARTT_DISSONANT_PAIRS) {
        Some(Category::Dissonant)
    } else if matches_pair(pair, &HARTT_IMPERFECT_PAIRS) {
        Some(Category::Imperfect)
    } else if matches_pair(pair, &HARTT_PERFECT_PAIRS) {
        Some(Category::Perfect)
    } else {
        None
    }
}

fn has_dissonance(set: &IntervalSet) -> bool {
    set.any(Interval::is_dissonant)
}

fn has_six_five(set: &IntervalSet) -> bool {
    set.has_number(5) && set.has_number(6)
}

fn has_third_or_sixth(set: &IntervalSet) -> bool {
    set.has_number(3) || set.has_number(6)
}

/// Classifies a 3-voice interval set.
///
/// Cascade: empty → `R`; any dissonant interval → `D`; fifth with sixth → `D`;
/// all perfect → `P`; third with sixth → `B`; third or sixth without fifth or
/// octave → `I`; otherwise `M`. Both rule sets share it; the Hartt pair
/// tables are applied to the raw row by [`ThreeVoicePipeline`].
///
/// [`ThreeVoicePipeline`]: crate::pipeline::ThreeVoicePipeline
pub fn classify_three_voice(set: &IntervalSet) -> Category {
    if set.intervals().next().is_none() {
        return Category::Rest;
    }
    if has_dissonance(set) || has_six_five(set) {
        return Category::Dissonant;
    }
    if set.intervals().all(|i| i.is_perfect_quality()) {
        return Category::Perfect;
    }
    if set.has_number(3) && set.has_number(6) {
        return Category::DoublyImperfect;
    }
    if has_third_or_sixth(set) && !(set.has_number(5) || set.has_number(8)) {
        return Category::Imperfect;
    }
    Category::Mixed
}

/// Classifies a 4-voice selection.
///
/// [`Variant::Fuller`] order: `R`, dissonant intervals, no third or sixth → `P`,
/// no unison, fifth or octave → `I`, six-five → `D`, otherwise `M`.
///
/// [`Variant::Hartt`] order: `R`, dissonant intervals, six-five → `D`, third with
/// sixth → `B`, third or sixth without fifth or octave → `I`, no third or sixth
/// → `P`, otherwise `M`.
pub fn classify_four_voice(selection: &FourVoiceSelection, variant: Variant) -> Category {
    let set = match selection {
        FourVoiceSelection::Silent => return Category::Rest,
        FourVoiceSelection::Sounding(set) => set,
    };
    if set.intervals().next().is_none() {
        return Category::Rest;
    }
    if has_dissonance(set) {
        return Category::Dissonant;
    }

    match variant {
        Variant::Fuller => {
            if !has_third_or_sixth(set) {
                Category::Perfect
            } else if !(set.has_number(1) || set.has_number(5) || set.has_number(8)) {
                Category::Imperfect
            } else if has_six_five(set) {
                Category::Dissonant
            } else {
                Category::Mixed
            }
        }
        Variant::Hartt => {
            if has_six_five(set) {
                Category::Dissonant
            } else if set.has_number(3) && set.has_number(6) {
                Category::DoublyImperfect
            } else if has_third_or_sixth(set) && !(set.has_number(5) || set.has_number(8)) {
                Category::Imperfect
            } else if !has_third_or_sixth(set) {
                Category::Perfect
            } else {
                Category::Mixed
            }
        }
    }
}

/// Renderer-facing label of a 3-voice row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThreeVoiceLabel {
    /// Full sonority (or total silence as [`Category::Rest`]).
    Full(Category),
    /// Two voices rest; `pair` still sounds.
    Partial {
        /// The sounding pair.
        pair: VoicePair,
        /// Category of its single interval.
        category: Category,
    },
}

impl ThreeVoiceLabel {
    /// Base category regardless of rests.
    pub fn category(&self) -> Category {
        match self {
            ThreeVoiceLabel::Full(c) => *c,
            ThreeVoiceLabel::Partial { category, .. } => *category,
        }
    }

    /// Label code: `P`, `RRI`, `DRR`, ...
    ///
    /// In partial codes the position of the non-`R` letter is the column of the
    /// sounding pair (S-A, S-T, A-T).
    pub fn code(&self) -> String {
        match self {
            ThreeVoiceLabel::Full(c) => c.code().to_string(),
            ThreeVoiceLabel::Partial { pair, category } => {
                let mut code = ['R'; 3];
                code[pair.column()] = category.code();
                code.iter().collect()
            }
        }
    }

    /// Parses a label code.
    pub fn from_code(code: &str) -> Option<Self> {
        let chars: Vec<char> = code.chars().collect();
        match chars.as_slice() {
            [c] => Category::from_code(*c).map(ThreeVoiceLabel::Full),
            [_, _, _] => {
                let sounding: Vec<(usize, char)> = chars
                    .iter()
                    .copied()
                    .enumerate()
                    .filter(|(_, c)| *c != 'R')
                    .collect();
                match sounding.as_slice() {
                    [(col, c)] => Some(ThreeVoiceLabel::Partial {
                        pair: VoicePair::from_column(*col)?,
                        category: Category::from_code(*c)?,
                    }),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for ThreeVoiceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

impl Serialize for ThreeVoiceLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code())
    }
}

/// Renderer-facing output of a 4-voice row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourVoiceBand {
    /// Voices that take part.
    pub texture: Texture,
    /// Category of the sounding portion.
    pub category: Category,
}

impl fmt::Display for FourVoiceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.texture, self.category.code())
    }
}
