//! Row selectors: reduce a raw row to the intervals measured against the
//! lowest-sounding voice.

use std::fmt;

use serde::Serialize;

use crate::error::SonorityError;
use crate::interval::{Cell, Interval};
use crate::row::{FourVoiceRow, IntervalSet, ThreeVoiceRow};
use crate::variant::Variant;

/// The pair of voices left sounding when one 3-voice column survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VoicePair {
    /// Column 0.
    SopranoAlto,
    /// Column 1.
    SopranoTenor,
    /// Column 2.
    AltoTenor,
}

impl VoicePair {
    /// Maps a 3-voice column index to the pair it measures.
    pub fn from_column(column: usize) -> Option<Self> {
        match column {
            0 => Some(VoicePair::SopranoAlto),
            1 => Some(VoicePair::SopranoTenor),
            2 => Some(VoicePair::AltoTenor),
            _ => None,
        }
    }

    /// Column index of this pair.
    pub fn column(&self) -> usize {
        match self {
            VoicePair::SopranoAlto => 0,
            VoicePair::SopranoTenor => 1,
            VoicePair::AltoTenor => 2,
        }
    }
}

impl fmt::Display for VoicePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VoicePair::SopranoAlto => "S-A",
            VoicePair::SopranoTenor => "S-T",
            VoicePair::AltoTenor => "A-T",
        })
    }
}

/// Output of the 3-voice selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreeVoiceSelection {
    /// Zero, one or two intervals.
    pub set: IntervalSet,
    /// Set when one voice rested and exactly one pair still sounds.
    pub sounding_pair: Option<VoicePair>,
}

/// Selects the sounding interval(s) of a 3-voice row.
///
/// Any rest leaves at most one interval; more is a [`SonorityError::MalformedRow`].
/// Without rests, crossing signs decide which voice is lowest and the two
/// intervals above it are returned in lexicographic token order.
pub fn select_three_voice(row: &ThreeVoiceRow) -> Result<ThreeVoiceSelection, SonorityError> {
    let [s, a, t] = *row.cells();

    if row.cells().iter().any(Cell::is_rest) {
        let survivors: Vec<(usize, Interval)> = row
            .cells()
            .iter()
            .enumerate()
            .filter_map(|(col, cell)| cell.interval().map(|i| (col, i)))
            .collect();

        return match survivors.as_slice() {
            [] => Ok(ThreeVoiceSelection {
                set: IntervalSet::empty(),
                sounding_pair: None,
            }),
            [(col, interval)] => Ok(ThreeVoiceSelection {
                set: IntervalSet::from(vec![*interval]),
                sounding_pair: VoicePair::from_column(*col),
            }),
            more => Err(SonorityError::MalformedRow {
                surviving: more.len(),
            }),
        };
    }

    let mut pair = if s.is_crossed() && a.is_crossed() {
        [s, a]
    } else if !s.is_crossed() && t.is_crossed() {
        [s, t]
    } else {
        [a, t]
    };
    pair.sort_by_cached_key(|c| c.to_string());

    Ok(ThreeVoiceSelection {
        set: IntervalSet::from(pair.to_vec()),
        sounding_pair: None,
    })
}

/// Output of the 4-voice selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FourVoiceSelection {
    /// Every voice rests (the literal `Rest` marker).
    Silent,
    /// One to three cells measured against the lowest-sounding voice.
    Sounding(IntervalSet),
}

impl FourVoiceSelection {
    /// The cells, empty for [`FourVoiceSelection::Silent`].
    pub fn cells(&self) -> &[Cell] {
        match self {
            FourVoiceSelection::Silent => &[],
            FourVoiceSelection::Sounding(set) => set.cells(),
        }
    }
}

impl fmt::Display for FourVoiceSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FourVoiceSelection::Silent => write!(f, "Rest"),
            FourVoiceSelection::Sounding(set) => write!(f, "{}", set),
        }
    }
}

/// Selects the sounding intervals of a 4-voice row.
///
/// Columns are the indexer's pairwise intervals; positions 2, 4 and 5 all
/// involve the third voice. `variant` decides whether crossed tokens in the
/// trimmed positions keep their sign.
pub fn select_four_voice(row: &FourVoiceRow, variant: Variant) -> FourVoiceSelection {
    let r = row.cells();
    let trim = |cell: Cell| variant.trim(cell);

    if row.rest_count() > 5 {
        return FourVoiceSelection::Silent;
    }

    let cells = if r[2].is_rest() && r[4].is_rest() && r[5].is_rest() {
        if r[1].is_rest() && r[3].is_rest() {
            vec![trim(r[0])]
        } else if r[3].is_crossed() {
            vec![r[0], trim(r[3])]
        } else if r[1].is_crossed() {
            vec![trim(r[0]), trim(r[1])]
        } else {
            vec![r[1], r[3]]
        }
    } else if !r[2].is_rest() && !r[4].is_rest() && !r[5].is_rest() {
        if r[5].is_crossed() {
            vec![r[1], r[3], trim(r[5])]
        } else if r[4].is_crossed() {
            vec![r[0], trim(r[3]), trim(r[4])]
        } else {
            vec![r[2], r[4], r[5]]
        }
    } else if r[5].is_crossed() && r[1].is_rest() {
        vec![r[3], trim(r[5])]
    } else if r[5].is_crossed() && r[3].is_rest() {
        vec![r[1], trim(r[5])]
    } else if r[4].is_crossed() && r[5].is_rest() {
        vec![r[0], trim(r[4])]
    } else if r[4].is_crossed() && r[0].is_rest() {
        vec![trim(r[3]), trim(r[4])]
    } else {
        vec![r[2], r[4], r[5]]
    };

    FourVoiceSelection::Sounding(IntervalSet::from(cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row3(cols: [&str; 3]) -> ThreeVoiceRow {
        ThreeVoiceRow::from_fields(&cols).unwrap()
    }

    fn row4(cols: [&str; 6]) -> FourVoiceRow {
        FourVoiceRow::from_fields(&cols).unwrap()
    }

    fn tokens(set: &IntervalSet) -> Vec<String> {
        set.cells().iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_three_voice_all_rest_is_empty() {
        let sel = select_three_voice(&row3(["Rest", "Rest", "Rest"])).unwrap();
        assert!(sel.set.is_empty());
        assert_eq!(sel.sounding_pair, None);
    }

    #[test]
    fn test_three_voice_single_survivor_records_pair() {
        let sel = select_three_voice(&row3(["Rest", "M3", "Rest"])).unwrap();
        assert_eq!(tokens(&sel.set), vec!["M3"]);
        assert_eq!(sel.sounding_pair, Some(VoicePair::SopranoTenor));

        let sel = select_three_voice(&row3(["P5", "Rest", "Rest"])).unwrap();
        assert_eq!(sel.sounding_pair, Some(VoicePair::SopranoAlto));

        let sel = select_three_voice(&row3(["Rest", "Rest", "-m6"])).unwrap();
        assert_eq!(sel.sounding_pair, Some(VoicePair::AltoTenor));
    }

    #[test]
    fn test_three_voice_two_survivors_is_malformed() {
        assert_eq!(
            select_three_voice(&row3(["Rest", "P5", "M3"])),
            Err(SonorityError::MalformedRow { surviving: 2 })
        );
    }

    #[test]
    fn test_three_voice_uncrossed_uses_last_two_columns() {
        let sel = select_three_voice(&row3(["P8", "P5", "M3"])).unwrap();
        assert_eq!(tokens(&sel.set), vec!["M3", "P5"]);
    }

    #[test]
    fn test_three_voice_soprano_lowest() {
        let sel = select_three_voice(&row3(["-P5", "-m3", "M3"])).unwrap();
        assert_eq!(tokens(&sel.set), vec!["-P5", "-m3"]);
    }

    #[test]
    fn test_three_voice_alto_lowest() {
        let sel = select_three_voice(&row3(["P4", "m3", "-m6"])).unwrap();
        assert_eq!(tokens(&sel.set), vec!["-m6", "P4"]);
    }

    #[test]
    fn test_three_voice_sort_is_lexicographic() {
        // '-' sorts before upper case, which sorts before lower case
        let sel = select_three_voice(&row3(["P8", "m3", "M3"])).unwrap();
        assert_eq!(tokens(&sel.set), vec!["M3", "m3"]);
        let sel = select_three_voice(&row3(["P8", "m3", "-P5"])).unwrap();
        assert_eq!(tokens(&sel.set), vec!["-P5", "P8"]);
        let sel = select_three_voice(&row3(["-M3", "-P4", "P1"])).unwrap();
        assert_eq!(tokens(&sel.set), vec!["-M3", "-P4"]);
    }

    #[test]
    fn test_four_voice_silent_marker() {
        let sel = select_four_voice(&row4(["Rest"; 6]), Variant::Fuller);
        assert_eq!(sel, FourVoiceSelection::Silent);
        assert_eq!(sel.to_string(), "Rest");
    }

    #[test]
    fn test_four_voice_single_voice_pair_trims_sign() {
        let row = row4(["-P5", "Rest", "Rest", "Rest", "Rest", "Rest"]);
        assert_eq!(select_four_voice(&row, Variant::Fuller).to_string(), "('P5',)");
        assert_eq!(select_four_voice(&row, Variant::Hartt).to_string(), "('-P5',)");
    }

    #[test]
    fn test_four_voice_third_voice_rests() {
        let crossed_r3 = row4(["P5", "M3", "Rest", "-m3", "Rest", "Rest"]);
        assert_eq!(
            select_four_voice(&crossed_r3, Variant::Fuller).to_string(),
            "('P5', 'm3')"
        );

        let crossed_r1 = row4(["-P5", "-M3", "Rest", "m3", "Rest", "Rest"]);
        assert_eq!(
            select_four_voice(&crossed_r1, Variant::Fuller).to_string(),
            "('P5', 'M3')"
        );
        assert_eq!(
            select_four_voice(&crossed_r1, Variant::Hartt).to_string(),
            "('-P5', '-M3')"
        );

        let plain = row4(["P8", "M6", "Rest", "m3", "Rest", "Rest"]);
        assert_eq!(
            select_four_voice(&plain, Variant::Fuller).to_string(),
            "('M6', 'm3')"
        );
    }

    #[test]
    fn test_four_voice_all_sounding() {
        let plain = row4(["P8", "P5", "M3", "P4", "m6", "M3"]);
        assert_eq!(
            select_four_voice(&plain, Variant::Fuller).to_string(),
            "('M3', 'm6', 'M3')"
        );

        let crossed_r5 = row4(["P8", "P5", "M3", "P4", "m6", "-m3"]);
        assert_eq!(
            select_four_voice(&crossed_r5, Variant::Fuller).to_string(),
            "('P5', 'P4', 'm3')"
        );

        let crossed_r4 = row4(["P8", "P5", "M3", "-P4", "-m6", "M3"]);
        assert_eq!(
            select_four_voice(&crossed_r4, Variant::Fuller).to_string(),
            "('P8', 'P4', 'm6')"
        );
        assert_eq!(
            select_four_voice(&crossed_r4, Variant::Hartt).to_string(),
            "('P8', '-P4', '-m6')"
        );
    }

    #[test]
    fn test_four_voice_one_voice_rests() {
        let row = row4(["P8", "Rest", "M3", "P5", "Rest", "-m3"]);
        assert_eq!(
            select_four_voice(&row, Variant::Fuller).to_string(),
            "('P5', 'm3')"
        );

        let row = row4(["P8", "P5", "M3", "Rest", "Rest", "-m3"]);
        assert_eq!(
            select_four_voice(&row, Variant::Fuller).to_string(),
            "('P5', 'm3')"
        );

        let row = row4(["P8", "P5", "Rest", "M3", "-m6", "Rest"]);
        assert_eq!(
            select_four_voice(&row, Variant::Fuller).to_string(),
            "('P8', 'm6')"
        );

        let row = row4(["Rest", "Rest", "Rest", "-M3", "-m6", "P5"]);
        assert_eq!(
            select_four_voice(&row, Variant::Fuller).to_string(),
            "('M3', 'm6')"
        );

        let row = row4(["Rest", "Rest", "M3", "Rest", "m6", "P5"]);
        assert_eq!(
            select_four_voice(&row, Variant::Fuller).to_string(),
            "('M3', 'm6', 'P5')"
        );
    }
}
