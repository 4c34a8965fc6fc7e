//! Row → selection → label pipelines for both voice counts.

use crate::classify::{
    classify_four_voice, classify_three_voice, hartt_special_case, Category, FourVoiceBand,
    ThreeVoiceLabel,
};
use crate::error::SonorityError;
use crate::interval::Cell;
use crate::row::{FourVoiceRow, ThreeVoiceRow};
use crate::selection::{select_four_voice, select_three_voice, FourVoiceSelection, ThreeVoiceSelection};
use crate::texture::Texture;
use crate::variant::Variant;

/// A classified 3-voice row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedThreeVoice {
    /// What the selector kept.
    pub selection: ThreeVoiceSelection,
    /// Label for the renderer.
    pub label: ThreeVoiceLabel,
}

impl ClassifiedThreeVoice {
    /// The tallied category.
    pub fn category(&self) -> Category {
        self.label.category()
    }
}

/// A classified 4-voice row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFourVoice {
    /// What the selector kept.
    pub selection: FourVoiceSelection,
    /// Texture and category for the renderer.
    pub band: FourVoiceBand,
}

impl ClassifiedFourVoice {
    /// The tallied category.
    pub fn category(&self) -> Category {
        self.band.category
    }
}

/// 3-voice selector + classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreeVoicePipeline {
    /// Rule set.
    pub variant: Variant,
}

impl ThreeVoicePipeline {
    /// Creates a pipeline for `variant`.
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    /// Classifies one row.
    ///
    /// Under [`Variant::Hartt`] a row without rests is first looked up by its
    /// S-T and A-T columns; otherwise the selected set goes through the cascade.
    pub fn classify_row(&self, row: &ThreeVoiceRow) -> Result<ClassifiedThreeVoice, SonorityError> {
        let selection = select_three_voice(row)?;
        let category = self
            .special_case(row)
            .unwrap_or_else(|| classify_three_voice(&selection.set));
        let label = match selection.sounding_pair {
            Some(pair) => ThreeVoiceLabel::Partial { pair, category },
            None => ThreeVoiceLabel::Full(category),
        };
        Ok(ClassifiedThreeVoice { selection, label })
    }

    fn special_case(&self, row: &ThreeVoiceRow) -> Option<Category> {
        if self.variant != Variant::Hartt {
            return None;
        }
        match row.cells() {
            [Cell::Interval(_), Cell::Interval(st), Cell::Interval(at)] => {
                hartt_special_case(*st, *at)
            }
            _ => None,
        }
    }

    /// Classifies rows in order, stopping at the first malformed row.
    pub fn classify_rows<'a, I>(&self, rows: I) -> Result<Vec<ClassifiedThreeVoice>, SonorityError>
    where
        I: IntoIterator<Item = &'a ThreeVoiceRow>,
    {
        rows.into_iter().map(|row| self.classify_row(row)).collect()
    }
}

/// 4-voice selector + classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FourVoicePipeline {
    /// Rule set.
    pub variant: Variant,
}

impl FourVoicePipeline {
    /// Creates a pipeline for `variant`.
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    /// Classifies one row. The 4-voice cascade has no failure path.
    pub fn classify_row(&self, row: &FourVoiceRow) -> ClassifiedFourVoice {
        let selection = select_four_voice(row, self.variant);
        let band = FourVoiceBand {
            texture: Texture::from_selection(&selection),
            category: classify_four_voice(&selection, self.variant),
        };
        ClassifiedFourVoice { selection, band }
    }

    /// Classifies rows in order.
    pub fn classify_rows<'a, I>(&self, rows: I) -> Vec<ClassifiedFourVoice>
    where
        I: IntoIterator<Item = &'a FourVoiceRow>,
    {
        rows.into_iter().map(|row| self.classify_row(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::VoicePair;

    fn row3(cols: [&str; 3]) -> ThreeVoiceRow {
        ThreeVoiceRow::from_fields(&cols).unwrap()
    }

    #[test]
    fn test_partial_rest_label() {
        let out = ThreeVoicePipeline::default()
            .classify_row(&row3(["Rest", "M3", "Rest"]))
            .unwrap();
        assert_eq!(out.label.code(), "RIR");
        assert_eq!(
            out.label,
            ThreeVoiceLabel::Partial {
                pair: VoicePair::SopranoTenor,
                category: Category::Imperfect
            }
        );
        assert_eq!(out.category(), Category::Imperfect);
    }

    #[test]
    fn test_full_rest_label() {
        let out = ThreeVoicePipeline::default()
            .classify_row(&row3(["Rest", "Rest", "Rest"]))
            .unwrap();
        assert_eq!(out.label.code(), "R");
    }

    #[test]
    fn test_rows_keep_order_and_stop_on_error() {
        let rows = vec![
            row3(["P8", "P5", "P8"]),
            row3(["P8", "m3", "M6"]),
            row3(["Rest", "Rest", "d5"]),
        ];
        let codes: Vec<String> = ThreeVoicePipeline::default()
            .classify_rows(&rows)
            .unwrap()
            .iter()
            .map(|c| c.label.code())
            .collect();
        assert_eq!(codes, vec!["P", "B", "RRD"]);

        let bad = vec![row3(["P8", "P5", "P8"]), row3(["P5", "Rest", "M3"])];
        assert!(ThreeVoicePipeline::default().classify_rows(&bad).is_err());
    }

    #[test]
    fn test_hartt_tables_read_tenor_columns() {
        let hartt = ThreeVoicePipeline::new(Variant::Hartt);
        let fuller = ThreeVoicePipeline::new(Variant::Fuller);

        // alto lowest, tenor a m3 above it, soprano a m6 above the alto
        let row = row3(["m6", "P4", "-m3"]);
        let out = hartt.classify_row(&row).unwrap();
        assert_eq!(out.selection.set.to_string(), "('-m3', 'm6')");
        assert_eq!(out.category(), Category::Imperfect);
        assert_eq!(fuller.classify_row(&row).unwrap().category(), Category::DoublyImperfect);

        let row = row3(["m3", "-P4", "-m6"]);
        assert_eq!(hartt.classify_row(&row).unwrap().category(), Category::Imperfect);

        // a listed pair in the S-A column is not a special case
        let row = row3(["-P5", "P4", "M3"]);
        assert_eq!(
            hartt.classify_row(&row).unwrap().category(),
            fuller.classify_row(&row).unwrap().category()
        );
    }

    #[test]
    fn test_hartt_tables_skip_rows_with_rests() {
        let out = ThreeVoicePipeline::new(Variant::Hartt)
            .classify_row(&row3(["Rest", "Rest", "P4"]))
            .unwrap();
        assert_eq!(out.label.code(), "RRD");
    }

    #[test]
    fn test_trimmed_rest_stays_silent() {
        // first voice rests and the crossed fourth voice pair is trimmed
        let row = FourVoiceRow::from_fields(&["Rest", "P8", "Rest", "Rest", "-m3", "P5"]).unwrap();
        for variant in Variant::ALL {
            let out = FourVoicePipeline::new(variant).classify_row(&row);
            assert_eq!(out.selection.cells()[0], Cell::Rest);
            assert_eq!(out.band.to_string(), "RNNR:I");
        }
    }

    #[test]
    fn test_four_voice_band() {
        let row = FourVoiceRow::from_fields(&["P8", "P5", "Rest", "M3", "Rest", "Rest"]).unwrap();
        let out = FourVoicePipeline::new(Variant::Fuller).classify_row(&row);
        assert_eq!(out.selection.to_string(), "('P5', 'M3')");
        assert_eq!(out.band.to_string(), "NNNR:M");
    }
}
