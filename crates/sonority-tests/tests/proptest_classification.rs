//! Property-based classification tests using proptest.
//!
//! These tests check that the selectors and cascades are total, do not
//! depend on token order, let dissonance dominate, keep no state between
//! runs, and that aggregated tallies are sums of per-file tallies.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sonority-tests --test proptest_classification
//! ```

use proptest::prelude::*;

use sonority_core::{
    classify_four_voice, classify_three_voice, Category, Cell, FourVoicePipeline, FourVoiceRow,
    FourVoiceSelection, Interval, IntervalSet, Quality, SonorityError, Tally, TallyReport,
    ThreeVoicePipeline, ThreeVoiceRow, Variant,
};

// ============================================================================
// Strategies
// ============================================================================

fn quality() -> impl Strategy<Value = Quality> {
    prop_oneof![
        Just(Quality::Perfect),
        Just(Quality::Major),
        Just(Quality::Minor),
        Just(Quality::Augmented),
        Just(Quality::Diminished),
    ]
}

fn interval() -> impl Strategy<Value = Interval> {
    (any::<bool>(), quality(), 1u8..=8).prop_map(|(crossed, quality, number)| Interval {
        crossed,
        quality,
        number,
    })
}

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        1 => Just(Cell::Rest),
        4 => interval().prop_map(Cell::Interval),
    ]
}

fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Fuller), Just(Variant::Hartt)]
}

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn three_voice_row() -> impl Strategy<Value = ThreeVoiceRow> {
    prop::array::uniform3(cell()).prop_map(ThreeVoiceRow)
}

fn four_voice_row() -> impl Strategy<Value = FourVoiceRow> {
    prop::array::uniform6(cell()).prop_map(FourVoiceRow)
}

fn interval_set(max: usize) -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec(interval(), 0..=max)
}

const D4: Interval = Interval {
    crossed: false,
    quality: Quality::Diminished,
    number: 4,
};

// ============================================================================
// Totality
// ============================================================================

proptest! {
    /// Arbitrary text parses or fails cleanly; it never panics.
    #[test]
    fn cell_parse_never_panics(s in "\\PC{0,8}") {
        let _ = Cell::parse(&s);
    }

    /// Every displayed token parses back to the same cell.
    #[test]
    fn displayed_tokens_parse(c in cell()) {
        prop_assert_eq!(Cell::parse(&c.to_string()), Ok(c));
    }

    /// A 3-voice row either classifies or is malformed; nothing else can fail.
    #[test]
    fn three_voice_rows_are_total(row in three_voice_row(), v in variant()) {
        match ThreeVoicePipeline::new(v).classify_row(&row) {
            Ok(out) => prop_assert!(Category::ALL.contains(&out.category())),
            Err(SonorityError::MalformedRow { surviving }) => prop_assert!(surviving >= 2),
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    /// Every 4-voice row classifies, into at most three cells.
    #[test]
    fn four_voice_rows_are_total(row in four_voice_row(), v in variant()) {
        let out = FourVoicePipeline::new(v).classify_row(&row);
        prop_assert!(out.selection.cells().len() <= 3);
        prop_assert!(Category::ALL.contains(&out.category()));
    }

    /// Fuller 4-voice never yields doubly imperfect.
    #[test]
    fn fuller_four_voice_has_no_doubly_imperfect(row in four_voice_row()) {
        let out = FourVoicePipeline::new(Variant::Fuller).classify_row(&row);
        prop_assert_ne!(out.category(), Category::DoublyImperfect);
    }
}

// ============================================================================
// Order insensitivity and dominance
// ============================================================================

proptest! {
    /// Reordering a 3-voice set never changes its category.
    #[test]
    fn three_voice_order_insensitive(set in interval_set(3)) {
        let mut reversed = set.clone();
        reversed.reverse();
        prop_assert_eq!(
            classify_three_voice(&IntervalSet::from(set)),
            classify_three_voice(&IntervalSet::from(reversed))
        );
    }

    /// Reordering a 4-voice set never changes its category.
    #[test]
    fn four_voice_order_insensitive(set in interval_set(3), v in variant(), shift in 0usize..3) {
        let mut rotated = set.clone();
        if !rotated.is_empty() {
            let k = shift % rotated.len();
            rotated.rotate_left(k);
        }
        prop_assert_eq!(
            classify_four_voice(&FourVoiceSelection::Sounding(IntervalSet::from(set)), v),
            classify_four_voice(&FourVoiceSelection::Sounding(IntervalSet::from(rotated)), v)
        );
    }

    /// A diminished fourth anywhere makes the sonority dissonant.
    #[test]
    fn d4_dominates(mut set in interval_set(2), v in variant(), at in 0usize..3) {
        let at = at.min(set.len());
        set.insert(at, D4);
        let set = IntervalSet::from(set);
        prop_assert_eq!(classify_three_voice(&set), Category::Dissonant);
        prop_assert_eq!(
            classify_four_voice(&FourVoiceSelection::Sounding(set), v),
            Category::Dissonant
        );
    }

    /// Only an empty set is a rest.
    #[test]
    fn rest_iff_empty(set in interval_set(3), v in variant()) {
        let empty = set.is_empty();
        let set = IntervalSet::from(set);
        prop_assert_eq!(classify_three_voice(&set) == Category::Rest, empty);
        prop_assert_eq!(
            classify_four_voice(&FourVoiceSelection::Sounding(set), v) == Category::Rest,
            empty
        );
    }
}

// ============================================================================
// Idempotence and additivity
// ============================================================================

proptest! {
    /// Classifying the same rows twice gives the same sequence.
    #[test]
    fn classification_is_idempotent(
        rows3 in prop::collection::vec(three_voice_row(), 0..20),
        rows4 in prop::collection::vec(four_voice_row(), 0..20),
        v in variant(),
    ) {
        let three = ThreeVoicePipeline::new(v);
        let first: Vec<_> = rows3.iter().map(|r| three.classify_row(r)).collect();
        let second: Vec<_> = rows3.iter().map(|r| three.classify_row(r)).collect();
        prop_assert_eq!(first, second);

        let four = FourVoicePipeline::new(v);
        prop_assert_eq!(four.classify_rows(&rows4), four.classify_rows(&rows4));
    }

    /// The aggregated tally is the per-category sum of the file tallies.
    #[test]
    fn aggregate_is_sum_of_files(
        files in prop::collection::vec(prop::collection::vec(category(), 0..30), 0..6),
    ) {
        let mut report = TallyReport::new();
        for (i, categories) in files.iter().enumerate() {
            let tally: Tally = categories.iter().copied().collect();
            report.push(format!("file{}.csv", i), tally);
        }

        for c in Category::ALL {
            let sum: u64 = report.files.iter().map(|f| f.tally.count(c)).sum();
            prop_assert_eq!(report.total.count(c), sum);
        }
        let rows: usize = files.iter().map(Vec::len).sum();
        prop_assert_eq!(report.total.total(), rows as u64);
    }
}
