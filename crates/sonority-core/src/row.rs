//! Row and interval-set types.

use std::fmt;

use crate::error::SonorityError;
use crate::interval::{Cell, Interval};

/// Number of interval columns in a 3-voice row.
pub const THREE_VOICE_COLUMNS: usize = 3;

/// Number of interval columns in a 4-voice row.
pub const FOUR_VOICE_COLUMNS: usize = 6;

/// Parses the trailing `N` fields of a record.
fn parse_trailing<const N: usize, S: AsRef<str>>(fields: &[S]) -> Result<[Cell; N], SonorityError> {
    if fields.len() < N {
        return Err(SonorityError::ShortRow {
            expected: N,
            found: fields.len(),
        });
    }
    let mut out = [Cell::Rest; N];
    for (slot, field) in out.iter_mut().zip(&fields[fields.len() - N..]) {
        *slot = Cell::parse(field.as_ref())?;
    }
    Ok(out)
}

/// Three interval columns: S-A, S-T and A-T in indexer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThreeVoiceRow(pub [Cell; THREE_VOICE_COLUMNS]);

impl ThreeVoiceRow {
    /// Parses the last three fields of a CSV record.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, SonorityError> {
        parse_trailing(fields).map(Self)
    }

    /// The raw columns.
    pub fn cells(&self) -> &[Cell; THREE_VOICE_COLUMNS] {
        &self.0
    }
}

/// Six pairwise interval columns of a 4-voice texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourVoiceRow(pub [Cell; FOUR_VOICE_COLUMNS]);

impl FourVoiceRow {
    /// Parses the last six fields of a CSV record.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, SonorityError> {
        parse_trailing(fields).map(Self)
    }

    /// The raw columns.
    pub fn cells(&self) -> &[Cell; FOUR_VOICE_COLUMNS] {
        &self.0
    }

    /// Number of resting columns.
    pub fn rest_count(&self) -> usize {
        self.0.iter().filter(|c| c.is_rest()).count()
    }
}

/// The reduced, ordered set of cells a classifier looks at.
///
/// 3-voice sets only ever hold intervals. 4-voice sets can carry `Rest`
/// cells in positions the selector copied from a resting column; those
/// cells mark texture but never match a classification rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntervalSet(Vec<Cell>);

impl IntervalSet {
    /// Creates an empty set (total silence).
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for total silence.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All cells in order.
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    /// Sounding intervals in order.
    pub fn intervals(&self) -> impl Iterator<Item = Interval> + '_ {
        self.0.iter().filter_map(Cell::interval)
    }

    /// True if any sounding interval satisfies `pred`.
    pub fn any(&self, pred: impl Fn(&Interval) -> bool) -> bool {
        self.intervals().any(|i| pred(&i))
    }

    /// True if any sounding interval has diatonic number `n`.
    pub fn has_number(&self, n: u8) -> bool {
        self.any(|i| i.has_number(n))
    }
}

impl From<Vec<Cell>> for IntervalSet {
    fn from(cells: Vec<Cell>) -> Self {
        Self(cells)
    }
}

impl From<Vec<Interval>> for IntervalSet {
    fn from(intervals: Vec<Interval>) -> Self {
        Self(intervals.into_iter().map(Cell::Interval).collect())
    }
}

impl FromIterator<Cell> for IntervalSet {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, cell) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}'", cell)?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}
