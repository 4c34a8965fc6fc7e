//! Interval tokens as exported by the vertical interval indexer.
//!
//! Each CSV cell is either the literal `Rest` or an interval written as an
//! optional crossing sign, a quality letter and a diatonic number
//! (`P5`, `m3`, `-M6`). Parsing happens once, up front; every classification
//! rule is then a predicate over [`Interval`] rather than a substring search.

use std::fmt;
use std::str::FromStr;

use crate::error::SonorityError;

/// Literal text of a resting cell.
pub const REST: &str = "Rest";

/// Interval quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quality {
    /// `P`
    Perfect,
    /// `M`
    Major,
    /// `m`
    Minor,
    /// `A`
    Augmented,
    /// `d`
    Diminished,
}

impl Quality {
    /// Parses a quality letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'P' => Some(Quality::Perfect),
            'M' => Some(Quality::Major),
            'm' => Some(Quality::Minor),
            'A' => Some(Quality::Augmented),
            'd' => Some(Quality::Diminished),
            _ => None,
        }
    }

    /// Returns the quality letter.
    pub fn as_char(&self) -> char {
        match self {
            Quality::Perfect => 'P',
            Quality::Major => 'M',
            Quality::Minor => 'm',
            Quality::Augmented => 'A',
            Quality::Diminished => 'd',
        }
    }
}

/// A single interval between two sounding voices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval {
    /// The nominally upper voice sounds below the reference voice (`-` prefix).
    pub crossed: bool,
    /// Interval quality.
    pub quality: Quality,
    /// Diatonic number, unison (1) through octave (8).
    pub number: u8,
}

impl Interval {
    /// Creates an uncrossed interval.
    pub const fn new(quality: Quality, number: u8) -> Self {
        Self {
            crossed: false,
            quality,
            number,
        }
    }

    /// Creates a crossed interval.
    pub const fn crossed(quality: Quality, number: u8) -> Self {
        Self {
            crossed: true,
            quality,
            number,
        }
    }

    /// The same interval with its crossing sign removed.
    pub fn uncrossed(self) -> Self {
        Self {
            crossed: false,
            ..self
        }
    }

    /// Diminished, augmented, seconds, fourths and sevenths.
    pub fn is_dissonant(&self) -> bool {
        matches!(self.quality, Quality::Diminished | Quality::Augmented)
            || matches!(self.number, 2 | 4 | 7)
    }

    /// True for `P` quality.
    pub fn is_perfect_quality(&self) -> bool {
        self.quality == Quality::Perfect
    }

    /// True if the diatonic number equals `n`.
    pub fn has_number(&self, n: u8) -> bool {
        self.number == n
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.crossed {
            write!(f, "-")?;
        }
        write!(f, "{}{}", self.quality.as_char(), self.number)
    }
}

impl FromStr for Interval {
    type Err = SonorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unrecognized = || SonorityError::UnrecognizedToken {
            token: s.to_string(),
        };

        let (crossed, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let mut chars = body.chars();
        let quality = chars
            .next()
            .and_then(Quality::from_char)
            .ok_or_else(unrecognized)?;
        let number = match (chars.next(), chars.next()) {
            (Some(d @ '1'..='8'), None) => d as u8 - b'0',
            _ => return Err(unrecognized()),
        };

        Ok(Self {
            crossed,
            quality,
            number,
        })
    }
}

/// One column of a row: a rest or a sounding interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cell {
    /// The voice is silent.
    Rest,
    /// The voice sounds at this interval.
    Interval(Interval),
}

impl Cell {
    /// Parses a CSV cell, ignoring surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, SonorityError> {
        let s = s.trim();
        if s == REST {
            Ok(Cell::Rest)
        } else {
            s.parse().map(Cell::Interval)
        }
    }

    /// True for [`Cell::Rest`].
    pub fn is_rest(&self) -> bool {
        matches!(self, Cell::Rest)
    }

    /// True if this cell carries the voice-crossing sign.
    pub fn is_crossed(&self) -> bool {
        matches!(self, Cell::Interval(i) if i.crossed)
    }

    /// The interval, if the voice sounds.
    pub fn interval(&self) -> Option<Interval> {
        match self {
            Cell::Rest => None,
            Cell::Interval(i) => Some(*i),
        }
    }

    /// The cell with any crossing sign removed. Rests stay rests.
    pub fn uncrossed(self) -> Self {
        match self {
            Cell::Rest => Cell::Rest,
            Cell::Interval(i) => Cell::Interval(i.uncrossed()),
        }
    }
}

impl From<Interval> for Cell {
    fn from(interval: Interval) -> Self {
        Cell::Interval(interval)
    }
}

impl FromStr for Cell {
    type Err = SonorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cell::parse(s)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Rest => write!(f, "{}", REST),
            Cell::Interval(i) => write!(f, "{}", i),
        }
    }
}
