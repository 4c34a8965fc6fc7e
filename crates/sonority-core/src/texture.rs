//! Which of the four voices take part in a 4-voice band.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::selection::FourVoiceSelection;

/// Rest or note for one voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceState {
    /// `R`
    Rest,
    /// `N`
    Note,
}

impl VoiceState {
    /// Single-letter code.
    pub fn as_char(&self) -> char {
        match self {
            VoiceState::Rest => 'R',
            VoiceState::Note => 'N',
        }
    }

    /// True for [`VoiceState::Note`].
    pub fn is_note(&self) -> bool {
        matches!(self, VoiceState::Note)
    }
}

/// Per-voice participation, top voice first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Texture(pub [VoiceState; 4]);

impl Texture {
    /// Builds a texture from a code such as `"RNNN"`. Returns `None` for any
    /// other length or letter.
    pub fn from_code(code: &str) -> Option<Self> {
        let mut voices = [VoiceState::Rest; 4];
        let mut chars = code.chars();
        for slot in voices.iter_mut() {
            *slot = match chars.next()? {
                'R' => VoiceState::Rest,
                'N' => VoiceState::Note,
                _ => return None,
            };
        }
        if chars.next().is_some() {
            return None;
        }
        Some(Self(voices))
    }

    /// Derives the texture from a 4-voice selection.
    ///
    /// Three cells: rests mark voices 1-3 as silent. Two cells: voice 4 is
    /// silent, plus voice 1 or 2 if the matching cell rests. One cell: only
    /// voices 1-2 sound. The silent marker rests every voice.
    pub fn from_selection(selection: &FourVoiceSelection) -> Self {
        use VoiceState::{Note as N, Rest as R};

        let rests: Vec<bool> = selection.cells().iter().map(|c| c.is_rest()).collect();
        let voices = match (selection, rests.as_slice()) {
            (FourVoiceSelection::Silent, _) => [R, R, R, R],
            (_, &[a, b, c]) => match (a, b, c) {
                (true, false, false) => [R, N, N, N],
                (false, true, false) => [N, R, N, N],
                (false, false, true) => [N, N, R, N],
                (true, true, false) => [R, R, N, N],
                (true, false, true) => [R, N, R, N],
                (false, true, true) => [N, R, R, N],
                _ => [N, N, N, N],
            },
            (_, &[a, b]) => match (a, b) {
                (false, false) => [N, N, N, R],
                (true, _) => [R, N, N, R],
                (false, true) => [N, R, N, R],
            },
            (_, &[false]) => [N, N, R, R],
            _ => [R, R, R, R],
        };
        Self(voices)
    }

    /// Voice states in order.
    pub fn voices(&self) -> &[VoiceState; 4] {
        &self.0
    }

    /// True when no voice sounds.
    pub fn is_silent(&self) -> bool {
        self.0.iter().all(|v| !v.is_note())
    }
}

impl fmt::Display for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.0 {
            write!(f, "{}", v.as_char())?;
        }
        Ok(())
    }
}

impl Serialize for Texture {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
