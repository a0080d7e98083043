//! Letter colour marks

use std::fmt;

/// The colour a letter was marked with in a guess row
///
/// - Gray: letter absent from the answer (unless green/yellow elsewhere)
/// - Yellow: letter present, but not at this position
/// - Green: letter correct at this position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    #[default]
    Gray,
    Yellow,
    Green,
}

impl LetterStatus {
    /// The next colour in the click cycle: gray → yellow → green → gray
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Gray => Self::Yellow,
            Self::Yellow => Self::Green,
            Self::Green => Self::Gray,
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/'.'/⬜.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | '.' | '⬜' => Some(Self::Gray),
            _ => None,
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬜',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gray => "gray",
            Self::Yellow => "yellow",
            Self::Green => "green",
        };
        f.write_str(name)
    }
}
