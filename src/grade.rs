// Grade scale module: the fixed letter-grade table used by the calculator.
// Lookups are pure and never fail loudly; an unknown symbol simply yields
// `None` and the caller decides what to do (the UI re-prompts).

use crate::course::EntryError;
use std::fmt;
use std::str::FromStr;

/// A letter grade on the simple 4.0 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// Every grade in table order, best first. Used to print the scale.
    pub const ALL: [LetterGrade; 5] = [
        LetterGrade::A,
        LetterGrade::B,
        LetterGrade::C,
        LetterGrade::D,
        LetterGrade::F,
    ];

    /// Look up a symbol such as `"a"` or `" B "`. Surrounding whitespace is
    /// ignored and letter case does not matter. Anything that is not exactly
    /// one recognised letter returns `None`.
    pub fn resolve(symbol: &str) -> Option<Self> {
        let mut chars = symbol.trim().chars();
        let letter = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match letter.to_ascii_uppercase() {
            'A' => Some(LetterGrade::A),
            'B' => Some(LetterGrade::B),
            'C' => Some(LetterGrade::C),
            'D' => Some(LetterGrade::D),
            'F' => Some(LetterGrade::F),
            _ => None,
        }
    }

    /// Numeric grade point for this letter.
    pub fn grade_point(self) -> f64 {
        match self {
            LetterGrade::A => 4.0,
            LetterGrade::B => 3.0,
            LetterGrade::C => 2.0,
            LetterGrade::D => 1.0,
            LetterGrade::F => 0.0,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            LetterGrade::A => 'A',
            LetterGrade::B => 'B',
            LetterGrade::C => 'C',
            LetterGrade::D => 'D',
            LetterGrade::F => 'F',
        }
    }
}

/// Resolve a symbol straight to its grade point, or `None` if the symbol
/// is not on the scale.
pub fn resolve(symbol: &str) -> Option<f64> {
    LetterGrade::resolve(symbol).map(LetterGrade::grade_point)
}

impl FromStr for LetterGrade {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LetterGrade::resolve(s).ok_or_else(|| EntryError::UnknownGrade(s.trim().to_string()))
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
