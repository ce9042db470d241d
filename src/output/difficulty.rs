//! Difficulty classification hook for extracted puzzles
//!
//! Conversion asks a classifier for every grid. The default leaves puzzles
//! unrated, which writes `difficulty="0"` and keeps the output flat.

use crate::spatial::grid::PuzzleGrid;
use std::fmt;

/// Difficulty levels understood by the level file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Difficulty {
    /// Not rated
    #[default]
    Undefined,
    /// Easiest
    Easiest,
    /// Easy
    Easy,
    /// Normal
    Normal,
    /// Hard
    Hard,
    /// Hardest
    Hardest,
}

impl Difficulty {
    /// Numeric level written to the `difficulty` attribute
    pub const fn level(self) -> u8 {
        match self {
            Self::Undefined => 0,
            Self::Easiest => 1,
            Self::Easy => 2,
            Self::Normal => 3,
            Self::Hard => 4,
            Self::Hardest => 5,
        }
    }

    /// Output sub-directory for this level, `None` for the output root
    pub const fn directory(self) -> Option<&'static str> {
        match self {
            Self::Undefined => None,
            Self::Easiest => Some("easiest"),
            Self::Easy => Some("easy"),
            Self::Normal => Some("normal"),
            Self::Hard => Some("hard"),
            Self::Hardest => Some("hardest"),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.directory().unwrap_or("undefined"))
    }
}

/// Assigns a difficulty to an extracted grid
pub trait DifficultyClassifier {
    /// Classify `grid`
    fn classify(&self, grid: &PuzzleGrid) -> Difficulty;
}

impl<F> DifficultyClassifier for F
where
    F: Fn(&PuzzleGrid) -> Difficulty,
{
    fn classify(&self, grid: &PuzzleGrid) -> Difficulty {
        self(grid)
    }
}

/// Leaves every puzzle unrated
#[derive(Debug, Clone, Copy, Default)]
pub struct Unclassified;

impl DifficultyClassifier for Unclassified {
    fn classify(&self, _grid: &PuzzleGrid) -> Difficulty {
        Difficulty::Undefined
    }
}

/// Sorts puzzles by their cell count
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeClassifier;

impl SizeClassifier {
    // Upper cell counts for each level: 5x5, 10x10, 15x15 and 25x25
    const BOUNDS: [(usize, Difficulty); 4] = [
        (25, Difficulty::Easiest),
        (100, Difficulty::Easy),
        (225, Difficulty::Normal),
        (625, Difficulty::Hard),
    ];
}

impl DifficultyClassifier for SizeClassifier {
    fn classify(&self, grid: &PuzzleGrid) -> Difficulty {
        let cells = grid.width() * grid.height();
        Self::BOUNDS
            .iter()
            .find(|(bound, _)| cells <= *bound)
            .map_or(Difficulty::Hardest, |&(_, difficulty)| difficulty)
    }
}
