//! Level document rendering and difficulty classification

/// Difficulty levels and the classification hook
pub mod difficulty;
/// Level document rendering
pub mod serializer;

pub use difficulty::{Difficulty, DifficultyClassifier, SizeClassifier, Unclassified};
pub use serializer::{serialize_nonogram, serialize_with_difficulty};
