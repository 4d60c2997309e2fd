use std::collections::HashSet;

use itertools::Itertools;

use crate::position::Position;

/// Forward-type and backward-type placements are coloured independently of one another.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum DirectionClass {
    /// Forward words and secret message fragments.
    Forward,
    /// Backward words.
    Backward,
}

/// One concrete placement of a word or secret message fragment in a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordInstance {
    /// The word or fragment, lowercased.
    pub word: String,
    /// Cells occupied by the word, in display order.
    pub positions: Vec<Position>,
    /// Whether the word was found by a backward search.
    pub is_backwards: bool,
    /// Colour index; see [`Highlights`](crate::Highlights) for how it is assigned.
    pub color_id: usize,
    /// Whether this is a fragment of a secret message.
    pub is_secret_message: bool,
}

impl WordInstance {
    pub(crate) fn new(word: &str, positions: Vec<Position>, is_backwards: bool, color_id: usize) -> Self {
        Self {
            word: word.to_lowercase(),
            positions,
            is_backwards,
            color_id,
            is_secret_message: false,
        }
    }

    pub(crate) fn secret(word: &str, positions: Vec<Position>, color_id: usize) -> Self {
        Self {
            is_secret_message: true,
            ..Self::new(word, positions, false, color_id)
        }
    }

    /// The direction class this instance is coloured within.
    pub fn direction_class(&self) -> DirectionClass {
        match self.is_backwards {
            true => DirectionClass::Backward,
            false => DirectionClass::Forward,
        }
    }

    /// Whether the two instances occupy a common cell.
    pub fn overlap(&self, other: &WordInstance) -> bool {
        let ours: HashSet<&Position> = self.positions.iter().collect();
        other.positions.iter().any(|p| ours.contains(p))
    }

    /// Whether any cell of `self` is [`adjacent`](Position::adjacent) to any cell of `other`.
    pub fn share_edge(&self, other: &WordInstance) -> bool {
        self.positions.iter()
            .cartesian_product(other.positions.iter())
            .any(|(a, b)| a.adjacent(b))
    }

    /// Whether the two instances must be drawn in different colours.
    ///
    /// Only instances of the same [`DirectionClass`] conflict.
    pub fn conflicts_with(&self, other: &WordInstance) -> bool {
        self.direction_class() == other.direction_class() && (self.overlap(other) || self.share_edge(other))
    }
}
