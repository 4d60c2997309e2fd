use strum::VariantArray;

use crate::position::Position;

/// The directions the locator walks, named by the step taken from one letter to the next.
///
/// Forward words are walked along the first four; backward words are walked as their reversal along
/// [`Right`](Self::Right), [`Down`](Self::Down) and the two leftward diagonals.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Heading {
    Right,
    Down,
    DownRight,
    UpRight,
    DownLeft,
    UpLeft,
}

impl Heading {
    /// The `(row, col)` delta of a single step.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::DownRight => (1, 1),
            Self::UpRight => (-1, 1),
            Self::DownLeft => (1, -1),
            Self::UpLeft => (-1, -1),
        }
    }

    /// Attempt the step from `position` in the direction specified by `self` and return the resultant [`Position`].
    ///
    /// Stepping off the top or left edge yields a position no grid contains.
    pub fn attempt_from(&self, position: Position) -> Position {
        position.offset_by(self.delta())
    }

    /// Whether this heading climbs toward row zero.
    pub fn climbs(&self) -> bool {
        self.delta().0 < 0
    }
}
