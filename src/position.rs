use ndarray::Ix;

pub(crate) type Coord = usize;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A cell `(row, col)` on a grid. The top left corner is `Position(0, 0)`; rows grow downward and columns rightward.
pub struct Position(pub Coord, pub Coord);

impl Position {
    /// The row of this position.
    pub fn row(&self) -> Coord {
        self.0
    }

    /// The column of this position.
    pub fn col(&self) -> Coord {
        self.1
    }

    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.0, self.1)
    }

    // wraps on underflow; the wrapped position is out of bounds for any real grid
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether `self` and `other` share an edge.
    ///
    /// Exactly one of the row or column must differ, and by exactly one; diagonal neighbors are not adjacent.
    pub fn adjacent(&self, other: &Position) -> bool {
        let row_diff = self.0.abs_diff(other.0);
        let col_diff = self.1.abs_diff(other.1);
        (row_diff == 1 && col_diff == 0) || (row_diff == 0 && col_diff == 1)
    }
}

impl From<(Ix, Ix)> for Position {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}
