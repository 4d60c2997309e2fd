use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;

use crate::position::{Coord, Position};

/// Reasons a [`GridBuilder`] may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GridInvalidReason {
    /// No rows were added, or the rows have no letters.
    Empty,
    /// A row's length differs from the length of the first row.
    RaggedRow {
        /// Index of the offending row.
        row: Coord,
        /// Length of the first row.
        expected: Coord,
        /// Length of the offending row.
        found: Coord,
    },
}

/// A rectangular grid of uppercase letters.
///
/// Grids are immutable once built; transformations such as a cryptogram substitution produce a new [`Grid`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    cells: Array2<char>,
}

impl Grid {
    /// Build a grid from its rows, top to bottom, uppercasing every letter.
    ///
    /// Shorthand for feeding every row through a [`GridBuilder`].
    pub fn from_rows<I, S>(rows: I) -> Result<Self, Vec<GridInvalidReason>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GridBuilder::default();
        for row in rows {
            builder.add_row(row.as_ref());
        }
        builder.build().map_err(|reasons| reasons.clone())
    }

    /// Number of rows.
    pub fn nrows(&self) -> Coord {
        self.cells.nrows()
    }

    /// Number of columns.
    pub fn ncols(&self) -> Coord {
        self.cells.ncols()
    }

    /// The letter at `position`, or [`None`] if it lies outside the grid.
    pub fn get(&self, position: Position) -> Option<char> {
        self.cells.get(position.as_index()).copied()
    }

    /// Whether `position` lies inside the grid.
    pub fn contains(&self, position: Position) -> bool {
        position.0 < self.nrows() && position.1 < self.ncols()
    }

    /// The letters of row `row`, left to right.
    pub fn row(&self, row: Coord) -> Vec<char> {
        self.cells.row(row).to_vec()
    }

    /// Every position of the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.indexed_iter().map(|(index, _)| Position::from(index))
    }

    /// A new grid with every letter passed through `f`.
    pub fn map_letters(&self, f: impl Fn(char) -> char) -> Self {
        Self { cells: self.cells.map(|letter| f(*letter)) }
    }

    pub(crate) fn print(cells: &Array2<char>) -> String {
        let mut out = String::with_capacity(cells.nrows() * (cells.ncols() + 1));

        for row in cells.rows() {
            for col in row {
                out.push(*col);
            }
            out.push('\n');
        }

        out
    }

    pub(crate) fn cells(&self) -> &Array2<char> {
        &self.cells
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Self::print(&self.cells))
    }
}

/// A builder for [`Grid`]s, fed one row at a time.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Default)]
pub struct GridBuilder {
    rows: Vec<Vec<char>>,
    invalid_reasons: Vec<GridInvalidReason>,
}

impl GridBuilder {
    /// Append a row below the rows added so far.
    ///
    /// May cause the builder to enter a [`RaggedRow`](GridInvalidReason::RaggedRow) invalid state if the row's length differs from the first row's.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_row(&mut self, row: &str) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let letters = row.chars().map(|c| c.to_ascii_uppercase()).collect_vec();
        if let Some(first) = self.rows.first() {
            if first.len() != letters.len() {
                self.invalid_reasons.push(GridInvalidReason::RaggedRow {
                    row: self.rows.len(),
                    expected: first.len(),
                    found: letters.len(),
                });
                return self;
            }
        }

        self.rows.push(letters);
        self
    }

    /// Remove the most recently added row.
    ///
    /// If the builder is in an invalid state or no rows are present, this function does nothing.
    pub fn pop_row(&mut self) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.rows.pop();
        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<GridInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<GridInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Grid`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`GridInvalidReason`] will indicate why.
    pub fn build(&mut self) -> Result<Grid, &Vec<GridInvalidReason>> {
        let ncols = self.rows.first().map_or(0, Vec::len);
        if self.invalid_reasons.is_empty() && ncols == 0 {
            self.invalid_reasons.push(GridInvalidReason::Empty);
        }
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        // rows are known to be rectangular here
        let cells = Array2::from_shape_fn((self.rows.len(), ncols), |(r, c)| self.rows[r][c]);
        Ok(Grid { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::{Grid, GridBuilder, GridInvalidReason};
    use crate::position::Position;

    #[test]
    fn builds_and_prints_uppercase() {
        let grid = Grid::from_rows(["abc", "DeF"]).unwrap();
        assert_eq!(grid.nrows(), 2);
        assert_eq!(grid.ncols(), 3);
        assert_eq!(format!("{}", grid), "ABC
DEF
");
        assert_eq!(grid.get(Position(1, 2)), Some('F'));
        assert_eq!(grid.get(Position(2, 0)), None);
    }

    #[test]
    fn ragged_rows_invalidate_the_builder() {
        let mut builder = GridBuilder::default();
        builder.add_row("ABC").add_row("DE").add_row("FGH");

        assert_eq!(
            builder.is_valid(),
            Some(&vec![GridInvalidReason::RaggedRow { row: 1, expected: 3, found: 2 }])
        );
        assert!(builder.build().is_err());
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert_eq!(Grid::from_rows(Vec::<&str>::new()), Err(vec![GridInvalidReason::Empty]));
        assert_eq!(Grid::from_rows([""]), Err(vec![GridInvalidReason::Empty]));
    }

    #[test]
    fn pop_row_then_build() {
        let grid = GridBuilder::default()
            .add_row("AB")
            .add_row("CD")
            .pop_row()
            .build()
            .unwrap();

        assert_eq!(format!("{}", grid), "AB\n");
    }

    #[test]
    fn map_letters_leaves_the_source_alone() {
        let grid = Grid::from_rows(["AB", "CD"]).unwrap();
        let shifted = grid.map_letters(|c| if c == 'A' { 'Z' } else { c });

        assert_eq!(format!("{}", shifted), "ZB\nCD\n");
        assert_eq!(format!("{}", grid), "AB\nCD\n");
        assert_eq!(grid.positions().count(), 4);
    }
}
