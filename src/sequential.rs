use std::collections::HashSet;

use itertools::Itertools;
use tracing::trace;

use crate::grid::Grid;
use crate::instance::WordInstance;
use crate::position::Position;

/// Match `fragments` against `grid` in reading order, each at most once.
///
/// The scan runs row by row, left to right, always looking for the next unmatched fragment at the current column.
/// A match must lie within one row and must not reuse a cell consumed by an earlier match; it consumes its cells
/// and the scan resumes just past it. Otherwise the scan moves one column on and tries the same fragment again.
///
/// The scan stops once every fragment has matched. Running out of grid first is not an error: whatever matched
/// so far is returned. Provisional colour ids count up from zero in match order.
pub fn match_sequential<S: AsRef<str>>(fragments: &[S], grid: &Grid) -> Vec<WordInstance> {
    let mut instances = Vec::new();
    let mut used: HashSet<Position> = HashSet::new();
    let mut cursor = 0;

    for row in 0..grid.nrows() {
        let text = grid.row(row);

        let mut col = 0;
        while col < text.len() {
            let Some(fragment) = fragments.get(cursor) else {
                return instances;
            };
            let fragment = fragment.as_ref();
            let wanted = fragment.chars().map(|c| c.to_ascii_uppercase()).collect_vec();
            let end = col + wanted.len();

            if end <= text.len() && text[col..end] == wanted[..] {
                let positions = (col..end).map(|c| Position(row, c)).collect_vec();
                if !positions.iter().any(|p| used.contains(p)) {
                    trace!(fragment, row, col, "matched secret message fragment");
                    used.extend(positions.iter().copied());
                    instances.push(WordInstance::secret(fragment, positions, instances.len()));
                    cursor += 1;
                    col = end;
                    continue;
                }
            }

            col += 1;
        }
    }

    instances
}
