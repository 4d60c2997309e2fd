use std::ops::Range;

use itertools::Itertools;
use tracing::trace;

use crate::grid::Grid;
use crate::heading::Heading;
use crate::position::{Coord, Position};

/// One pass of the locator over the grid.
///
/// Each pass walks `heading` from every anchor the word fits at, comparing against either the word or its reversal,
/// and optionally reverses the matched cells before reporting them.
#[derive(Copy, Clone, Debug)]
struct Scan {
    heading: Heading,
    reversed_text: bool,
    reversed_result: bool,
}

impl Scan {
    const fn new(heading: Heading, reversed_text: bool, reversed_result: bool) -> Self {
        Self { heading, reversed_text, reversed_result }
    }
}

// forward passes read the word as written; the up-right diagonal is reported top to bottom
const FORWARD_SCANS: [Scan; 4] = [
    Scan::new(Heading::Right, false, false),
    Scan::new(Heading::Down, false, false),
    Scan::new(Heading::DownRight, false, false),
    Scan::new(Heading::UpRight, false, true),
];

// backward passes look for the reversed word and report cells from the visual start of the backwards word
const BACKWARD_SCANS: [Scan; 4] = [
    Scan::new(Heading::Right, true, true),
    Scan::new(Heading::Down, true, true),
    Scan::new(Heading::DownLeft, true, true),
    Scan::new(Heading::UpLeft, true, true),
];

/// Anchors along one axis at which `len` cells fit when stepping by `delta`, in ascending order.
fn anchors(extent: Coord, len: usize, delta: isize) -> Range<Coord> {
    match delta.signum() {
        0 => 0..extent,
        1 => 0..(extent + 1).saturating_sub(len),
        _ => len.saturating_sub(1)..extent,
    }
}

/// Walk `text.len()` cells from `start` along `heading`, returning the cells if every letter matches.
fn walk(grid: &Grid, start: Position, heading: Heading, text: &[char]) -> Option<Vec<Position>> {
    let mut positions = Vec::with_capacity(text.len());
    let mut position = start;
    for letter in text {
        if grid.get(position) != Some(*letter) {
            return None;
        }
        positions.push(position);
        position = heading.attempt_from(position);
    }
    Some(positions)
}

fn run_scan(grid: &Grid, scan: Scan, word: &[char], reversed: &[char], out: &mut Vec<Vec<Position>>) {
    let text = if scan.reversed_text { reversed } else { word };
    let (row_delta, col_delta) = scan.heading.delta();

    let mut rows = anchors(grid.nrows(), text.len(), row_delta).collect_vec();
    let cols = anchors(grid.ncols(), text.len(), col_delta).collect_vec();
    // climbing scans start from the bottom row; columns always run left to right
    if scan.heading.climbs() {
        rows.reverse();
    }

    // columns are read top to bottom one at a time; everything else row by row
    let starts = if scan.heading == Heading::Down {
        cols.iter().cartesian_product(rows.iter()).map(|(c, r)| Position(*r, *c)).collect_vec()
    } else {
        rows.iter().cartesian_product(cols.iter()).map(|(r, c)| Position(*r, *c)).collect_vec()
    };

    for start in starts {
        if let Some(mut positions) = walk(grid, start, scan.heading, text) {
            if scan.reversed_result {
                positions.reverse();
            }
            out.push(positions);
        }
    }
}

/// Find every placement of `word` in `grid`.
///
/// Matching is case-insensitive. Forward words are found left to right, top to bottom, and along both
/// rightward diagonals; backward words are found right to left, bottom to top, and along both leftward diagonals.
/// Overlapping occurrences are all reported and nothing is deduplicated, so a one-letter word matches its
/// letter once per pass.
///
/// Each placement lists its cells in display order:
/// - forward placements read the word in order, except the up-right diagonal, which is listed top to bottom;
/// - backward placements start at the visual start of the backwards word (the rightmost cell of a row match,
///   the bottom cell of a column match, the bottom-left cell of a down-left diagonal).
pub fn locate(word: &str, backwards: bool, grid: &Grid) -> Vec<Vec<Position>> {
    let word = word.chars().map(|c| c.to_ascii_uppercase()).collect_vec();
    if word.is_empty() {
        return Vec::new();
    }
    let reversed = word.iter().rev().copied().collect_vec();

    let scans = if backwards { &BACKWARD_SCANS } else { &FORWARD_SCANS };
    let mut placements = Vec::new();
    for scan in scans {
        run_scan(grid, *scan, &word, &reversed, &mut placements);
    }

    trace!(word = %word.iter().collect::<String>(), backwards, found = placements.len(), "located word");
    placements
}
