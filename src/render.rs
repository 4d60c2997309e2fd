use std::collections::HashSet;

use itertools::Itertools;
use ndarray::Array2;

use crate::color::{blend, Rgba};
use crate::grid::Grid;
use crate::highlight::Highlights;
use crate::instance::WordInstance;
use crate::position::Position;

/// Colours highlights are drawn in.
///
/// Colour ids index into the palette of their direction class modulo its length.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Colours for forward words.
    pub forwards: Vec<Rgba>,
    /// Colours for backward words.
    pub backwards: Vec<Rgba>,
    /// The one colour every secret message fragment is drawn in.
    pub secret_message: Rgba,
    /// Colour for cells whose letter is selected.
    pub letter_highlight: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            // yellow, orange, gold
            forwards: vec![Rgba::new(255, 255, 0, 0.7), Rgba::new(255, 165, 0, 0.7), Rgba::new(255, 215, 0, 0.7)],
            // medium turquoise, lime green, deep sky blue
            backwards: vec![Rgba::new(72, 209, 204, 0.7), Rgba::new(50, 205, 50, 0.7), Rgba::new(0, 191, 255, 0.7)],
            // pink
            secret_message: Rgba::new(255, 192, 203, 0.7),
            // cyan
            letter_highlight: Rgba::new(0, 255, 255, 0.6),
        }
    }
}

impl Palette {
    /// The colour `instance` is drawn in, or [`None`] if its class has an empty palette.
    pub fn instance_color(&self, instance: &WordInstance) -> Option<Rgba> {
        if instance.is_secret_message {
            return Some(self.secret_message);
        }

        let colors = if instance.is_backwards { &self.backwards } else { &self.forwards };
        instance.color_id.checked_rem(colors.len()).and_then(|index| colors.get(index)).copied()
    }

    /// The blended colour of every placement covering `position`.
    pub fn cell_color(&self, highlights: &Highlights, position: Position) -> Option<Rgba> {
        let colors = highlights.at(position).filter_map(|instance| self.instance_color(instance)).collect_vec();
        blend(&colors)
    }
}

/// Letters to pick out wherever they appear in the grid.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LetterHighlight {
    /// Selected letters, uppercase.
    pub letters: HashSet<char>,
    /// Leave letters inside highlighted words alone.
    pub exclude_letters_in_words: bool,
}

impl LetterHighlight {
    /// Select `letters`, case-insensitively.
    pub fn new(letters: impl IntoIterator<Item = char>, exclude_letters_in_words: bool) -> Self {
        Self {
            letters: letters.into_iter().map(|c| c.to_ascii_uppercase()).collect(),
            exclude_letters_in_words,
        }
    }

    fn picks(&self, letter: char, in_word: bool) -> bool {
        self.letters.contains(&letter.to_ascii_uppercase()) && !(self.exclude_letters_in_words && in_word)
    }
}

/// The background of one cell of `grid`, combining word highlights with letter highlighting.
///
/// `grid` is the grid as displayed, so letter selection applies to displayed letters.
pub fn cell_background(
    palette: &Palette,
    highlights: &Highlights,
    letters: &LetterHighlight,
    grid: &Grid,
    position: Position,
) -> Option<Rgba> {
    let words = palette.cell_color(highlights, position);
    let picked = grid.get(position)
        .is_some_and(|letter| letters.picks(letter, highlights.is_highlighted(position)));

    match (words, picked) {
        (Some(words), true) => blend(&[words, palette.letter_highlight]),
        (None, true) => Some(palette.letter_highlight),
        (words, false) => words,
    }
}

/// Draw `grid` showing only the letters of highlighted cells; every other cell is `.`.
pub fn render_text(grid: &Grid, highlights: &Highlights) -> String {
    let shown = Array2::from_shape_fn(grid.cells().raw_dim(), |index| {
        let position = Position::from(index);
        match highlights.is_highlighted(position) {
            true => grid.get(position).unwrap_or('.'),
            false => '.',
        }
    });
    Grid::print(&shown)
}
