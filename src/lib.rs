#![warn(missing_docs)]

//! # `wordsearch`
//!
//! Tools for working a fixed word-search puzzle: finding words in every direction, reconstructing a secret message
//! hidden in the grid as anagrammed fragments, viewing the grid through a substitution cipher, and colouring the
//! results so that neighbouring words stay distinguishable.
//!
//! Begin with a [`Grid`], built with [`Grid::from_rows`] or a [`GridBuilder`], or take the shipped one from
//! [`puzzle`]. Individual words are found with [`locate`] and secret messages with [`match_sequential`].
//! To highlight whole word lists, fill in a [`HighlightRequest`] and pass it to [`compute_highlights`];
//! the [`render`] module turns the resulting [`Highlights`] into colours.
//!
//! # Internals
//! Every computation is a pure function of its inputs and recomputes from scratch.
//!
//! Highlighting collects every placement of every enabled word list, then expresses the placements as an undirected
//! graph G: a vertex per placement, and an edge between two placements of the same direction class (forward or
//! backward) that occupy a common cell or sit in edge-adjacent cells. Placements are coloured greedily in the order
//! they were found, each taking the smallest colour id not held by a neighbour already coloured.
//! Placements that are not connected may share a colour id, which lets a renderer cycle through a small palette.

pub use color::{blend, blend_css, Rgba};
pub use cryptogram::{Cryptogram, CryptogramMode, Key};
pub use grid::{Grid, GridBuilder, GridInvalidReason};
pub use heading::Heading;
pub use highlight::{compute_highlights, Category, HighlightRequest, Highlights};
pub use instance::{DirectionClass, WordInstance};
pub use locate::locate;
pub use position::Position;
pub use sequential::match_sequential;

pub mod color;
pub mod cryptogram;
pub(crate) mod grid;
pub(crate) mod heading;
pub(crate) mod highlight;
pub(crate) mod instance;
pub(crate) mod locate;
pub(crate) mod position;
pub mod puzzle;
pub mod render;
pub(crate) mod sequential;
mod tests;
#[cfg(feature = "wasm")]
pub mod wasm;
