#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::VariantArray;

    use crate::cryptogram::{Cryptogram, CryptogramMode};
    use crate::highlight::{compute_highlights, Category, HighlightRequest};
    use crate::locate::locate;
    use crate::position::Position;
    use crate::render::render_text;
    use crate::sequential::match_sequential;
    use crate::puzzle;

    fn row(r: usize, cols: impl Iterator<Item = usize>) -> Vec<Position> {
        cols.map(|c| Position(r, c)).collect()
    }

    #[test]
    fn shipped_grid_shape() {
        let grid = puzzle::grid();
        assert_eq!((grid.nrows(), grid.ncols()), (15, 20));
        assert_eq!(grid.get(Position(0, 0)), Some('Q'));
        assert_eq!(grid.get(Position(14, 19)), Some('E'));
    }

    #[test]
    fn state_runs_down_a_diagonal() {
        let grid = puzzle::grid();
        let diagonal = (6..11).map(|r| Position(r, r + 1)).collect::<Vec<_>>();

        assert_eq!(locate("state", false, &grid), vec![diagonal.clone()]);
        // row 5 reads "ETATS" from column 1
        assert_eq!(locate("state", true, &grid), vec![row(5, (1..6).rev()), diagonal]);
    }

    #[test]
    fn water_is_only_backwards() {
        let grid = puzzle::grid();
        assert!(locate("water", false, &grid).is_empty());
        assert_eq!(locate("WATER", true, &grid), vec![row(4, (15..20).rev())]);
    }

    #[test]
    fn forward_words_in_every_direction() {
        let grid = puzzle::grid();
        assert_eq!(locate("nineteen", false, &grid), vec![row(0, 9..17)]);
        assert_eq!(locate("count", false, &grid), vec![(1..6).map(|r| Position(r, 0)).collect::<Vec<_>>()]);
        assert_eq!(
            locate("divide", false, &grid),
            vec![(6..12).map(|r| Position(r, r + 5)).collect::<Vec<_>>()]
        );
        assert_eq!(
            locate("lemon", false, &grid),
            vec![vec![Position(0, 11), Position(1, 10), Position(2, 9), Position(3, 8), Position(4, 7)]]
        );
    }

    #[test]
    fn every_shipped_word_is_found() {
        let grid = puzzle::grid();
        for category in [Category::Forwards, Category::Backwards] {
            for word in puzzle::words(category) {
                assert!(!locate(word, category.is_backwards(), &grid).is_empty(), "{} not found", word);
            }
        }
    }

    #[test]
    fn secret_message_fragments_all_match() {
        let instances = match_sequential(&puzzle::SECRET_MESSAGE_WORDS, &puzzle::grid());

        assert_eq!(instances.len(), puzzle::SECRET_MESSAGE_WORDS.len());
        assert!(instances.iter().all(|i| i.is_secret_message && !i.is_backwards));
        assert_eq!(instances[0].word, "reteh");
        assert_eq!(instances[0].positions, row(1, 1..6));
        assert_eq!(instances[20].word, "nsiosmi");
        assert_eq!(instances[20].positions, row(13, 0..7));
    }

    #[test]
    fn unscrambled_message_all_matches() {
        let instances = match_sequential(&puzzle::UNSCRAMBLED_SECRET_MESSAGE_WORDS, &puzzle::unscrambled_grid());

        assert_eq!(instances.len(), 30);
        assert_eq!(instances[29].word, "mission");
        assert_eq!(instances[29].positions, row(13, 0..7));
    }

    #[test]
    fn render_shipped_forwards() {
        let request = HighlightRequest::shipped().enable(Category::Forwards);
        let highlights = compute_highlights(&request);

        assert_eq!(highlights.instances().len(), 15);
        assert_eq!(render_text(&request.grid, &highlights), ".........NINETEEN...
C.....T...O.........
OROUNDH..M.....LIAR.
U.TRONR.E...........
N.....EL............
T.....E........LINE.
.......S...D........
E.......T...I.......
L........A...V......
E...FIVE..T...I.....
V..........E...D....
E........SQUARE.E...
N............QUARRY.
....................
............SAPPHIRE
");
    }

    #[test]
    fn render_shipped_backwards() {
        let request = HighlightRequest::shipped().enable(Category::Backwards);
        let highlights = compute_highlights(&request);

        assert_eq!(highlights.instances().len(), 13);
        assert_eq!(render_text(&request.grid, &highlights), "...CALIL............
....................
...............LIAR.
.HTRON..............
...............RETAW
.ETATS..............
......TSEW..........
....KAEPT...........
.........A..EVLEWT..
..........T.........
.......KLAWE....TRID
...............EERHT
....................
....................
...OREZ.............
");
    }

    #[test]
    fn shipped_coloring() {
        let request = HighlightRequest::shipped().enable(Category::Forwards).enable(Category::Backwards);
        let highlights = compute_highlights(&request);

        let colors = highlights.instances().iter().map(|i| (i.word.as_str(), i.color_id)).collect::<Vec<_>>();
        assert_eq!(colors, vec![
            ("count", 0), ("divide", 0), ("eleven", 0), ("state", 0), ("five", 0), ("lemon", 0), ("liar", 0),
            ("line", 0), ("nineteen", 1), ("quarry", 1), ("round", 1), ("sapphire", 0), ("square", 2),
            ("three", 2), ("tron", 0),
            ("dirt", 0), ("state", 0), ("state", 0), ("lilac", 0), ("north", 0), ("peak", 1), ("rail", 0),
            ("three", 1), ("twelve", 0), ("walk", 1), ("water", 0), ("west", 2), ("zero", 0),
        ]);
        assert_eq!(highlights.conflicts().len(), 14);
    }

    #[test]
    fn shipped_highlights_are_idempotent() {
        let mut request = HighlightRequest::shipped();
        for category in Category::VARIANTS {
            request.set_enabled(*category, true);
        }

        let first = compute_highlights(&request);
        assert!(!first.is_empty());
        assert_eq!(first, compute_highlights(&request));
    }

    #[test]
    fn encoding_the_first_row() {
        let request = HighlightRequest::shipped()
            .with_cryptogram(Cryptogram::new(puzzle::cryptogram_key(), CryptogramMode::Encode));
        let encoded = request.search_grid().row(0).into_iter().collect::<String>();
        assert_eq!(encoded, "DACULTOTVYOYVFVVYGPL");
    }

    #[test]
    fn category_names_round_trip() {
        for category in Category::VARIANTS {
            assert_eq!(Category::from_str(&category.to_string()), Ok(*category));
        }
    }
}

#[cfg(test)]
mod properties {
    use itertools::Itertools;
    use proptest::prelude::*;

    use crate::grid::Grid;
    use crate::highlight::{compute_highlights, Category, HighlightRequest};
    use crate::locate::locate;

    fn small_grid() -> impl Strategy<Value = Grid> {
        (1usize..6, 1usize..6).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(proptest::string::string_regex(&format!("[AB]{{{}}}", cols)).unwrap(), rows)
                .prop_map(|rows| Grid::from_rows(rows).unwrap())
        })
    }

    fn word() -> impl Strategy<Value = String> {
        "[ab]{1,4}"
    }

    proptest! {
        #[test]
        fn placements_spell_the_word(grid in small_grid(), word in word(), backwards in any::<bool>()) {
            let upper = word.to_ascii_uppercase();
            let reversed = upper.chars().rev().collect::<String>();

            for placement in locate(&word, backwards, &grid) {
                prop_assert_eq!(placement.len(), word.len());
                prop_assert!(placement.iter().all(|p| grid.contains(*p)));

                // a straight line of neighbouring cells
                let steps = placement.iter()
                    .tuple_windows()
                    .map(|(a, b)| (b.row() as isize - a.row() as isize, b.col() as isize - a.col() as isize))
                    .collect::<Vec<_>>();
                prop_assert!(steps.iter().all_equal());

                let allowed: &[(isize, isize)] = match backwards {
                    false => &[(0, 1), (1, 0), (1, 1), (1, -1)],
                    true => &[(0, -1), (-1, 0), (-1, 1), (1, 1)],
                };
                prop_assert!(steps.iter().all(|step| allowed.contains(step)));

                // only the up-right diagonal is listed against the reading order
                let spelled = placement.iter().filter_map(|p| grid.get(*p)).collect::<String>();
                let expected = match (backwards, steps.first()) {
                    (false, Some((1, -1))) => &reversed,
                    _ => &upper,
                };
                prop_assert_eq!(&spelled, expected);
            }
        }

        #[test]
        fn conflicting_placements_never_share_a_color(
            grid in small_grid(),
            forwards in proptest::collection::vec(word(), 0..4),
            backwards in proptest::collection::vec(word(), 0..4),
        ) {
            let request = HighlightRequest::new(grid)
                .with_words(Category::Forwards, forwards)
                .with_words(Category::Backwards, backwards)
                .enable(Category::Forwards)
                .enable(Category::Backwards);
            let highlights = compute_highlights(&request);
            let instances = highlights.instances();

            for ((i, a), (j, b)) in instances.iter().enumerate().tuple_combinations() {
                let conflicting = a.conflicts_with(b);
                prop_assert_eq!(conflicting, highlights.conflicts().contains(&unordered_pair::UnorderedPair(i, j)));
                if conflicting {
                    prop_assert_ne!(a.color_id, b.color_id);
                }
            }

            prop_assert_eq!(&highlights, &compute_highlights(&request));
        }
    }
}
