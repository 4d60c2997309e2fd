//! The shipped puzzle: a fixed 15×20 grid, its unscrambled counterpart, the word lists found in it, and the keys
//! that go with it.

use crate::cryptogram::Key;
use crate::grid::Grid;
use crate::highlight::Category;

/// Rows of the puzzle grid.
pub const GRID: [&str; 15] = [
    "QVUCALILENINETEENBMA",
    "CRETEHTREAOUCSIFEVLE",
    "OROUNDHNIMIHSTOLIARO",
    "UHTRONROEOCEHSRARDWO",
    "NOUBTDELOELTLNTRETAW",
    "TETATSEONYNEOAOLINEO",
    "PMUEHTTSEWODAHREERET",
    "EONSKAEPTOOOILPASIEC",
    "LESDBNOORAOOEVLEWTSR",
    "ENTUFIVETNTNCOIUJTSO",
    "VRNIEMAKLAWESCODTRID",
    "EADTTEYOSSQUAREEERHT",
    "NMTOPLECEOHETQUARRYQ",
    "NSIOSMIXZFDQBCCASLIY",
    "APSOREZNGQZPSAPPHIRE",
];

/// Rows of the grid with the secret message unscrambled in place.
pub const UNSCRAMBLED_GRID: [&str; 15] = [
    "QVUCALILENINETEENBMA",
    "CTHERETAREOFIVECLUES",
    "OROUNDHINMTHISOLIARO",
    "UHTRONROEOWORDSEARCH",
    "NBUTDOELNOTTELLRETAW",
    "TETATSEOANYONEOLINEO",
    "THEMUPTSEWODTHEREARE",
    "ENOSKAEPTOOOISPECIAL",
    "LBENDSOORAOOEVLEWTTU",
    "ERNSFIVETNTNCOIJUSTO",
    "VREMAINKLAWESCODTRID",
    "ESTEADYTOSQUAREEERHT",
    "NCOMPLETEOTHEQUARRYO",
    "MISSIONXZFDQBCCASLIY",
    "APSOREZNGQZPSAPPHIRE",
];

/// Substitution key; entry `i` is the cipher letter for the `i`th letter of the alphabet.
pub const CRYPTOGRAM_KEY: &str = "LGUWV??ROB?TPYHSDIMFCA?ENK";

/// Alphabet positions of the first letter of each word of the accompanying poem.
pub const POEM_FIRST_LETTER_KEY: &str = "FRTFFSTSTAPTFGAYNWBSIUOIB";

/// Alphabet positions of the last letter of each word of the accompanying poem.
pub const POEM_LAST_LETTER_KEY: &str = "MKODMGOMTEDSOTNEUWEYSSRRNN";

/// Words that read forwards.
pub const FORWARDS_WORDS: [&str; 15] = [
    "count", "divide", "eleven", "state", "five", "lemon", "liar", "line", "nineteen", "quarry", "round",
    "sapphire", "square", "three", "tron",
];

/// Further forward words.
pub const FORWARDS_WORDS_EXTRA: [&str; 5] = ["anime", "dose", "erie", "sore", "crete"];

/// Words that read backwards.
pub const BACKWARDS_WORDS: [&str; 12] = [
    "dirt", "state", "lilac", "north", "peak", "rail", "three", "twelve", "walk", "water", "west", "zero",
];

/// Further backward words.
pub const BACKWARDS_WORDS_EXTRA: [&str; 4] = ["coke", "erie", "ohio", "yeoman"];

/// Anagrammed fragments of the secret message, all read left to right in [`GRID`].
pub const SECRET_MESSAGE_WORDS: [&str; 21] = [
    "reteh", "rea", "ucsifevle", "ni", "ihst", "cehsrardwo", "oubtd", "oeltlnt", "nyneoa", "ahreeret", "on",
    "lpasiec", "esdbn", "or", "sr", "ntu", "rniema", "adtteyos", "mtoplece", "het", "nsiosmi",
];

/// The secret message as it reads in [`UNSCRAMBLED_GRID`], split where it crosses other words.
pub const UNSCRAMBLED_SECRET_MESSAGE_WORDS: [&str; 30] = [
    "there", "are", "five", "clues", "in", "this", "wordsearch", "but", "do", "not", "tell", "anyone", "line",
    "them", "up", "there", "are", "no", "special", "bends", "or", "tu", "rns", "just", "remain", "steady", "to",
    "complete", "the", "mission",
];

/// The shipped word list of `category`.
pub fn words(category: Category) -> &'static [&'static str] {
    match category {
        Category::Forwards => &FORWARDS_WORDS,
        Category::ForwardsExtra => &FORWARDS_WORDS_EXTRA,
        Category::Backwards => &BACKWARDS_WORDS,
        Category::BackwardsExtra => &BACKWARDS_WORDS_EXTRA,
        Category::SecretMessage => &SECRET_MESSAGE_WORDS,
        Category::UnscrambledSecretMessage => &UNSCRAMBLED_SECRET_MESSAGE_WORDS,
    }
}

/// The puzzle grid.
pub fn grid() -> Grid {
    Grid::from_rows(GRID).expect("shipped grid is rectangular")
}

/// The unscrambled grid.
pub fn unscrambled_grid() -> Grid {
    Grid::from_rows(UNSCRAMBLED_GRID).expect("shipped unscrambled grid is rectangular")
}

/// The puzzle's substitution key.
pub fn cryptogram_key() -> Key {
    CRYPTOGRAM_KEY.parse().expect("shipped key is well formed")
}
