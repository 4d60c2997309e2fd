use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;

use crate::grid::Grid;

/// The letters a key assigns cipher letters to, in key order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Marks a letter the key leaves unmapped.
pub const UNMAPPED: char = '?';

/// Reasons a substitution key could not be read.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KeyError {
    /// Keys hold exactly one entry per letter of [`ALPHABET`].
    WrongLength(usize),
    /// Entries must be letters or [`UNMAPPED`].
    BadCharacter(char),
}

impl Display for KeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongLength(found) => write!(f, "key has {} entries, expected {}", found, ALPHABET.len()),
            Self::BadCharacter(c) => write!(f, "key entry {:?} is neither a letter nor {:?}", c, UNMAPPED),
        }
    }
}

impl std::error::Error for KeyError {}

/// A substitution key: entry `i` is the cipher letter for the `i`th letter of [`ALPHABET`], or [`UNMAPPED`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Key {
    entries: Vec<char>,
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries = s.chars().map(|c| c.to_ascii_uppercase()).collect_vec();
        if entries.len() != ALPHABET.len() {
            return Err(KeyError::WrongLength(entries.len()));
        }
        if let Some(bad) = entries.iter().find(|c| !c.is_ascii_uppercase() && **c != UNMAPPED) {
            return Err(KeyError::BadCharacter(*bad));
        }

        Ok(Self { entries })
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.entries.iter().collect::<String>())
    }
}

impl Key {
    /// Plain letter to cipher letter. Unmapped letters map to [`UNMAPPED`].
    pub fn encode_mapping(&self) -> HashMap<char, char> {
        ALPHABET.chars().zip(self.entries.iter().copied()).collect()
    }

    /// Cipher letter to plain letter, for mapped entries only.
    pub fn decode_mapping(&self) -> HashMap<char, char> {
        ALPHABET.chars()
            .zip(self.entries.iter().copied())
            .filter(|(_, cipher)| *cipher != UNMAPPED)
            .map(|(plain, cipher)| (cipher, plain))
            .collect()
    }
}

/// Which way a [`Cryptogram`] substitutes letters.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CryptogramMode {
    /// Replace each letter with its cipher letter.
    Encode,
    /// Replace each cipher letter with the letter it stands for.
    Decode,
}

/// A substitution view of a grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cryptogram {
    /// The substitution key.
    pub key: Key,
    /// Direction of substitution.
    pub mode: CryptogramMode,
}

impl Cryptogram {
    /// Construct a view of `key` substituting in `mode`.
    pub fn new(key: Key, mode: CryptogramMode) -> Self {
        Self { key, mode }
    }

    /// The letter mapping used by this view.
    pub fn mapping(&self) -> HashMap<char, char> {
        match self.mode {
            CryptogramMode::Encode => self.key.encode_mapping(),
            CryptogramMode::Decode => self.key.decode_mapping(),
        }
    }

    /// A new grid with every cell substituted; letters with no mapping are left alone.
    pub fn apply(&self, grid: &Grid) -> Grid {
        let mapping = self.mapping();
        grid.map_letters(|letter| mapping.get(&letter).copied().unwrap_or(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::{Cryptogram, CryptogramMode, Key, KeyError};
    use crate::grid::Grid;

    const KEY: &str = "LGUWV??ROB?TPYHSDIMFCA?ENK";

    #[test]
    fn key_validation() {
        assert!(KEY.parse::<Key>().is_ok());
        assert_eq!("ABC".parse::<Key>(), Err(KeyError::WrongLength(3)));
        assert_eq!("LGUWV??ROB?TPYHSDIMFCA?EN1".parse::<Key>(), Err(KeyError::BadCharacter('1')));
        assert_eq!(KEY.to_lowercase().parse::<Key>().unwrap().to_string(), KEY);
    }

    #[test]
    fn mappings() {
        let key: Key = KEY.parse().unwrap();
        let encode = key.encode_mapping();
        assert_eq!(encode[&'A'], 'L');
        assert_eq!(encode[&'F'], '?');
        assert_eq!(encode.len(), 26);

        let decode = key.decode_mapping();
        assert_eq!(decode[&'L'], 'A');
        assert_eq!(decode.get(&'?'), None);
        assert_eq!(decode.len(), 22);
    }

    #[test]
    fn encode_then_decode_restores_mapped_letters() {
        let key: Key = KEY.parse().unwrap();
        let grid = Grid::from_rows(["ABC", "XYZ"]).unwrap();

        let encoded = Cryptogram::new(key.clone(), CryptogramMode::Encode).apply(&grid);
        assert_eq!(format!("{}", encoded), "LGU\nENK\n");

        let decoded = Cryptogram::new(key, CryptogramMode::Decode).apply(&encoded);
        assert_eq!(decoded, grid);
    }

    #[test]
    fn unmapped_letters() {
        let key: Key = KEY.parse().unwrap();
        let grid = Grid::from_rows(["FJ"]).unwrap();

        let encoded = Cryptogram::new(key.clone(), CryptogramMode::Encode).apply(&grid);
        assert_eq!(format!("{}", encoded), "?B\n");

        // 'J' is never a cipher letter, so decoding keeps it
        let decoded = Cryptogram::new(key, CryptogramMode::Decode).apply(&grid);
        assert_eq!(format!("{}", decoded), "TJ\n");
    }
}
