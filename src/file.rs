use crate::error::Error;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Describe a file (column) on a chess board
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

/// How many files are there?
pub const NUM_FILES: usize = 8;

/// Enumerate all files
pub const ALL_FILES: [File; NUM_FILES] = [
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
];

impl File {
    /// Convert a `usize` into a `File` (the inverse of to_index).  If i > 7, wrap around.
    #[inline]
    pub fn from_index(i: usize) -> File {
        ALL_FILES[i & 7]
    }

    /// Convert this `File` into a `usize` from 0 to 7 inclusive.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// Parse the letter of a square label.
    pub fn from_char(c: char) -> Option<File> {
        match c {
            'a'..='h' => Some(File::from_index(c as usize - 'a' as usize)),
            _ => None,
        }
    }

    /// The lowercase letter used in square labels.
    #[inline]
    pub fn to_char(&self) -> char {
        (b'a' + *self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for File {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next().and_then(File::from_char), chars.next()) {
            (Some(file), None) => Ok(file),
            _ => Err(Error::InvalidNotation {
                notation: s.to_string(),
            }),
        }
    }
}

#[test]
fn file_letters() {
    assert_eq!(File::from_char('a'), Some(File::A));
    assert_eq!(File::from_char('h'), Some(File::H));
    assert_eq!(File::from_char('i'), None);
    assert_eq!(File::from_char('A'), None);
    assert_eq!(File::E.to_char(), 'e');
    assert_eq!("c".parse::<File>(), Ok(File::C));
    assert!("cc".parse::<File>().is_err());
}
