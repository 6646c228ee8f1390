pub mod predefined;

use std::{collections::HashMap, error, fmt};

pub use predefined::{by_name, BASE32, BASE32_HEX, BASE58_BITCOIN, BASE64, BASE64_URL, DNA, HEX, HEX_CAPITAL};

pub const MIN_LENGTH: usize = 2;
pub const MAX_LENGTH: usize = 256;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidLength { length: usize },
    DuplicateSymbol { symbol: char, first: usize, second: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    UnknownSymbol { symbol: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { length } => write!(
                f,
                "Invalid alphabet length {} (expected between {} and {})",
                length, MIN_LENGTH, MAX_LENGTH
            ),
            Self::DuplicateSymbol { symbol, first, second } => {
                write!(f, "Duplicate symbol '{}' at indexes {} and {}", symbol, first, second)
            }
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol { symbol, index } => write!(f, "Unknown symbol '{}' at index {}", symbol, index),
        }
    }
}

/// An ordered set of symbols. The position of a symbol is its digit value,
/// and the number of symbols is the radix.
///
/// Duplicate symbols are accepted by [`Alphabet::new`]: the decode table then
/// keeps the last position of the symbol and encoding stops being invertible.
/// Use [`Alphabet::new_unique`] to reject them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    encode: Vec<char>,
    decode: HashMap<char, u8>,
}

impl Alphabet {
    pub fn new(charset: &str) -> Result<Self, Error> {
        Self::from_symbols(charset.chars())
    }

    pub fn from_symbols(symbols: impl IntoIterator<Item = char>) -> Result<Self, Error> {
        let encode: Vec<char> = symbols.into_iter().collect();
        if encode.len() < MIN_LENGTH || encode.len() > MAX_LENGTH {
            return Err(Error::InvalidLength { length: encode.len() });
        }
        let mut decode = HashMap::with_capacity(encode.len());
        for (index, &symbol) in encode.iter().enumerate() {
            // index < 256 is guaranteed by the length check above
            decode.insert(symbol, index as u8);
        }
        Ok(Self { encode, decode })
    }

    pub fn new_unique(charset: &str) -> Result<Self, Error> {
        let alphabet = Self::new(charset)?;
        match alphabet.duplicate() {
            Some((symbol, first, second)) => Err(Error::DuplicateSymbol { symbol, first, second }),
            None => Ok(alphabet),
        }
    }

    /// Returns the first symbol that appears twice, with both positions.
    pub fn duplicate(&self) -> Option<(char, usize, usize)> {
        if self.decode.len() == self.encode.len() {
            return None;
        }
        let mut seen: HashMap<char, usize> = HashMap::with_capacity(self.encode.len());
        for (index, &symbol) in self.encode.iter().enumerate() {
            if let Some(&first) = seen.get(&symbol) {
                return Some((symbol, first, index));
            }
            seen.insert(symbol, index);
        }
        None
    }

    pub fn encode(&self, value: u8) -> char {
        self.encode[value as usize]
    }

    pub fn decode(&self, symbol: char, index: usize) -> Result<u8, DecodeError> {
        match self.decode.get(&symbol) {
            Some(&value) => Ok(value),
            None => Err(DecodeError::UnknownSymbol { symbol, index }),
        }
    }

    pub fn radix(&self) -> usize {
        self.encode.len()
    }

    pub fn symbols(&self) -> &[char] {
        &self.encode
    }

    pub fn charset(&self) -> String {
        self.encode.iter().collect()
    }
}
