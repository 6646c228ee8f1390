use super::Alphabet;
use crate::{alphabet, transform};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    UnknownSymbol { symbol: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSymbol { symbol, index } => write!(f, "Unknown symbol '{}' at index {}", symbol, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::UnknownSymbol { symbol, index } => Error::UnknownSymbol { symbol, index },
        }
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn decode(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        let digits = input
            .as_ref()
            .chars()
            .enumerate()
            .map(|(index, symbol)| self.alphabet.decode(symbol, index))
            .collect::<Result<Vec<u8>, _>>()?;
        // every digit comes from the decode table, so it is lower than the radix
        Ok(transform::decode(digits, self.alphabet.radix()).expect("Could not transform digits"))
    }
}

pub fn decode(input: impl AsRef<str>, alphabet: &Alphabet) -> Result<Vec<u8>, Error> {
    Decoder::new(alphabet).decode(input)
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::alphabet::DNA;

    #[test]
    fn decode() {
        assert_eq!(super::decode("", &DNA), Ok(vec![]));
        assert_eq!(super::decode("TCG", &DNA), Ok(vec![0x1b]));
        assert_eq!(super::decode("AATCG", &DNA), Ok(vec![0x00, 0x00, 0x1b]));
        assert_eq!(super::decode("AAAA", &DNA), Ok(vec![0x00, 0x00, 0x00, 0x00]));
    }

    #[test]
    fn unknown_symbol() {
        assert_eq!(super::decode("ATXG", &DNA), Err(Error::UnknownSymbol { symbol: 'X', index: 2 }));
        assert_eq!(super::decode("atcg", &DNA), Err(Error::UnknownSymbol { symbol: 'a', index: 0 }));
    }
}
