use super::{compute_checksum, CHECKSUM_LENGTH};
use crate::base58;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    UnknownSymbol {
        symbol: char,
        index: usize,
    },
    InvalidChecksum {
        checksum: [u8; CHECKSUM_LENGTH],
        expected_checksum: [u8; CHECKSUM_LENGTH],
    },
    NoChecksum,
}

impl From<base58::decode::Error> for Error {
    fn from(error: base58::decode::Error) -> Self {
        match error {
            base58::decode::Error::UnknownSymbol { symbol, index } => Error::UnknownSymbol { symbol, index },
        }
    }
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSymbol { symbol, index } => write!(f, "Unknown symbol '{}' at index {}", symbol, index),
            Error::InvalidChecksum {
                checksum,
                expected_checksum,
            } => write!(
                f,
                "Invalid checksum '{}' ({} expected)",
                HexSlice::new(checksum),
                HexSlice::new(expected_checksum)
            ),
            Error::NoChecksum => write!(f, "Missing checksum"),
        }
    }
}

struct HexSlice<'a> {
    buffer: &'a [u8],
}

impl<'a> HexSlice<'a> {
    fn new(buffer: &'a impl AsRef<[u8]>) -> HexSlice<'a> {
        HexSlice { buffer: buffer.as_ref() }
    }
}

impl fmt::Display for HexSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.buffer {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

fn split_checksum(buffer: &[u8]) -> Result<(&[u8], [u8; CHECKSUM_LENGTH]), Error> {
    if buffer.len() < CHECKSUM_LENGTH {
        return Err(Error::NoChecksum);
    }
    let (payload, tail) = buffer.split_at(buffer.len() - CHECKSUM_LENGTH);
    let mut checksum = [0u8; CHECKSUM_LENGTH];
    checksum.copy_from_slice(tail);
    Ok((payload, checksum))
}

pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    let mut output = base58::decode(input)?;
    let (payload, checksum) = split_checksum(&output)?;
    let expected_checksum = compute_checksum(payload);
    if checksum != expected_checksum {
        return Err(Error::InvalidChecksum {
            checksum,
            expected_checksum,
        });
    }
    output.truncate(output.len() - CHECKSUM_LENGTH);
    Ok(output)
}
