//! Hexadecimal through the generic radix conversion.
//!
//! The output is the numeric base 16 value of the input, so a byte below 0x10
//! that is not a leading zero contributes a single digit: `[0x0f]` encodes to
//! `"f"` and `[0x00, 0x0f]` to `"0f"`. Decoding inverts this exactly.

use crate::alphabet::HEX;
use crate::codec;

pub use crate::codec::decode::Error;

/// Encodes using lower case letters.
pub fn encode(input: impl AsRef<[u8]>) -> String {
    codec::encode(input, &HEX)
}

/// Accepts both letter cases. Only ASCII letters are folded, so error indexes
/// match the positions in `input`.
pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    let input: String = input.as_ref().chars().map(|character| character.to_ascii_lowercase()).collect();
    codec::decode(input, &HEX)
}

#[cfg(test)]
mod tests {
    use super::Error;

    const RFC_4648: [(&str, &str); 7] = [
        ("", ""),
        ("f", "66"),
        ("fo", "666f"),
        ("foo", "666f6f"),
        ("foob", "666f6f62"),
        ("fooba", "666f6f6261"),
        ("foobar", "666f6f626172"),
    ];

    #[test]
    fn encode() {
        for (input, output) in RFC_4648 {
            assert_eq!(super::encode(input), output);
        }
        assert_eq!(super::encode(b"Hello world"), "48656c6c6f20776f726c64");
    }

    #[test]
    fn decode() {
        for (output, input) in RFC_4648 {
            assert_eq!(super::decode(input), Ok(output.as_bytes().to_vec()));
        }
        assert_eq!(
            super::decode("48656C6c6F20776f726C64"),
            Ok(vec![0x48, 0x65, 0x6c, 0x6c, 0x6f, 0x20, 0x77, 0x6f, 0x72, 0x6c, 0x64])
        );
        assert_eq!(super::decode("66g6"), Err(Error::UnknownSymbol { symbol: 'g', index: 2 }));
    }

    #[test]
    fn decode_non_ascii() {
        assert_eq!(super::decode("6İ6"), Err(Error::UnknownSymbol { symbol: 'İ', index: 1 }));
        assert_eq!(super::decode("İ6G"), Err(Error::UnknownSymbol { symbol: 'İ', index: 0 }));
        assert_eq!(super::decode("6ıG"), Err(Error::UnknownSymbol { symbol: 'ı', index: 1 }));
    }

    #[test]
    fn small_bytes() {
        assert_eq!(super::encode([0x0f]), "f");
        assert_eq!(super::encode([0x00, 0x0f]), "0f");
        assert_eq!(super::encode([0x00, 0x00]), "00");
        assert_eq!(super::decode("f"), Ok(vec![0x0f]));
        assert_eq!(super::decode("0f"), Ok(vec![0x00, 0x0f]));
    }
}
