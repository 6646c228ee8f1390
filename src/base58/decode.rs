use super::ALPHABET;
use crate::codec;

pub use crate::codec::decode::Error;

pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    codec::decode(input, &ALPHABET)
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(super::decode("2g"), Ok(b"a".to_vec()));
        assert_eq!(super::decode("a3gV"), Ok(b"bbb".to_vec()));
        assert_eq!(super::decode("2NEpo7TZRRrLZSi2U"), Ok(b"Hello World!".to_vec()));
        assert_eq!(
            super::decode("USm3fpXnKG5EUBx2ndxBDMPVciP5hGey2Jh4NDv6gmeo1LkMeiKrLJUUBk6Z"),
            Ok(b"The quick brown fox jumps over the lazy dog.".to_vec())
        );
        assert_eq!(super::decode("111233QC4"), Ok(b"\x00\x00\x00(\x7f\xb4\xcd".to_vec()));
        assert_eq!(
            super::decode("3SEo3LWLoPntC"),
            Ok(vec![0xbf, 0x4f, 0x89, 0x00, 0x1e, 0x67, 0x02, 0x74, 0xdd]),
        );
        assert_eq!(
            super::decode("EJDM8drfXA6uyA"),
            Ok(vec![0xec, 0xac, 0x89, 0xca, 0xd9, 0x39, 0x23, 0xc0, 0x23, 0x21]),
        );
        assert_eq!(super::decode("1111111111"), Ok(vec![0x00; 10]));
    }

    #[test]
    fn invalid_symbol() {
        assert_eq!(super::decode("0OIl"), Err(Error::UnknownSymbol { symbol: '0', index: 0 }));
        assert_eq!(super::decode("2gI"), Err(Error::UnknownSymbol { symbol: 'I', index: 2 }));
    }
}
