use super::ALPHABET;
use crate::codec;

pub fn encode(input: impl AsRef<[u8]>) -> String {
    codec::encode(input, &ALPHABET)
}

#[cfg(test)]
mod tests {
    #[test]
    fn encode() {
        assert_eq!(super::encode([]), "");
        assert_eq!(super::encode("a"), "2g");
        assert_eq!(super::encode("bbb"), "a3gV");
        assert_eq!(super::encode("ccc"), "aPEr");
        assert_eq!(super::encode("simply a long string"), "2cFupjhnEsSn59qHXstmK2ffpLv2");
        assert_eq!(super::encode("Hello World!"), "2NEpo7TZRRrLZSi2U");
        assert_eq!(
            super::encode("The quick brown fox jumps over the lazy dog."),
            "USm3fpXnKG5EUBx2ndxBDMPVciP5hGey2Jh4NDv6gmeo1LkMeiKrLJUUBk6Z"
        );
        assert_eq!(super::encode([0x00, 0x00, 0x00, 0x28, 0x7f, 0xb4, 0xcd]), "111233QC4");
        assert_eq!(
            super::encode([
                0x00, 0xeb, 0x15, 0x23, 0x1d, 0xfc, 0xeb, 0x60, 0x92, 0x58, 0x86, 0xb6, 0x7d, 0x06, 0x52, 0x99, 0x92, 0x59, 0x15, 0xae,
                0xb1, 0x72, 0xc0, 0x66, 0x47,
            ]),
            "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"
        );
        assert_eq!(super::encode([0x51, 0x6b, 0x6f, 0xcd, 0x0f]), "ABnLTmg");
        assert_eq!(
            super::encode([0xbf, 0x4f, 0x89, 0x00, 0x1e, 0x67, 0x02, 0x74, 0xdd]),
            "3SEo3LWLoPntC"
        );
        assert_eq!(super::encode([0x57, 0x2e, 0x47, 0x94]), "3EFU7m");
        assert_eq!(super::encode([0x10, 0xc8, 0x51, 0x1e]), "Rt5zm");
        assert_eq!(super::encode([0x00; 10]), "1111111111");
    }
}
