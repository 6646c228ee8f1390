//! Maps raw bytes to symbol strings of an arbitrary [`Alphabet`] and back,
//! using the radix conversion in [`crate::transform`].

pub mod decode;
pub mod encode;

pub use crate::alphabet::Alphabet;
pub use decode::{decode, Decoder};
pub use encode::{encode, Encoder};

#[cfg(test)]
mod tests {
    use super::{decode, encode, Alphabet};
    use crate::alphabet::predefined;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn round_trip() {
        let mut rng = StdRng::seed_from_u64(1);
        for (name, alphabet) in predefined::all() {
            for len in 0..100 {
                let mut input = vec![0u8; len];
                rng.fill(&mut input[..]);
                let encoded = encode(&input, alphabet);
                assert_eq!(decode(&encoded, alphabet), Ok(input), "{}", name);
            }
        }
    }

    #[test]
    fn custom_alphabet() {
        let alphabet = Alphabet::new("ABCD1234").unwrap();
        let encoded = encode(b"Hello World", &alphabet);
        assert!(encoded.chars().all(|symbol| "ABCD1234".contains(symbol)));
        assert_eq!(decode(&encoded, &alphabet), Ok(b"Hello World".to_vec()));
    }
}
