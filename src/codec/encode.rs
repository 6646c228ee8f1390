use super::Alphabet;
use crate::transform;

pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        // bytes are always valid base 256 digits and the radix of an alphabet is always a valid base
        let digits = transform::encode(input, self.alphabet.radix()).expect("Could not transform bytes");
        digits.into_iter().map(|value| self.alphabet.encode(value)).collect()
    }
}

pub fn encode(input: impl AsRef<[u8]>, alphabet: &Alphabet) -> String {
    Encoder::new(alphabet).encode(input)
}
