use super::Alphabet;
use once_cell::sync::Lazy;

fn build(charset: &str) -> Alphabet {
    match Alphabet::new(charset) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    }
}

pub static BASE58_BITCOIN: Lazy<Alphabet> = Lazy::new(|| build("123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz"));
pub static BASE64: Lazy<Alphabet> = Lazy::new(|| build("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/"));
pub static BASE64_URL: Lazy<Alphabet> = Lazy::new(|| build("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_"));
pub static BASE32: Lazy<Alphabet> = Lazy::new(|| build("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567"));
pub static BASE32_HEX: Lazy<Alphabet> = Lazy::new(|| build("0123456789ABCDEFGHIJKLMNOPQRSTUV"));
pub static HEX: Lazy<Alphabet> = Lazy::new(|| build("0123456789abcdef"));
pub static HEX_CAPITAL: Lazy<Alphabet> = Lazy::new(|| build("0123456789ABCDEF"));
pub static DNA: Lazy<Alphabet> = Lazy::new(|| build("ATCG"));

pub fn all() -> [(&'static str, &'static Alphabet); 8] {
    [
        ("base58", &*BASE58_BITCOIN),
        ("base64", &*BASE64),
        ("base64url", &*BASE64_URL),
        ("base32", &*BASE32),
        ("base32hex", &*BASE32_HEX),
        ("hex", &*HEX),
        ("hexcapital", &*HEX_CAPITAL),
        ("dna", &*DNA),
    ]
}

pub fn by_name(name: &str) -> Option<&'static Alphabet> {
    all().into_iter().find(|(candidate, _)| *candidate == name).map(|(_, alphabet)| alphabet)
}
