pub mod decode;
pub mod encode;

pub use crate::alphabet::BASE58_BITCOIN as ALPHABET;
pub use decode::decode;
pub use encode::encode;
