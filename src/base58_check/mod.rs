//! Base58 with a trailing four byte double SHA-256 checksum, as used by
//! Bitcoin addresses and keys.

mod checksum;
pub mod decode;
pub mod encode;

pub use crate::base58::ALPHABET;
pub use decode::decode;
pub use encode::encode;

use checksum::{compute_checksum, CHECKSUM_LENGTH};
