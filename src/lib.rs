//! Conversion of byte strings between arbitrary radixes and symbol alphabets.
//!
//! [`transform()`] reinterprets big-endian digits of one base as digits of
//! another, keeping leading zeros. [`codec`] maps the digits to the symbols
//! of an [`alphabet::Alphabet`]. [`hex`], [`base58`] and [`base58_check`] bind
//! the codec to well known alphabets.

pub mod alphabet;
pub mod base58;
pub mod base58_check;
pub mod chronometer;
pub mod codec;
pub mod configuration;
pub mod create_server;
pub mod error;
pub mod executor;
pub mod hex;
pub mod logger;
pub mod server;
pub mod state;
pub mod transform;

pub use alphabet::Alphabet;
pub use codec::{decode as decode_with_alphabet, encode as encode_with_alphabet};
pub use transform::transform;
