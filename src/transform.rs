use std::{error, fmt};

pub const MIN_BASE: usize = 2;
pub const MAX_BASE: usize = 256;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    InvalidBase { base: usize },
    InvalidDigit { digit: u8, index: usize, base: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBase { base } => write!(f, "Invalid base {} (expected between {} and {})", base, MIN_BASE, MAX_BASE),
            Error::InvalidDigit { digit, index, base } => write!(f, "Invalid digit {} at index {} for base {}", digit, index, base),
        }
    }
}

fn check_base(base: usize) -> Result<(), Error> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(Error::InvalidBase { base })
    }
}

/// Upper bound on the number of `base_to` digits needed for `len` significant
/// `base_from` digits. The trailing `+ 1` absorbs rounding in the logarithm
/// ratio and must stay: the digit buffer is never grown.
fn capacity(len: usize, base_from: usize, base_to: usize) -> usize {
    let factor = (base_from as f64).ln() / (base_to as f64).ln();
    (len as f64 * factor).ceil() as usize + 1
}

/// Converts big-endian digits in `base_from` to big-endian digits in
/// `base_to`.
///
/// Every leading zero digit of the input becomes exactly one leading zero
/// digit of the output; the rest of the output is the minimal representation
/// of the remaining value. Both bases must lie in `2..=256`, and every input
/// digit must be lower than `base_from`.
pub fn transform(input: impl AsRef<[u8]>, base_from: usize, base_to: usize) -> Result<Vec<u8>, Error> {
    check_base(base_from)?;
    check_base(base_to)?;

    let input = input.as_ref();
    let zeros = input.iter().take_while(|&&digit| digit == 0).count();

    let mut output = vec![0u8; capacity(input.len() - zeros, base_from, base_to)];
    // index of the most significant populated digit
    let mut start = output.len();

    for (index, &digit) in input.iter().enumerate().skip(zeros) {
        if digit as usize >= base_from {
            return Err(Error::InvalidDigit {
                digit,
                index,
                base: base_from,
            });
        }
        let mut carry = digit as usize;
        let mut position = output.len();
        while position > start || carry != 0 {
            position -= 1;
            carry += (output[position] as usize) * base_from;
            output[position] = (carry % base_to) as u8;
            carry /= base_to;
        }
        start = position;
    }

    let mut result = vec![0u8; zeros];
    result.extend_from_slice(&output[start..]);
    Ok(result)
}

/// Converts raw bytes (base 256 digits) to digits in `base_to`.
pub fn encode(input: impl AsRef<[u8]>, base_to: usize) -> Result<Vec<u8>, Error> {
    transform(input, 256, base_to)
}

/// Converts digits in `base_from` back to raw bytes.
pub fn decode(input: impl AsRef<[u8]>, base_from: usize) -> Result<Vec<u8>, Error> {
    transform(input, base_from, 256)
}
