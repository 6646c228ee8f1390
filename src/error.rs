use std::{error, fmt};

/// Message-carrying error for the service layer, where library errors are
/// reported back to clients as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl error::Error for Error {}

macro_rules! impl_from {
    ( $( $source:ty ),* ) => {
        $(
            impl From<$source> for Error {
                fn from(error: $source) -> Self {
                    Self::new(error.to_string())
                }
            }
        )*
    };
}

impl_from!(
    crate::alphabet::Error,
    crate::transform::Error,
    crate::codec::decode::Error,
    crate::base58_check::decode::Error
);
