use thiserror::Error;

/// A primitive decode operation failed. Decoding stops at the first failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    #[error("invalid bool byte {0:#04x}")]
    InvalidBool(u8),

    #[error("string is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("value {0} does not fit in this platform's word size")]
    LengthOverflow(u64),
}
