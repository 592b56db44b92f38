//! Runtime half of enkodo: the codec primitives that generated `Marshal` / `Unmarshal` impls call.
//!
//! The wire format is positional and carries no field tags, so a record must be decoded with the
//! exact field order it was encoded with. Every value is little-endian:
//!
//! - `uint` / `int` (`usize` / `isize`) are widened to 8 bytes.
//! - `string` and `bytes` are a `uint` length prefix followed by the raw bytes.
//! - `bool` is a single `0` or `1` byte.
//!
//! Implementations are normally generated, either inline with [`Enkodo`] or offline with the
//! `enkodo` command line tool and [`Schema`].

mod decoder;
mod encoder;
mod error;
mod marshal;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use enkodo_derive::{
    Enkodo,
    Schema,
};
pub use error::DecodeError;
pub use marshal::{
    Marshal,
    Unmarshal,
};

/// Everything generated code refers to by its short name.
pub mod prelude {
    pub use crate::{
        DecodeError,
        Decoder,
        Encoder,
        Marshal,
        Unmarshal,
    };
}

/// Encodes `value` into a freshly allocated buffer.
pub fn marshal<T: Marshal + ?Sized>(value: &T) -> Vec<u8> {
    let mut enc = Encoder::new();
    enc.encode(value);
    enc.into_bytes()
}

/// Decodes `src` into `value`. Trailing bytes are ignored.
///
/// On error `value` may be partially populated and should be discarded.
pub fn unmarshal<T: Unmarshal + ?Sized>(src: &[u8], value: &mut T) -> Result<(), DecodeError> {
    Decoder::new(src).decode(value)
}
