use crate::{
    DecodeError,
    Unmarshal,
};

/// Reads little-endian fixed-width values from a borrowed buffer, front to back.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    src: &'a [u8],
}

/// Generates one fallible read method per fixed-width codec op.
macro_rules! impl_take_le {
    ($($op:ident: $ty:ty),* $(,)?) => {
        $(
            #[inline(always)]
            pub fn $op(&mut self) -> Result<$ty, DecodeError> {
                Ok(<$ty>::from_le_bytes(self.take_array()?))
            }
        )*
    };
}

impl<'a> Decoder<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self { src }
    }

    /// The bytes not consumed yet.
    pub fn remaining(&self) -> &'a [u8] {
        self.src
    }

    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if self.src.len() < len {
            return Err(DecodeError::UnexpectedEof {
                needed: len,
                remaining: self.src.len(),
            });
        }
        let (head, tail) = self.src.split_at(len);
        self.src = tail;
        Ok(head)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.take(N)?);
        Ok(array)
    }

    impl_take_le! {
        uint8: u8,
        uint16: u16,
        uint32: u32,
        uint64: u64,
        int8: i8,
        int16: i16,
        int32: i32,
        int64: i64,
        float32: f32,
        float64: f64,
    }

    /// Machine-width unsigned integer, read from 8 bytes.
    pub fn uint(&mut self) -> Result<usize, DecodeError> {
        let value = self.uint64()?;
        usize::try_from(value).map_err(|_| DecodeError::LengthOverflow(value))
    }

    /// Machine-width signed integer, read from 8 bytes.
    pub fn int(&mut self) -> Result<isize, DecodeError> {
        let value = self.int64()?;
        isize::try_from(value).map_err(|_| DecodeError::LengthOverflow(value as u64))
    }

    /// A list length prefix. Every list element occupies at least one byte, so a prefix larger than
    /// the unread input is rejected before anything is reserved for it.
    pub fn length(&mut self) -> Result<usize, DecodeError> {
        let len = self.uint()?;
        if len > self.src.len() {
            return Err(DecodeError::UnexpectedEof {
                needed: len,
                remaining: self.src.len(),
            });
        }

        Ok(len)
    }

    pub fn bool(&mut self) -> Result<bool, DecodeError> {
        match self.uint8()? {
            0 => Ok(false),
            1 => Ok(true),
            byte => Err(DecodeError::InvalidBool(byte)),
        }
    }

    pub fn string(&mut self) -> Result<String, DecodeError> {
        Ok(String::from_utf8(self.bytes()?)?)
    }

    /// A length-prefixed byte block, read as one unit.
    pub fn bytes(&mut self) -> Result<Vec<u8>, DecodeError> {
        let len = self.uint()?;
        Ok(self.take(len)?.to_vec())
    }

    /// Delegates to the value's own [`Unmarshal`] impl.
    pub fn decode<T: Unmarshal + ?Sized>(&mut self, value: &mut T) -> Result<(), DecodeError> {
        value.unmarshal_enkodo(self)
    }
}
