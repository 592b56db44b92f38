use crate::Marshal;

/// Appends little-endian fixed-width values to a growable buffer.
#[derive(Debug, Default, Clone)]
pub struct Encoder {
    buf: Vec<u8>,
}

/// Generates one infallible write method per fixed-width codec op.
macro_rules! impl_put_le {
    ($($op:ident: $ty:ty),* $(,)?) => {
        $(
            #[inline(always)]
            pub fn $op(&mut self, value: $ty) {
                self.buf.extend_from_slice(&value.to_le_bytes());
            }
        )*
    };
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    impl_put_le! {
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

    /// Machine-width unsigned integer, always written as 8 bytes.
    #[inline(always)]
    pub fn uint(&mut self, value: usize) {
        self.uint64(value as u64);
    }

    /// Machine-width signed integer, always written as 8 bytes.
    #[inline(always)]
    pub fn int(&mut self, value: isize) {
        self.int64(value as i64);
    }

    #[inline(always)]
    pub fn bool(&mut self, value: bool) {
        self.buf.push(value as u8);
    }

    pub fn string(&mut self, value: &str) {
        self.bytes(value.as_bytes());
    }

    /// A length-prefixed byte block, written as one unit.
    pub fn bytes(&mut self, value: &[u8]) {
        self.uint(value.len());
        self.buf.extend_from_slice(value);
    }

    /// Delegates to the value's own [`Marshal`] impl.
    pub fn encode<T: Marshal + ?Sized>(&mut self, value: &T) {
        value.marshal_enkodo(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_width_values_are_little_endian() {
        let mut enc = Encoder::new();
        enc.uint16(0x0102);
        enc.int32(-2);
        enc.bool(true);

        assert_eq!(
            enc.as_bytes(),
            &[0x02, 0x01, 0xfe, 0xff, 0xff, 0xff, 0x01]
        );
    }

    #[test]
    fn machine_width_integers_take_eight_bytes() {
        let mut enc = Encoder::new();
        enc.uint(3);
        enc.int(-1);

        let bytes = enc.into_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(bytes[..8], 3u64.to_le_bytes());
        assert_eq!(bytes[8..], (-1i64).to_le_bytes());
    }

    #[test]
    fn strings_and_bytes_are_length_prefixed() {
        let mut enc = Encoder::new();
        enc.string("hi");
        enc.bytes(&[9, 8, 7]);

        let expected = [
            2u64.to_le_bytes().as_ref(),
            b"hi".as_ref(),
            3u64.to_le_bytes().as_ref(),
            [9u8, 8, 7].as_ref(),
        ]
        .concat();
        assert_eq!(enc.as_bytes(), expected.as_slice());
    }
}
