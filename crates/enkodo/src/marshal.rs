use crate::{
    DecodeError,
    Decoder,
    Encoder,
};

/// Writes `self` into an [`Encoder`] in positional field order.
///
/// Encoding never fails at this layer; the buffer grows as needed.
pub trait Marshal {
    fn marshal_enkodo(&self, enc: &mut Encoder);
}

/// Populates `self` from a [`Decoder`], reading fields in the order [`Marshal`] wrote them.
///
/// Decoding stops at the first failing field. On error `self` is left partially populated and must
/// be treated as undefined.
pub trait Unmarshal {
    fn unmarshal_enkodo(&mut self, dec: &mut Decoder<'_>) -> Result<(), DecodeError>;
}

/// Implements [`Marshal`] and [`Unmarshal`] for a primitive by forwarding to its codec op, so that
/// `Box<u32>` and friends can be delegated to like any generated record.
macro_rules! impl_marshal_primitive {
    ($ty:ty, $op:ident) => {
        impl Marshal for $ty {
            #[inline(always)]
            fn marshal_enkodo(&self, enc: &mut Encoder) {
                enc.$op(*self);
            }
        }

        impl Unmarshal for $ty {
            #[inline(always)]
            fn unmarshal_enkodo(&mut self, dec: &mut Decoder<'_>) -> Result<(), DecodeError> {
                *self = dec.$op()?;
                Ok(())
            }
        }
    };
}

impl_marshal_primitive!(usize, uint);
impl_marshal_primitive!(u8, uint8);
impl_marshal_primitive!(u16, uint16);
impl_marshal_primitive!(u32, uint32);
impl_marshal_primitive!(u64, uint64);
impl_marshal_primitive!(isize, int);
impl_marshal_primitive!(i8, int8);
impl_marshal_primitive!(i16, int16);
impl_marshal_primitive!(i32, int32);
impl_marshal_primitive!(i64, int64);
impl_marshal_primitive!(f32, float32);
impl_marshal_primitive!(f64, float64);
impl_marshal_primitive!(bool, bool);

impl Marshal for String {
    fn marshal_enkodo(&self, enc: &mut Encoder) {
        enc.string(self);
    }
}

impl Unmarshal for String {
    fn unmarshal_enkodo(&mut self, dec: &mut Decoder<'_>) -> Result<(), DecodeError> {
        *self = dec.string()?;
        Ok(())
    }
}

impl<T: Marshal + ?Sized> Marshal for Box<T> {
    fn marshal_enkodo(&self, enc: &mut Encoder) {
        (**self).marshal_enkodo(enc);
    }
}

impl<T: Unmarshal + ?Sized> Unmarshal for Box<T> {
    fn unmarshal_enkodo(&mut self, dec: &mut Decoder<'_>) -> Result<(), DecodeError> {
        (**self).unmarshal_enkodo(dec)
    }
}
