//! Fixed-layout records composed of primitives.
//!
//! [`Decode`] is implemented for every [`Primitive`](crate::Primitive), for
//! arrays of decodable values, and can be derived for structs with
//! [`Decode`](macro@crate::Decode).

use crate::{Decoder, source::Source};

/// A value decoded field by field from a fixed number of bytes.
pub trait Decode: Sized {
    /// Decode a value, returning `None` if the source runs out.
    ///
    /// Fields decoded before the source ran out stay consumed.
    fn decode<S: Source>(d: &mut Decoder<S>) -> Option<Self>;
}

macro_rules! decode_primitive {
    ($($t:ident),*) => {
        $(
            impl Decode for $t {
                fn decode<S: Source>(d: &mut Decoder<S>) -> Option<Self> {
                    d.extract()
                }
            }
        )*
    };
}

decode_primitive!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl<T: Decode + Default, const N: usize> Decode for [T; N] {
    fn decode<S: Source>(d: &mut Decoder<S>) -> Option<Self> {
        let mut exhausted = false;

        // Stop reading at the first element the source cannot fill.
        let r = core::array::from_fn(|_| {
            if !exhausted {
                match T::decode(d) {
                    Some(value) => return value,
                    None => exhausted = true,
                }
            }
            T::default()
        });

        (!exhausted).then_some(r)
    }
}
