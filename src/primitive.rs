//! The closed set of fixed-width values a decoder can extract.

use zerocopy::{FromBytes, IntoBytes};

mod sealed {
    pub trait Sealed {}
}

/// A numeric type whose encoded width is known at compile time.
///
/// This trait is sealed: it is implemented for the 8 to 64-bit integers and
/// the two IEEE-754 floats, and cannot be implemented outside this crate.
pub trait Primitive: sealed::Sealed + Copy + Default {
    /// The encoded bytes of this type.
    type Bytes: FromBytes + IntoBytes;

    /// The number of bytes this type occupies when encoded.
    const WIDTH: usize = size_of::<Self::Bytes>();

    /// Reassemble a value from its encoded bytes.
    fn from_bytes(r: Self::Bytes, is_le: bool) -> Self;
}

macro_rules! primitive {
    ($($t:ident),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Primitive for $t {
                type Bytes = [u8; size_of::<$t>()];

                fn from_bytes(r: Self::Bytes, is_le: bool) -> Self {
                    if is_le {
                        $t::from_le_bytes(r)
                    } else {
                        $t::from_be_bytes(r)
                    }
                }
            }
        )*
    };
}

primitive!(u8, u16, u32, u64);
primitive!(i8, i16, i32, i64);
primitive!(f32, f64);
