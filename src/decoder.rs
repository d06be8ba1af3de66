//! Cursor-style extraction of fixed-width values.

#[cfg(feature = "std")]
use std::{
    io::{Read, Seek},
    vec,
    vec::Vec,
};

use log::trace;
use zerocopy::{FromZeros, IntoBytes};

#[cfg(feature = "std")]
use crate::source::IoSource;
use crate::{
    ByteOrder, Decode, Primitive,
    source::{PeekableSource, SeekSource, SliceSource, Source},
};

/// Extracts fixed-width values from a byte source in a fixed byte order.
///
/// Every successful extraction advances the source by exactly the width of the
/// value. When the source runs out first, the extraction returns `None` (or a
/// short count for bulk extraction). Bytes read before running out are **not**
/// returned to the source: a failed read leaves the position at or past the
/// point where it failed.
///
/// Peeking extracts a value and then returns the source to where it was, and
/// so requires a source built with [`Decoder::new`] or
/// [`Decoder::from_slice`]. Peeking through a decoder built with
/// [`Decoder::sequential`] panics.
///
/// # Example
///
/// ```
/// let mut d = Decoder::from_slice(&[12, 0, 0, 0, 13, 0], ByteOrder::LittleEndian);
///
/// assert_eq!(d.peek_i32(), Some(12));
/// assert_eq!(d.read_i32(), Some(12));
/// assert_eq!(d.read_i32(), None); // Only two bytes remained.
/// ```
#[derive(Debug)]
pub struct Decoder<S> {
    source: PeekableSource<S>,
    is_little_endian: bool,
}

impl<'a> Decoder<SliceSource<'a>> {
    /// Decode from bytes already in memory. Peeking is supported.
    pub fn from_slice(data: &'a [u8], order: ByteOrder) -> Self {
        Self::new(SliceSource::new(data), order)
    }
}

impl<S: SeekSource> Decoder<S> {
    /// Decode from a source whose position can be saved and restored. Peeking
    /// is supported.
    pub fn new(source: S, order: ByteOrder) -> Self {
        Self::with_source(PeekableSource::seekable(source), order)
    }
}

/// _Requires Cargo feature `std`._
#[cfg(feature = "std")]
impl<R: Read + Seek> Decoder<IoSource<R>> {
    /// Decode from a seekable reader, such as a file or a
    /// [`Cursor`](std::io::Cursor). Peeking is supported.
    pub fn from_seeker(r: R, order: ByteOrder) -> Self {
        Self::new(IoSource(r), order)
    }
}

/// _Requires Cargo feature `std`._
#[cfg(feature = "std")]
impl<R: Read> Decoder<IoSource<R>> {
    /// Decode from a forward-only reader, such as a socket or a pipe.
    ///
    /// **Peeking through this decoder panics.**
    pub fn from_reader(r: R, order: ByteOrder) -> Self {
        Self::sequential(IoSource(r), order)
    }
}

impl<S: Source> Decoder<S> {
    /// Decode from a forward-only source.
    ///
    /// **Peeking through this decoder panics.**
    pub fn sequential(source: S, order: ByteOrder) -> Self {
        Self::with_source(PeekableSource::sequential(source), order)
    }

    /// Decode from an already tagged source.
    pub fn with_source(source: PeekableSource<S>, order: ByteOrder) -> Self {
        Self {
            source,
            is_little_endian: order.is_little_endian(),
        }
    }

    /// Extract a value of type `T`.
    ///
    /// Returns `None` if the source holds fewer than `size_of::<T>()` bytes.
    /// The bytes that were available are consumed regardless.
    pub fn extract<T: Primitive>(&mut self) -> Option<T> {
        let mut r: T::Bytes = FromZeros::new_zeroed();
        let n = self.source.read_next(r.as_mut_bytes());

        if n < T::WIDTH {
            trace!("Source exhausted after {n} of {} bytes.", T::WIDTH);
            return None;
        }

        Some(T::from_bytes(r, self.is_little_endian))
    }

    /// Extract a value of type `T` without advancing the source.
    ///
    /// The source position is restored whether or not the extraction
    /// succeeds.
    ///
    /// # Panics
    ///
    /// Panics if the source is sequential, or if saving or restoring its
    /// position fails.
    pub fn peek_extract<T: Primitive>(&mut self) -> Option<T> {
        self.peek(|d| d.extract())
    }

    /// Extract a fixed-layout record of type `T`.
    ///
    /// Fields are read in order. Returns `None` at the first field the source
    /// cannot fill; earlier fields stay consumed.
    pub fn decode<T: Decode>(&mut self) -> Option<T> {
        T::decode(self)
    }

    /// Extract a fixed-layout record of type `T` without advancing the source.
    ///
    /// # Panics
    ///
    /// As for [`Self::peek_extract`].
    pub fn peek_decode<T: Decode>(&mut self) -> Option<T> {
        self.peek(|d| d.decode())
    }

    /// Fill `buf` with the next bytes from the source.
    ///
    /// Returns the number of bytes written. The extraction succeeded only if
    /// this equals `buf.len()`; otherwise the source is exhausted and the
    /// leading part of `buf` holds the bytes that were read.
    pub fn fill_bytes(&mut self, buf: &mut [u8]) -> usize {
        let n = self.source.read_next(buf);

        if n < buf.len() {
            trace!("Source exhausted after {n} of {} bytes.", buf.len());
        }

        n
    }

    /// Extract the next `count` bytes.
    ///
    /// Returns the bytes and `true` on success. If the source runs out first,
    /// returns the bytes that were read (fewer than `count`) and `false`.
    /// Callers needing all-or-nothing behaviour should discard the bytes on
    /// failure.
    ///
    /// _Requires Cargo feature `std`._
    #[cfg(feature = "std")]
    pub fn extract_bytes(&mut self, count: usize) -> (Vec<u8>, bool) {
        let mut buf = vec![0; count];
        let n = self.fill_bytes(&mut buf);
        buf.truncate(n);

        (buf, n == count)
    }

    /// Run `f`, then return the source to the position it had beforehand.
    fn peek<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let position = self.source.save_position();
        let value = f(self);
        self.source.restore_position(position);

        value
    }
}

macro_rules! typed {
    ($($t:ident, $read:ident, $peek:ident;)*) => {
        impl<S: Source> Decoder<S> {
            $(
                #[doc = concat!("Extract a `", stringify!($t), "`. See [`Self::extract`].")]
                pub fn $read(&mut self) -> Option<$t> {
                    self.extract()
                }

                #[doc = concat!("Peek a `", stringify!($t), "`. See [`Self::peek_extract`].")]
                pub fn $peek(&mut self) -> Option<$t> {
                    self.peek_extract()
                }
            )*
        }
    };
}

typed! {
    u8, read_u8, peek_u8;
    u16, read_u16, peek_u16;
    u32, read_u32, peek_u32;
    u64, read_u64, peek_u64;
    i8, read_i8, peek_i8;
    i16, read_i16, peek_i16;
    i32, read_i32, peek_i32;
    i64, read_i64, peek_i64;
    f32, read_f32, peek_f32;
    f64, read_f64, peek_f64;
}

impl<S> Decoder<S> {
    /// The resolved byte order: never [`ByteOrder::NativeEndian`].
    pub fn byte_order(&self) -> ByteOrder {
        if self.is_little_endian {
            ByteOrder::LittleEndian
        } else {
            ByteOrder::BigEndian
        }
    }

    /// Whether this decoder can peek.
    pub fn is_seekable(&self) -> bool {
        self.source.is_seekable()
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &S {
        self.source.get_ref()
    }

    /// Mutably borrow the underlying source.
    ///
    /// Reading from the source directly advances this decoder too.
    pub fn get_mut(&mut self) -> &mut S {
        self.source.get_mut()
    }

    /// Unwrap the underlying source.
    pub fn into_inner(self) -> S {
        self.source.into_inner()
    }
}
