#![no_std]

//! A fixed-width binary decoder with peeking over seekable and sequential
//! sources.
//!
//! Sprocket reads integers and floats of a known width from a byte source in a
//! chosen byte order. Running out of bytes is not an error: every read reports
//! exhaustion as `None` (or a short count), so bounded decode loops can simply
//! stop. Peeking reads a value without consuming it, which requires the source
//! to save and restore its position.
//!
//! Most users should begin with [`Decoder`]. Sources are described in the
//! [`source`] module, and fixed-layout records can be decoded through the
//! [`Decode`] trait.
//!
//! A handful of small collaborators ship alongside the decoder: a fixed
//! capacity [`ring::RingBuffer`], the [`retry`] combinators, a file existence
//! probe in [`fs`], and generic helpers in [`util`].
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable the [`Decode`](macro@Decode) derive macro (default).
//! - `std`: enable `std::io` sources, bulk extraction into a `Vec`, retry
//!   backoff and the file probe (default).

#[cfg(feature = "std")]
extern crate std;

pub mod decode;
pub mod decoder;
#[cfg(feature = "std")]
pub mod fs;
pub mod order;
pub mod primitive;
pub mod retry;
pub mod ring;
pub mod source;
pub mod util;

pub use decode::Decode;
pub use decoder::Decoder;
pub use order::ByteOrder;
pub use primitive::Primitive;

/// Derive [`Decode`] for a struct of fixed-width fields.
///
/// _Requires Cargo feature `derive`._
///
/// Fields are decoded in declaration order. Decoding stops at the first field
/// that runs out of bytes; bytes consumed by earlier fields stay consumed.
///
/// # Example
///
/// ```
/// #[derive(Debug, Default, Decode)]
/// struct Header {
///     magic: [u8; 4],
///     version: u16,
///     length: u32,
///     #[decode(skip)]
///     checked: bool,
/// }
/// ```
///
/// Fields marked `#[decode(skip)]` consume no bytes and are set to their
/// [`Default`] value.
#[cfg(feature = "derive")]
pub use sprocket_derive::Decode;
