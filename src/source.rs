//! Byte sources, and the capability to save and restore their position.
//!
//! A [`Decoder`](crate::Decoder) pulls bytes through the [`Source`] trait. To
//! peek, it must also be able to remember where it was and return there, which
//! only some sources can do. This capability is described by [`SeekSource`]
//! and is captured once, when a [`PeekableSource`] is built:
//!
//! - [`PeekableSource::seekable`] keeps the source's save and restore entry
//!   points alongside it.
//! - [`PeekableSource::sequential`] keeps only the source. Saving or restoring
//!   a position afterwards is a programming error and panics.
//!
//! In-memory data is served by [`SliceSource`] (seekable) or a bare `&[u8]`
//! (sequential). With the `std` feature, [`IoSource`] adapts `std::io` readers.

use core::fmt;

use thiserror::Error;

#[cfg(feature = "std")]
pub mod io;
pub mod slice;

#[cfg(feature = "std")]
pub use io::IoSource;
pub use slice::SliceSource;

/// A forward-only producer of bytes.
pub trait Source {
    /// Read bytes into `buf`, advancing past them.
    ///
    /// Returns the number of bytes written to `buf`. A count lower than
    /// `buf.len()` means the source is exhausted; the bytes that were read
    /// remain consumed.
    fn read_next(&mut self, buf: &mut [u8]) -> usize;
}

/// A source whose read position can be saved and later restored.
pub trait SeekSource: Source {
    /// Report the current absolute read position.
    fn save_position(&mut self) -> Result<u64, PositionError>;
    /// Return to an absolute read position previously reported by
    /// [`SeekSource::save_position`].
    fn restore_position(&mut self, position: u64) -> Result<(), PositionError>;
}

/// An error saving or restoring a source's position.
#[derive(Debug, Error)]
pub enum PositionError {
    /// An error from the underlying reader.
    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The requested position lies past the end of the data.
    #[error("Position {position} is beyond the end of the source ({len} bytes).")]
    OutOfBounds { position: u64, len: u64 },
}

/// Save and restore entry points for a source type, captured from its
/// [`SeekSource`] implementation.
pub struct Rewind<S> {
    save: fn(&mut S) -> Result<u64, PositionError>,
    restore: fn(&mut S, u64) -> Result<(), PositionError>,
}

impl<S: SeekSource> Rewind<S> {
    fn of() -> Self {
        Self {
            save: S::save_position,
            restore: S::restore_position,
        }
    }
}

impl<S> Clone for Rewind<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Rewind<S> {}

impl<S> fmt::Debug for Rewind<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rewind").finish_non_exhaustive()
    }
}

/// A source tagged with whether its position can be saved and restored.
#[derive(Debug)]
pub enum PeekableSource<S> {
    /// A source supporting reads, and saving and restoring its position.
    Seekable(S, Rewind<S>),
    /// A source supporting reads only.
    Sequential(S),
}

impl<S: SeekSource> PeekableSource<S> {
    /// Wrap a source that can save and restore its position.
    pub fn seekable(source: S) -> Self {
        Self::Seekable(source, Rewind::of())
    }
}

impl<S: Source> PeekableSource<S> {
    /// Wrap a source that can only be read forward.
    ///
    /// Any later attempt to save or restore the position panics.
    pub fn sequential(source: S) -> Self {
        Self::Sequential(source)
    }

    /// Read bytes into `buf`. See [`Source::read_next`].
    pub fn read_next(&mut self, buf: &mut [u8]) -> usize {
        self.get_mut().read_next(buf)
    }

    /// Report the current read position.
    ///
    /// # Panics
    ///
    /// Panics if the source is sequential, or if the source fails to report
    /// its position.
    pub fn save_position(&mut self) -> u64 {
        match self {
            Self::Seekable(source, rewind) => match (rewind.save)(source) {
                Ok(position) => position,
                Err(err) => panic!("Saving the source position failed: {err}"),
            },
            Self::Sequential(_) => {
                panic!("Cannot save the position of a sequential source.")
            }
        }
    }

    /// Return to a read position reported by [`Self::save_position`].
    ///
    /// # Panics
    ///
    /// Panics if the source is sequential, or if the source fails to
    /// reposition.
    pub fn restore_position(&mut self, position: u64) {
        match self {
            Self::Seekable(source, rewind) => {
                if let Err(err) = (rewind.restore)(source, position) {
                    panic!("Restoring the source position to {position} failed: {err}");
                }
            }
            Self::Sequential(_) => {
                panic!("Cannot restore the position of a sequential source.")
            }
        }
    }
}

impl<S> PeekableSource<S> {
    /// Whether the position of this source can be saved and restored.
    pub fn is_seekable(&self) -> bool {
        matches!(self, Self::Seekable(..))
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &S {
        match self {
            Self::Seekable(source, _) | Self::Sequential(source) => source,
        }
    }

    /// Mutably borrow the underlying source.
    pub fn get_mut(&mut self) -> &mut S {
        match self {
            Self::Seekable(source, _) | Self::Sequential(source) => source,
        }
    }

    /// Unwrap the underlying source.
    pub fn into_inner(self) -> S {
        match self {
            Self::Seekable(source, _) | Self::Sequential(source) => source,
        }
    }
}
