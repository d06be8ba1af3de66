//! Reader-based sources.
//!
//! _Requires Cargo feature `std`._

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use log::debug;

use super::{PositionError, SeekSource, Source};

/// Adapt a `std::io` reader into a [`Source`].
///
/// Readers that also implement [`Seek`] are [`SeekSource`]s.
///
/// Errors raised by the reader while reading (other than
/// [`ErrorKind::Interrupted`], which is retried) end the read early, and so
/// are reported the same way as running out of bytes.
#[derive(Debug)]
pub struct IoSource<R>(pub R);

impl<R> IoSource<R> {
    /// Unwrap the underlying reader.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: Read> Source for IoSource<R> {
    fn read_next(&mut self, buf: &mut [u8]) -> usize {
        let mut n = 0;

        while n < buf.len() {
            match self.0.read(&mut buf[n..]) {
                Ok(0) => break,
                Ok(i) => n += i,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    debug!("Reader failed after {n} of {} bytes: {err}", buf.len());
                    break;
                }
            }
        }

        n
    }
}

impl<R: Read + Seek> SeekSource for IoSource<R> {
    fn save_position(&mut self) -> Result<u64, PositionError> {
        Ok(self.0.stream_position()?)
    }

    fn restore_position(&mut self, position: u64) -> Result<(), PositionError> {
        self.0.seek(SeekFrom::Start(position))?;
        Ok(())
    }
}
