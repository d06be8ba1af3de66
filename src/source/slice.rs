//! In-memory sources.

use super::{PositionError, SeekSource, Source};

/// A seekable cursor over a slice of bytes.
#[derive(Debug, Clone)]
pub struct SliceSource<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> SliceSource<'a> {
    /// Start a cursor at the beginning of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// The offset of the next byte to be read.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The bytes not yet read.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.position..]
    }
}

impl Source for SliceSource<'_> {
    fn read_next(&mut self, buf: &mut [u8]) -> usize {
        let n = take(self.remaining(), buf);
        self.position += n;
        n
    }
}

impl SeekSource for SliceSource<'_> {
    fn save_position(&mut self) -> Result<u64, PositionError> {
        Ok(self.position as u64)
    }

    fn restore_position(&mut self, position: u64) -> Result<(), PositionError> {
        let len = self.data.len();

        match usize::try_from(position) {
            Ok(p) if p <= len => {
                self.position = p;
                Ok(())
            }
            _ => Err(PositionError::OutOfBounds {
                position,
                len: len as u64,
            }),
        }
    }
}

/// A bare slice is a sequential source: reading shortens it from the front.
impl<'a> Source for &'a [u8] {
    fn read_next(&mut self, buf: &mut [u8]) -> usize {
        let r: &'a [u8] = *self;
        let n = take(r, buf);
        *self = &r[n..];
        n
    }
}

/// Copy as many bytes as fit from the front of `r` into `buf`.
fn take(r: &[u8], buf: &mut [u8]) -> usize {
    let n = r.len().min(buf.len());
    buf[..n].copy_from_slice(&r[..n]);
    n
}
