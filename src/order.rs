//! Byte order selection.

/// The order in which the bytes of a multi-byte value are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Least significant byte first.
    LittleEndian,
    /// Most significant byte first.
    BigEndian,
    /// Whichever of the two the host uses.
    NativeEndian,
}

impl ByteOrder {
    /// Resolve [`ByteOrder::NativeEndian`] to the host's order.
    ///
    /// The other two orders resolve to themselves.
    pub const fn resolve(self) -> Self {
        match self {
            Self::NativeEndian if cfg!(target_endian = "little") => Self::LittleEndian,
            Self::NativeEndian => Self::BigEndian,
            order => order,
        }
    }

    /// Whether this order, once resolved, is little-endian.
    pub const fn is_little_endian(self) -> bool {
        matches!(self.resolve(), Self::LittleEndian)
    }
}
