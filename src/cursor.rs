use byteorder::{BigEndian, ByteOrder};

use crate::DnsError;

/// A read position inside a message buffer.
///
/// Reads never move the cursor. Every decode step takes a cursor and hands
/// back the one the next step should start from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor(usize);

impl Cursor {
    pub const fn new(position: usize) -> Self {
        Self(position)
    }

    pub const fn position(self) -> usize {
        self.0
    }

    #[must_use]
    pub const fn advance(self, n: usize) -> Self {
        Self(self.0 + n)
    }

    pub fn read_u8(self, bytes: &[u8]) -> Result<u8, DnsError> {
        bytes.get(self.0).copied().ok_or(DnsError::Truncated(self.0))
    }

    pub fn read_u16(self, bytes: &[u8]) -> Result<u16, DnsError> {
        self.slice(bytes, 2).map(BigEndian::read_u16)
    }

    pub fn read_u32(self, bytes: &[u8]) -> Result<u32, DnsError> {
        self.slice(bytes, 4).map(BigEndian::read_u32)
    }

    /// Borrow `len` bytes starting at the cursor.
    pub fn slice(self, bytes: &[u8], len: usize) -> Result<&[u8], DnsError> {
        bytes
            .get(self.0..self.0 + len)
            .ok_or(DnsError::Truncated(self.0))
    }
}
