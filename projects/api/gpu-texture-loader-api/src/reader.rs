//! Bounds-checked, offset-addressed reads over a caller-owned byte buffer.

use endian_writer::{EndianReader, LittleEndianReader};
use thiserror::Error;

/// A read that would extend past the end of the buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("read of {size} bytes at offset {offset} is out of range for a buffer of {length} bytes")]
pub struct ReadOutOfRange {
    pub offset: usize,
    pub size: usize,
    pub length: usize,
}

/// An immutable view over a byte buffer with bounds-checked typed reads.
///
/// Container formats declare little-endian storage, so all scalar reads are
/// little-endian. The reader holds only the borrowed slice; it never copies
/// payload bytes and is freely shareable across threads.
#[derive(Debug, Clone, Copy)]
pub struct DataReader<'a> {
    data: &'a [u8],
}

impl<'a> DataReader<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Total number of bytes in the underlying buffer.
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The entire underlying buffer.
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    fn check(&self, offset: usize, size: usize) -> Result<(), ReadOutOfRange> {
        match offset.checked_add(size) {
            Some(end) if end <= self.data.len() => Ok(()),
            _ => Err(ReadOutOfRange {
                offset,
                size,
                length: self.data.len(),
            }),
        }
    }

    /// Reads a little-endian `u32` at `offset`.
    pub fn read_u32_at(&self, offset: usize) -> Result<u32, ReadOutOfRange> {
        self.check(offset, core::mem::size_of::<u32>())?;

        // SAFETY: check() guarantees offset + 4 <= self.data.len().
        let mut reader = unsafe { LittleEndianReader::new(self.data.as_ptr()) };
        Ok(unsafe { reader.read_u32_at(offset as isize) })
    }

    /// Reads a little-endian `u64` at `offset`.
    pub fn read_u64_at(&self, offset: usize) -> Result<u64, ReadOutOfRange> {
        self.check(offset, core::mem::size_of::<u64>())?;

        // SAFETY: check() guarantees offset + 8 <= self.data.len().
        let mut reader = unsafe { LittleEndianReader::new(self.data.as_ptr()) };
        Ok(unsafe { reader.read_u64_at(offset as isize) })
    }

    /// Borrows `length` bytes starting at `offset` from the underlying buffer.
    pub fn bytes_at(&self, offset: usize, length: usize) -> Result<&'a [u8], ReadOutOfRange> {
        self.check(offset, length)?;
        Ok(&self.data[offset..offset + length])
    }
}
