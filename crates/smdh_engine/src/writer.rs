use crate::{Result, SmdhError};

/// Cursor-tracked little-endian writer over a fixed-size buffer.
///
/// The buffer never grows: a write that would run past the end fails with
/// [`SmdhError::BufferOverflow`] and leaves buffer and cursor untouched.
pub struct ByteWriter {
    data: Vec<u8>,
    offset: usize,
}

impl ByteWriter {
    /// Creates a zero-filled buffer of `size` bytes with the cursor at 0.
    pub fn new(size: usize) -> Self {
        Self { data: vec![0; size], offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Moves the cursor to an absolute offset.
    pub fn seek(&mut self, offset: usize) {
        self.offset = offset;
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_bytes(&[value])
    }

    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let end = self.offset + bytes.len();
        if end > self.data.len() {
            return Err(SmdhError::BufferOverflow {
                offset: self.offset,
                len: bytes.len(),
                capacity: self.data.len(),
            });
        }
        self.data[self.offset..end].copy_from_slice(bytes);
        self.offset = end;
        Ok(())
    }

    /// Consumes the writer and returns the underlying buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
