// SPDX-License-Identifier: Apache-2.0

use alloc::collections::TryReserveError;
use alloc::string::String;
use alloc::vec::Vec;

/// Error type for StringBuffer operations.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Growing the buffer was refused by the allocator.
    OutOfMemory(TryReserveError),
    /// The accumulated bytes are not valid UTF-8.
    InvalidUtf8,
}

/// Append-only byte accumulator used while decoding string literals.
///
/// Capacity starts at [`StringBuffer::INITIAL_CAPACITY`] on the first append
/// and doubles whenever it is exhausted.
#[derive(Debug, Default)]
pub struct StringBuffer {
    bytes: Vec<u8>,
}

impl StringBuffer {
    pub const INITIAL_CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    fn grow(&mut self) -> Result<(), Error> {
        let target = match self.bytes.capacity() {
            0 => Self::INITIAL_CAPACITY,
            cap => cap.saturating_mul(2),
        };
        self.bytes
            .try_reserve_exact(target - self.bytes.len())
            .map_err(Error::OutOfMemory)
    }

    pub fn append(&mut self, byte: u8) -> Result<(), Error> {
        if self.bytes.len() == self.bytes.capacity() {
            self.grow()?;
        }
        self.bytes.push(byte);
        Ok(())
    }

    /// Consumes the buffer and hands out the accumulated bytes as a string.
    pub fn finalize(self) -> Result<String, Error> {
        String::from_utf8(self.bytes).map_err(|_| Error::InvalidUtf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_empty_buffer_finalizes_to_empty_string() {
        let buffer = StringBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 0);
        assert_eq!(buffer.finalize(), Ok(String::new()));
    }

    #[test]
    fn test_capacity_doubles() {
        let mut buffer = StringBuffer::new();
        buffer.append(b'a').unwrap();
        assert!(buffer.capacity() >= StringBuffer::INITIAL_CAPACITY);

        for _ in 1..StringBuffer::INITIAL_CAPACITY {
            buffer.append(b'a').unwrap();
        }

        buffer.append(b'b').unwrap();
        assert!(buffer.capacity() >= 2 * StringBuffer::INITIAL_CAPACITY);
        assert_eq!(buffer.len(), StringBuffer::INITIAL_CAPACITY + 1);

        let s = buffer.finalize().unwrap();
        assert!(s.ends_with("ab"));
    }

    #[test]
    fn test_multibyte_utf8_survives() {
        let mut buffer = StringBuffer::new();
        for &b in "héllo".as_bytes() {
            buffer.append(b).unwrap();
        }
        assert_eq!(buffer.finalize().unwrap(), "héllo");
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let mut buffer = StringBuffer::new();
        buffer.append(0b1000_0000).unwrap();
        assert_eq!(buffer.finalize(), Err(Error::InvalidUtf8));
    }
}
