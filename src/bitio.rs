//! Bit-level I/O.
//!
//! Packs and unpacks individual bits LSB-first within each byte: bit 0 of a
//! value lands in bit 0 of the current byte, and a partially filled trailing
//! byte is zero-padded in its unused high bits. This is the substrate the
//! binarization packer sits on; it carries no probability or symbol
//! semantics of its own.

use crate::error::{Error, Result};

/// Writes bits LSB-first into a growing byte buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    buf: Vec<u8>,
    current: u8,
    bit_pos: u8,
}

impl BitWriter {
    /// Create an empty bit writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single bit (any nonzero value counts as 1).
    pub fn write_bit(&mut self, bit: u8) {
        if bit != 0 {
            self.current |= 1 << self.bit_pos;
        }
        self.bit_pos += 1;
        if self.bit_pos == 8 {
            self.buf.push(self.current);
            self.current = 0;
            self.bit_pos = 0;
        }
    }

    /// Write the low `n_bits` bits of `value`, bit 0 first.
    pub fn write_bits(&mut self, value: u32, n_bits: u32) {
        for i in 0..n_bits {
            self.write_bit(((value >> i) & 1) as u8);
        }
    }

    /// Number of whole bytes and trailing bits written so far.
    pub fn bit_len(&self) -> usize {
        self.buf.len() * 8 + self.bit_pos as usize
    }

    /// Emit any partially filled trailing byte and return the buffer.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bit_pos != 0 {
            self.buf.push(self.current);
        }
        self.buf
    }
}

/// Reads bits LSB-first from a byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    data: &'a [u8],
    byte_index: usize,
    bit_pos: u8,
}

impl<'a> BitReader<'a> {
    /// Create a bit reader over `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_index: 0,
            bit_pos: 0,
        }
    }

    /// Read the next bit.
    ///
    /// # Errors
    /// Returns [`Error::OutOfData`] once the cursor would advance past the
    /// end of the underlying buffer.
    pub fn read_bit(&mut self) -> Result<u8> {
        if self.byte_index >= self.data.len() {
            return Err(Error::OutOfData);
        }
        let bit = (self.data[self.byte_index] >> self.bit_pos) & 1;
        self.bit_pos += 1;
        if self.bit_pos == 8 {
            self.bit_pos = 0;
            self.byte_index += 1;
        }
        Ok(bit)
    }

    /// Assemble `n_bits` bits into an integer, bit 0 first.
    pub fn read_bits(&mut self, n_bits: u32) -> Result<u32> {
        let mut v = 0u32;
        for i in 0..n_bits {
            v |= (self.read_bit()? as u32) << i;
        }
        Ok(v)
    }
}
