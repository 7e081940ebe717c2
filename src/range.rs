//! Toy binary range coder.
//!
//! A lossless arithmetic coder over single bins with a *static* two-symbol
//! model: the counts of 0s and 1s are taken over the whole bin sequence up
//! front and stored in the stream header, so the decoder reconstructs the
//! identical interval splits from the stream alone. Nothing is adaptive and
//! there are no contexts; this is the interval-narrowing machinery of a real
//! CABAC-style coder with the modeling stripped away.
//!
//! Stream layout (all little-endian):
//!
//! ```text
//! [num_bits: u32][count0: u32][count1: u32][payload bytes...]
//! ```
//!
//! The payload always begins with the 4 bytes that seed the decoder's `code`
//! register, and the encoder always flushes 4 trailing bytes of `low`, so a
//! well-formed stream is at least 16 bytes even for an empty bin sequence.
//!
//! The coder state (`low`, `range`, `code`) lives in plain `u32`s and leans
//! on wrapping 32-bit arithmetic; `range` is kept in `[2^24, 2^32)` by
//! byte-wise renormalization. When `low` wraps around, the carry ripples
//! back into payload bytes the encoder has already emitted.

use crate::error::{Error, Result};

/// Renormalize whenever `range` drops below this bound.
const TOP: u32 = 1 << 24;

const HEADER_LEN: usize = 12;

fn read_u32_le(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

// A wrap of `low` means the interval crossed a byte boundary that has
// already been written out, so the emitted bytes are one short of the true
// value. Bump them, rippling back through any run of 0xFF. Before the first
// payload byte exists, `low + range` never exceeds `u32::MAX`, so a carry
// always has at least one byte to land in.
fn propagate_carry(payload: &mut [u8]) {
    debug_assert!(!payload.is_empty());
    for b in payload.iter_mut().rev() {
        if *b == 0xFF {
            *b = 0;
        } else {
            *b += 1;
            return;
        }
    }
}

/// Encode a bin sequence into a self-contained byte stream.
///
/// Zero counts are coerced to 1 so neither interval ever has zero width;
/// the coerced counts are what lands in the header.
pub fn encode_bits(bits: &[u8]) -> Vec<u8> {
    let num_bits = bits.len() as u32;
    let mut count0 = bits.iter().filter(|&&b| b == 0).count() as u32;
    let mut count1 = num_bits - count0;
    if count0 == 0 {
        count0 = 1;
    }
    if count1 == 0 {
        count1 = 1;
    }
    let total = count0 + count1;

    let mut out = Vec::with_capacity(HEADER_LEN + bits.len() / 2 + 4);
    out.extend_from_slice(&num_bits.to_le_bytes());
    out.extend_from_slice(&count0.to_le_bytes());
    out.extend_from_slice(&count1.to_le_bytes());

    let mut low: u32 = 0;
    let mut range: u32 = u32::MAX;

    for &b in bits {
        let split = (range / total) * count0;
        if b == 0 {
            range = split;
        } else {
            let (next_low, carry) = low.overflowing_add(split);
            low = next_low;
            if carry {
                propagate_carry(&mut out[HEADER_LEN..]);
            }
            range -= split;
        }
        while range < TOP {
            out.push((low >> 24) as u8);
            low <<= 8;
            range <<= 8;
        }
    }

    // Flush: the decoder needs 4 seed bytes plus enough renormalization
    // bytes to disambiguate the final interval.
    for _ in 0..4 {
        out.push((low >> 24) as u8);
        low <<= 8;
    }

    out
}

/// Decode a byte stream produced by [`encode_bits`] back into bins.
///
/// # Errors
/// Returns [`Error::Truncated`] if the header or the 4 `code` seed bytes are
/// missing, and [`Error::InvalidModel`] if either header count is 0 or the
/// counts overflow when summed.
pub fn decode_bits(stream: &[u8]) -> Result<Vec<u8>> {
    if stream.len() < HEADER_LEN {
        return Err(Error::Truncated("range coder header"));
    }
    let num_bits = read_u32_le(stream, 0);
    let count0 = read_u32_le(stream, 4);
    let count1 = read_u32_le(stream, 8);
    if count0 == 0 || count1 == 0 {
        return Err(Error::InvalidModel("zero bin count"));
    }
    // Corrupt headers can carry counts summing past u32; the split math
    // below divides by this, so it must be a real sum.
    let total = count0
        .checked_add(count1)
        .ok_or(Error::InvalidModel("bin counts overflow"))?;

    if stream.len() < HEADER_LEN + 4 {
        return Err(Error::Truncated("range coder seed bytes"));
    }

    let mut low: u32 = 0;
    let mut range: u32 = u32::MAX;
    let mut code: u32 = 0;
    let mut offset = HEADER_LEN;
    for _ in 0..4 {
        code = (code << 8) | stream[offset] as u32;
        offset += 1;
    }

    let mut bits = Vec::with_capacity(num_bits as usize);
    for _ in 0..num_bits {
        let split = (range / total) * count0;
        if code.wrapping_sub(low) < split {
            bits.push(0);
            range = split;
        } else {
            bits.push(1);
            low = low.wrapping_add(split);
            range -= split;
        }
        while range < TOP {
            range <<= 8;
            low <<= 8;
            // Past the end of the stream, shift in zeros.
            let next = if offset < stream.len() {
                let b = stream[offset];
                offset += 1;
                b
            } else {
                0
            };
            code = (code << 8) | next as u32;
        }
    }

    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_roundtrip() {
        let bits = vec![0u8, 1, 0, 1, 1, 0, 0, 0, 1, 1, 1, 0];
        let stream = encode_bits(&bits);
        assert!(stream.len() >= 16);
        // Six zeros and six ones in the sequence above.
        assert_eq!(read_u32_le(&stream, 4), 6); // count0
        assert_eq!(read_u32_le(&stream, 8), 6); // count1
        assert_eq!(decode_bits(&stream).unwrap(), bits);
    }

    #[test]
    fn test_roundtrip_across_low_wraparound() {
        // This sequence drives `low` past u32::MAX mid-stream, so the carry
        // has to reach a byte that was already emitted.
        let bits = vec![0u8, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1];
        let stream = encode_bits(&bits);
        assert_eq!(decode_bits(&stream).unwrap(), bits);
    }

    #[test]
    fn test_overflowing_counts_rejected() {
        let mut stream = Vec::new();
        stream.extend_from_slice(&1u32.to_le_bytes());
        stream.extend_from_slice(&0x8000_0000u32.to_le_bytes());
        stream.extend_from_slice(&0x8000_0000u32.to_le_bytes());
        stream.extend_from_slice(&[0u8; 4]);
        assert_eq!(
            decode_bits(&stream),
            Err(Error::InvalidModel("bin counts overflow"))
        );
    }

    #[test]
    fn test_empty_sequence() {
        let stream = encode_bits(&[]);
        // Header plus 4 flush bytes, with both counts coerced to 1.
        assert_eq!(stream.len(), 16);
        assert_eq!(read_u32_le(&stream, 4), 1);
        assert_eq!(read_u32_le(&stream, 8), 1);
        assert_eq!(decode_bits(&stream).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_single_bit() {
        for bit in [0u8, 1] {
            let stream = encode_bits(&[bit]);
            assert_eq!(decode_bits(&stream).unwrap(), vec![bit]);
        }
    }

    #[test]
    fn test_degenerate_all_ones() {
        let bits = vec![1u8; 100];
        let stream = encode_bits(&bits);
        assert_eq!(read_u32_le(&stream, 4), 1); // coerced
        assert_eq!(read_u32_le(&stream, 8), 100);
        assert_eq!(decode_bits(&stream).unwrap(), bits);
    }

    #[test]
    fn test_truncated_header_rejected() {
        assert_eq!(
            decode_bits(&[0u8; 11]),
            Err(Error::Truncated("range coder header"))
        );
    }

    #[test]
    fn test_missing_seed_bytes_rejected() {
        let mut stream = encode_bits(&[0, 1, 0]);
        stream.truncate(14);
        assert_eq!(
            decode_bits(&stream),
            Err(Error::Truncated("range coder seed bytes"))
        );
    }

    #[test]
    fn test_zero_count_rejected() {
        let mut stream = encode_bits(&[0, 1, 0]);
        stream[4..8].fill(0); // count0 = 0
        assert_eq!(decode_bits(&stream), Err(Error::InvalidModel("zero bin count")));
    }

    #[test]
    fn test_deterministic() {
        let bits: Vec<u8> = (0..500).map(|i| ((i * 7) % 3 == 0) as u8).collect();
        assert_eq!(encode_bits(&bits), encode_bits(&bits));
    }

    proptest! {
        #[test]
        fn prop_roundtrip(bits in prop::collection::vec(0u8..2, 0..512)) {
            let stream = encode_bits(&bits);
            prop_assert!(stream.len() >= 16);
            prop_assert_eq!(decode_bits(&stream).unwrap(), bits);
        }

        #[test]
        fn prop_skewed_roundtrip(
            ones in 0usize..20,
            len in 1usize..400,
        ) {
            // Heavily skewed toward zeros; exercises narrow 1-intervals.
            let mut bits = vec![0u8; len];
            for i in 0..ones.min(len) {
                bits[(i * 37) % len] = 1;
            }
            let stream = encode_bits(&bits);
            prop_assert_eq!(decode_bits(&stream).unwrap(), bits);
        }
    }
}
