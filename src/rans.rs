//! Range Asymmetric Numeral Systems (rANS) over the 4-symbol alphabet.
//!
//! rANS represents an entire symbol sequence as a single integer state `x`
//! plus the bytes shed while keeping `x` inside a fixed range. Encoding a
//! symbol with frequency `f` (out of a total of 4096) roughly multiplies the
//! state by `4096 / f`, so rare symbols grow it faster; renormalization
//! pushes low bytes out whenever the next step would overflow.
//!
//! The emitted bytes behave like a stack: the encoder walks the input in
//! *reverse* order so that the decoder, unwinding the state transitions, can
//! read symbols back out in forward order.
//!
//! The model is static and travels with the stream. Stream layout (all
//! little-endian):
//!
//! ```text
//! [N: u32][freq0: u16][freq1: u16][freq2: u16][freq3: u16]
//! [renormalization bytes...][final state: 4 bytes, LSB first]
//! ```
//!
//! The decoder reads the final state off the tail and consumes the
//! renormalization bytes backward, so it needs nothing beyond the stream
//! itself. The state is a plain `u32`; keeping it exactly 32 bits wide is
//! what makes the renormalization byte-exact.

use crate::error::{Error, Result};

/// Renormalization lower bound for the coder state.
pub const RANS_L: u32 = 1 << 23;
/// Model precision in bits; frequency tables sum to `1 << SCALE_BITS`.
pub const SCALE_BITS: u32 = 12;
/// Total normalized frequency (4096).
pub const TOTAL_FREQ: u32 = 1 << SCALE_BITS;
/// Number of symbols in the alphabet.
pub const ALPHABET: usize = 4;

// N (u32) plus four u16 frequencies.
const HEADER_LEN: usize = 4 + 2 * ALPHABET;

/// Scale a raw histogram to frequencies summing to exactly [`TOTAL_FREQ`].
///
/// Every symbol, present or not, gets a frequency of at least 1: a
/// zero-frequency symbol would make the cumulative ranges ill-defined and
/// any occurrence of it uncodeable.
fn normalize_histogram(counts: &[u32; ALPHABET]) -> [u16; ALPHABET] {
    let sum: u32 = counts.iter().sum();

    let mut freq = [0u32; ALPHABET];
    for (k, &c) in counts.iter().enumerate() {
        freq[k] = if c == 0 {
            1
        } else {
            ((c as u64 * TOTAL_FREQ as u64 / sum as u64) as u32).max(1)
        };
    }

    let mut total: u32 = freq.iter().sum();
    if total < TOTAL_FREQ {
        freq[0] += TOTAL_FREQ - total;
    } else {
        while total > TOTAL_FREQ {
            let mut max_idx = 0;
            for k in 1..ALPHABET {
                if freq[k] > freq[max_idx] {
                    max_idx = k;
                }
            }
            if freq[max_idx] == 1 {
                break;
            }
            freq[max_idx] -= 1;
            total -= 1;
        }
    }

    [
        freq[0] as u16,
        freq[1] as u16,
        freq[2] as u16,
        freq[3] as u16,
    ]
}

/// Prefix sums over the four frequencies.
fn cumulative(freq: &[u16; ALPHABET]) -> [u16; ALPHABET] {
    let mut cum = [0u16; ALPHABET];
    for k in 1..ALPHABET {
        cum[k] = cum[k - 1] + freq[k - 1];
    }
    cum
}

/// Encode a 4-ary symbol sequence into a self-contained byte stream.
///
/// An empty input yields an empty stream (no header at all).
///
/// # Errors
/// Returns [`Error::SymbolOutOfRange`] if any symbol is outside `0..=3`;
/// no partial output is produced.
pub fn encode(symbols: &[u8]) -> Result<Vec<u8>> {
    if symbols.is_empty() {
        return Ok(Vec::new());
    }

    let mut counts = [0u32; ALPHABET];
    for &s in symbols {
        if s as usize >= ALPHABET {
            return Err(Error::SymbolOutOfRange(s));
        }
        counts[s as usize] += 1;
    }

    let freq = normalize_histogram(&counts);
    let cum = cumulative(&freq);

    let mut out = Vec::with_capacity(HEADER_LEN + symbols.len());
    out.extend_from_slice(&(symbols.len() as u32).to_le_bytes());
    for &f in &freq {
        out.extend_from_slice(&f.to_le_bytes());
    }

    let mut x: u32 = RANS_L;

    // Reverse order: the renormalization bytes form a stack the decoder
    // unwinds from the tail.
    for &s in symbols.iter().rev() {
        let f = freq[s as usize] as u32;
        let c = cum[s as usize] as u32;

        // Renormalize first: keep x below the point where the update would
        // push it past 2^31, so the decoder's pull-while-below-RANS_L walk
        // inverts every step exactly.
        let x_max = ((RANS_L >> SCALE_BITS) * f) << 8;
        while x >= x_max {
            out.push((x & 0xFF) as u8);
            x >>= 8;
        }

        x = (x / f) * TOTAL_FREQ + (x % f) + c;
    }

    // Flush the final state, LSB first.
    for _ in 0..4 {
        out.push((x & 0xFF) as u8);
        x >>= 8;
    }

    Ok(out)
}

/// Decode a byte stream produced by [`encode`] back into symbols.
///
/// # Errors
/// Returns [`Error::Truncated`] for a non-empty stream shorter than the
/// 12-byte minimum or a symbol count the stream could not possibly hold,
/// and [`Error::InvalidModel`] for a zero header frequency or frequencies
/// not summing to exactly 4096.
pub fn decode(stream: &[u8]) -> Result<Vec<u8>> {
    if stream.is_empty() {
        return Ok(Vec::new());
    }
    if stream.len() < HEADER_LEN {
        return Err(Error::Truncated("rans header"));
    }

    let n = u32::from_le_bytes([stream[0], stream[1], stream[2], stream[3]]) as usize;

    let mut freq = [0u16; ALPHABET];
    for (k, f) in freq.iter_mut().enumerate() {
        *f = u16::from_le_bytes([stream[4 + 2 * k], stream[5 + 2 * k]]);
        if *f == 0 {
            return Err(Error::InvalidModel("zero frequency"));
        }
    }
    // Check the sum before building prefix sums: corrupt frequencies could
    // otherwise overflow the u16 cumulative entries.
    let total: u32 = freq.iter().map(|&f| f as u32).sum();
    if total != TOTAL_FREQ {
        return Err(Error::InvalidModel("frequencies do not sum to 4096"));
    }
    let cum = cumulative(&freq);

    // Even the cheapest symbol (frequency 4093 of 4096) costs about 1/946
    // of a bit, so no well-formed stream holds more than 1024 symbols per
    // stream bit. Reject an inflated count before allocating for it.
    if n > stream.len().saturating_mul(8 * 1024) {
        return Err(Error::Truncated("symbol count exceeds stream capacity"));
    }

    let data_start = HEADER_LEN;

    // Final state sits in the last 4 bytes, in the same LSB-first order the
    // encoder flushed them.
    let mut idx = stream.len() - 4;
    let mut x = u32::from_le_bytes([
        stream[idx],
        stream[idx + 1],
        stream[idx + 2],
        stream[idx + 3],
    ]);

    let mut out = Vec::with_capacity(n);

    // The encoder walked the input in reverse, so the last state update it
    // made was for position 0: symbols pop back out in forward order.
    for _ in 0..n {
        let x_mod = x % TOTAL_FREQ;
        let x_div = x / TOTAL_FREQ;

        // The cumulative ranges are disjoint and cover [0, 4096), so the
        // first match is the only match.
        let mut s = 0usize;
        for (k, (&c, &f)) in cum.iter().zip(freq.iter()).enumerate() {
            let c = c as u32;
            let f = f as u32;
            if x_mod >= c && x_mod < c + f {
                s = k;
                break;
            }
        }
        out.push(s as u8);

        x = freq[s] as u32 * x_div + (x_mod - cum[s] as u32);

        // Pull renormalization bytes off the tail, stopping at the header.
        while x < RANS_L && idx > data_start {
            idx -= 1;
            x = (x << 8) | stream[idx] as u32;
        }
    }

    Ok(out)
}
