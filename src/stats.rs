//! Entropy and rate statistics for the comparison driver.
//!
//! Pure helpers over histograms and bin sequences; nothing here affects
//! codec correctness.

/// Shannon entropy of a 4-symbol histogram, in bits per symbol.
pub fn symbol_entropy(counts: &[u32; 4], n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / n;
            -p * p.log2()
        })
        .sum()
}

/// Binary entropy of a bin sequence, in bits per bin.
pub fn bin_entropy(bits: &[u8]) -> f64 {
    if bits.is_empty() {
        return 0.0;
    }
    let ones = bits.iter().filter(|&&b| b != 0).count();
    let zeros = bits.len() - ones;
    let n = bits.len() as f64;
    let mut h = 0.0;
    if zeros > 0 {
        let p = zeros as f64 / n;
        h -= p * p.log2();
    }
    if ones > 0 {
        let p = ones as f64 / n;
        h -= p * p.log2();
    }
    h
}

/// Empirical rate of an encoded stream, in bits per source symbol.
pub fn bits_per_symbol(encoded_bytes: usize, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    8.0 * encoded_bytes as f64 / n as f64
}
