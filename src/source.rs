//! Synthetic symbol source.
//!
//! Produces deterministic, seeded symbol sequences over {0,1,2,3} from a
//! fixed discrete weight vector. This is driver-side plumbing: the codecs
//! never see where their input comes from.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draw `n` symbols from the discrete distribution given by `weights`.
///
/// The same `seed` always yields the same sequence. Weights are relative;
/// they need not sum to any particular total, but at least one must be
/// nonzero.
pub fn generate(n: usize, weights: [u32; 4], seed: u64) -> Vec<u8> {
    let total: u32 = weights.iter().sum();
    assert!(total > 0, "weights must not all be zero");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut symbols = Vec::with_capacity(n);
    for _ in 0..n {
        let mut draw = rng.gen_range(0..total);
        let mut sym = 0u8;
        for (k, &w) in weights.iter().enumerate() {
            if draw < w {
                sym = k as u8;
                break;
            }
            draw -= w;
        }
        symbols.push(sym);
    }
    symbols
}
