//! Comparison driver: rANS vs. binarization + binary range coding.
//!
//! Generates a skewed synthetic source, runs it through both coding routes,
//! verifies the lossless round-trips and prints empirical vs. theoretical
//! rates side by side.

use quadcode::{binarize_sequence, cabac, pack_bits, range, rans, source, stats, Scheme};

const N: usize = 1000;
const WEIGHTS: [u32; 4] = [70, 10, 10, 10];
const SEED: u64 = 12345;

fn main() -> quadcode::Result<()> {
    let symbols = source::generate(N, WEIGHTS, SEED);

    let mut counts = [0u32; 4];
    for &s in &symbols {
        counts[s as usize] += 1;
    }

    println!("Number of source symbols: {N}");
    println!("Frequencies:");
    for (k, c) in counts.iter().enumerate() {
        println!("  symbol {k}: {c}");
    }

    let h_sym = stats::symbol_entropy(&counts, N);
    println!("Theoretical symbol entropy H_sym = {h_sym:.6} bits/symbol\n");

    // Good binarization route.
    let bits_good = binarize_sequence(&symbols, Scheme::Good)?;
    let bins_per_good = bits_good.len() as f64 / N as f64;
    let h_bin_good = stats::bin_entropy(&bits_good);
    let ideal_good = h_bin_good * bins_per_good;

    let ones = bits_good.iter().filter(|&&b| b != 0).count() as f64;
    let p1 = ones / bits_good.len() as f64;
    let p_lps = p1.min(1.0 - p1);
    let state = cabac::find_state(p_lps);
    let model_p = cabac::state_probability(state);

    let packed_good = pack_bits(&bits_good);
    let coded_good = range::encode_bits(&bits_good);
    let decoded_good = range::decode_bits(&coded_good)?;
    let ok_range = decoded_good == bits_good;

    // Bad binarization route.
    let bits_bad = binarize_sequence(&symbols, Scheme::Bad)?;
    let bins_per_bad = bits_bad.len() as f64 / N as f64;
    let h_bin_bad = stats::bin_entropy(&bits_bad);
    let ideal_bad = h_bin_bad * bins_per_bad;

    // rANS route.
    let rans_stream = rans::encode(&symbols)?;
    let rans_decoded = rans::decode(&rans_stream)?;
    let ok_rans = rans_decoded == symbols;
    let rans_rate = stats::bits_per_symbol(rans_stream.len(), N);

    println!("===================================================");
    println!("                 ENTROPY SUMMARY");
    println!("===================================================");
    println!("True source entropy (4-symbol):      {h_sym:.6} bits/symbol\n");

    println!("---------------- Binarization (Good) --------------");
    println!("bins/symbol:                         {bins_per_good:.6}");
    println!("bin entropy:                         {h_bin_good:.6} bits/bin");
    println!("ideal binary-coder rate:             {ideal_good:.6} bits/symbol");
    println!("packed bins:                         {} bytes", packed_good.len());
    println!("range-coded:                         {} bytes", coded_good.len());
    println!(
        "range coder rate:                    {:.6} bits/symbol",
        stats::bits_per_symbol(coded_good.len(), N)
    );
    println!("range coder roundtrip OK:            {ok_range}");
    println!("Observed LPS probability:            {p_lps:.6}");
    println!("CABAC-model LPS probability:         {model_p:.6} (state {state})");
    println!("Difference:                          {:.6}\n", (p_lps - model_p).abs());

    println!("---------------- Binarization (Bad) ---------------");
    println!("bins/symbol:                         {bins_per_bad:.6}");
    println!("bin entropy:                         {h_bin_bad:.6} bits/bin");
    println!("ideal binary-coder rate:             {ideal_bad:.6} bits/symbol\n");

    println!("---------------- rANS -----------------------------");
    println!("rANS stream size:                    {} bytes", rans_stream.len());
    println!("rANS rate:                           {rans_rate:.6} bits/symbol");
    println!("roundtrip OK:                        {ok_rans}\n");

    let diff_rans = (rans_rate - h_sym).abs();
    let diff_bin = (ideal_good - h_sym).abs();
    let winner = if diff_rans < diff_bin {
        "rANS"
    } else {
        "binary range coder (good binarization)"
    };

    println!("===================================================");
    println!("Winner (closest to entropy):         {winner}");
    println!("===================================================");

    Ok(())
}
