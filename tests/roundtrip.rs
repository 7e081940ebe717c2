//! Concrete end-to-end scenarios for both coding routes.

use quadcode::{binarize_sequence, pack_bits, range, rans, source, stats, Error, Scheme};

#[test]
fn rans_skewed_scenario() {
    // Histogram {0:7, 1:1, 2:1, 3:1}.
    let symbols = vec![0u8, 0, 0, 1, 0, 0, 2, 0, 0, 3];
    let stream = rans::encode(&symbols).unwrap();
    assert!(stream.len() >= 12);
    assert_eq!(rans::decode(&stream).unwrap(), symbols);
}

#[test]
fn rans_empty_scenario() {
    let stream = rans::encode(&[]).unwrap();
    assert!(stream.is_empty());
    assert_eq!(rans::decode(&stream).unwrap(), Vec::<u8>::new());
}

#[test]
fn rans_rejects_out_of_alphabet_input() {
    assert_eq!(rans::encode(&[0, 1, 2, 9]), Err(Error::SymbolOutOfRange(9)));
}

#[test]
fn range_coder_scenario() {
    let bits = vec![0u8, 1, 0, 1, 1, 0, 0, 0, 1, 1, 1, 0];
    let stream = range::encode_bits(&bits);
    assert!(stream.len() >= 16);
    let count0 = u32::from_le_bytes([stream[4], stream[5], stream[6], stream[7]]);
    let count1 = u32::from_le_bytes([stream[8], stream[9], stream[10], stream[11]]);
    // The header carries the actual bin counts: six of each.
    assert_eq!(count0, 6);
    assert_eq!(count1, 6);
    assert_eq!(range::decode_bits(&stream).unwrap(), bits);
}

#[test]
fn both_decoders_reject_short_streams() {
    for len in 0..12 {
        let stream = vec![0xA5u8; len];
        if len > 0 {
            assert!(rans::decode(&stream).is_err(), "rans accepted {len} bytes");
        }
        assert!(
            range::decode_bits(&stream).is_err(),
            "range coder accepted {len} bytes"
        );
    }
}

#[test]
fn generated_source_roundtrips_both_routes() {
    let symbols = source::generate(1000, [70, 10, 10, 10], 12345);

    let rans_stream = rans::encode(&symbols).unwrap();
    assert_eq!(rans::decode(&rans_stream).unwrap(), symbols);

    for scheme in [Scheme::Good, Scheme::Bad] {
        let bits = binarize_sequence(&symbols, scheme).unwrap();
        let stream = range::encode_bits(&bits);
        assert_eq!(range::decode_bits(&stream).unwrap(), bits);
    }
}

#[test]
fn rans_rate_tracks_entropy_on_skewed_source() {
    let symbols = source::generate(10_000, [70, 10, 10, 10], 12345);
    let mut counts = [0u32; 4];
    for &s in &symbols {
        counts[s as usize] += 1;
    }
    let h = stats::symbol_entropy(&counts, symbols.len());

    let stream = rans::encode(&symbols).unwrap();
    let rate = stats::bits_per_symbol(stream.len(), symbols.len());

    // Static model + 12-byte header; the rate should sit near the entropy,
    // never below it by more than rounding, and not wildly above.
    assert!(rate > h - 0.01, "rate {rate} below entropy {h}");
    assert!(rate < h + 0.25, "rate {rate} too far above entropy {h}");
}

#[test]
fn bad_binarization_costs_bins_on_skewed_source() {
    let symbols = source::generate(1000, [70, 10, 10, 10], 12345);
    let good = binarize_sequence(&symbols, Scheme::Good).unwrap();
    let bad = binarize_sequence(&symbols, Scheme::Bad).unwrap();
    assert!(good.len() < bad.len());

    // Packing is 8 bins per byte either way.
    assert_eq!(pack_bits(&good).len(), (good.len() + 7) / 8);
    assert_eq!(pack_bits(&bad).len(), (bad.len() + 7) / 8);
}
