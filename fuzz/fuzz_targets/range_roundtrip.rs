#![no_main]
use libfuzzer_sys::fuzz_target;
use quadcode::range;

fuzz_target!(|data: Vec<u8>| {
    let bits: Vec<u8> = data.iter().map(|&b| b & 1).collect();
    let stream = range::encode_bits(&bits);
    let decoded = range::decode_bits(&stream).unwrap();
    assert_eq!(bits, decoded);
});
