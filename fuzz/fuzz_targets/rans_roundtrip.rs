#![no_main]
use libfuzzer_sys::fuzz_target;
use quadcode::rans;

fuzz_target!(|data: Vec<u8>| {
    let symbols: Vec<u8> = data.iter().map(|&b| b % 4).collect();
    let stream = rans::encode(&symbols).unwrap();
    let decoded = rans::decode(&stream).unwrap();
    assert_eq!(symbols, decoded);
});
