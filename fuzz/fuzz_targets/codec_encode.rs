use honggfuzz::fuzz;

use bech32key::codec::{decode_with, encode_with, Case, Config};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            for case in [Case::Lower, Case::Upper] {
                let config = Config::DEFAULT.with_case(case).with_max_length(usize::MAX);
                let encoded = encode_with("npub", data, &config).unwrap();
                let (hrp, decoded) = decode_with(&encoded, &config).unwrap();
                assert_eq!(hrp, "npub");
                assert_eq!(data, decoded);
            }
        });
    }
}
