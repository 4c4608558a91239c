use honggfuzz::fuzz;

use bech32key::codec::{decode_with, Config};

fn main() {
    loop {
        fuzz!(|data: &str| {
            decode_with(data, &Config::DEFAULT).ok();
            decode_with(data, &Config::DEFAULT.strict_case()).ok();
            decode_with(data, &Config::DEFAULT.with_max_length(usize::MAX)).ok();
        });
    }
}
