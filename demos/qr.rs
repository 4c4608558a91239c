use qrcode::QrCode;

use std::io::Write;

use bech32key::codec::{encode_with, Case, Config};

/// Usage: `cargo run --example qr -- <hrp> <hex key>`
fn main() {
    let mut args = std::env::args().skip(1);
    let hrp = args.next().unwrap_or_else(|| "npub".into());
    let key = hex::decode(args.next().unwrap_or_else(|| "00".repeat(32))).unwrap();

    // upper case keeps the code in alphanumeric mode
    let config = Config::DEFAULT.with_case(Case::Upper);
    let encoded = encode_with(&hrp, &key, &config).unwrap();
    let code = QrCode::new(&encoded).unwrap();
    let string = code
        .render::<char>()
        .quiet_zone(false)
        .module_dimensions(2, 1)
        .build();
    let mut stdout = std::io::stdout();
    stdout.write_all(format!("{string}\n").as_bytes()).unwrap();
    stdout
        .write_all(format!("{}\n", encoded.to_ascii_lowercase()).as_bytes())
        .unwrap();
    stdout.flush().unwrap();
}
