//! The six-symbol BCH checksum binding the human-readable part to the data.
//!
//! ```
//! use bech32key::checksum::{create_checksum, verify_checksum};
//! let data = [0, 1, 2, 3];
//! let checksum = create_checksum("npub", &data);
//! let mut all = data.to_vec();
//! all.extend_from_slice(&checksum);
//! assert!(verify_checksum("npub", &all));
//! assert!(!verify_checksum("nsec", &all));
//! ```

extern crate alloc;
use alloc::vec::Vec;

use crate::constants::{BECH32_CONST, CHECKSUM_LENGTH, GENERATORS};

/// Expands the human-readable part into symbols: the high three bits of each
/// character, a zero, then the low five bits of each character.
#[must_use]
pub fn hrp_expand(hrp: &str) -> Vec<u8> {
    let mut expanded = Vec::with_capacity(hrp.len() * 2 + 1);
    expanded.extend(hrp.bytes().map(|b| b >> 5));
    expanded.push(0);
    expanded.extend(hrp.bytes().map(|b| b & 0x1f));
    expanded
}

/// Remainder of the symbol sequence over the generator polynomial. Only the
/// low 30 bits are meaningful.
#[must_use]
pub fn polymod<I: IntoIterator<Item = u8>>(values: I) -> u32 {
    let mut chk: u32 = 1;
    for value in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ u32::from(value);
        for (i, generator) in GENERATORS.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

/// Computes the checksum symbols for `hrp` and the payload symbols `data`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn create_checksum(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let values = hrp_expand(hrp)
        .into_iter()
        .chain(data.iter().copied())
        .chain([0; CHECKSUM_LENGTH]);
    let residue = polymod(values) ^ BECH32_CONST;
    let mut checksum = [0; CHECKSUM_LENGTH];
    for (i, symbol) in checksum.iter_mut().enumerate() {
        *symbol = ((residue >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
    }
    checksum
}

/// Checks `data`, payload symbols followed by the checksum, against `hrp`.
#[must_use]
pub fn verify_checksum(hrp: &str, data: &[u8]) -> bool {
    let values = hrp_expand(hrp).into_iter().chain(data.iter().copied());
    polymod(values) == BECH32_CONST
}
