//! Fixed tables and limits of the encoding.

/// The data-part alphabet. A symbol's value is its index.
pub const CHARSET: [u8; 32] = *b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Inverse of [`CHARSET`] over ASCII, `-1` where a character is not in the alphabet.
///
/// Only lower-case letters map; callers fold case before the lookup.
#[rustfmt::skip]
pub const CHARSET_REV: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    15, -1, 10, 17, 21, 20, 26, 30,  7,  5, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, 29, -1, 24, 13, 25,  9,  8, 23, -1, 18, 22, 31, 27, 19, -1,
     1,  0,  3, 16, 11, 28, 12, 14,  6,  4,  2, -1, -1, -1, -1, -1,
];

/// Separates the human-readable part from the data part. The last occurrence wins.
pub const SEPARATOR: char = '1';

/// Generator constants of the BCH code over GF(32).
pub const GENERATORS: [u32; 5] = [
    0x3b6a_57b2,
    0x2650_8e6d,
    0x1ea1_19fa,
    0x3d42_33dd,
    0x2a14_62b3,
];

/// The residue a valid string leaves. Fixed for this checksum variant.
pub const BECH32_CONST: u32 = 1;

/// Number of trailing checksum symbols.
pub const CHECKSUM_LENGTH: usize = 6;

/// Longest accepted human-readable part.
pub const MAX_HRP_LENGTH: usize = 83;

/// Default upper bound on the total length of an encoded string.
pub const MAX_LENGTH: usize = 90;
