//! Regrouping of bit strings between group widths.
//!
//! The input is read as one big-endian bitstream made of each group's low
//! `from` bits and re-sliced into `to`-bit groups, most significant bit first.
//!
//! ```
//! use bech32key::bits::{from_base32, to_base32};
//! let symbols = to_base32(&[0xff]);
//! assert_eq!(symbols, vec![31, 28]);
//! assert_eq!(from_base32(&symbols).unwrap(), vec![0xff]);
//! ```

extern crate alloc;
use alloc::vec::Vec;

use crate::Error;

/// Regroups `data` from `from`-bit groups into `to`-bit groups.
///
/// With `pad`, a trailing partial group is zero-filled on the right. Without
/// it, the input must end on a group boundary up to fewer than `from` zero
/// bits.
///
/// # Examples
///
/// ```
/// use bech32key::bits::convert_bits;
/// assert_eq!(convert_bits(&[0x00, 0x01], 8, 5, true).unwrap(), vec![0, 0, 0, 16]);
/// assert_eq!(convert_bits(&[0, 0, 0, 16], 5, 8, false).unwrap(), vec![0x00, 0x01]);
/// ```
///
/// # Errors
///
/// [`Error::InvalidData`] if a width lies outside `1..=8`, if a group has
/// bits set above `from`, or if unpadded conversion leaves non-zero padding
/// bits. [`Error::InvalidLength`] if unpadded conversion leaves `from` or
/// more bits over.
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>, Error> {
    if !(1..=8).contains(&from) || !(1..=8).contains(&to) {
        return Err(Error::InvalidData);
    }
    if data.iter().any(|&value| u32::from(value) >> from != 0) {
        return Err(Error::InvalidData);
    }
    let mut out = Vec::with_capacity(regrouped_len(data.len(), from, to));
    let rest = regroup(data, from, to, &mut out);
    if pad {
        rest.pad_into(to, &mut out);
    } else if rest.bits >= from {
        return Err(Error::InvalidLength);
    } else if rest.padding(to) != 0 {
        return Err(Error::InvalidData);
    }
    Ok(out)
}

/// Splits bytes into five-bit symbols, zero-padding the last one.
#[must_use]
pub fn to_base32(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(base32_len(data.len()));
    regroup(data, 8, 5, &mut out).pad_into(5, &mut out);
    out
}

/// Joins five-bit symbols back into bytes.
///
/// # Errors
///
/// See [`convert_bits`] for the unpadded case.
pub fn from_base32(data: &[u8]) -> Result<Vec<u8>, Error> {
    convert_bits(data, 5, 8, false)
}

/// Number of symbols [`to_base32`] produces for `len` bytes.
#[must_use]
pub const fn base32_len(len: usize) -> usize {
    let bits = len * 8;
    if bits % 5 == 0 {
        bits / 5
    } else {
        (bits / 5) + 1
    }
}

const fn regrouped_len(len: usize, from: u32, to: u32) -> usize {
    (len * from as usize + to as usize - 1) / to as usize
}

/// Bits still held in the accumulator after the last complete group.
struct Rest {
    acc: u32,
    bits: u32,
}

impl Rest {
    fn padding(&self, to: u32) -> u32 {
        (self.acc << (to - self.bits)) & mask(to)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn pad_into(&self, to: u32, out: &mut Vec<u8>) {
        if self.bits > 0 {
            out.push(self.padding(to) as u8);
        }
    }
}

const fn mask(bits: u32) -> u32 {
    (1 << bits) - 1
}

#[allow(clippy::cast_possible_truncation)]
fn regroup(data: &[u8], from: u32, to: u32, out: &mut Vec<u8>) -> Rest {
    // never more than `to - 1` bits left over plus one fresh group
    let acc_mask = mask(from + to - 1);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for &value in data {
        acc = ((acc << from) | u32::from(value)) & acc_mask;
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & mask(to)) as u8);
        }
    }
    Rest { acc, bits }
}
