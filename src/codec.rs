//! Encode and decode byte payloads as checksummed strings with a human-readable prefix.
//!
//! An encoded string is the human-readable part (HRP), the separator `1`, the
//! payload as five-bit symbols and six checksum symbols, all drawn from a
//! 32-character alphabet.
//!
//! # Encoding a key
//! ```
//! use bech32key::codec::{decode, encode};
//! let key = [0u8; 32];
//! let encoded = encode("npub", &key).unwrap();
//! assert_eq!(
//!     encoded,
//!     "npub1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqzqujme"
//! );
//! let (hrp, data) = decode(&encoded).unwrap();
//! assert_eq!(hrp, "npub");
//! assert_eq!(data, key);
//! ```
//!
//! # Upper case
//!
//! Upper-case strings fit the QR alphanumeric mode and decode to the same result.
//! ```
//! use bech32key::codec::{decode, encode_with, Case, Config};
//! let config = Config::DEFAULT.with_case(Case::Upper);
//! let encoded = encode_with("a", &[], &config).unwrap();
//! assert_eq!(encoded, "A12UEL5L");
//! assert_eq!(decode(&encoded).unwrap(), ("a".to_string(), vec![]));
//! ```

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::bits::{base32_len, from_base32, to_base32};
use crate::checksum::{create_checksum, verify_checksum};
use crate::constants::{
    CHARSET, CHARSET_REV, CHECKSUM_LENGTH, MAX_HRP_LENGTH, MAX_LENGTH, SEPARATOR,
};

/// Errors returned when encoding or decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The separator is missing or a data character is outside the alphabet.
    InvalidCharacter,
    /// The checksum doesn't validate.
    InvalidChecksum,
    /// Too few symbols for a checksum, a string over the length limit, or
    /// surplus symbols after the payload.
    InvalidLength,
    /// The human-readable part is empty, too long or contains characters
    /// outside `!`..=`~`.
    InvalidHrp,
    /// Non-zero padding bits, or a group wider than its bit width.
    InvalidData,
    /// Upper- and lower-case letters in the same string, with strict case checking.
    MixedCase,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidCharacter => write!(f, "invalid character"),
            Self::InvalidChecksum => write!(f, "invalid checksum"),
            Self::InvalidLength => write!(f, "invalid length"),
            Self::InvalidHrp => write!(f, "invalid human-readable part"),
            Self::InvalidData => write!(f, "invalid padding or group value"),
            Self::MixedCase => write!(f, "mixed-case string"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Letter case of encoded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// `npub1qqq…`
    Lower,
    /// `NPUB1QQQ…`
    Upper,
}

/// Options shared by [`encode_with`] and [`decode_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Letter case of encoded strings.
    pub case: Case,
    /// Longest string accepted on decode or produced on encode.
    pub max_length: usize,
    /// Decode mixed-case strings by folding them to lower case. When `false`
    /// they are rejected with [`Error::MixedCase`].
    pub fold_mixed_case: bool,
}

impl Config {
    /// Lower case, 90 characters, mixed case folded.
    pub const DEFAULT: Self = Self {
        case: Case::Lower,
        max_length: MAX_LENGTH,
        fold_mixed_case: true,
    };

    /// Sets the letter case of encoded strings.
    #[must_use]
    pub const fn with_case(mut self, case: Case) -> Self {
        self.case = case;
        self
    }

    /// Sets the longest string accepted or produced.
    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Reject mixed-case strings instead of folding them.
    #[must_use]
    pub const fn strict_case(mut self) -> Self {
        self.fold_mixed_case = false;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Length of the string [`encode`] produces for `len` payload bytes.
///
/// ```
/// assert_eq!(bech32key::codec::encoded_len("npub", 32), 63);
/// ```
#[must_use]
pub const fn encoded_len(hrp: &str, len: usize) -> usize {
    hrp.len() + 1 + base32_len(len) + CHECKSUM_LENGTH
}

/// Checks that `hrp` is 1 to 83 characters, each in `!`..=`~`.
///
/// # Errors
///
/// [`Error::InvalidHrp`] otherwise.
pub fn validate_hrp(hrp: &str) -> Result<(), Error> {
    if hrp.is_empty() || hrp.len() > MAX_HRP_LENGTH {
        return Err(Error::InvalidHrp);
    }
    if hrp.bytes().any(|b| !(33..=126).contains(&b)) {
        return Err(Error::InvalidHrp);
    }
    Ok(())
}

/// Encodes `data` under the prefix `hrp` with [`Config::DEFAULT`].
///
/// The prefix is lower-cased before it enters the checksum.
///
/// # Examples
///
/// ```
/// use bech32key::codec::encode;
/// assert_eq!(encode("a", &[]).unwrap(), "a12uel5l");
/// assert_eq!(encode("A", &[]).unwrap(), "a12uel5l");
/// ```
///
/// # Errors
///
/// [`Error::InvalidHrp`] for an invalid prefix and [`Error::InvalidLength`]
/// when the result would exceed 90 characters.
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, Error> {
    encode_with(hrp, data, &Config::DEFAULT)
}

/// Encodes `data` under the prefix `hrp`.
///
/// # Errors
///
/// [`Error::InvalidHrp`] for an invalid prefix and [`Error::InvalidLength`]
/// when the result would exceed `config.max_length`. Nothing is built
/// before both checks pass.
pub fn encode_with(hrp: &str, data: &[u8], config: &Config) -> Result<String, Error> {
    validate_hrp(hrp).map_err(|e| reject!(e, hrp = %hrp, "refusing to encode"))?;
    let len = encoded_len(hrp, data.len());
    if len > config.max_length {
        return Err(reject!(
            Error::InvalidLength,
            len,
            max_length = config.max_length,
            "encoded string too long"
        ));
    }

    let hrp = hrp.to_ascii_lowercase();
    let symbols = to_base32(data);
    let checksum = create_checksum(&hrp, &symbols);

    let mut encoded = String::with_capacity(len);
    encoded.push_str(&hrp);
    encoded.push(SEPARATOR);
    encoded.extend(
        symbols
            .iter()
            .chain(checksum.iter())
            .map(|&symbol| char::from(CHARSET[usize::from(symbol)])),
    );
    if config.case == Case::Upper {
        encoded.make_ascii_uppercase();
    }
    Ok(encoded)
}

/// Decodes a string into its lower-cased prefix and payload bytes with
/// [`Config::DEFAULT`].
///
/// The last `1` in the string is the separator. Letter case is folded, so
/// `npub1…` with an upper-case data part decodes like the all-lower-case form.
///
/// # Examples
///
/// ```
/// use bech32key::codec::{decode, Error};
/// assert_eq!(decode("A12UEL5L").unwrap(), ("a".to_string(), vec![]));
/// assert_eq!(decode("a12uel5m").unwrap_err(), Error::InvalidChecksum);
/// assert_eq!(decode("a2uel5l").unwrap_err(), Error::InvalidCharacter);
/// ```
///
/// # Errors
///
/// The first violated condition decides the error: a missing separator,
/// over-long input, an invalid prefix, unknown characters, fewer than six
/// symbols, a bad checksum, then invalid padding.
pub fn decode(s: &str) -> Result<(String, Vec<u8>), Error> {
    decode_with(s, &Config::DEFAULT)
}

/// Decodes a string into its lower-cased prefix and payload bytes.
///
/// # Errors
///
/// See [`decode`]; additionally [`Error::MixedCase`] when
/// `config.fold_mixed_case` is off.
pub fn decode_with(s: &str, config: &Config) -> Result<(String, Vec<u8>), Error> {
    let (hrp, data) = s
        .rsplit_once(SEPARATOR)
        .ok_or_else(|| reject!(Error::InvalidCharacter, "missing separator"))?;
    if s.len() > config.max_length {
        return Err(reject!(
            Error::InvalidLength,
            len = s.len(),
            max_length = config.max_length,
            "string too long"
        ));
    }
    validate_hrp(hrp).map_err(|e| reject!(e, hrp = %hrp, "invalid prefix"))?;
    if !config.fold_mixed_case && is_mixed_case(s) {
        return Err(reject!(Error::MixedCase, "mixed-case string"));
    }

    let symbols = data
        .chars()
        .map(symbol)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| reject!(Error::InvalidCharacter, "character outside the alphabet"))?;
    if symbols.len() < CHECKSUM_LENGTH {
        return Err(reject!(
            Error::InvalidLength,
            symbols = symbols.len(),
            "too short for a checksum"
        ));
    }

    let hrp = hrp.to_ascii_lowercase();
    if !verify_checksum(&hrp, &symbols) {
        return Err(reject!(Error::InvalidChecksum, hrp = %hrp, "checksum mismatch"));
    }
    let payload = from_base32(&symbols[..symbols.len() - CHECKSUM_LENGTH])
        .map_err(|e| reject!(e, "invalid payload bits"))?;
    Ok((hrp, payload))
}

fn symbol(c: char) -> Option<u8> {
    let c = c.to_ascii_lowercase();
    if !c.is_ascii() {
        return None;
    }
    u8::try_from(CHARSET_REV[c as usize]).ok()
}

fn is_mixed_case(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_lowercase()) && s.bytes().any(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_NPUB: &str = "npub1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqzqujme";

    fn unbounded() -> Config {
        Config::DEFAULT.with_max_length(usize::MAX)
    }

    #[test]
    fn test_zero_key() {
        let encoded = encode("npub", &[0; 32]).unwrap();
        assert_eq!(encoded.len(), 63);
        assert!(encoded.starts_with("npub1"));
        assert_eq!(encoded, ZERO_NPUB);
        assert_eq!(decode(&encoded).unwrap(), ("npub".into(), vec![0; 32]));
    }

    #[test]
    fn test_key_vectors() {
        let npub = "npub10elfcs4fr0l0r8af98jlmgdh9c8tcxjvz9qkw038js35mp4dma8qzvjptg";
        let npub_hex = "7e7e9c42a91bfef19fa929e5fda1b72e0ebc1a4c1141673e2794234d86addf4e";
        let nsec = "nsec1vl029mgpspedva04g90vltkh6fvh240zqtv9k0t9af8935ke9laqsnlfe5";
        let nsec_hex = "67dea2ed018072d675f5415ecfaed7d2597555e202d85b3d65ea4e58d2d92ffa";

        assert_eq!(encode("npub", &hex::decode(npub_hex).unwrap()).unwrap(), npub);
        assert_eq!(encode("nsec", &hex::decode(nsec_hex).unwrap()).unwrap(), nsec);

        let (hrp, data) = decode(npub).unwrap();
        assert_eq!(hrp, "npub");
        assert_eq!(hex::encode(data), npub_hex);
        let (hrp, data) = decode(nsec).unwrap();
        assert_eq!(hrp, "nsec");
        assert_eq!(hex::encode(data), nsec_hex);
    }

    #[test]
    fn test_alphabet_vector() {
        let (hrp, data) = decode("abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw").unwrap();
        assert_eq!(hrp, "abcdef");
        assert_eq!(hex::encode(data), "00443214c74254b635cf84653a56d7c675be77df");
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(encode("a", &[]).unwrap(), "a12uel5l");
        assert_eq!(decode("a12uel5l").unwrap(), ("a".into(), vec![]));
        assert_eq!(decode("A12UEL5L").unwrap(), ("a".into(), vec![]));
    }

    #[test]
    fn test_roundtrip() {
        for hrp in ["a", "npub", "nsec", "NPUB", "x1y", "!~"] {
            for len in [0, 1, 2, 5, 20, 32, 33, 64, 500] {
                let message = crate::test_utils::make_message(hrp, len);
                let encoded = encode_with(hrp, &message, &unbounded()).unwrap();
                let decoded = decode_with(&encoded, &unbounded()).unwrap();
                assert_eq!(decoded, (hrp.to_ascii_lowercase(), message));
            }
        }
    }

    #[test]
    fn test_hrp_containing_separator() {
        let encoded = encode("a1b", &[1, 2]).unwrap();
        assert_eq!(encoded, "a1b1qypqu9375k");
        assert_eq!(decode(&encoded).unwrap(), ("a1b".into(), vec![1, 2]));
    }

    #[test]
    fn test_single_character_corruption() {
        let key = crate::test_utils::make_message("Wolf", 32);
        let encoded = encode("npub", &key).unwrap();
        let data_start = encoded.rfind('1').unwrap() + 1;
        for i in data_start..encoded.len() {
            for &c in &CHARSET {
                if encoded.as_bytes()[i] == c {
                    continue;
                }
                let mut corrupted = encoded.clone().into_bytes();
                corrupted[i] = c;
                let corrupted = String::from_utf8(corrupted).unwrap();
                assert_eq!(
                    decode(&corrupted).unwrap_err(),
                    Error::InvalidChecksum,
                    "{corrupted}"
                );
            }
        }
    }

    #[test]
    fn test_wrong_prefix() {
        let swapped = ZERO_NPUB.replacen("npub", "nsec", 1);
        assert_eq!(decode(&swapped).unwrap_err(), Error::InvalidChecksum);
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(decode("npubqqqqqqqq").unwrap_err(), Error::InvalidCharacter);
        assert_eq!(decode("").unwrap_err(), Error::InvalidCharacter);
        // no separator wins over the length limit
        assert_eq!(decode(&"q".repeat(100)).unwrap_err(), Error::InvalidCharacter);
        assert_eq!(
            decode_with(&"q".repeat(100), &Config::DEFAULT.strict_case()).unwrap_err(),
            Error::InvalidCharacter
        );
    }

    #[test]
    fn test_unknown_character() {
        // 'b', 'i' and 'o' are not in the alphabet
        assert_eq!(
            decode(&ZERO_NPUB.replace("zqujme", "zqujmb")).unwrap_err(),
            Error::InvalidCharacter
        );
        assert_eq!(decode("a1qqiqqqqq").unwrap_err(), Error::InvalidCharacter);
        assert_eq!(decode("a1qqoqqqqq").unwrap_err(), Error::InvalidCharacter);
        assert_eq!(decode("a1qq₿qqqq").unwrap_err(), Error::InvalidCharacter);
    }

    #[test]
    fn test_too_short() {
        assert_eq!(decode("a1").unwrap_err(), Error::InvalidLength);
        assert_eq!(decode("a1qqqqq").unwrap_err(), Error::InvalidLength);
        assert_eq!(decode("a12uel5").unwrap_err(), Error::InvalidLength);
    }

    #[test]
    fn test_invalid_padding() {
        // two payload symbols with both surplus bits set
        assert_eq!(decode("a1llttal5m").unwrap_err(), Error::InvalidData);
        // one payload symbol is less than a byte
        assert_eq!(decode("a1q3g6mn3").unwrap_err(), Error::InvalidLength);
    }

    #[test]
    fn test_invalid_hrp() {
        assert_eq!(encode("", &[1]).unwrap_err(), Error::InvalidHrp);
        assert_eq!(encode("a b", &[1]).unwrap_err(), Error::InvalidHrp);
        assert_eq!(encode("ñpub", &[1]).unwrap_err(), Error::InvalidHrp);
        assert_eq!(encode("a\x7f", &[1]).unwrap_err(), Error::InvalidHrp);
        assert_eq!(
            encode(&"a".repeat(84), &[]).unwrap_err(),
            Error::InvalidHrp
        );
        assert_eq!(decode("1qqqqqqqq").unwrap_err(), Error::InvalidHrp);
        assert_eq!(decode("a b1qqqqqq").unwrap_err(), Error::InvalidHrp);
    }

    #[test]
    fn test_length_limit() {
        let longest = "a".repeat(83);
        let encoded = encode(&longest, &[]).unwrap();
        assert_eq!(encoded.len(), 90);
        assert_eq!(decode(&encoded).unwrap(), (longest, vec![]));

        assert_eq!(encode("npub", &[0; 49]).unwrap().len(), 90);
        assert_eq!(encode("npub", &[0; 50]).unwrap_err(), Error::InvalidLength);

        let long = encode_with("npub", &[7; 64], &unbounded()).unwrap();
        assert_eq!(long.len(), encoded_len("npub", 64));
        assert_eq!(decode(&long).unwrap_err(), Error::InvalidLength);
        assert_eq!(
            decode_with(&long, &unbounded()).unwrap(),
            ("npub".into(), vec![7; 64])
        );
    }

    #[test]
    fn test_case_folding() {
        let (hrp, data) = ZERO_NPUB.split_at(5);
        let upper_data = format!("{hrp}{}", data.to_ascii_uppercase());
        assert_eq!(decode(&upper_data).unwrap(), decode(ZERO_NPUB).unwrap());
        assert_eq!(
            decode(&ZERO_NPUB.to_ascii_uppercase()).unwrap(),
            decode(ZERO_NPUB).unwrap()
        );
    }

    #[test]
    fn test_strict_case() {
        let strict = Config::DEFAULT.strict_case();
        let (hrp, data) = ZERO_NPUB.split_at(5);
        let mixed = format!("{hrp}{}", data.to_ascii_uppercase());
        assert_eq!(decode_with(&mixed, &strict).unwrap_err(), Error::MixedCase);
        assert_eq!(
            decode_with(&ZERO_NPUB.to_ascii_uppercase(), &strict).unwrap(),
            ("npub".into(), vec![0; 32])
        );
        assert!(decode_with(ZERO_NPUB, &strict).is_ok());
    }

    #[test]
    fn test_upper_case_output() {
        let upper = Config::DEFAULT.with_case(Case::Upper);
        let encoded = encode_with("npub", &[0; 32], &upper).unwrap();
        assert_eq!(encoded, ZERO_NPUB.to_ascii_uppercase());
        assert_eq!(decode(&encoded).unwrap(), ("npub".into(), vec![0; 32]));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(Error::InvalidChecksum.to_string(), "invalid checksum");
        assert_eq!(Error::MixedCase.to_string(), "mixed-case string");
    }
}
