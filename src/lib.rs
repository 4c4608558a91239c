//! `bech32key` renders fixed-length binary key material as short,
//! human-typable strings with a human-readable prefix and an error-detecting
//! checksum, in the original bech32 format.
//!
//! # Encode a key
//! ```
//! let key = [0u8; 32];
//! let encoded = bech32key::encode("npub", &key).unwrap();
//! assert_eq!(encoded.len(), 63);
//! assert!(encoded.starts_with("npub1"));
//! ```
//!
//! # Decode a key
//!
//! Decoding returns the lower-cased prefix and the payload bytes. What the
//! bytes mean is up to the caller.
//! ```
//! let (hrp, key) =
//!     bech32key::decode("npub10elfcs4fr0l0r8af98jlmgdh9c8tcxjvz9qkw038js35mp4dma8qzvjptg")
//!         .unwrap();
//! assert_eq!(hrp, "npub");
//! assert_eq!(key.len(), 32);
//! ```
//!
//! # Typing errors are caught
//! ```
//! let typo = "npub10elfcs4fr0l0r8af98jlmgdh9c8tcxjvz9qkw038js35mp4dma8qzvjpth";
//! assert_eq!(
//!     bech32key::decode(typo).unwrap_err(),
//!     bech32key::Error::InvalidChecksum
//! );
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

macro_rules! reject {
    ($err:expr, $($field:tt)*) => {{
        let err = $err;
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %err, $($field)*);
        err
    }};
}

pub mod bits;
pub mod checksum;
pub mod codec;
pub mod constants;

pub use self::codec::decode;
pub use self::codec::encode;
pub use self::codec::Case;
pub use self::codec::Config;
pub use self::codec::Error;
