//! 256-byte authorization key with length and hex validation.

use std::fmt;

use super::EncodeError;

/// Length of a Telegram authorization key in bytes.
pub const AUTH_KEY_LEN: usize = 256;

/// A 256-byte authorization key.
///
/// The key is opaque to the encoder and is carried into the session payload
/// verbatim. `Debug` redacts the key material.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthKey(Box<[u8; AUTH_KEY_LEN]>);

impl AuthKey {
    /// Create an AuthKey from a 256-byte array.
    pub fn from_bytes(bytes: [u8; AUTH_KEY_LEN]) -> Self {
        Self(Box::new(bytes))
    }

    /// Create an AuthKey from a slice.
    pub fn from_slice(slice: &[u8]) -> Result<Self, EncodeError> {
        if slice.len() != AUTH_KEY_LEN {
            return Err(EncodeError::InvalidKeyLength(slice.len()));
        }
        let mut bytes = [0u8; AUTH_KEY_LEN];
        bytes.copy_from_slice(slice);
        Ok(Self::from_bytes(bytes))
    }

    /// Create an AuthKey from a hex-encoded string.
    ///
    /// Fails on malformed hex (odd length, non-hex characters) before the
    /// length check, so `"zz"` reports a hex error rather than a length one.
    pub fn from_hex(s: &str) -> Result<Self, EncodeError> {
        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes)
    }

    /// Return the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; AUTH_KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthKey({} bytes)", AUTH_KEY_LEN)
    }
}
