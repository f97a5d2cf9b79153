//! Telegram Session String Encoding
//!
//! A session string bundles the client's authorization key with the routing
//! information for its home data center. The wire layout is fixed:
//!
//! ```text
//! "1" + urlsafe_base64( [dc_id:1][ip:4|16][port:2 BE][auth_key:256] )
//! ```
//!
//! The IP field is sized by the packed length of the resolved address, so an
//! IPv6 table entry would widen the field to 16 bytes without changing the
//! layout's structure. The port is always 443.

mod dc;
mod encoder;
mod key;

use thiserror::Error;

pub use dc::resolve_dc_addr;
pub use encoder::{create_session_string, encode, SessionEncoder, SESSION_PORT, SESSION_VERSION};
pub use key::{AuthKey, AUTH_KEY_LEN};

/// Errors that can occur while encoding a session string.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("unknown data center ID: {0}")]
    UnknownDataCenter(u8),

    #[error("invalid auth_key length: expected {AUTH_KEY_LEN}, got {0}")]
    InvalidKeyLength(usize),

    #[error("invalid hex auth_key: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Errors surfaced by the convenience entry point.
///
/// Wraps [`EncodeError`] with call-site context so callers that only see the
/// message still know which operation failed.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("error creating session: {0}")]
    Create(#[from] EncodeError),
}
