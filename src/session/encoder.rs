//! Session payload packing and text encoding.

use std::fmt;
use std::net::IpAddr;

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use tracing::trace;

use super::dc::{pack_addr, resolve_dc_addr};
use super::key::{AuthKey, AUTH_KEY_LEN};
use super::{EncodeError, SessionError};

/// Version character prepended to every session string.
pub const SESSION_VERSION: char = '1';

/// Server port baked into the payload. Never configurable.
pub const SESSION_PORT: u16 = 443;

/// Encoder for a validated (authorization key, data center) pair.
///
/// Construction validates the DC ID eagerly, so an encoder in hand always
/// produces a well-formed session string. The transformation is pure: the
/// same inputs yield the same string on every call.
pub struct SessionEncoder {
    auth_key: AuthKey,
    dc_id: u8,
    addr: IpAddr,
}

impl SessionEncoder {
    /// Create an encoder, resolving the DC ID against the address table.
    pub fn new(auth_key: AuthKey, dc_id: u8) -> Result<Self, EncodeError> {
        let addr = resolve_dc_addr(dc_id)?;
        Ok(Self {
            auth_key,
            dc_id,
            addr,
        })
    }

    /// Return the DC ID.
    pub fn dc_id(&self) -> u8 {
        self.dc_id
    }

    /// Return the resolved server address.
    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    /// Render the session string: version char + URL-safe base64 payload.
    pub fn to_string_session(&self) -> String {
        let payload = self.build_payload();
        trace!(dc_id = self.dc_id, payload_len = payload.len(), "encoding session string");
        format!("{}{}", SESSION_VERSION, URL_SAFE.encode(&payload))
    }

    /// Build the binary payload, big-endian, no padding between fields.
    ///
    /// ```text
    /// [dc_id:1][ip:4|16][port:2 BE][auth_key:256]
    /// ```
    fn build_payload(&self) -> Vec<u8> {
        let ip_bytes = pack_addr(&self.addr);
        let mut payload = Vec::with_capacity(1 + ip_bytes.len() + 2 + AUTH_KEY_LEN);
        payload.push(self.dc_id);
        payload.extend_from_slice(&ip_bytes);
        payload.extend_from_slice(&SESSION_PORT.to_be_bytes());
        payload.extend_from_slice(self.auth_key.as_bytes());
        payload
    }
}

impl fmt::Display for SessionEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dc{} ({})", self.dc_id, self.addr)
    }
}

impl fmt::Debug for SessionEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionEncoder")
            .field("dc_id", &self.dc_id)
            .field("addr", &self.addr)
            .finish_non_exhaustive()
    }
}

/// Encode a session string from raw key bytes and a DC ID.
pub fn encode(auth_key: &[u8], dc_id: u8) -> Result<String, EncodeError> {
    let key = AuthKey::from_slice(auth_key)?;
    let encoder = SessionEncoder::new(key, dc_id)?;
    Ok(encoder.to_string_session())
}

/// Encode a session string from a hex-encoded key and a DC ID.
///
/// Convenience entry point: decodes the hex, delegates to [`encode`], and
/// wraps any failure with session-creation context.
pub fn create_session_string(auth_key_hex: &str, dc_id: u8) -> Result<String, SessionError> {
    let key = AuthKey::from_hex(auth_key_hex)?;
    let encoder = SessionEncoder::new(key, dc_id)?;
    Ok(encoder.to_string_session())
}
