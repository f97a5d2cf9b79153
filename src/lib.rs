//! tgsess: portable Telegram session string encoder
//!
//! Packs a 256-byte authorization key together with data-center routing
//! information into a single printable string that Telegram string-session
//! clients accept. Encoding only; there is no decoder, no network I/O, and
//! no persistence.

pub mod session;

// Re-export session types
pub use session::{
    create_session_string, encode, resolve_dc_addr, AuthKey, EncodeError, SessionEncoder,
    SessionError, AUTH_KEY_LEN, SESSION_PORT, SESSION_VERSION,
};
