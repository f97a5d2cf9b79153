//! Static data-center address table.

use std::net::{IpAddr, Ipv4Addr};

use super::EncodeError;

/// Production data-center addresses, keyed by DC ID.
///
/// The table is closed: there is no discovery and no override mechanism, so
/// any ID outside it is a caller error. Entries are stored as [`IpAddr`] so a
/// future IPv6 entry needs no structural change.
const DC_ADDRS: [(u8, IpAddr); 5] = [
    (1, IpAddr::V4(Ipv4Addr::new(149, 154, 175, 53))),
    (2, IpAddr::V4(Ipv4Addr::new(149, 154, 167, 51))),
    (3, IpAddr::V4(Ipv4Addr::new(149, 154, 175, 100))),
    (4, IpAddr::V4(Ipv4Addr::new(149, 154, 167, 91))),
    (5, IpAddr::V4(Ipv4Addr::new(91, 108, 56, 130))),
];

/// Resolve a DC ID to its server address.
pub fn resolve_dc_addr(dc_id: u8) -> Result<IpAddr, EncodeError> {
    DC_ADDRS
        .iter()
        .find(|(id, _)| *id == dc_id)
        .map(|(_, addr)| *addr)
        .ok_or(EncodeError::UnknownDataCenter(dc_id))
}

/// Pack an address into its network-order byte representation.
///
/// 4 bytes for IPv4, 16 for IPv6, one byte per octet, big-endian.
pub(super) fn pack_addr(addr: &IpAddr) -> Vec<u8> {
    match addr {
        IpAddr::V4(v4) => v4.octets().to_vec(),
        IpAddr::V6(v6) => v6.octets().to_vec(),
    }
}
