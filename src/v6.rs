use crate::util::ipv6_octets;
use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv6Addr};

/// Splits a 16-byte address into big-endian `(high, low)` halves.
pub fn ipv6_to_int(addr: [u8; 16]) -> (u64, u64) {
    let mut high = [0u8; 8];
    let mut low = [0u8; 8];

    high.copy_from_slice(&addr[..8]);
    low.copy_from_slice(&addr[8..]);

    (u64::from_be_bytes(high), u64::from_be_bytes(low))
}

/// Joins big-endian `high` and `low` halves into a 16-byte address.
pub fn int_to_ipv6(high: u64, low: u64) -> [u8; 16] {
    let mut ip = [0u8; 16];

    ip[..8].copy_from_slice(&high.to_be_bytes());
    ip[8..].copy_from_slice(&low.to_be_bytes());

    ip
}

/// Like [`ipv6_to_int`]; IPv4 addresses are converted in their mapped form.
pub fn ip_to_int_pair(addr: IpAddr) -> (u64, u64) {
    ipv6_to_int(ipv6_octets(addr))
}

pub fn int_to_ipv6_addr(high: u64, low: u64) -> Ipv6Addr {
    Ipv6Addr::from(int_to_ipv6(high, low))
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct V6 {
    pub address: Ipv6Addr,
    pub high: u64,
    pub low: u64,
}

impl From<(u64, u64)> for V6 {
    fn from((high, low): (u64, u64)) -> Self {
        Self {
            address: int_to_ipv6_addr(high, low),
            high,
            low,
        }
    }
}

pub async fn to_int(Path(addr): Path<IpAddr>) -> Json<V6> {
    let pair = ip_to_int_pair(addr);
    log::debug!("{} -> {:?}", addr, pair);
    Json(V6::from(pair))
}

pub async fn from_int(Path(pair): Path<(u64, u64)>) -> Json<V6> {
    log::debug!("{:?} -> v6", pair);
    Json(V6::from(pair))
}
