use crate::util::ipv4_octets;
use crate::Error;
use axum::{extract::Path, Json};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Big-endian value of a 4-byte address.
pub fn ipv4_to_int(addr: [u8; 4]) -> u32 {
    u32::from_be_bytes(addr)
}

pub fn int_to_ipv4(n: u32) -> [u8; 4] {
    n.to_be_bytes()
}

/// Like [`ipv4_to_int`], accepting IPv4 or IPv4-mapped IPv6 addresses.
pub fn ip_to_int(addr: IpAddr) -> Result<u32, Error> {
    ipv4_octets(addr).map(ipv4_to_int)
}

pub fn int_to_ipv4_addr(n: u32) -> Ipv4Addr {
    Ipv4Addr::from(int_to_ipv4(n))
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct V4 {
    pub address: Ipv4Addr,
    pub integer: u32,
}

impl From<u32> for V4 {
    fn from(integer: u32) -> Self {
        Self {
            address: int_to_ipv4_addr(integer),
            integer,
        }
    }
}

pub async fn to_int(Path(addr): Path<IpAddr>) -> Result<Json<V4>, Error> {
    let integer = ip_to_int(addr)?;
    log::debug!("{} -> {}", addr, integer);
    Ok(Json(V4::from(integer)))
}

pub async fn from_int(Path(n): Path<u32>) -> Json<V4> {
    log::debug!("{} -> v4", n);
    Json(V4::from(n))
}
