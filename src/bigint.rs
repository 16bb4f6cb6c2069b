use crate::util::{ipv6_octets, IPV6_LEN};
use crate::Error;
use axum::{extract::Path, Json};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv6Addr};

/// The 16 address bytes read as one big-endian number.
pub fn ipv6_to_big_int(addr: [u8; 16]) -> BigUint {
    BigUint::from_bytes_be(&addr)
}

/// Writes `n` into a 16-byte address, left-padded with zeros.
///
/// Values of 2^128 and above do not fit and are rejected with
/// [`Error::Overflow`] instead of being truncated.
pub fn big_int_to_ipv6(n: &BigUint) -> Result<[u8; 16], Error> {
    if n.bits() > 128 {
        return Err(Error::Overflow(n.clone()));
    }

    let bytes = n.to_bytes_be();
    let mut ip = [0u8; IPV6_LEN];
    ip[IPV6_LEN - bytes.len()..].copy_from_slice(&bytes);

    Ok(ip)
}

pub fn ip_to_big_int(addr: IpAddr) -> BigUint {
    ipv6_to_big_int(ipv6_octets(addr))
}

pub fn big_int_to_ipv6_addr(n: &BigUint) -> Result<Ipv6Addr, Error> {
    big_int_to_ipv6(n).map(Ipv6Addr::from)
}

/// `integer` is a decimal string; JSON numbers cannot carry 128 bits.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BigV6 {
    pub address: Ipv6Addr,
    pub integer: String,
}

impl TryFrom<BigUint> for BigV6 {
    type Error = Error;

    fn try_from(n: BigUint) -> Result<Self, Error> {
        Ok(Self {
            address: big_int_to_ipv6_addr(&n)?,
            integer: n.to_string(),
        })
    }
}

pub async fn to_int(Path(addr): Path<IpAddr>) -> Result<Json<BigV6>, Error> {
    let n = ip_to_big_int(addr);
    log::debug!("{} -> {}", addr, n);
    Ok(Json(BigV6::try_from(n)?))
}

pub async fn from_int(Path(n): Path<String>) -> Result<Json<BigV6>, Error> {
    let parsed = BigUint::parse_bytes(n.as_bytes(), 10).ok_or(Error::Parse(n))?;
    log::debug!("{} -> v6", parsed);
    Ok(Json(BigV6::try_from(parsed)?))
}
