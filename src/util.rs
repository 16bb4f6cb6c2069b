use crate::Error;
use std::net::IpAddr;

pub const IPV4_LEN: usize = 4;
pub const IPV6_LEN: usize = 16;

/// Copies a 4-byte slice into an IPv4 octet array.
pub fn v4_octets(octets: &[u8]) -> Result<[u8; IPV4_LEN], Error> {
    octets.try_into().map_err(|_| Error::Length {
        expected: IPV4_LEN,
        actual: octets.len(),
    })
}

/// Copies a 16-byte slice into an IPv6 octet array.
pub fn v6_octets(octets: &[u8]) -> Result<[u8; IPV6_LEN], Error> {
    octets.try_into().map_err(|_| Error::Length {
        expected: IPV6_LEN,
        actual: octets.len(),
    })
}

/// 4-byte form of `addr`. IPv4-mapped IPv6 addresses are unmapped.
pub fn ipv4_octets(addr: IpAddr) -> Result<[u8; IPV4_LEN], Error> {
    match addr {
        IpAddr::V4(addr) => Ok(addr.octets()),
        IpAddr::V6(v6) => v6
            .to_ipv4_mapped()
            .map(|v4| v4.octets())
            .ok_or(Error::Family(addr)),
    }
}

/// 16-byte form of `addr`. IPv4 addresses become `::ffff:a.b.c.d`.
pub fn ipv6_octets(addr: IpAddr) -> [u8; IPV6_LEN] {
    match addr {
        IpAddr::V4(addr) => addr.to_ipv6_mapped().octets(),
        IpAddr::V6(addr) => addr.octets(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn slice_lengths() {
        assert_eq!(v4_octets(&[10, 0, 0, 1]), Ok([10, 0, 0, 1]));
        assert_eq!(
            v4_octets(&[0; 16]),
            Err(Error::Length {
                expected: 4,
                actual: 16
            })
        );
        assert_eq!(v6_octets(&[0xff; 16]), Ok([0xff; 16]));
        assert_eq!(
            v6_octets(&[1, 2, 3, 4]),
            Err(Error::Length {
                expected: 16,
                actual: 4
            })
        );
        assert!(v6_octets(&[]).is_err());
    }

    #[test]
    fn family_normalization() {
        let v4 = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(ipv4_octets(v4), Ok([192, 168, 1, 1]));

        let mapped: IpAddr = "::ffff:192.168.1.1".parse().unwrap();
        assert_eq!(ipv4_octets(mapped), Ok([192, 168, 1, 1]));

        let v6 = IpAddr::V6(Ipv6Addr::LOCALHOST);
        assert_eq!(ipv4_octets(v6), Err(Error::Family(v6)));

        assert_eq!(ipv6_octets(v4), mapped_octets());
        assert_eq!(ipv6_octets(v6)[15], 1);
    }

    fn mapped_octets() -> [u8; 16] {
        [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 192, 168, 1, 1]
    }
}
