use core::{fmt, net::Ipv6Addr};

use crate::error::FieldErrorKind;

pub mod checksum;
pub mod v6;

enum_with_unknown! {
    /// IP datagram encapsulated protocol.
    pub enum Protocol(u8) {
        HopByHop  = 0x00,
        Tcp       = 0x06,
        Udp       = 0x11,
        Icmpv6    = 0x3a,
        Ipv6NoNxt = 0x3b,
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Protocol::HopByHop => write!(f, "Hop-by-Hop"),
            Protocol::Tcp => write!(f, "TCP"),
            Protocol::Udp => write!(f, "UDP"),
            Protocol::Icmpv6 => write!(f, "ICMPv6"),
            Protocol::Ipv6NoNxt => write!(f, "IPv6-NoNxt"),
            Protocol::Unknown(id) => write!(f, "0x{id:02x}"),
        }
    }
}

pub trait Ipv6AddrExt: Sized {
    /// Construct an address from 16 network-order octets.
    ///
    /// # Panics
    /// The function panics if `data` is not sixteen octets long.
    fn from_bytes(data: &[u8]) -> Self;

    /// Parse the colon-hex form, compressed or not.
    fn from_readable(s: &str) -> Result<Self, FieldErrorKind>;
}

impl Ipv6AddrExt for Ipv6Addr {
    fn from_bytes(data: &[u8]) -> Self {
        let mut bytes = [0; 16];
        bytes.copy_from_slice(data);
        Ipv6Addr::from(bytes)
    }

    fn from_readable(s: &str) -> Result<Self, FieldErrorKind> {
        s.parse().map_err(|_| FieldErrorKind::ValueInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_roundtrip() {
        assert_eq!(Protocol::from(58), Protocol::Icmpv6);
        assert_eq!(u8::from(Protocol::Icmpv6), 58);
        assert_eq!(Protocol::from(0x99), Protocol::Unknown(0x99));
    }

    #[test]
    fn test_readable_addr() {
        let addr = Ipv6Addr::from_readable("2000:0:0:0:0:0:0:1234").unwrap();
        assert_eq!(addr, Ipv6Addr::new(0x2000, 0, 0, 0, 0, 0, 0, 0x1234));
        assert_eq!(Ipv6Addr::from_readable("2000::1234"), Ok(addr));
        assert_eq!(Ipv6Addr::from_readable("2000:::1"), Err(FieldErrorKind::ValueInvalid));
        assert_eq!(Ipv6Addr::from_readable("10.0.0.1"), Err(FieldErrorKind::ValueInvalid));
    }
}
