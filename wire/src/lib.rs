#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod traits;
pub use self::traits::{Icmpv6Message, WireBuild, WireParse};

mod error;
pub use self::error::{
    BuildError, BuildErrorKind, FieldError, FieldErrorKind, ParseError, ParseErrorKind,
};

pub mod detect;

mod ethernet;
pub use self::ethernet::{
    Addr as EthernetAddr, Frame as EthernetFrame, Protocol as EthernetProtocol,
    HEADER_LEN as ETHERNET_HEADER_LEN,
};

mod icmp;
pub use self::icmp::{
    ndp::{Body as NdpBody, Header as NdpHeader, Shape as NdpShape},
    v6::{
        Body as Icmpv6Body, Header as Icmpv6Header, LinkLayerOpt as Icmpv6LinkLayerOpt,
        Neighbor as Icmpv6Neighbor, OptType as Icmpv6OptType,
    },
    Message as Icmpv6Type, NeighborFlags, HEADER_LEN as ICMPV6_HEADER_LEN,
    ND_HEADER_LEN,
};

pub mod ip;
pub use self::ip::{
    v6::{Packet as Ipv6Packet, HEADER_LEN as IPV6_HEADER_LEN},
    Protocol as IpProtocol,
};

/// Smallest frame that can carry an ICMPv6 message: Ethernet, IPv6 and the
/// four-byte type/code/checksum prefix.
pub const MIN_PACKET_LEN: usize = ETHERNET_HEADER_LEN + IPV6_HEADER_LEN + ICMPV6_HEADER_LEN;

mod field {
    use core::ops::{Range, RangeFrom};

    pub type Field = Range<usize>;
    pub type Rest = RangeFrom<usize>;
}

mod prelude {
    pub use super::{error::*, traits::*};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ends<T> {
    pub src: T,
    pub dst: T,
}
