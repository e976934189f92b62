use core::{fmt, net::Ipv6Addr};

use bitflags::bitflags;
use byteorder::{ByteOrder, NetworkEndian};

use crate::ip::Ipv6AddrExt;

pub mod ndp;
pub mod v6;

enum_with_unknown! {
    /// Internet protocol control message type.
    pub enum Message(u8) {
        /// Destination Unreachable.
        DstUnreachable  = 0x01,
        /// Packet Too Big.
        PktTooBig       = 0x02,
        /// Time Exceeded.
        TimeExceeded    = 0x03,
        /// Parameter Problem.
        ParamProblem    = 0x04,
        /// Echo Request
        EchoRequest     = 0x80,
        /// Echo Reply
        EchoReply       = 0x81,
        /// Router Solicitation
        RouterSolicit   = 0x85,
        /// Router Advertisement
        RouterAdvert    = 0x86,
        /// Neighbor Solicitation
        NeighborSolicit = 0x87,
        /// Neighbor Advertisement
        NeighborAdvert  = 0x88,
        /// Redirect
        Redirect        = 0x89,
    }
}

impl Message {
    /// Per [RFC 4443 § 2.1] ICMPv6 message types with the highest order
    /// bit set are informational messages while message types without
    /// the highest order bit set are error messages.
    ///
    /// [RFC 4443 § 2.1]: https://tools.ietf.org/html/rfc4443#section-2.1
    pub fn is_error(&self) -> bool {
        (u8::from(*self) & 0x80) != 0x80
    }

    /// Return a boolean value indicating if the given message type
    /// is an [NDISC] message type.
    ///
    /// [NDISC]: https://tools.ietf.org/html/rfc4861
    pub const fn is_nd(&self) -> bool {
        matches!(
            self,
            Message::RouterSolicit
                | Message::RouterAdvert
                | Message::NeighborSolicit
                | Message::NeighborAdvert
                | Message::Redirect
        )
    }

    /// Whether the message body starts with the reserved word and the
    /// target address.
    pub const fn has_target(&self) -> bool {
        matches!(self, Message::NeighborSolicit | Message::NeighborAdvert)
    }
}

impl Default for Message {
    fn default() -> Self {
        Message::Unknown(0)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Message::DstUnreachable => write!(f, "destination unreachable"),
            Message::PktTooBig => write!(f, "packet too big"),
            Message::TimeExceeded => write!(f, "time exceeded"),
            Message::ParamProblem => write!(f, "parameter problem"),
            Message::EchoReply => write!(f, "echo reply"),
            Message::EchoRequest => write!(f, "echo request"),
            Message::RouterSolicit => write!(f, "router solicitation"),
            Message::RouterAdvert => write!(f, "router advertisement"),
            Message::NeighborSolicit => write!(f, "neighbor solicitation"),
            Message::NeighborAdvert => write!(f, "neighbor advert"),
            Message::Redirect => write!(f, "redirect"),
            Message::Unknown(id) => write!(f, "{id}"),
        }
    }
}

bitflags! {
    /// Router / Solicited / Override flags, the top bits of the reserved
    /// word of a Neighbor Advertisement.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NeighborFlags: u32 {
        const ROUTER    = 0x8000_0000;
        const SOLICITED = 0x4000_0000;
        const OVERRIDE  = 0x2000_0000;
    }
}

// Ranges and constants describing key boundaries in the ICMPv6 header.
pub(crate) mod field {
    use crate::field::*;

    // ICMPv6: See https://tools.ietf.org/html/rfc4443
    pub const TYPE: usize = 0;
    pub const CODE: usize = 1;
    pub const CHECKSUM: Field = 2..4;

    // NDISC: See https://tools.ietf.org/html/rfc4861
    pub const RESERVED: Field = 4..8;
    pub const TARGET_ADDR: Field = 8..24;

    // Source/Target Link-layer Address option right after the target.
    pub const OPT_TYPE: usize = 24;
    pub const OPT_LEN: usize = 25;
    pub const OPT_LLADDR: Field = 26..32;
}
/// Type, code and checksum.
pub const HEADER_LEN: usize = field::CHECKSUM.end;
/// Type, code, checksum, reserved word and target address.
pub const ND_HEADER_LEN: usize = field::TARGET_ADDR.end;

pub(crate) struct RawPacket<T: ?Sized>(pub(crate) T);

wire!(impl RawPacket {
    msg_type/set_msg_type: Message =>
        |data| Message::from(data[field::TYPE]);
        |data, value| data[field::TYPE] = value.into();

    msg_code/set_msg_code: u8 =>
        |data| data[field::CODE];
        |data, value| data[field::CODE] = value;

    checksum/set_checksum: u16 =>
        |data| NetworkEndian::read_u16(&data[field::CHECKSUM]);
        |data, value| NetworkEndian::write_u16(&mut data[field::CHECKSUM], value);

    reserved/set_reserved: u32 =>
        |data| NetworkEndian::read_u32(&data[field::RESERVED]);
        |data, value| NetworkEndian::write_u32(&mut data[field::RESERVED], value);

    target_addr/set_target_addr: Ipv6Addr =>
        |data| Ipv6Addr::from_bytes(&data[field::TARGET_ADDR]);
        |data, value| data[field::TARGET_ADDR].copy_from_slice(&value.octets());
});
