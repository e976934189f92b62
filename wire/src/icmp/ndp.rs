use alloc::{format, string::String, vec::Vec};
use core::{mem, net::Ipv6Addr};

use super::{Message, NeighborFlags, RawPacket, HEADER_LEN, ND_HEADER_LEN};
use crate::{ip::Ipv6AddrExt, prelude::*};

/// Which fixed fields follow the checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Reserved word and target address, data from offset 24.
    Full,
    /// Nothing, data from offset 4.
    Bare,
}

impl Shape {
    /// Neighbor Solicitation and Advertisement carry a target; every other
    /// type is read bare.
    pub const fn for_message(msg_type: Message) -> Self {
        if msg_type.has_target() {
            Shape::Full
        } else {
            Shape::Bare
        }
    }

    /// Offset of the trailing data. It always equals the length of the
    /// fixed fields the shape declares.
    pub const fn header_len(self) -> usize {
        match self {
            Shape::Full => ND_HEADER_LEN,
            Shape::Bare => HEADER_LEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Body {
    Full {
        reserved: u32,
        target_addr: Ipv6Addr,
        data: Vec<u8>,
    },
    Bare {
        data: Vec<u8>,
    },
}

impl Body {
    pub fn new(shape: Shape) -> Self {
        match shape {
            Shape::Full => Body::Full {
                reserved: 0,
                target_addr: Ipv6Addr::UNSPECIFIED,
                data: Vec::new(),
            },
            Shape::Bare => Body::Bare { data: Vec::new() },
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Body::Full { .. } => Shape::Full,
            Body::Bare { .. } => Shape::Bare,
        }
    }
}

/// A Neighbor Discovery message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header {
    msg_type: Message,
    code: u8,
    checksum: u16,
    body: Body,
}

impl Default for Header {
    fn default() -> Self {
        Header::new(Message::NeighborSolicit, 0)
    }
}

impl Header {
    pub fn new(msg_type: Message, code: u8) -> Self {
        Header {
            msg_type,
            code,
            checksum: 0,
            body: Body::new(Shape::for_message(msg_type)),
        }
    }

    /// Create a Neighbor Solicitation or Advertisement. Any other type is
    /// handed back with `Unsupported`.
    pub fn with_target(msg_type: Message, target_addr: Ipv6Addr) -> Result<Self, FieldError<Message>> {
        if Shape::for_message(msg_type) != Shape::Full {
            return Err(FieldErrorKind::Unsupported.with(msg_type));
        }
        Ok(Header {
            body: Body::Full {
                reserved: 0,
                target_addr,
                data: Vec::new(),
            },
            ..Header::new(msg_type, 0)
        })
    }

    /// Decode `raw` with an explicitly chosen body shape.
    pub fn parse_as(shape: Shape, raw: &[u8]) -> Result<Self, ParseError<&[u8]>> {
        if raw.len() < shape.header_len() {
            return Err(ParseErrorKind::PacketTooShort.with(raw));
        }
        let packet = RawPacket(raw);
        let data = raw[shape.header_len()..].to_vec();

        let body = match shape {
            Shape::Full => Body::Full {
                reserved: packet.reserved(),
                target_addr: packet.target_addr(),
                data,
            },
            Shape::Bare => Body::Bare { data },
        };

        Ok(Header {
            msg_type: packet.msg_type(),
            code: packet.msg_code(),
            checksum: packet.checksum(),
            body,
        })
    }

    pub fn msg_type(&self) -> Message {
        self.msg_type
    }

    /// Set the type, switching the body to the shape `value` calls for.
    /// Trailing data is kept; the reserved word and target are dropped on
    /// the way to the bare shape.
    pub fn set_msg_type(&mut self, value: Message) {
        self.msg_type = value;
        let shape = Shape::for_message(value);
        if shape == self.body.shape() {
            return;
        }
        let data = mem::take(match &mut self.body {
            Body::Full { data, .. } | Body::Bare { data } => data,
        });
        self.body = match shape {
            Shape::Full => Body::Full {
                reserved: 0,
                target_addr: Ipv6Addr::UNSPECIFIED,
                data,
            },
            Shape::Bare => Body::Bare { data },
        };
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn set_code(&mut self, value: u8) {
        self.code = value;
    }

    pub fn checksum_readable(&self) -> String {
        format!("0x{:04x}", self.checksum)
    }

    pub fn shape(&self) -> Shape {
        self.body.shape()
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Replace the body. A body whose shape differs from
    /// [`Shape::for_message`] decodes back only through [`Header::parse_as`].
    pub fn set_body(&mut self, body: Body) {
        self.body = body;
    }

    pub fn data(&self) -> &[u8] {
        match &self.body {
            Body::Full { data, .. } | Body::Bare { data } => data,
        }
    }

    pub fn set_data(&mut self, value: Vec<u8>) {
        match &mut self.body {
            Body::Full { data, .. } | Body::Bare { data } => *data = value,
        }
    }

    pub fn reserved(&self) -> Option<u32> {
        match self.body {
            Body::Full { reserved, .. } => Some(reserved),
            Body::Bare { .. } => None,
        }
    }

    pub fn set_reserved(&mut self, value: u32) -> Result<(), FieldError<u32>> {
        match &mut self.body {
            Body::Full { reserved, .. } => {
                *reserved = value;
                Ok(())
            }
            Body::Bare { .. } => Err(FieldErrorKind::Unsupported.with(value)),
        }
    }

    pub fn neighbor_flags(&self) -> Option<NeighborFlags> {
        self.reserved().map(NeighborFlags::from_bits_truncate)
    }

    pub fn set_neighbor_flags(&mut self, flags: NeighborFlags) -> Result<(), FieldError<NeighborFlags>> {
        match self.reserved() {
            Some(reserved) => {
                let reserved = (reserved & !NeighborFlags::all().bits()) | flags.bits();
                self.set_reserved(reserved).map_err(|err| err.kind.with(flags))
            }
            None => Err(FieldErrorKind::Unsupported.with(flags)),
        }
    }

    pub fn target_addr(&self) -> Option<Ipv6Addr> {
        match self.body {
            Body::Full { target_addr, .. } => Some(target_addr),
            Body::Bare { .. } => None,
        }
    }

    pub fn set_target_addr(&mut self, value: Ipv6Addr) -> Result<(), FieldError<Ipv6Addr>> {
        match &mut self.body {
            Body::Full { target_addr, .. } => {
                *target_addr = value;
                Ok(())
            }
            Body::Bare { .. } => Err(FieldErrorKind::Unsupported.with(value)),
        }
    }

    pub fn target_addr_readable(&self) -> Option<String> {
        self.target_addr().map(|addr| format!("{addr}"))
    }

    pub fn set_target_addr_readable<'a>(&mut self, value: &'a str) -> Result<(), FieldError<&'a str>> {
        let addr = Ipv6Addr::from_readable(value).map_err(|kind| kind.with(value))?;
        self.set_target_addr(addr).map_err(|err| err.kind.with(value))
    }
}

impl WireParse for Header {
    /// Decode `raw`, choosing the shape from the message type.
    fn parse(raw: &[u8]) -> Result<Self, ParseError<&[u8]>> {
        if raw.len() < HEADER_LEN {
            return Err(ParseErrorKind::PacketTooShort.with(raw));
        }
        let shape = Shape::for_message(RawPacket(raw).msg_type());
        Header::parse_as(shape, raw)
    }
}

impl WireBuild for Header {
    fn buffer_len(&self) -> usize {
        self.header_len() + self.payload_len()
    }

    fn payload_len(&self) -> usize {
        self.data().len()
    }

    fn header_len(&self) -> usize {
        self.shape().header_len()
    }

    fn emit(&self, buf: &mut [u8]) {
        let header_len = self.header_len();
        let data = self.data();
        buf[header_len..header_len + data.len()].copy_from_slice(data);

        let mut packet = RawPacket(buf);
        packet.set_msg_type(self.msg_type);
        packet.set_msg_code(self.code);
        packet.set_checksum(self.checksum);

        if let Body::Full {
            reserved,
            target_addr,
            ..
        } = self.body
        {
            packet.set_reserved(reserved);
            packet.set_target_addr(target_addr);
        }
    }
}

impl Icmpv6Message for Header {
    fn checksum(&self) -> u16 {
        self.checksum
    }

    fn set_checksum(&mut self, value: u16) {
        self.checksum = value;
    }
}
