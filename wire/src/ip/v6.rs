use core::net::Ipv6Addr;

use byteorder::{ByteOrder, NetworkEndian};

use super::{Ipv6AddrExt, Protocol};
use crate::{prelude::*, Ends};

struct RawPacket<T: ?Sized>(T);

pub(crate) mod field {
    use crate::field::*;

    // 4-bit version number, 8-bit traffic class, and the
    // 20-bit flow label.
    pub const VER_TC_FLOW: Field = 0..4;
    // 16-bit value representing the length of the payload.
    // Note: Options are included in this length.
    pub const LENGTH: Field = 4..6;
    // 8-bit value identifying the type of header following this
    // one. Note: The same numbers are used in IPv4.
    pub const NXT_HDR: usize = 6;
    // 8-bit value decremented by each node that forwards this
    // packet. The packet is discarded when the value is 0.
    pub const HOP_LIMIT: usize = 7;
    // IPv6 address of the source node.
    pub const SRC_ADDR: Field = 8..24;
    // IPv6 address of the destination node.
    pub const DST_ADDR: Field = 24..40;
    pub const PAYLOAD: Rest = 40..;
}
pub const HEADER_LEN: usize = field::DST_ADDR.end;

wire!(impl RawPacket {
    version/set_version: u8 =>
        |data| data[field::VER_TC_FLOW.start] >> 4;
        |data, value| {
            // Make sure to retain the lower order bits which contain
            // the higher order bits of the traffic class
            data[0] = (data[0] & 0x0f) | ((value & 0x0f) << 4);
        };

    /// Return the traffic class.
    traffic_class/set_traffic_class: u8 =>
        |data| ((NetworkEndian::read_u16(&data[0..2]) & 0x0ff0) >> 4) as u8;
        |data, value| {
            // Put the higher order 4-bits of value in the lower order
            // 4-bits of the first byte
            data[0] = (data[0] & 0xf0) | ((value & 0xf0) >> 4);
            // Put the lower order 4-bits of value in the higher order
            // 4-bits of the second byte
            data[1] = (data[1] & 0x0f) | ((value & 0x0f) << 4);
        };

    /// Return the flow label field.
    flow_label/set_flow_label: u32 =>
        |data| NetworkEndian::read_u24(&data[1..4]) & 0x000fffff;
        |data, value| {
            // Retain the lower order 4-bits of the traffic class
            let raw = (u32::from(data[1] & 0xf0) << 16) | (value & 0x0fffff);
            NetworkEndian::write_u24(&mut data[1..4], raw);
        };

    /// Return the payload length field.
    payload_len/set_payload_len: u16 =>
        |data| NetworkEndian::read_u16(&data[field::LENGTH]);
        |data, value| NetworkEndian::write_u16(&mut data[field::LENGTH], value);

    /// Return the next header field.
    next_header/set_next_header: Protocol =>
        |data| Protocol::from(data[field::NXT_HDR]);
        |data, value| data[field::NXT_HDR] = value.into();

    /// Return the hop limit field.
    hop_limit/set_hop_limit: u8 =>
        |data| data[field::HOP_LIMIT];
        |data, value| data[field::HOP_LIMIT] = value;

    /// Return the source address field.
    src_addr/set_src_addr: Ipv6Addr =>
        |data| Ipv6Addr::from_bytes(&data[field::SRC_ADDR]);
        |data, value| data[field::SRC_ADDR].copy_from_slice(&value.octets());

    /// Return the destination address field.
    dst_addr/set_dst_addr: Ipv6Addr =>
        |data| Ipv6Addr::from_bytes(&data[field::DST_ADDR]);
        |data, value| data[field::DST_ADDR].copy_from_slice(&value.octets());
});

impl<T: AsRef<[u8]> + ?Sized> RawPacket<T> {
    pub fn addr(&self) -> Ends<Ipv6Addr> {
        Ends {
            src: self.src_addr(),
            dst: self.dst_addr(),
        }
    }
}

/// An IPv6 header without extension headers.
///
/// `payload_len` is kept as a plain field so that a parsed packet
/// re-serializes byte for byte; [`Packet::fill_payload_len`] brings it in
/// line with the actual payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet<T> {
    pub addr: Ends<Ipv6Addr>,
    pub traffic_class: u8,
    pub flow_label: u32,
    pub payload_len: u16,
    pub next_header: Protocol,
    pub hop_limit: u8,
    pub payload: T,
}

impl Default for Packet<()> {
    fn default() -> Self {
        Packet {
            addr: Ends {
                src: Ipv6Addr::UNSPECIFIED,
                dst: Ipv6Addr::UNSPECIFIED,
            },
            traffic_class: ndcraft_config::DEFAULT_TRAFFIC_CLASS,
            flow_label: ndcraft_config::DEFAULT_FLOW_LABEL,
            payload_len: 0,
            next_header: Protocol::Icmpv6,
            hop_limit: ndcraft_config::DEFAULT_HOP_LIMIT,
            payload: (),
        }
    }
}

impl<T> Packet<T> {
    /// Replace the payload, keeping the header fields.
    pub fn with_payload<U>(self, payload: U) -> Packet<U> {
        Packet {
            addr: self.addr,
            traffic_class: self.traffic_class,
            flow_label: self.flow_label,
            payload_len: self.payload_len,
            next_header: self.next_header,
            hop_limit: self.hop_limit,
            payload,
        }
    }
}

impl<T: WireBuild> Packet<T> {
    /// Set the payload length field from the serialized payload.
    pub fn fill_payload_len(&mut self) -> Result<(), FieldError<usize>> {
        let len = self.payload.buffer_len();
        self.payload_len = u16::try_from(len).map_err(|_| FieldErrorKind::ValueInvalid.with(len))?;
        Ok(())
    }
}

impl<T: WireParse> WireParse for Packet<T> {
    fn parse(raw: &[u8]) -> Result<Self, ParseError<&[u8]>> {
        if raw.len() < HEADER_LEN {
            return Err(ParseErrorKind::PacketTooShort.with(raw));
        }
        let packet = RawPacket(raw);
        if packet.version() != 6 {
            return Err(ParseErrorKind::VersionInvalid.with(raw));
        }

        Ok(Packet {
            addr: packet.addr(),
            traffic_class: packet.traffic_class(),
            flow_label: packet.flow_label(),
            payload_len: packet.payload_len(),
            next_header: packet.next_header(),
            hop_limit: packet.hop_limit(),

            payload: T::parse(&raw[field::PAYLOAD]).map_err(|err| err.kind.with(raw))?,
        })
    }
}

impl<T: WireBuild> WireBuild for Packet<T> {
    fn buffer_len(&self) -> usize {
        HEADER_LEN + self.payload.buffer_len()
    }

    fn payload_len(&self) -> usize {
        self.payload.buffer_len()
    }

    fn emit(&self, buf: &mut [u8]) {
        self.payload.emit(&mut buf[field::PAYLOAD]);

        let mut packet = RawPacket(buf);
        // The version nibble shares its byte with the traffic class, so the
        // whole word is cleared first.
        packet.0[field::VER_TC_FLOW].fill(0);
        packet.set_version(6);
        packet.set_traffic_class(self.traffic_class);
        packet.set_flow_label(self.flow_label);
        packet.set_payload_len(self.payload_len);
        packet.set_next_header(self.next_header);
        packet.set_hop_limit(self.hop_limit);
        packet.set_src_addr(self.addr.src);
        packet.set_dst_addr(self.addr.dst);
    }
}
