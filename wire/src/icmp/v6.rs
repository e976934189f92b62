use alloc::{format, string::String, vec::Vec};
use core::{mem, net::Ipv6Addr};

use super::{field, Message, NeighborFlags, RawPacket, HEADER_LEN, ND_HEADER_LEN};
use crate::{ethernet::Addr as EthernetAddr, ip::Ipv6AddrExt, prelude::*};

enum_with_unknown! {
    /// NDISC Option Type
    pub enum OptType(u8) {
        /// Source Link-layer Address
        SrcLLAddr = 0x1,
        /// Target Link-layer Address
        DstLLAddr = 0x2,
    }
}

/// Length of a link-layer address option carrying a MAC address, in bytes.
pub const LLADDR_OPT_LEN: usize = field::OPT_LLADDR.end - field::OPT_TYPE;

/// A Source/Target Link-layer Address option holding an Ethernet address.
///
/// `len` is the raw length byte, in units of 8 octets. It is carried as-is
/// so that a decoded message re-encodes unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkLayerOpt {
    pub opt_type: OptType,
    pub len: u8,
    pub addr: EthernetAddr,
}

impl LinkLayerOpt {
    /// The option a message of type `msg_type` would normally carry.
    pub fn for_message(msg_type: Message, addr: EthernetAddr) -> Self {
        let opt_type = match msg_type {
            Message::NeighborAdvert => OptType::DstLLAddr,
            _ => OptType::SrcLLAddr,
        };
        LinkLayerOpt {
            opt_type,
            len: (LLADDR_OPT_LEN / 8) as u8,
            addr,
        }
    }

    fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < field::OPT_LLADDR.end {
            return None;
        }
        let opt_type = OptType::from(data[field::OPT_TYPE]);
        let len = data[field::OPT_LEN];
        match opt_type {
            OptType::SrcLLAddr | OptType::DstLLAddr if usize::from(len) * 8 == LLADDR_OPT_LEN => {
                Some(LinkLayerOpt {
                    opt_type,
                    len,
                    addr: EthernetAddr::from_bytes(&data[field::OPT_LLADDR]),
                })
            }
            _ => None,
        }
    }
}

/// Body of a Neighbor Solicitation or Advertisement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Neighbor {
    pub reserved: u32,
    pub target_addr: Ipv6Addr,
    pub lladdr: Option<LinkLayerOpt>,
    pub data: Vec<u8>,
}

impl Default for Neighbor {
    fn default() -> Self {
        Neighbor {
            reserved: 0,
            target_addr: Ipv6Addr::UNSPECIFIED,
            lladdr: None,
            data: Vec::new(),
        }
    }
}

impl Neighbor {
    fn fixed_len(&self) -> usize {
        match self.lladdr {
            Some(_) => field::OPT_LLADDR.end,
            None => ND_HEADER_LEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Body {
    /// Everything after the checksum, uninterpreted.
    Opaque(Vec<u8>),
    Neighbor(Neighbor),
}

impl Default for Body {
    fn default() -> Self {
        Body::Opaque(Vec::new())
    }
}

/// An ICMPv6 message: type, code and checksum followed by a body whose
/// layout depends on the message type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Header {
    msg_type: Message,
    code: u8,
    checksum: u16,
    body: Body,
}

impl Header {
    /// Create a message with an empty body of the shape `msg_type` calls for.
    pub fn new(msg_type: Message, code: u8) -> Self {
        let body = match msg_type.has_target() {
            true => Body::Neighbor(Neighbor::default()),
            false => Body::Opaque(Vec::new()),
        };
        Header {
            msg_type,
            code,
            checksum: 0,
            body,
        }
    }

    pub fn neighbor_solicit(target_addr: Ipv6Addr) -> Self {
        Header {
            body: Body::Neighbor(Neighbor {
                target_addr,
                ..Neighbor::default()
            }),
            ..Header::new(Message::NeighborSolicit, 0)
        }
    }

    pub fn neighbor_advert(flags: NeighborFlags, target_addr: Ipv6Addr) -> Self {
        Header {
            body: Body::Neighbor(Neighbor {
                reserved: flags.bits(),
                target_addr,
                ..Neighbor::default()
            }),
            ..Header::new(Message::NeighborAdvert, 0)
        }
    }

    pub fn msg_type(&self) -> Message {
        self.msg_type
    }

    /// Set the type, switching the body between the neighbor and opaque
    /// layouts when `value` calls for the other one. Trailing data is kept;
    /// the target and option are dropped on the way to the opaque layout.
    pub fn set_msg_type(&mut self, value: Message) {
        self.msg_type = value;
        self.body = match (value.has_target(), mem::take(&mut self.body)) {
            (true, Body::Opaque(data)) => Body::Neighbor(Neighbor {
                data,
                ..Neighbor::default()
            }),
            (false, Body::Neighbor(nd)) => Body::Opaque(nd.data),
            (_, body) => body,
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

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Replace the body. It must have the layout the message type calls
    /// for, otherwise it is handed back with `Unsupported`.
    pub fn set_body(&mut self, body: Body) -> Result<(), FieldError<Body>> {
        if matches!(body, Body::Neighbor(_)) != self.msg_type.has_target() {
            return Err(FieldErrorKind::Unsupported.with(body));
        }
        self.body = body;
        Ok(())
    }

    /// The uninterpreted bytes at the end of the message.
    pub fn data(&self) -> &[u8] {
        match &self.body {
            Body::Opaque(data) => data,
            Body::Neighbor(nd) => &nd.data,
        }
    }

    pub fn set_data(&mut self, value: Vec<u8>) {
        match &mut self.body {
            Body::Opaque(data) => *data = value,
            Body::Neighbor(nd) => nd.data = value,
        }
    }

    fn neighbor(&self) -> Option<&Neighbor> {
        match &self.body {
            Body::Neighbor(nd) => Some(nd),
            Body::Opaque(_) => None,
        }
    }

    fn neighbor_mut<V>(&mut self, value: V) -> Result<(&mut Neighbor, V), FieldError<V>> {
        match &mut self.body {
            Body::Neighbor(nd) => Ok((nd, value)),
            Body::Opaque(_) => Err(FieldErrorKind::Unsupported.with(value)),
        }
    }

    fn lladdr_opt_mut<V>(&mut self, value: V) -> Result<(&mut LinkLayerOpt, V), FieldError<V>> {
        let (nd, value) = self.neighbor_mut(value)?;
        match &mut nd.lladdr {
            Some(opt) => Ok((opt, value)),
            None => Err(FieldErrorKind::Unsupported.with(value)),
        }
    }

    pub fn reserved(&self) -> Option<u32> {
        self.neighbor().map(|nd| nd.reserved)
    }

    pub fn set_reserved(&mut self, value: u32) -> Result<(), FieldError<u32>> {
        let (nd, value) = self.neighbor_mut(value)?;
        nd.reserved = value;
        Ok(())
    }

    pub fn neighbor_flags(&self) -> Option<NeighborFlags> {
        self.reserved().map(NeighborFlags::from_bits_truncate)
    }

    /// Replace the flag bits of the reserved word, keeping the rest.
    pub fn set_neighbor_flags(&mut self, flags: NeighborFlags) -> Result<(), FieldError<NeighborFlags>> {
        let (nd, flags) = self.neighbor_mut(flags)?;
        nd.reserved = (nd.reserved & !NeighborFlags::all().bits()) | flags.bits();
        Ok(())
    }

    pub fn target_addr(&self) -> Option<Ipv6Addr> {
        self.neighbor().map(|nd| nd.target_addr)
    }

    pub fn set_target_addr(&mut self, value: Ipv6Addr) -> Result<(), FieldError<Ipv6Addr>> {
        let (nd, value) = self.neighbor_mut(value)?;
        nd.target_addr = value;
        Ok(())
    }

    pub fn target_addr_readable(&self) -> Option<String> {
        self.target_addr().map(|addr| format!("{addr}"))
    }

    pub fn set_target_addr_readable<'a>(&mut self, value: &'a str) -> Result<(), FieldError<&'a str>> {
        let addr = Ipv6Addr::from_readable(value).map_err(|kind| kind.with(value))?;
        self.set_target_addr(addr).map_err(|err| err.kind.with(value))
    }

    pub fn lladdr_opt(&self) -> Option<&LinkLayerOpt> {
        self.neighbor().and_then(|nd| nd.lladdr.as_ref())
    }

    pub fn opt_type(&self) -> Option<OptType> {
        self.lladdr_opt().map(|opt| opt.opt_type)
    }

    pub fn set_opt_type(&mut self, value: OptType) -> Result<(), FieldError<OptType>> {
        let (opt, value) = self.lladdr_opt_mut(value)?;
        opt.opt_type = value;
        Ok(())
    }

    pub fn opt_len(&self) -> Option<u8> {
        self.lladdr_opt().map(|opt| opt.len)
    }

    pub fn set_opt_len(&mut self, value: u8) -> Result<(), FieldError<u8>> {
        let (opt, value) = self.lladdr_opt_mut(value)?;
        opt.len = value;
        Ok(())
    }

    pub fn lladdr(&self) -> Option<EthernetAddr> {
        self.lladdr_opt().map(|opt| opt.addr)
    }

    /// Set the link-layer address, adding the option that matches the
    /// message type if the message does not carry one yet.
    pub fn set_lladdr(&mut self, value: EthernetAddr) -> Result<(), FieldError<EthernetAddr>> {
        let msg_type = self.msg_type;
        let (nd, value) = self.neighbor_mut(value)?;
        match &mut nd.lladdr {
            Some(opt) => opt.addr = value,
            None => nd.lladdr = Some(LinkLayerOpt::for_message(msg_type, value)),
        }
        Ok(())
    }

    pub fn lladdr_readable(&self) -> Option<String> {
        self.lladdr().map(|addr| format!("{addr}"))
    }

    pub fn set_lladdr_readable<'a>(&mut self, value: &'a str) -> Result<(), FieldError<&'a str>> {
        let addr: EthernetAddr = value.parse().map_err(|kind: FieldErrorKind| kind.with(value))?;
        self.set_lladdr(addr).map_err(|err| err.kind.with(value))
    }
}

impl WireParse for Header {
    fn parse(raw: &[u8]) -> Result<Self, ParseError<&[u8]>> {
        if raw.len() < HEADER_LEN {
            return Err(ParseErrorKind::PacketTooShort.with(raw));
        }
        let packet = RawPacket(raw);
        let msg_type = packet.msg_type();

        let body = if msg_type.has_target() {
            if raw.len() < ND_HEADER_LEN {
                return Err(ParseErrorKind::PacketTooShort.with(raw));
            }
            let lladdr = LinkLayerOpt::parse(raw);
            let mut nd = Neighbor {
                reserved: packet.reserved(),
                target_addr: packet.target_addr(),
                lladdr,
                data: Vec::new(),
            };
            nd.data = raw[nd.fixed_len()..].to_vec();
            Body::Neighbor(nd)
        } else {
            Body::Opaque(raw[HEADER_LEN..].to_vec())
        };

        Ok(Header {
            msg_type,
            code: packet.msg_code(),
            checksum: packet.checksum(),
            body,
        })
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
        match &self.body {
            Body::Opaque(_) => HEADER_LEN,
            Body::Neighbor(nd) => nd.fixed_len(),
        }
    }

    fn emit(&self, buf: &mut [u8]) {
        let header_len = self.header_len();
        let data = self.data();
        buf[header_len..header_len + data.len()].copy_from_slice(data);

        let mut packet = RawPacket(buf);
        packet.set_msg_type(self.msg_type);
        packet.set_msg_code(self.code);
        packet.set_checksum(self.checksum);

        if let Body::Neighbor(nd) = &self.body {
            packet.set_reserved(nd.reserved);
            packet.set_target_addr(nd.target_addr);
            if let Some(opt) = nd.lladdr {
                let buf = packet.0;
                buf[field::OPT_TYPE] = opt.opt_type.into();
                buf[field::OPT_LEN] = opt.len;
                buf[field::OPT_LLADDR].copy_from_slice(opt.addr.as_bytes());
            }
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

#[cfg(test)]
mod tests {
    use std::vec;

    use super::*;
    use crate::Ends;

    const MOCK_IP_ADDRS: Ends<Ipv6Addr> = Ends {
        src: Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 1),
        dst: Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 2),
    };

    static ECHO_PACKET_BYTES: [u8; 12] = [
        0x80, 0x00, 0x19, 0xb3, 0x12, 0x34, 0xab, 0xcd, 0xaa, 0x00, 0x00, 0xff,
    ];

    static NEIGHBOR_ADVERT_BYTES: [u8; 34] = [
        0x88, 0x00, 0x12, 0x34, 0x60, 0x00, 0x00, 0x00, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x12, 0x34, 0x02, 0x01, 0x00, 0x1b, 0x21, 0x0a,
        0x0b, 0x0c, 0xde, 0xad,
    ];

    static NEIGHBOR_SOLICIT_BYTES: [u8; 32] = [
        0x87, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xfe, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x01, 0x04, 0x01, 0x02, 0x03, 0x04,
        0x05, 0x06,
    ];

    #[test]
    fn test_echo_deconstruct() {
        let header = Header::parse(&ECHO_PACKET_BYTES[..]).unwrap();
        assert_eq!(header.msg_type(), Message::EchoRequest);
        assert_eq!(header.code(), 0);
        assert_eq!(header.checksum(), 0x19b3);
        assert_eq!(header.body(), &Body::Opaque(ECHO_PACKET_BYTES[4..].to_vec()));
        assert_eq!(header.target_addr(), None);
        assert_eq!(&header.to_bytes()[..], &ECHO_PACKET_BYTES[..]);
    }

    #[test]
    fn test_echo_checksum() {
        let mut header = Header::parse(&ECHO_PACKET_BYTES[..]).unwrap();
        assert!(header.verify_checksum(MOCK_IP_ADDRS));

        header.set_checksum(0);
        assert!(!header.verify_checksum(MOCK_IP_ADDRS));
        header.fill_checksum(MOCK_IP_ADDRS);
        assert_eq!(header.checksum(), 0x19b3);
        assert_eq!(header.checksum_readable(), "0x19b3");
    }

    #[test]
    fn test_neighbor_advert_deconstruct() {
        let header = Header::parse(&NEIGHBOR_ADVERT_BYTES[..]).unwrap();
        assert_eq!(header.msg_type(), Message::NeighborAdvert);
        assert_eq!(header.checksum(), 0x1234);
        assert_eq!(header.reserved(), Some(0x6000_0000));
        assert_eq!(
            header.neighbor_flags(),
            Some(NeighborFlags::SOLICITED | NeighborFlags::OVERRIDE)
        );
        assert_eq!(header.target_addr_readable().as_deref(), Some("2000::1234"));
        assert_eq!(header.opt_type(), Some(OptType::DstLLAddr));
        assert_eq!(header.opt_len(), Some(1));
        assert_eq!(header.lladdr_readable().as_deref(), Some("00:1b:21:0a:0b:0c"));
        assert_eq!(header.data(), &[0xde, 0xad]);
        assert_eq!(header.header_len(), 32);
        assert_eq!(&header.to_bytes()[..], &NEIGHBOR_ADVERT_BYTES[..]);
    }

    #[test]
    fn test_neighbor_advert_construct() {
        let mut header = Header::neighbor_advert(
            NeighborFlags::SOLICITED | NeighborFlags::OVERRIDE,
            Ipv6Addr::new(0x2000, 0, 0, 0, 0, 0, 0, 0x1234),
        );
        header.set_checksum(0x1234);
        header
            .set_lladdr(EthernetAddr([0x00, 0x1b, 0x21, 0x0a, 0x0b, 0x0c]))
            .unwrap();
        header.set_data(vec![0xde, 0xad]);
        assert_eq!(&header.to_bytes()[..], &NEIGHBOR_ADVERT_BYTES[..]);
    }

    #[test]
    fn test_unrecognized_option_stays_in_data() {
        let mut bytes = NEIGHBOR_SOLICIT_BYTES;
        // Prefix information is not decoded.
        bytes[24] = 0x03;
        let header = Header::parse(&bytes[..]).unwrap();
        assert_eq!(header.lladdr(), None);
        assert_eq!(header.data(), &bytes[24..]);
        assert_eq!(&header.to_bytes()[..], &bytes[..]);
    }

    #[test]
    fn test_option_with_wrong_length_stays_in_data() {
        let header = Header::parse(&NEIGHBOR_SOLICIT_BYTES[..]).unwrap();
        // Length byte is 4 units, more than a MAC address needs.
        assert_eq!(header.lladdr_opt(), None);
        assert_eq!(header.data().len(), 8);
    }

    #[test]
    fn test_truncated() {
        let err = Header::parse(&NEIGHBOR_SOLICIT_BYTES[..3]).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::PacketTooShort);

        let err = Header::parse(&NEIGHBOR_SOLICIT_BYTES[..20]).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::PacketTooShort);
        assert_eq!(err.data.len(), 20);
    }

    #[test]
    fn test_neighbor_fields_unsupported_on_opaque_body() {
        let mut header = Header::parse(&ECHO_PACKET_BYTES[..]).unwrap();
        let before = header.clone();

        let err = header.set_reserved(1).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::Unsupported);
        assert_eq!(err.data, 1);
        let err = header.set_target_addr_readable("2000::1").unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::Unsupported);
        assert!(header.set_lladdr(EthernetAddr::BROADCAST).is_err());
        assert!(header.set_neighbor_flags(NeighborFlags::ROUTER).is_err());
        assert_eq!(header, before);
    }

    #[test]
    fn test_option_fields_need_option() {
        let mut header = Header::neighbor_solicit(Ipv6Addr::LOCALHOST);
        assert_eq!(header.opt_type(), None);
        let err = header.set_opt_len(2).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::Unsupported);

        header.set_lladdr(EthernetAddr::BROADCAST).unwrap();
        assert_eq!(header.opt_type(), Some(OptType::SrcLLAddr));
        assert_eq!(header.opt_len(), Some(1));
        header.set_opt_type(OptType::DstLLAddr).unwrap();
        assert_eq!(header.opt_type(), Some(OptType::DstLLAddr));
        assert_eq!(header.buffer_len(), 32);
    }

    #[test]
    fn test_readable_target_symmetry() {
        let mut header = Header::new(Message::NeighborSolicit, 0);
        header.set_target_addr_readable("2000:0:0:0:0:0:0:1234").unwrap();
        assert_eq!(header.target_addr_readable().as_deref(), Some("2000::1234"));

        let mut raw = Header::new(Message::NeighborSolicit, 0);
        let mut octets = [0; 16];
        octets[0] = 0x20;
        octets[14] = 0x12;
        octets[15] = 0x34;
        raw.set_target_addr(Ipv6Addr::from(octets)).unwrap();
        assert_eq!(raw.target_addr_readable(), header.target_addr_readable());
        assert_eq!(raw.to_bytes(), header.to_bytes());
    }

    #[test]
    fn test_readable_target_invalid_leaves_header_unchanged() {
        let mut header = Header::neighbor_solicit(Ipv6Addr::LOCALHOST);
        let err = header.set_target_addr_readable("2000::zz").unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::ValueInvalid);
        assert_eq!(err.data, "2000::zz");
        assert_eq!(header.target_addr(), Some(Ipv6Addr::LOCALHOST));
    }

    #[test]
    fn test_readable_lladdr_symmetry() {
        let mut header = Header::new(Message::NeighborAdvert, 0);
        header.set_lladdr_readable("00:1b:21:0a:0b:0c").unwrap();
        assert_eq!(header.lladdr(), Some(EthernetAddr([0x00, 0x1b, 0x21, 0x0a, 0x0b, 0x0c])));
        assert_eq!(header.lladdr_readable().as_deref(), Some("00:1b:21:0a:0b:0c"));

        let err = header.set_lladdr_readable("00:1b:21").unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::ValueInvalid);
    }

    #[test]
    fn test_set_neighbor_flags_keeps_low_bits() {
        let mut header = Header::new(Message::NeighborAdvert, 0);
        header.set_reserved(0xa000_00ff).unwrap();
        header.set_neighbor_flags(NeighborFlags::SOLICITED).unwrap();
        assert_eq!(header.reserved(), Some(0x4000_00ff));
    }

    #[test]
    fn test_set_msg_type_reshapes_body() {
        let mut header = Header::parse(&ECHO_PACKET_BYTES[..]).unwrap();
        header.set_msg_type(Message::NeighborSolicit);
        assert_eq!(header.target_addr(), Some(Ipv6Addr::UNSPECIFIED));
        assert_eq!(header.data(), &ECHO_PACKET_BYTES[4..]);
        header.set_target_addr(Ipv6Addr::LOCALHOST).unwrap();
        header.fill_checksum(MOCK_IP_ADDRS);

        let parsed = Header::parse(&header.to_bytes()).unwrap();
        assert_eq!(parsed, header);
        assert_eq!(parsed.buffer_len(), ND_HEADER_LEN + 8);

        header.set_msg_type(Message::EchoReply);
        assert_eq!(header.body(), &Body::Opaque(ECHO_PACKET_BYTES[4..].to_vec()));
        assert_eq!(header.target_addr(), None);
        assert_eq!(Header::parse(&header.to_bytes()).unwrap(), header);
    }

    #[test]
    fn test_set_msg_type_between_neighbor_types_keeps_fields() {
        let mut header = Header::parse(&NEIGHBOR_ADVERT_BYTES[..]).unwrap();
        header.set_msg_type(Message::NeighborSolicit);
        assert_eq!(header.reserved(), Some(0x6000_0000));
        assert_eq!(header.lladdr_readable().as_deref(), Some("00:1b:21:0a:0b:0c"));
        assert_eq!(Header::parse(&header.to_bytes()).unwrap(), header);
    }

    #[test]
    fn test_set_body_must_match_type() {
        let mut header = Header::new(Message::EchoRequest, 0);
        let body = Body::Neighbor(Neighbor::default());
        let err = header.set_body(body.clone()).unwrap_err();
        assert_eq!(err.kind, FieldErrorKind::Unsupported);
        assert_eq!(err.data, body);
        assert_eq!(header.body(), &Body::Opaque(vec![]));

        header.set_body(Body::Opaque(vec![1, 2])).unwrap();
        assert_eq!(header.data(), &[1, 2]);
    }

    #[test]
    fn test_roundtrip_excluding_checksum() {
        let mut header = Header::neighbor_solicit(Ipv6Addr::new(0x2000, 0, 0, 0, 0, 0, 0, 3));
        header.set_code(7);
        header.set_data(vec![1, 2, 3]);
        header.fill_checksum(MOCK_IP_ADDRS);

        let parsed = Header::parse(&header.to_bytes()).unwrap();
        assert_eq!(parsed.msg_type(), header.msg_type());
        assert_eq!(parsed.code(), 7);
        assert_eq!(parsed.target_addr(), header.target_addr());
        assert_eq!(parsed.data(), &[1, 2, 3]);
        assert!(parsed.verify_checksum(MOCK_IP_ADDRS));
    }
}
