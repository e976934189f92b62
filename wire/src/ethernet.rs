use core::{fmt, str::FromStr};

use byteorder::{ByteOrder, NetworkEndian};

use crate::{prelude::*, Ends};

#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct Addr(pub [u8; 6]);

impl Addr {
    /// The broadcast address.
    pub const BROADCAST: Addr = Addr([0xff; 6]);

    /// Construct an Ethernet address from a sequence of octets, in big-endian.
    ///
    /// # Panics
    /// The function panics if `data` is not six octets long.
    pub fn from_bytes(data: &[u8]) -> Addr {
        let mut bytes = [0; 6];
        bytes.copy_from_slice(data);
        Addr(bytes)
    }

    /// Return an Ethernet address as a sequence of octets, in big-endian.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Query whether the address is an unicast address.
    pub fn is_unicast(&self) -> bool {
        !(self.is_broadcast() || self.is_multicast())
    }

    /// Query whether this address is the broadcast address.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Query whether the "multicast" bit in the OUI is set.
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [b0, b1, b2, b3, b4, b5] = self.0;
        write!(f, "{b0:02x}:{b1:02x}:{b2:02x}:{b3:02x}:{b4:02x}:{b5:02x}")
    }
}

/// Parses the colon-hex form (`00:11:22:aa:bb:cc`). Each group is one or
/// two hex digits; dashes are not accepted.
impl FromStr for Addr {
    type Err = FieldErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0; 6];
        let mut groups = s.split(':');
        for byte in bytes.iter_mut() {
            let group = groups.next().ok_or(FieldErrorKind::ValueInvalid)?;
            if group.is_empty() || group.len() > 2 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(FieldErrorKind::ValueInvalid);
            }
            *byte = u8::from_str_radix(group, 16).map_err(|_| FieldErrorKind::ValueInvalid)?;
        }
        match groups.next() {
            Some(_) => Err(FieldErrorKind::ValueInvalid),
            None => Ok(Addr(bytes)),
        }
    }
}

enum_with_unknown! {
    /// Ethernet protocol type.
    pub enum Protocol(u16) {
        Ipv4 = 0x0800,
        Arp  = 0x0806,
        Ipv6 = 0x86DD,
    }
}

struct RawFrame<T: ?Sized>(T);

pub(crate) mod field {
    use crate::field::*;

    pub const DESTINATION: Field = 0..6;
    pub const SOURCE: Field = 6..12;
    pub const ETHERTYPE: Field = 12..14;
    pub const PAYLOAD: Rest = 14..;
}
pub const HEADER_LEN: usize = field::PAYLOAD.start;

wire!(impl RawFrame {
    dst_addr/set_dst_addr: Addr =>
        |data| Addr::from_bytes(&data[field::DESTINATION]);
        |data, value| data[field::DESTINATION].copy_from_slice(value.as_bytes());

    src_addr/set_src_addr: Addr =>
        |data| Addr::from_bytes(&data[field::SOURCE]);
        |data, value| data[field::SOURCE].copy_from_slice(value.as_bytes());

    protocol/set_protocol: Protocol =>
        |data| Protocol::from(NetworkEndian::read_u16(&data[field::ETHERTYPE]));
        |data, value| NetworkEndian::write_u16(&mut data[field::ETHERTYPE], value.into());
});

impl<T: AsRef<[u8]> + ?Sized> RawFrame<T> {
    pub fn addr(&self) -> Ends<Addr> {
        Ends {
            src: self.src_addr(),
            dst: self.dst_addr(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame<T> {
    pub addr: Ends<Addr>,
    pub protocol: Protocol,
    pub payload: T,
}

impl Default for Protocol {
    fn default() -> Self {
        Protocol::Ipv6
    }
}

impl<T> Frame<T> {
    /// Replace the payload, keeping the header fields.
    pub fn with_payload<U>(self, payload: U) -> Frame<U> {
        Frame {
            addr: self.addr,
            protocol: self.protocol,
            payload,
        }
    }
}

impl<T: WireParse> WireParse for Frame<T> {
    fn parse(raw: &[u8]) -> Result<Self, ParseError<&[u8]>> {
        if raw.len() < HEADER_LEN {
            return Err(ParseErrorKind::PacketTooShort.with(raw));
        }

        let frame = RawFrame(raw);

        Ok(Frame {
            addr: frame.addr(),
            protocol: frame.protocol(),

            payload: T::parse(&raw[field::PAYLOAD]).map_err(|err| err.kind.with(raw))?,
        })
    }
}

impl<T: WireBuild> WireBuild for Frame<T> {
    fn buffer_len(&self) -> usize {
        HEADER_LEN + self.payload.buffer_len()
    }

    fn payload_len(&self) -> usize {
        self.payload.buffer_len()
    }

    fn emit(&self, buf: &mut [u8]) {
        self.payload.emit(&mut buf[field::PAYLOAD]);

        let mut frame = RawFrame(buf);
        frame.set_src_addr(self.addr.src);
        frame.set_dst_addr(self.addr.dst);
        frame.set_protocol(self.protocol);
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::*;

    const FRAME_BYTES: [u8; 54] = [
        0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x86, 0xdd, 0x60,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xfe, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
    ];

    #[test]
    fn test_broadcast() {
        assert!(Addr::BROADCAST.is_broadcast());
        assert!(!Addr::BROADCAST.is_unicast());
        assert!(Addr::BROADCAST.is_multicast());
    }

    #[test]
    fn test_deconstruct() {
        let frame: Frame<Vec<u8>> = Frame::parse(&FRAME_BYTES[..]).unwrap();
        assert_eq!(frame.addr, Ends {
            src: Addr([0x11, 0x12, 0x13, 0x14, 0x15, 0x16]),
            dst: Addr([0x01, 0x02, 0x03, 0x04, 0x05, 0x06]),
        });
        assert_eq!(frame.protocol, Protocol::Ipv6);
        assert_eq!(&frame.payload[..], &FRAME_BYTES[HEADER_LEN..]);
    }

    #[test]
    fn test_construct() {
        let frame = Frame {
            addr: Ends {
                src: Addr([0x11, 0x12, 0x13, 0x14, 0x15, 0x16]),
                dst: Addr([0x01, 0x02, 0x03, 0x04, 0x05, 0x06]),
            },
            protocol: Protocol::Ipv6,
            payload: FRAME_BYTES[HEADER_LEN..].to_vec(),
        };
        assert_eq!(frame.buffer_len(), FRAME_BYTES.len());
        assert_eq!(&frame.to_bytes()[..], &FRAME_BYTES[..]);
    }

    #[test]
    fn test_too_short() {
        let err = Frame::<Vec<u8>>::parse(&FRAME_BYTES[..13]).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::PacketTooShort);
    }

    #[test]
    fn test_try_emit_short_buffer() {
        let frame = Frame {
            addr: Ends::default(),
            protocol: Protocol::Ipv6,
            payload: Vec::new(),
        };
        let mut buf = [0; 10];
        let err = frame.try_emit(&mut buf).unwrap_err();
        assert_eq!(err.kind, BuildErrorKind::BufferTooShort);
        assert_eq!(err.data, HEADER_LEN);
    }

    #[test]
    fn test_readable_addr() {
        let addr: Addr = "00:1b:21:0a:0b:0c".parse().unwrap();
        assert_eq!(addr, Addr([0x00, 0x1b, 0x21, 0x0a, 0x0b, 0x0c]));
        assert_eq!(std::format!("{addr}"), "00:1b:21:0a:0b:0c");
        assert_eq!("0:1b:21:a:b:c".parse::<Addr>(), Ok(addr));

        for bad in [
            "",
            "00:1b:21:0a:0b",
            "00:1b:21:0a:0b:0c:0d",
            "00-1b-21-0a-0b-0c",
            "zz:1b:21:0a:0b:0c",
            "+1:1b:21:0a:0b:0c",
            "001:1b:21:0a:0b:0c",
        ] {
            assert_eq!(bad.parse::<Addr>(), Err(FieldErrorKind::ValueInvalid), "{bad}");
        }
    }
}
