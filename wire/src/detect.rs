//! Cheap acceptance tests run over a whole Ethernet frame before any layer
//! is decoded. Each stage only looks at lengths and fixed-offset bytes.

use byteorder::{ByteOrder, NetworkEndian};

use crate::{ethernet, ip, EthernetProtocol, IpProtocol, MIN_PACKET_LEN};

/// Offset of the IPv6 next header byte within the frame.
pub const NEXT_HEADER_OFFSET: usize = ethernet::HEADER_LEN + ip::v6::field::NXT_HDR;

pub fn can_parse_link_layer(buf: &[u8]) -> bool {
    buf.len() >= ethernet::HEADER_LEN
}

pub fn can_parse_network_layer(buf: &[u8]) -> bool {
    if buf.len() < ethernet::HEADER_LEN + ip::v6::HEADER_LEN {
        return false;
    }
    let protocol = NetworkEndian::read_u16(&buf[ethernet::field::ETHERTYPE]);
    let version = buf[ethernet::HEADER_LEN + ip::v6::field::VER_TC_FLOW.start] >> 4;
    EthernetProtocol::from(protocol) == EthernetProtocol::Ipv6 && version == 6
}

pub fn can_parse_message_layer(buf: &[u8]) -> bool {
    buf.len() >= MIN_PACKET_LEN
        && IpProtocol::from(buf[NEXT_HEADER_OFFSET]) == IpProtocol::Icmpv6
}

/// Whether `buf` is an Ethernet frame carrying IPv6 carrying an ICMPv6
/// message with at least the type/code/checksum prefix.
pub fn can_parse(buf: &[u8]) -> bool {
    if buf.len() < MIN_PACKET_LEN {
        log_parse!(buf.len(), "short frame");
        return false;
    }
    if !can_parse_link_layer(buf) {
        log_parse!(buf.len(), "link layer");
        return false;
    }
    if !can_parse_network_layer(buf) {
        log_parse!(buf.len(), "network layer");
        return false;
    }
    if !can_parse_message_layer(buf) {
        log_parse!(buf[NEXT_HEADER_OFFSET], "message layer");
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::*;

    fn frame(len: usize) -> Vec<u8> {
        let mut buf = std::vec![0; len];
        buf[12] = 0x86;
        buf[13] = 0xdd;
        buf[14] = 0x60;
        buf[NEXT_HEADER_OFFSET] = 58;
        buf
    }

    #[test]
    fn test_accepts_minimal_frame() {
        assert_eq!(NEXT_HEADER_OFFSET, 20);
        assert!(can_parse(&frame(58)));
        assert!(can_parse(&frame(200)));
    }

    #[test]
    fn test_rejects_short_frames() {
        for len in [0, 13, 14, 40, 54, 57] {
            let mut buf = frame(58);
            buf.truncate(len);
            assert!(!can_parse(&buf), "{len}");
        }
    }

    #[test]
    fn test_rejects_other_next_header() {
        for next_header in [0u8, 6, 17, 59, 0xff] {
            let mut buf = frame(78);
            buf[NEXT_HEADER_OFFSET] = next_header;
            assert!(!can_parse(&buf));
            assert!(can_parse_network_layer(&buf));
        }
    }

    #[test]
    fn test_rejects_other_ethertype() {
        let mut buf = frame(78);
        buf[12] = 0x08;
        buf[13] = 0x00;
        assert!(can_parse_link_layer(&buf));
        assert!(!can_parse_network_layer(&buf));
        assert!(!can_parse(&buf));
    }

    #[test]
    fn test_rejects_ipv4_version() {
        let mut buf = frame(78);
        buf[14] = 0x45;
        assert!(!can_parse_network_layer(&buf));
        assert!(!can_parse(&buf));
    }

    #[test]
    fn test_stages() {
        let buf = frame(58);
        assert!(can_parse_link_layer(&buf[..14]));
        assert!(!can_parse_link_layer(&buf[..13]));
        assert!(can_parse_network_layer(&buf[..54]));
        assert!(!can_parse_message_layer(&buf[..57]));
    }
}
