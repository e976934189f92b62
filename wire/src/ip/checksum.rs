use core::net::Ipv6Addr;

use byteorder::{ByteOrder, NetworkEndian};

use super::Protocol;
use crate::Ends;

const fn propagate_carries(word: u32) -> u16 {
    let sum = (word >> 16) + (word & 0xffff);
    ((sum >> 16) as u16) + (sum as u16)
}

/// Compute an RFC 1071 compliant checksum (without the final complement).
pub fn data(mut data: &[u8]) -> u16 {
    let mut accum = 0;

    // For each 32-byte chunk...
    const CHUNK_SIZE: usize = 32;
    while data.len() >= CHUNK_SIZE {
        let mut d = &data[..CHUNK_SIZE];
        // ... take by 2 bytes and sum them.
        while d.len() >= 2 {
            accum += u32::from(NetworkEndian::read_u16(d));
            d = &d[2..];
        }

        data = &data[CHUNK_SIZE..];
    }

    // Sum the rest that does not fit the last 32-byte chunk,
    // taking by 2 bytes.
    while data.len() >= 2 {
        accum += u32::from(NetworkEndian::read_u16(data));
        data = &data[2..];
    }

    // Add the last remaining odd byte, if any.
    if let Some(&value) = data.first() {
        accum += u32::from(value) << 8;
    }

    propagate_carries(accum)
}

/// Combine several RFC 1071 compliant checksums.
pub fn combine(checksums: &[u16]) -> u16 {
    let accum = checksums.iter().copied().map(u32::from).sum();
    propagate_carries(accum)
}

pub fn pseudo_header_v6(
    src_addr: &Ipv6Addr,
    dst_addr: &Ipv6Addr,
    next_header: Protocol,
    length: u32,
) -> u16 {
    let mut proto_len = [0u8; 8];
    proto_len[7] = next_header.into();
    NetworkEndian::write_u32(&mut proto_len[0..4], length);

    combine(&[
        data(&src_addr.octets()),
        data(&dst_addr.octets()),
        data(&proto_len[..]),
    ])
}

/// Compute the checksum an ICMPv6 message carries between `addr`.
///
/// `message` must hold the serialized message with a zeroed checksum
/// field. A complement of zero goes out as `0xffff`: both encode zero in
/// one's complement, and an all-zero field reads as "no checksum".
pub fn icmpv6(addr: Ends<Ipv6Addr>, message: &[u8]) -> u16 {
    let sum = combine(&[
        pseudo_header_v6(&addr.src, &addr.dst, Protocol::Icmpv6, message.len() as u32),
        data(message),
    ]);
    match !sum {
        0 => 0xffff,
        checksum => checksum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_odd_length() {
        assert_eq!(data(&[0x12, 0x34, 0x56]), 0x1234 + 0x5600);
        assert_eq!(data(&[]), 0);
    }

    #[test]
    fn test_end_around_carry() {
        assert_eq!(data(&[0xff, 0xff, 0x00, 0x02]), 0x0002);
        assert_eq!(combine(&[0xffff, 0xffff]), 0xffff);
        assert_eq!(combine(&[0x8000, 0x8001]), 0x0002);
    }

    #[test]
    fn test_long_input_crosses_chunks() {
        let bytes = [0x01; 70];
        assert_eq!(data(&bytes), 35 * 0x0101);
    }

    #[test]
    fn test_pseudo_header() {
        let src = Ipv6Addr::new(0x2000, 0, 0, 0, 0, 0, 0, 1);
        let dst = Ipv6Addr::new(0x2000, 0, 0, 0, 0, 0, 0, 2);
        assert_eq!(
            pseudo_header_v6(&src, &dst, Protocol::Icmpv6, 24),
            0x2001 + 0x2002 + 0x3a + 0x18
        );
    }

    #[test]
    fn test_zero_complement_goes_out_as_ffff() {
        let addr = Ends {
            src: Ipv6Addr::UNSPECIFIED,
            dst: Ipv6Addr::UNSPECIFIED,
        };
        // 0x3a (protocol) + 0x06 (length) + 0xffbf (body word) == 0xffff
        let message = [0x00, 0x00, 0x00, 0x00, 0xff, 0xbf];
        assert_eq!(icmpv6(addr, &message), 0xffff);
    }
}
