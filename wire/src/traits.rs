use alloc::{vec, vec::Vec};
use core::net::Ipv6Addr;

use crate::{
    error::{BuildError, BuildErrorKind, ParseError},
    icmp, ip::checksum, Ends,
};

pub trait WireBuild {
    /// Length of the whole layer, payload included.
    fn buffer_len(&self) -> usize;

    fn payload_len(&self) -> usize;

    fn header_len(&self) -> usize {
        self.buffer_len() - self.payload_len()
    }

    /// Serialize the layer into the front of `buf`. The payload is written
    /// first, then the header in front of it.
    ///
    /// # Panics
    ///
    /// This function panics if `buf` is shorter than [`buffer_len`].
    ///
    /// [`buffer_len`]: WireBuild::buffer_len
    fn emit(&self, buf: &mut [u8]);

    fn try_emit(&self, buf: &mut [u8]) -> Result<(), BuildError<usize>> {
        let len = self.buffer_len();
        if buf.len() < len {
            return Err(BuildErrorKind::BufferTooShort.with(len));
        }
        self.emit(&mut buf[..len]);
        Ok(())
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0; self.buffer_len()];
        self.emit(&mut buf);
        buf
    }
}

pub trait WireParse: Sized {
    /// Decode a layer from the front of `raw`, handing everything past the
    /// fixed header to the payload.
    fn parse(raw: &[u8]) -> Result<Self, ParseError<&[u8]>>;
}

impl WireBuild for Vec<u8> {
    fn buffer_len(&self) -> usize {
        self.len()
    }

    fn payload_len(&self) -> usize {
        self.len()
    }

    fn emit(&self, buf: &mut [u8]) {
        buf[..self.len()].copy_from_slice(self);
    }
}

impl WireParse for Vec<u8> {
    fn parse(raw: &[u8]) -> Result<Self, ParseError<&[u8]>> {
        Ok(raw.to_vec())
    }
}

/// A message that rides directly on IPv6 with next header 58 and carries
/// the type/code/checksum prefix.
pub trait Icmpv6Message: WireBuild + WireParse {
    fn checksum(&self) -> u16;

    fn set_checksum(&mut self, value: u16);

    /// Compute the checksum this message should carry between `addr`,
    /// whatever its checksum field currently holds.
    fn calc_checksum(&self, addr: Ends<Ipv6Addr>) -> u16 {
        let mut bytes = self.to_bytes();
        bytes[icmp::field::CHECKSUM].fill(0);
        checksum::icmpv6(addr, &bytes)
    }

    fn fill_checksum(&mut self, addr: Ends<Ipv6Addr>) {
        let checksum = self.calc_checksum(addr);
        self.set_checksum(checksum);
    }

    /// Compare the stored checksum against a fresh computation.
    fn verify_checksum(&self, addr: Ends<Ipv6Addr>) -> bool {
        self.checksum() == self.calc_checksum(addr)
    }
}
