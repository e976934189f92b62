use alloc::{string::String, vec::Vec};
use core::net::Ipv6Addr;

use ndcraft_wire::{FieldError, Icmpv6Type, NdpBody, NdpHeader, NdpShape, NeighborFlags};

use crate::Packet;

/// A Neighbor Discovery message in IPv6 in Ethernet.
pub type NdpPacket = Packet<NdpHeader>;

forward!(impl Packet<NdpHeader> {
    get {
        fn msg_type(&self) -> Icmpv6Type;
        fn code(&self) -> u8;
        fn checksum_readable(&self) -> String;
        fn shape(&self) -> NdpShape;
        fn body(&self) -> &NdpBody;
        fn data(&self) -> &[u8];
        fn reserved(&self) -> Option<u32>;
        fn neighbor_flags(&self) -> Option<NeighborFlags>;
        fn target_addr(&self) -> Option<Ipv6Addr>;
        fn target_addr_readable(&self) -> Option<String>;
    }
    set {
        fn set_msg_type(&mut self, value: Icmpv6Type);
        fn set_code(&mut self, value: u8);
        fn set_body(&mut self, body: NdpBody);
        fn set_data(&mut self, value: Vec<u8>);
        fn set_reserved(&mut self, value: u32) -> Result<(), FieldError<u32>>;
        fn set_neighbor_flags(&mut self, flags: NeighborFlags) -> Result<(), FieldError<NeighborFlags>>;
        fn set_target_addr(&mut self, value: Ipv6Addr) -> Result<(), FieldError<Ipv6Addr>>;
        fn set_target_addr_readable<'a>(&mut self, value: &'a str) -> Result<(), FieldError<&'a str>>;
    }
});
