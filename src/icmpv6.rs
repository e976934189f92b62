use alloc::{string::String, vec::Vec};
use core::net::Ipv6Addr;

use ndcraft_wire::{
    EthernetAddr, FieldError, Icmpv6Body, Icmpv6Header, Icmpv6LinkLayerOpt, Icmpv6OptType,
    Icmpv6Type, NeighborFlags,
};

use crate::Packet;

/// A generic ICMPv6 message in IPv6 in Ethernet. Neighbor Solicitations and
/// Advertisements expose their target and link-layer address option.
pub type Icmpv6Packet = Packet<Icmpv6Header>;

forward!(impl Packet<Icmpv6Header> {
    get {
        fn msg_type(&self) -> Icmpv6Type;
        fn code(&self) -> u8;
        fn checksum_readable(&self) -> String;
        fn body(&self) -> &Icmpv6Body;
        fn data(&self) -> &[u8];
        fn reserved(&self) -> Option<u32>;
        fn neighbor_flags(&self) -> Option<NeighborFlags>;
        fn target_addr(&self) -> Option<Ipv6Addr>;
        fn target_addr_readable(&self) -> Option<String>;
        fn lladdr_opt(&self) -> Option<&Icmpv6LinkLayerOpt>;
        fn opt_type(&self) -> Option<Icmpv6OptType>;
        fn opt_len(&self) -> Option<u8>;
        fn lladdr(&self) -> Option<EthernetAddr>;
        fn lladdr_readable(&self) -> Option<String>;
    }
    set {
        fn set_msg_type(&mut self, value: Icmpv6Type);
        fn set_code(&mut self, value: u8);
        fn set_body(&mut self, body: Icmpv6Body) -> Result<(), FieldError<Icmpv6Body>>;
        fn set_data(&mut self, value: Vec<u8>);
        fn set_reserved(&mut self, value: u32) -> Result<(), FieldError<u32>>;
        fn set_neighbor_flags(&mut self, flags: NeighborFlags) -> Result<(), FieldError<NeighborFlags>>;
        fn set_target_addr(&mut self, value: Ipv6Addr) -> Result<(), FieldError<Ipv6Addr>>;
        fn set_target_addr_readable<'a>(&mut self, value: &'a str) -> Result<(), FieldError<&'a str>>;
        fn set_opt_type(&mut self, value: Icmpv6OptType) -> Result<(), FieldError<Icmpv6OptType>>;
        fn set_opt_len(&mut self, value: u8) -> Result<(), FieldError<u8>>;
        /// Adds the option matching the message type when none is present.
        fn set_lladdr(&mut self, value: EthernetAddr) -> Result<(), FieldError<EthernetAddr>>;
        fn set_lladdr_readable<'a>(&mut self, value: &'a str) -> Result<(), FieldError<&'a str>>;
    }
});
