#![no_std]
#![deny(future_incompatible)]
#![deny(rust_2018_idioms)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod packet;
pub use self::packet::{Packet, Recalc};

mod icmpv6;
pub use self::icmpv6::Icmpv6Packet;

mod ndp;
pub use self::ndp::NdpPacket;

pub use ndcraft_config as config;
pub use ndcraft_error as error;
pub use ndcraft_wire as wire;
pub use ndcraft_wire::{WireBuild, WireParse};
