use alloc::{format, string::String};
use core::{fmt, net::Ipv6Addr, str::FromStr};

use ndcraft_wire::{
    detect, ip::Ipv6AddrExt, EthernetAddr, EthernetFrame, EthernetProtocol, FieldError,
    FieldErrorKind, Icmpv6Message, IpProtocol, Ipv6Packet, ParseError, ParseErrorKind, WireBuild,
    WireParse, MIN_PACKET_LEN,
};

/// Calculated fields that [`Packet::recalc`] can bring up to date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recalc {
    /// The message checksum, over the IPv6 pseudo-header.
    Checksum,
    /// The IPv6 payload length.
    Length,
    /// Length first, then checksum.
    All,
}

impl Recalc {
    const fn length(self) -> bool {
        matches!(self, Recalc::Length | Recalc::All)
    }

    const fn checksum(self) -> bool {
        matches!(self, Recalc::Checksum | Recalc::All)
    }
}

impl FromStr for Recalc {
    type Err = FieldErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checksum" => Ok(Recalc::Checksum),
            "length" => Ok(Recalc::Length),
            "all" => Ok(Recalc::All),
            _ => Err(FieldErrorKind::Unsupported),
        }
    }
}

impl fmt::Display for Recalc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recalc::Checksum => write!(f, "checksum"),
            Recalc::Length => write!(f, "length"),
            Recalc::All => write!(f, "all"),
        }
    }
}

/// An Ethernet frame carrying an IPv6 packet carrying one ICMPv6-family
/// message.
///
/// The Ethernet type is always IPv6 and the IPv6 next header is always
/// ICMPv6; neither has a setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet<M> {
    frame: EthernetFrame<Ipv6Packet<M>>,
}

impl<M: Icmpv6Message> Packet<M> {
    /// Stack `message` into `ip` into `frame` and fill in the payload
    /// length and the checksum.
    ///
    /// A message too long for the 16-bit payload length leaves that field
    /// as `ip` had it; [`try_new`](Packet::try_new) reports it instead.
    pub fn new(frame: EthernetFrame<()>, ip: Ipv6Packet<()>, message: M) -> Self {
        let mut packet = Packet::assemble(frame, ip, message);
        if let Err(err) = packet.recalc(Recalc::All) {
            log_build!(err);
        }
        packet
    }

    /// Like [`new`](Packet::new), but fails with `ValueInvalid` and the
    /// message length when it does not fit the IPv6 payload length.
    pub fn try_new(
        frame: EthernetFrame<()>,
        ip: Ipv6Packet<()>,
        message: M,
    ) -> Result<Self, FieldError<usize>> {
        let mut packet = Packet::assemble(frame, ip, message);
        packet.recalc(Recalc::All)?;
        Ok(packet)
    }

    fn assemble(mut frame: EthernetFrame<()>, mut ip: Ipv6Packet<()>, message: M) -> Self {
        if frame.protocol != EthernetProtocol::Ipv6 {
            #[cfg(feature = "log")]
            tracing::debug!("replacing ethernet type {:?} with IPv6", frame.protocol);
            frame.protocol = EthernetProtocol::Ipv6;
        }
        if ip.next_header != IpProtocol::Icmpv6 {
            #[cfg(feature = "log")]
            tracing::debug!("replacing next header {} with ICMPv6", ip.next_header);
            ip.next_header = IpProtocol::Icmpv6;
        }

        Packet {
            frame: frame.with_payload(ip.with_payload(message)),
        }
    }

    pub fn ethernet(&self) -> &EthernetFrame<Ipv6Packet<M>> {
        &self.frame
    }

    pub fn ipv6(&self) -> &Ipv6Packet<M> {
        &self.frame.payload
    }

    fn ipv6_mut(&mut self) -> &mut Ipv6Packet<M> {
        &mut self.frame.payload
    }

    pub fn message(&self) -> &M {
        &self.frame.payload.payload
    }

    pub fn message_mut(&mut self) -> &mut M {
        &mut self.frame.payload.payload
    }

    pub fn into_message(self) -> M {
        self.frame.payload.payload
    }

    pub fn checksum(&self) -> u16 {
        self.message().checksum()
    }

    /// Overwrite the stored checksum. The next [`Recalc::Checksum`]
    /// replaces it again.
    pub fn set_checksum(&mut self, value: u16) {
        self.message_mut().set_checksum(value)
    }

    /// Bring the calculated fields named by `target` in line with the
    /// current contents.
    ///
    /// The checksum is filled even when the length does not fit; the
    /// length error is returned afterwards with the offending size.
    pub fn recalc(&mut self, target: Recalc) -> Result<(), FieldError<usize>> {
        let length = match target.length() {
            true => self.ipv6_mut().fill_payload_len(),
            false => Ok(()),
        };
        if target.checksum() {
            let addr = self.ipv6().addr;
            self.message_mut().fill_checksum(addr);
        }

        #[cfg(feature = "log")]
        tracing::trace!(
            "recalculated {}: length {}, checksum {:#06x}",
            target,
            self.ipv6().payload_len,
            self.checksum()
        );
        length
    }

    /// [`recalc`](Packet::recalc) by field name: `"checksum"`, `"length"`
    /// or `"all"`.
    pub fn recalc_named<'a>(&mut self, name: &'a str) -> Result<(), FieldError<&'a str>> {
        let target: Recalc = name.parse().map_err(|kind: FieldErrorKind| kind.with(name))?;
        self.recalc(target).map_err(|err| err.kind.with(name))
    }

    /// Whether the stored checksum matches the one computed over the
    /// current addresses and message.
    pub fn verify_checksum(&self) -> bool {
        self.message().verify_checksum(self.ipv6().addr)
    }
}

// IPv6 conveniences.
impl<M> Packet<M> {
    pub fn ipv6_src_addr(&self) -> Ipv6Addr {
        self.frame.payload.addr.src
    }

    pub fn set_ipv6_src_addr(&mut self, value: Ipv6Addr) {
        self.frame.payload.addr.src = value;
    }

    pub fn ipv6_src_addr_readable(&self) -> String {
        format!("{}", self.ipv6_src_addr())
    }

    pub fn set_ipv6_src_addr_readable<'a>(&mut self, value: &'a str) -> Result<(), FieldError<&'a str>> {
        let addr = Ipv6Addr::from_readable(value).map_err(|kind| kind.with(value))?;
        self.set_ipv6_src_addr(addr);
        Ok(())
    }

    pub fn ipv6_dst_addr(&self) -> Ipv6Addr {
        self.frame.payload.addr.dst
    }

    pub fn set_ipv6_dst_addr(&mut self, value: Ipv6Addr) {
        self.frame.payload.addr.dst = value;
    }

    pub fn ipv6_dst_addr_readable(&self) -> String {
        format!("{}", self.ipv6_dst_addr())
    }

    pub fn set_ipv6_dst_addr_readable<'a>(&mut self, value: &'a str) -> Result<(), FieldError<&'a str>> {
        let addr = Ipv6Addr::from_readable(value).map_err(|kind| kind.with(value))?;
        self.set_ipv6_dst_addr(addr);
        Ok(())
    }

    pub fn ipv6_traffic_class(&self) -> u8 {
        self.frame.payload.traffic_class
    }

    pub fn set_ipv6_traffic_class(&mut self, value: u8) {
        self.frame.payload.traffic_class = value;
    }

    pub fn ipv6_flow_label(&self) -> u32 {
        self.frame.payload.flow_label
    }

    /// The flow label is 20 bits wide.
    pub fn set_ipv6_flow_label(&mut self, value: u32) -> Result<(), FieldError<u32>> {
        if value > 0xf_ffff {
            return Err(FieldErrorKind::ValueInvalid.with(value));
        }
        self.frame.payload.flow_label = value;
        Ok(())
    }

    pub fn ipv6_payload_len(&self) -> u16 {
        self.frame.payload.payload_len
    }

    /// Store a raw payload length. [`Recalc::Length`] overwrites it.
    pub fn set_ipv6_payload_len(&mut self, value: u16) {
        self.frame.payload.payload_len = value;
    }

    pub fn ipv6_next_header(&self) -> IpProtocol {
        self.frame.payload.next_header
    }

    pub fn ipv6_hop_limit(&self) -> u8 {
        self.frame.payload.hop_limit
    }

    pub fn set_ipv6_hop_limit(&mut self, value: u8) {
        self.frame.payload.hop_limit = value;
    }
}

// Ethernet conveniences.
impl<M> Packet<M> {
    pub fn eth_src_addr(&self) -> EthernetAddr {
        self.frame.addr.src
    }

    pub fn set_eth_src_addr(&mut self, value: EthernetAddr) {
        self.frame.addr.src = value;
    }

    pub fn eth_src_addr_readable(&self) -> String {
        format!("{}", self.eth_src_addr())
    }

    pub fn set_eth_src_addr_readable<'a>(&mut self, value: &'a str) -> Result<(), FieldError<&'a str>> {
        let addr: EthernetAddr = value.parse().map_err(|kind: FieldErrorKind| kind.with(value))?;
        self.set_eth_src_addr(addr);
        Ok(())
    }

    pub fn eth_dst_addr(&self) -> EthernetAddr {
        self.frame.addr.dst
    }

    pub fn set_eth_dst_addr(&mut self, value: EthernetAddr) {
        self.frame.addr.dst = value;
    }

    pub fn eth_dst_addr_readable(&self) -> String {
        format!("{}", self.eth_dst_addr())
    }

    pub fn set_eth_dst_addr_readable<'a>(&mut self, value: &'a str) -> Result<(), FieldError<&'a str>> {
        let addr: EthernetAddr = value.parse().map_err(|kind: FieldErrorKind| kind.with(value))?;
        self.set_eth_dst_addr(addr);
        Ok(())
    }

    pub fn eth_type(&self) -> EthernetProtocol {
        self.frame.protocol
    }
}

impl<M: Icmpv6Message + Default> Default for Packet<M> {
    fn default() -> Self {
        Packet::new(EthernetFrame::default(), Ipv6Packet::default(), M::default())
    }
}

/// Decodes a whole frame. The wire checksum and payload length are kept as
/// they were received.
impl<M: Icmpv6Message> WireParse for Packet<M> {
    fn parse(raw: &[u8]) -> Result<Self, ParseError<&[u8]>> {
        if raw.len() < MIN_PACKET_LEN {
            let err = ParseErrorKind::PacketTooShort.with(raw);
            log_parse!(err);
            return Err(err);
        }
        if !detect::can_parse(raw) {
            let err = ParseErrorKind::ProtocolUnknown.with(raw);
            log_parse!(err);
            return Err(err);
        }

        match EthernetFrame::parse(raw) {
            Ok(frame) => Ok(Packet { frame }),
            Err(err) => {
                log_parse!(err);
                Err(err)
            }
        }
    }
}

impl<M: Icmpv6Message> WireBuild for Packet<M> {
    fn buffer_len(&self) -> usize {
        self.frame.buffer_len()
    }

    fn payload_len(&self) -> usize {
        self.frame.payload_len()
    }

    fn emit(&self, buf: &mut [u8]) {
        self.frame.emit(buf)
    }
}
