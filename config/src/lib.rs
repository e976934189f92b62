#![no_std]

/// Hop limit stamped on freshly composed packets. Neighbor Discovery
/// receivers drop anything that arrives with less than 255.
pub const DEFAULT_HOP_LIMIT: u8 = 255;

pub const DEFAULT_TRAFFIC_CLASS: u8 = 0;
pub const DEFAULT_FLOW_LABEL: u32 = 0;
