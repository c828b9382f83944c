//! Domain models for CIDR arithmetic.
//!
//! This module contains the core data structures used throughout the application:
//! - [`AddressSpace`] - IPv4/IPv6 network range in CIDR notation
//! - [`IpFamily`] - address family and its bit width

mod address_space;

// Re-export public types
pub use address_space::{
    addr_from_bits, addr_to_bits, get_cidr_mask, parse_address, AddressSpace, IpFamily,
    MAX_LENGTH_V4, MAX_LENGTH_V6,
};
