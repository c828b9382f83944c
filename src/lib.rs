//! Arithmetic on IPv4 and IPv6 CIDR ranges.
//!
//! - [`models`] - [`AddressSpace`] parsing, counts and bounds
//! - [`processing`] - containment, overlap, division and enumeration
//! - [`output`] - terminal rendering of results
//! - [`cli`] - command-line definitions and dispatch

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CidrError, ParseFailure};
pub use models::{AddressSpace, IpFamily};
pub use processing::{
    addresses, contains, divide_by_capacity, divide_equally, network_details, overlaps,
};
