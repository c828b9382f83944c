//! CIDR range operations.
//!
//! This module contains the logic that works on parsed networks:
//! - [`range_query`] - containment and overlap checks
//! - [`partition`] - dividing a network equally or by host capacity
//! - [`enumerate`] - listing every address of a network
//! - [`explain`] - descriptive details for the explain report

mod enumerate;
mod explain;
mod partition;
mod range_query;

// Re-export public functions
pub use enumerate::{addresses, Addresses};
pub use explain::{network_details, NetworkDetails, UsableRange};
pub use partition::{
    divide_by_capacity, divide_equally, host_block_exponent, required_address_space,
};
pub use range_query::{contains, contains_space, overlaps};
