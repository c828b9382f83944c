//! Error type shared by every CIDR operation.
//!
//! Errors carry the numbers that caused them; the text is only produced by
//! `Display` when the error reaches the command line.

use crate::models::{AddressSpace, IpFamily};
use num_bigint::BigUint;

/// Why a CIDR or address literal was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    Empty,
    MissingPrefix,
    InvalidAddress,
    InvalidPrefix,
    /// The prefix is larger than the detected family allows.
    PrefixOutOfRange { max: u8 },
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ParseFailure::Empty => write!(f, "empty input"),
            ParseFailure::MissingPrefix => write!(f, "missing '/<prefix>'"),
            ParseFailure::InvalidAddress => write!(f, "invalid IP address"),
            ParseFailure::InvalidPrefix => write!(f, "invalid prefix length"),
            ParseFailure::PrefixOutOfRange { max } => {
                write!(f, "prefix length must be between 0 and {max}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CidrError {
    #[error("invalid CIDR range '{input}': {reason}")]
    Parse { input: String, reason: ParseFailure },

    #[error("cannot divide a network into {divisor} parts, the divisor must be at least 2")]
    InvalidDivisor { divisor: i64 },

    #[error("total address space is {available} but {required} addresses are required")]
    InsufficientSpace {
        available: BigUint,
        required: BigUint,
    },

    #[error("{}", no_broadcast_message(.family))]
    NoBroadcastAddress { family: IpFamily, prefix: u8 },

    #[error("{family} network /{prefix} has no usable address")]
    NoUsableAddress { family: IpFamily, prefix: u8 },

    #[error("advancing {space} by {block} addresses overflows the {} address space", .space.family())]
    AddressOverflow { space: AddressSpace, block: BigUint },
}

fn no_broadcast_message(family: &IpFamily) -> &'static str {
    match family {
        IpFamily::V4 => "this IPv4 CIDR range has no broadcast address",
        IpFamily::V6 => "IPv6 has no broadcast addresses",
    }
}

impl CidrError {
    pub(crate) fn parse(input: &str, reason: ParseFailure) -> Self {
        CidrError::Parse {
            input: input.to_string(),
            reason,
        }
    }
}
