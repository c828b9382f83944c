//! IPv4/IPv6 network ranges in CIDR notation.
//!
//! Provides [`AddressSpace`] for representing a network as a base address plus
//! prefix length, with the bit-level helpers behind counting, bounds and
//! stepping from one subnet to the next. Counts are [`BigUint`] because an
//! IPv6 range can hold 2^128 addresses.

use crate::error::{CidrError, ParseFailure};
use lazy_static::lazy_static;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum prefix length for an IPv4 network (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for an IPv6 network (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

lazy_static! {
    static ref CIDR_RE: Regex =
        Regex::new(r"^(?P<addr>[^/\s]+)/(?P<prefix>[0-9]{1,3})$").expect("Invalid Regex?");
}

/// Address family of a network, detected from the address syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IpFamily {
    V4,
    V6,
}

impl IpFamily {
    pub fn of(addr: &IpAddr) -> IpFamily {
        match addr {
            IpAddr::V4(_) => IpFamily::V4,
            IpAddr::V6(_) => IpFamily::V6,
        }
    }

    /// Width of an address in bits (32 or 128).
    pub fn total_bits(self) -> u8 {
        match self {
            IpFamily::V4 => MAX_LENGTH_V4,
            IpFamily::V6 => MAX_LENGTH_V6,
        }
    }

    /// Highest address of the family as an integer.
    pub(crate) fn max_bits(self) -> u128 {
        match self {
            IpFamily::V4 => u32::MAX as u128,
            IpFamily::V6 => u128::MAX,
        }
    }
}

impl std::fmt::Display for IpFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            IpFamily::V4 => write!(f, "IPv4"),
            IpFamily::V6 => write!(f, "IPv6"),
        }
    }
}

/// Address as a big-endian unsigned integer; IPv4 occupies the low 32 bits.
pub fn addr_to_bits(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u32::from(v4) as u128,
        IpAddr::V6(v6) => u128::from(v6),
    }
}

/// Inverse of [`addr_to_bits`]. Bits above the family width are dropped.
pub fn addr_from_bits(family: IpFamily, bits: u128) -> IpAddr {
    match family {
        IpFamily::V4 => IpAddr::V4(Ipv4Addr::from(bits as u32)),
        IpFamily::V6 => IpAddr::V6(Ipv6Addr::from(bits)),
    }
}

/// Mask covering the host part of a network with the given prefix.
fn host_mask(family: IpFamily, len: u8) -> u128 {
    let host_bits = (family.total_bits() - len) as u32;
    match host_bits {
        0 => 0,
        128 => u128::MAX,
        n => (1u128 << n) - 1,
    }
}

/// Convert a prefix length to a subnet mask within the family width.
///
/// # Examples
/// ```
/// use cidr_calc::models::{get_cidr_mask, IpFamily};
/// assert_eq!(get_cidr_mask(IpFamily::V4, 24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(family: IpFamily, len: u8) -> Result<u128, CidrError> {
    if len > family.total_bits() {
        return Err(CidrError::parse(
            &format!("/{len}"),
            ParseFailure::PrefixOutOfRange {
                max: family.total_bits(),
            },
        ));
    }
    Ok(family.max_bits() & !host_mask(family, len))
}

/// Parse a bare IPv4 or IPv6 address.
pub fn parse_address(text: &str) -> Result<IpAddr, CidrError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CidrError::parse(text, ParseFailure::Empty));
    }
    IpAddr::from_str(text).map_err(|_| CidrError::parse(text, ParseFailure::InvalidAddress))
}

/// A network range: base address plus prefix length.
///
/// Values built by [`AddressSpace::new`] or parsing hold the masked base
/// address. Subnets carved by the partitioner start wherever the previous
/// block ended, so their base is kept as allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AddressSpace {
    addr: IpAddr,
    prefix: u8,
}

impl AddressSpace {
    /// Build a network from any address inside it; host bits are cleared.
    pub fn new(addr: IpAddr, prefix: u8) -> Result<AddressSpace, CidrError> {
        let family = IpFamily::of(&addr);
        let mask = get_cidr_mask(family, prefix)
            .map_err(|_| {
                CidrError::parse(
                    &format!("{addr}/{prefix}"),
                    ParseFailure::PrefixOutOfRange {
                        max: family.total_bits(),
                    },
                )
            })?;
        Ok(AddressSpace {
            addr: addr_from_bits(family, addr_to_bits(addr) & mask),
            prefix,
        })
    }

    /// Block starting exactly at `addr`; `prefix` must already be valid for the family.
    pub(crate) fn at(addr: IpAddr, prefix: u8) -> AddressSpace {
        debug_assert!(prefix <= IpFamily::of(&addr).total_bits());
        AddressSpace { addr, prefix }
    }

    /// Parse CIDR text such as `10.0.0.0/16` or `2001:db8::/32`.
    pub fn parse(text: &str) -> Result<AddressSpace, CidrError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(CidrError::parse(text, ParseFailure::Empty));
        }
        let caps = match CIDR_RE.captures(text) {
            Some(caps) => caps,
            None if !text.contains('/') => {
                return Err(CidrError::parse(text, ParseFailure::MissingPrefix))
            }
            None => return Err(CidrError::parse(text, ParseFailure::InvalidPrefix)),
        };
        let addr = IpAddr::from_str(&caps["addr"])
            .map_err(|_| CidrError::parse(text, ParseFailure::InvalidAddress))?;
        let prefix: u8 = caps["prefix"]
            .parse()
            .map_err(|_| CidrError::parse(text, ParseFailure::InvalidPrefix))?;
        let family = IpFamily::of(&addr);
        if prefix > family.total_bits() {
            return Err(CidrError::parse(
                text,
                ParseFailure::PrefixOutOfRange {
                    max: family.total_bits(),
                },
            ));
        }
        let space = AddressSpace::new(addr, prefix)?;
        log::trace!("parsed '{text}' as {space}");
        Ok(space)
    }

    pub fn base(&self) -> IpAddr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn family(&self) -> IpFamily {
        IpFamily::of(&self.addr)
    }

    pub fn total_bits(&self) -> u8 {
        self.family().total_bits()
    }

    /// Number of address bits after the prefix.
    pub fn host_bits(&self) -> u8 {
        self.total_bits() - self.prefix
    }

    pub(crate) fn base_bits(&self) -> u128 {
        addr_to_bits(self.addr)
    }

    /// Highest address of the range as an integer.
    pub(crate) fn last_bits(&self) -> u128 {
        self.base_bits()
            .saturating_add(host_mask(self.family(), self.prefix))
            .min(self.family().max_bits())
    }

    /// Number of addresses in the range, network and broadcast included.
    pub fn total_address_count(&self) -> BigUint {
        BigUint::one() << self.host_bits() as u32
    }

    /// Addresses left after removing the network and broadcast address.
    ///
    /// A single-address network and a point-to-point pair have no such
    /// reservation, every address in them is usable.
    pub fn usable_host_count(&self) -> BigUint {
        let total = self.total_address_count();
        if self.host_bits() <= 1 {
            total
        } else {
            total - 2u32
        }
    }

    /// Last address of the range, whether or not it is usable.
    pub fn last_address(&self) -> IpAddr {
        addr_from_bits(self.family(), self.last_bits())
    }

    pub fn first_usable(&self) -> Result<IpAddr, CidrError> {
        match self.host_bits() {
            0 => Err(self.no_usable_address()),
            1 => Ok(self.addr),
            _ => Ok(addr_from_bits(self.family(), self.base_bits() + 1)),
        }
    }

    pub fn last_usable(&self) -> Result<IpAddr, CidrError> {
        match self.host_bits() {
            0 => Err(self.no_usable_address()),
            1 => Ok(self.last_address()),
            _ => Ok(addr_from_bits(self.family(), self.last_bits() - 1)),
        }
    }

    /// Broadcast address; only IPv4 networks of /30 or larger have one.
    pub fn broadcast(&self) -> Result<IpAddr, CidrError> {
        if self.family() == IpFamily::V6 || self.host_bits() < 2 {
            return Err(CidrError::NoBroadcastAddress {
                family: self.family(),
                prefix: self.prefix,
            });
        }
        Ok(self.last_address())
    }

    /// The subnet mask written as an address, e.g. `255.255.255.0`.
    pub fn netmask(&self) -> IpAddr {
        let family = self.family();
        addr_from_bits(family, family.max_bits() & !host_mask(family, self.prefix))
    }

    /// Block of the same size starting `block` addresses further on.
    pub fn advance(&self, block: &BigUint) -> Result<AddressSpace, CidrError> {
        let family = self.family();
        let next = BigUint::from(self.base_bits()) + block;
        let end = &next + self.total_address_count() - 1u32;
        if end > BigUint::from(family.max_bits()) {
            return Err(CidrError::AddressOverflow {
                space: *self,
                block: block.clone(),
            });
        }
        let bits = next.to_u128().ok_or_else(|| CidrError::AddressOverflow {
            space: *self,
            block: block.clone(),
        })?;
        Ok(AddressSpace::at(addr_from_bits(family, bits), self.prefix))
    }

    /// First network with prefix `len` that starts after the end of this one.
    ///
    /// The result is aligned to its own size, so asking for a larger network
    /// may skip forward past addresses that a smaller one would have used.
    pub fn next_subnet(&self, len: u8) -> Result<AddressSpace, CidrError> {
        let family = self.family();
        if len > family.total_bits() {
            return Err(CidrError::parse(
                &format!("{}/{len}", self.addr),
                ParseFailure::PrefixOutOfRange {
                    max: family.total_bits(),
                },
            ));
        }
        let size = BigUint::one() << (family.total_bits() - len) as u32;
        let after = BigUint::from(self.last_bits()) + 1u32;
        let aligned = (&after + &size - 1u32) / &size * &size;
        let start = AddressSpace::at(addr_from_bits(family, 0), len);
        let next = start.advance(&aligned)?;
        log::debug!("next /{len} after {self} is {next}");
        Ok(next)
    }

    fn no_usable_address(&self) -> CidrError {
        CidrError::NoUsableAddress {
            family: self.family(),
            prefix: self.prefix,
        }
    }
}

impl FromStr for AddressSpace {
    type Err = CidrError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressSpace::parse(s)
    }
}

impl std::fmt::Display for AddressSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl Serialize for AddressSpace {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AddressSpace {
    fn deserialize<D>(deserializer: D) -> Result<AddressSpace, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AddressSpace::parse(&s).map_err(de::Error::custom)
    }
}
