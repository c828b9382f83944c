//! Walking every address of a range.

use crate::models::{addr_from_bits, AddressSpace, IpFamily};
use std::iter::FusedIterator;
use std::net::IpAddr;

/// Ascending iterator over the addresses of an [`AddressSpace`].
///
/// The walk is O(address count); callers decide how large a range is
/// reasonable to list.
#[derive(Debug, Clone)]
pub struct Addresses {
    family: IpFamily,
    next: Option<u128>,
    last: u128,
}

/// Every address of `space`, network and broadcast included.
pub fn addresses(space: &AddressSpace) -> Addresses {
    Addresses {
        family: space.family(),
        next: Some(space.base_bits()),
        last: space.last_bits(),
    }
}

impl Iterator for Addresses {
    type Item = IpAddr;

    fn next(&mut self) -> Option<IpAddr> {
        let current = self.next?;
        self.next = if current < self.last {
            Some(current + 1)
        } else {
            None
        };
        Some(addr_from_bits(self.family, current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(current) => match usize::try_from(self.last - current) {
                Ok(n) if n < usize::MAX => (n + 1, Some(n + 1)),
                _ => (usize::MAX, None),
            },
        }
    }
}

impl FusedIterator for Addresses {}

impl AddressSpace {
    /// Shorthand for [`addresses`]; each call starts again from the base address.
    pub fn addresses(&self) -> Addresses {
        addresses(self)
    }
}
