//! Containment and overlap checks between ranges and addresses.

use crate::models::{addr_to_bits, AddressSpace, IpFamily};
use std::net::IpAddr;

/// True if `addr` lies between the first and last address of `space`.
///
/// An address of the other family is never contained.
pub fn contains(space: &AddressSpace, addr: IpAddr) -> bool {
    if space.family() != IpFamily::of(&addr) {
        return false;
    }
    let bits = addr_to_bits(addr);
    space.base_bits() <= bits && bits <= space.last_bits()
}

/// True if the two ranges share at least one address.
///
/// CIDR blocks are aligned powers of two, so when they intersect one of the
/// base addresses falls inside the other block.
pub fn overlaps(a: &AddressSpace, b: &AddressSpace) -> bool {
    contains(a, b.base()) || contains(b, a.base())
}

/// True if every address of `inner` is also in `outer`.
pub fn contains_space(outer: &AddressSpace, inner: &AddressSpace) -> bool {
    contains(outer, inner.base()) && contains(outer, inner.last_address())
}
