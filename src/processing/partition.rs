//! Dividing a network into subnets.
//!
//! Two strategies:
//! - [`divide_equally`] - N blocks of one power-of-two size
//! - [`divide_by_capacity`] - one block per host requirement, each just big
//!   enough for its hosts plus the network and broadcast address

use crate::error::CidrError;
use crate::models::AddressSpace;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Smallest exponent `e` such that a block of `2^e` addresses leaves at
/// least `hosts` usable once the network and broadcast address are removed.
pub fn host_block_exponent(hosts: u64) -> u32 {
    let needed = BigUint::from(hosts) + 2u32;
    (needed - 1u32).bits() as u32
}

/// Sum of the block sizes needed for `requirements`.
pub fn required_address_space(requirements: &[u64]) -> BigUint {
    requirements
        .iter()
        .map(|&hosts| BigUint::one() << host_block_exponent(hosts))
        .sum()
}

/// Split `space` into `divisor` subnets of equal size.
///
/// The block size is the largest power of two not exceeding the per-subnet
/// share of addresses, so the blocks never run past the end of `space`.
/// Every subnet must keep at least two usable hosts (/30 for IPv4, /126
/// for IPv6).
pub fn divide_equally(space: &AddressSpace, divisor: i64) -> Result<Vec<AddressSpace>, CidrError> {
    if divisor <= 1 {
        return Err(CidrError::InvalidDivisor { divisor });
    }
    let total_bits = space.total_bits();
    let available = space.total_address_count();
    let min_block = BigUint::from(4u32);
    let insufficient = || CidrError::InsufficientSpace {
        available: available.clone(),
        required: BigUint::from(divisor as u64) * &min_block,
    };

    if space.prefix() == total_bits {
        return Err(insufficient());
    }

    let partition = &available / BigUint::from(divisor as u64);
    if partition.is_zero() {
        return Err(insufficient());
    }
    let exponent = (partition.bits() - 1) as u8;
    let new_prefix = total_bits - exponent;
    if new_prefix > total_bits - 2 {
        return Err(insufficient());
    }
    log::debug!(
        "divide {space} by {divisor}: partition of {partition} addresses -> /{new_prefix} blocks"
    );

    let block_size = BigUint::one() << exponent as u32;
    let mut next = AddressSpace::at(space.base(), new_prefix);
    let mut networks = Vec::new();
    for i in 0..divisor {
        networks.push(next);
        if i + 1 < divisor {
            next = next.advance(&block_size)?;
        }
    }
    Ok(networks)
}

/// Split `space` into one subnet per host requirement, in the given order.
///
/// Each block is the smallest power of two with enough usable hosts. The
/// blocks are laid out back to back from the base address of `space`.
pub fn divide_by_capacity(
    space: &AddressSpace,
    requirements: &[u64],
) -> Result<Vec<AddressSpace>, CidrError> {
    let available = space.total_address_count();
    let required = required_address_space(requirements);
    if required > available {
        log::warn!("{space} holds {available} addresses, {required} needed");
        return Err(CidrError::InsufficientSpace {
            available,
            required,
        });
    }

    let total_bits = space.total_bits();
    let mut networks: Vec<AddressSpace> = Vec::with_capacity(requirements.len());
    for (i, &hosts) in requirements.iter().enumerate() {
        let exponent = host_block_exponent(hosts);
        // required <= available keeps every exponent within the family width
        let prefix = total_bits - exponent as u8;
        let block = match networks.last() {
            Some(prev) => {
                AddressSpace::at(prev.base(), prefix).advance(&prev.total_address_count())?
            }
            None => AddressSpace::at(space.base(), prefix),
        };
        log::trace!("requirement {i}: {hosts} hosts -> {block}");
        networks.push(block);
    }
    Ok(networks)
}
