//! Descriptive summary of a single network.

use crate::models::{AddressSpace, IpFamily};
use serde::Serialize;
use std::net::IpAddr;

/// Usable address range, or the reason there is none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UsableRange {
    Range { first: IpAddr, last: IpAddr },
    Unavailable(String),
}

/// Everything the explain report shows about a network.
///
/// Missing broadcast or usable addresses are normal for some networks and
/// are kept as messages instead of failing the whole report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkDetails {
    pub network: AddressSpace,
    pub family: IpFamily,
    pub base_address: IpAddr,
    pub netmask: IpAddr,
    pub prefix_length: u8,
    /// Total address count, as a decimal string.
    pub address_count: String,
    /// Usable host count, as a decimal string.
    pub host_count: String,
    pub usable_range: UsableRange,
    pub broadcast: Result<IpAddr, String>,
}

pub fn network_details(space: &AddressSpace) -> NetworkDetails {
    let usable_range = match (space.first_usable(), space.last_usable()) {
        (Ok(first), Ok(last)) => UsableRange::Range { first, last },
        (Err(e), _) | (_, Err(e)) => {
            log::debug!("{space}: {e}");
            UsableRange::Unavailable(e.to_string())
        }
    };

    NetworkDetails {
        network: *space,
        family: space.family(),
        base_address: space.base(),
        netmask: space.netmask(),
        prefix_length: space.prefix(),
        address_count: space.total_address_count().to_string(),
        host_count: space.usable_host_count().to_string(),
        usable_range,
        broadcast: space.broadcast().map_err(|e| e.to_string()),
    }
}
