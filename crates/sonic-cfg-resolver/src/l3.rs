//! Port address lookups

use std::net::Ipv4Addr;

use sonic_l3_types::IpPrefix;
use tracing::{debug, instrument, warn};

use crate::error::{ResolverError, ResolverResult};
use crate::resolver::ConfigResolver;
use crate::store::TableStore;
use crate::tables::columns;

/// Returns the numerically lowest IPv4 address of a secondary address set.
///
/// Addresses are compared octet by octet as numbers (`9.0.0.1` sorts before
/// `10.0.0.9`, which sorts before `10.0.0.100`), then by prefix length. The
/// winning entry is returned exactly as stored, prefix included.
///
/// # Errors
///
/// `InvalidInput` if the set is empty or any entry is not `a.b.c.d/len`.
pub fn lowest_secondary_address<'s, I, T>(addresses: I) -> ResolverResult<&'s str>
where
    I: IntoIterator<Item = &'s T>,
    T: AsRef<str> + ?Sized + 's,
{
    lowest_secondary_prefix(addresses).map(|(_, address)| address)
}

fn lowest_secondary_prefix<'s, I, T>(addresses: I) -> ResolverResult<(IpPrefix, &'s str)>
where
    I: IntoIterator<Item = &'s T>,
    T: AsRef<str> + ?Sized + 's,
{
    let mut lowest: Option<(IpPrefix, &'s str)> = None;

    for address in addresses {
        let address = address.as_ref();
        let prefix = parse_ipv4_prefix(address, columns::IP4_ADDRESS_SECONDARY)?;
        let candidate = (prefix, address);
        lowest = match lowest {
            Some(current) if current <= candidate => Some(current),
            _ => Some(candidate),
        };
    }

    lowest.ok_or_else(|| {
        ResolverError::invalid_input(
            columns::IP4_ADDRESS_SECONDARY,
            "no secondary addresses to choose from",
        )
    })
}

fn parse_ipv4_prefix(address: &str, field: &str) -> ResolverResult<IpPrefix> {
    let prefix: IpPrefix = address
        .parse()
        .map_err(|e| ResolverError::invalid_input(field, format!("{}", e)))?;
    if !prefix.is_ipv4() {
        return Err(ResolverError::invalid_input(
            field,
            format!("{} is not an IPv4 address", address),
        ));
    }
    Ok(prefix)
}

impl<S: TableStore> ConfigResolver<'_, S> {
    /// IPv4 address configured on a port, without the prefix length.
    ///
    /// The primary address wins; otherwise the lowest secondary address is
    /// used. Returns `Ok(None)` if no port has this name.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the port has neither a primary nor a secondary
    /// address, or if the chosen address is malformed.
    #[instrument(skip(self))]
    pub fn interface_ip(&self, interface_name: &str) -> ResolverResult<Option<Ipv4Addr>> {
        let Some(port) = self.store.port_by_name(interface_name) else {
            debug!("Port {} not found", interface_name);
            return Ok(None);
        };

        let prefix = match port.primary_ip4() {
            Some(primary) => parse_ipv4_prefix(primary, columns::IP4_ADDRESS)?,
            None if port.ip4_address_secondary.is_empty() => {
                return Err(ResolverError::invalid_input(
                    columns::IP4_ADDRESS,
                    format!("port {} has no IPv4 address configured", interface_name),
                ));
            }
            None => lowest_secondary_prefix(&port.ip4_address_secondary)?.0,
        };

        debug!("Port {} address {}", interface_name, prefix);
        Ok(prefix.as_ipv4())
    }

    /// Checks whether `address` shares a subnet with an address already
    /// configured on a port of `vrf_name`.
    ///
    /// `address` is `addr/len` or a bare `addr` (host route), IPv4 or IPv6.
    /// Subnets are compared at the shorter of the two prefix lengths. A match
    /// with the primary address of `if_name` itself only counts when
    /// `secondary` is set, since re-adding a port's own primary is allowed.
    /// A match with any other primary, or with any secondary, always counts.
    ///
    /// Returns `Ok(false)` if the VRF does not exist.
    #[instrument(skip(self))]
    pub fn is_address_overlapping(
        &self,
        address: &str,
        if_name: &str,
        secondary: bool,
        vrf_name: &str,
    ) -> ResolverResult<bool> {
        let input = IpPrefix::parse_host_or_prefix(address)?;

        let Some(vrf) = self.store.vrf_by_name(vrf_name) else {
            debug!("VRF {} not found", vrf_name);
            return Ok(false);
        };

        for port_ref in &vrf.ports {
            let Some(port) = self.store.port_by_ref(*port_ref) else {
                warn!("VRF {} references missing port {}", vrf_name, port_ref.0);
                continue;
            };

            let (primary, secondaries) = if input.is_ipv6() {
                (port.primary_ip6(), &port.ip6_address_secondary)
            } else {
                (port.primary_ip4(), &port.ip4_address_secondary)
            };

            if let Some(primary) = primary {
                let existing = IpPrefix::parse_host_or_prefix(primary)?;
                if input.overlaps(&existing) {
                    debug!("{} overlaps primary {} of {}", input, existing, port.name);
                    return Ok(port.name != if_name || secondary);
                }
            }

            for configured in secondaries {
                let existing = IpPrefix::parse_host_or_prefix(configured)?;
                if input.overlaps(&existing) {
                    debug!("{} overlaps secondary {} of {}", input, existing, port.name);
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }
}
