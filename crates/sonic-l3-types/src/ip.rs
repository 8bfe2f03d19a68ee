//! IP prefix type with masking and overlap checks.

use crate::ParseError;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Number of bits in an IPv4 address.
pub const IPV4_BITLENGTH_MAX: u8 = 32;

/// Number of bits in an IPv6 address.
pub const IPV6_BITLENGTH_MAX: u8 = 128;

/// An IP address with a prefix length, as stored on port rows
/// (e.g. `10.0.0.1/24`).
///
/// The host bits are kept, so `10.0.0.1/24` and `10.0.0.2/24` are distinct
/// values that share a network. Ordering is numeric: IPv4 before IPv6, then
/// by address value, then by prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IpPrefix {
    address: IpAddr,
    prefix_len: u8,
}

impl IpPrefix {
    /// Creates a new IP prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix length is invalid for the address type
    /// (>32 for IPv4, >128 for IPv6).
    pub fn new(address: IpAddr, prefix_len: u8) -> Result<Self, ParseError> {
        let max_len = max_len_for(&address);
        if prefix_len > max_len {
            return Err(ParseError::InvalidIpPrefix(format!(
                "{}/{} (prefix length exceeds {})",
                address, prefix_len, max_len
            )));
        }

        Ok(IpPrefix {
            address,
            prefix_len,
        })
    }

    /// Creates a host prefix (/32 or /128) for the address.
    pub fn host(address: IpAddr) -> Self {
        IpPrefix {
            address,
            prefix_len: max_len_for(&address),
        }
    }

    /// Parses `addr/len`, or a bare `addr` which is taken as a host prefix.
    pub fn parse_host_or_prefix(s: &str) -> Result<Self, ParseError> {
        if s.contains('/') {
            s.parse()
        } else {
            parse_address(s).map(IpPrefix::host)
        }
    }

    pub const fn address(&self) -> &IpAddr {
        &self.address
    }

    pub const fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub const fn is_ipv4(&self) -> bool {
        self.address.is_ipv4()
    }

    pub const fn is_ipv6(&self) -> bool {
        self.address.is_ipv6()
    }

    /// Returns the IPv4 address if this is an IPv4 prefix.
    pub fn as_ipv4(&self) -> Option<Ipv4Addr> {
        match self.address {
            IpAddr::V4(addr) => Some(addr),
            IpAddr::V6(_) => None,
        }
    }

    /// Returns the address with every bit past `mask_bits` cleared.
    ///
    /// `mask_bits` is clamped to the address width.
    pub fn masked(&self, mask_bits: u8) -> IpAddr {
        match self.address {
            IpAddr::V4(addr) => {
                let bits = mask_bits.min(IPV4_BITLENGTH_MAX);
                let mask = if bits == 0 {
                    0
                } else {
                    u32::MAX << (IPV4_BITLENGTH_MAX - bits)
                };
                IpAddr::V4(Ipv4Addr::from(u32::from(addr) & mask))
            }
            IpAddr::V6(addr) => {
                let bits = mask_bits.min(IPV6_BITLENGTH_MAX);
                let mask = if bits == 0 {
                    0
                } else {
                    u128::MAX << (IPV6_BITLENGTH_MAX - bits)
                };
                IpAddr::V6(Ipv6Addr::from(u128::from(addr) & mask))
            }
        }
    }

    /// Returns the network address of this prefix.
    pub fn network(&self) -> IpAddr {
        self.masked(self.prefix_len)
    }

    /// Returns true if the two prefixes share a subnet.
    ///
    /// Both addresses are masked with the shorter of the two prefix lengths.
    /// Prefixes of different address families never overlap.
    pub fn overlaps(&self, other: &IpPrefix) -> bool {
        if self.is_ipv4() != other.is_ipv4() {
            return false;
        }
        let mask_bits = self.prefix_len.min(other.prefix_len);
        self.masked(mask_bits) == other.masked(mask_bits)
    }
}

fn max_len_for(address: &IpAddr) -> u8 {
    match address {
        IpAddr::V4(_) => IPV4_BITLENGTH_MAX,
        IpAddr::V6(_) => IPV6_BITLENGTH_MAX,
    }
}

fn parse_address(s: &str) -> Result<IpAddr, ParseError> {
    s.parse::<IpAddr>()
        .map_err(|_| ParseError::InvalidIpAddress(s.to_string()))
}

impl fmt::Display for IpPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_len)
    }
}

impl FromStr for IpPrefix {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr_str, len_str) = s
            .rsplit_once('/')
            .ok_or_else(|| ParseError::InvalidIpPrefix(s.to_string()))?;

        let address = parse_address(addr_str)?;
        let prefix_len: u8 = len_str
            .parse()
            .map_err(|_| ParseError::InvalidIpPrefix(s.to_string()))?;

        IpPrefix::new(address, prefix_len)
    }
}
