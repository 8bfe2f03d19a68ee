//! L3 address types for switch configuration lookups.
//!
//! Addresses in the configuration tables are stored as strings such as
//! `"10.0.0.1/24"` or `"2001:db8::1/64"`. This crate turns them into
//! typed values:
//!
//! - [`IpPrefix`]: an address together with its prefix length
//!
//! [`IpPrefix`] orders numerically (address first, then prefix length), so
//! the lowest of a set of IPv4 addresses is simply the minimum.

mod ip;

pub use ip::{IpPrefix, IPV4_BITLENGTH_MAX, IPV6_BITLENGTH_MAX};

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid IP address format: {0}")]
    InvalidIpAddress(String),

    #[error("invalid IP prefix format: {0}")]
    InvalidIpPrefix(String),
}
