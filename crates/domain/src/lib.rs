//! Ferrous NumAddr Domain Layer
//!
//! Classifies and parses numeric IPv4/IPv6 literals without touching the
//! network or any resolver.
pub mod address;
pub mod config;
pub mod errors;
pub mod numeric;

pub use address::{AddressFamily, ParsedAddress};
pub use config::{CliOverrides, Config, ConfigError, OutputFormat};
pub use errors::DomainError;
pub use numeric::{
    is_numeric_address, parse_ipv4_decimal, parse_ipv6, parse_numeric_address,
    parse_numeric_address_opt,
};
