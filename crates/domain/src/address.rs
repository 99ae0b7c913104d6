use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::errors::DomainError;
use crate::numeric::parse_numeric_address;

const IPV4_MAPPED_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFamily::Ipv4 => "IPv4",
            AddressFamily::Ipv6 => "IPv6",
        }
    }

    /// Width of the binary form in bytes.
    pub fn byte_len(&self) -> usize {
        match self {
            AddressFamily::Ipv4 => 4,
            AddressFamily::Ipv6 => 16,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated numeric address in network byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParsedAddress {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl ParsedAddress {
    pub fn family(&self) -> AddressFamily {
        match self {
            ParsedAddress::V4(_) => AddressFamily::Ipv4,
            ParsedAddress::V6(_) => AddressFamily::Ipv6,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            ParsedAddress::V4(octets) => &octets[..],
            ParsedAddress::V6(octets) => &octets[..],
        }
    }

    /// Dotted decimal for IPv4, RFC 5952 compressed lowercase hex for IPv6.
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// Returns the embedded IPv4 octets of an `::ffff:a.b.c.d` address.
    pub fn to_ipv4_mapped(&self) -> Option<[u8; 4]> {
        match self {
            ParsedAddress::V6(octets) if octets[..12] == IPV4_MAPPED_PREFIX => {
                Some([octets[12], octets[13], octets[14], octets[15]])
            }
            _ => None,
        }
    }
}

fn write_ipv4(f: &mut fmt::Formatter<'_>, octets: &[u8]) -> fmt::Result {
    write!(f, "{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

/// Longest run of two or more zero groups; the first run wins ties.
fn longest_zero_run(groups: &[u16; 8]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut start = 0;
    let mut len = 0;

    for (i, &group) in groups.iter().enumerate() {
        if group == 0 {
            if len == 0 {
                start = i;
            }
            len += 1;
            let longer = match best {
                Some((_, best_len)) => len > best_len,
                None => true,
            };
            if len >= 2 && longer {
                best = Some((start, len));
            }
        } else {
            len = 0;
        }
    }
    best
}

fn write_groups(f: &mut fmt::Formatter<'_>, groups: &[u16]) -> fmt::Result {
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            f.write_str(":")?;
        }
        write!(f, "{:x}", group)?;
    }
    Ok(())
}

fn write_ipv6(f: &mut fmt::Formatter<'_>, octets: &[u8; 16]) -> fmt::Result {
    if octets[..12] == IPV4_MAPPED_PREFIX {
        f.write_str("::ffff:")?;
        return write_ipv4(f, &octets[12..]);
    }

    let mut groups = [0u16; 8];
    for (group, chunk) in groups.iter_mut().zip(octets.chunks_exact(2)) {
        *group = u16::from_be_bytes([chunk[0], chunk[1]]);
    }

    match longest_zero_run(&groups) {
        Some((start, len)) => {
            write_groups(f, &groups[..start])?;
            f.write_str("::")?;
            write_groups(f, &groups[start + len..])
        }
        None => write_groups(f, &groups),
    }
}

impl fmt::Display for ParsedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedAddress::V4(octets) => write_ipv4(f, octets),
            ParsedAddress::V6(octets) => write_ipv6(f, octets),
        }
    }
}

impl FromStr for ParsedAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_numeric_address(s)
    }
}

impl From<ParsedAddress> for IpAddr {
    fn from(addr: ParsedAddress) -> Self {
        match addr {
            ParsedAddress::V4(octets) => IpAddr::from(octets),
            ParsedAddress::V6(octets) => IpAddr::from(octets),
        }
    }
}

impl From<IpAddr> for ParsedAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => ParsedAddress::V4(v4.octets()),
            IpAddr::V6(v6) => ParsedAddress::V6(v6.octets()),
        }
    }
}

impl Serialize for ParsedAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ParsedAddress", 2)?;
        state.serialize_field("family", self.family().as_str())?;
        state.serialize_field("address", &self.to_canonical_string())?;
        state.end()
    }
}
