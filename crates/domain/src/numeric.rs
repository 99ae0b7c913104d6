//! Numeric address classification.
//!
//! A literal containing `:` is only ever read as IPv6; anything else is only
//! ever read as IPv4. IPv4 components are strictly decimal: octal- or
//! hex-looking components (`010`, `0x1A`) are rejected, never reinterpreted.
//! No resolver or socket is involved at any point.

use tracing::trace;

use crate::address::{AddressFamily, ParsedAddress};
use crate::errors::DomainError;

const IPV6_GROUPS: usize = 8;
const MAX_OCTET_DIGITS: usize = 3;
const MAX_GROUP_DIGITS: usize = 4;

/// Returns `true` if `text` is a strict IPv4 or IPv6 literal.
pub fn is_numeric_address(text: &str) -> bool {
    parse_numeric_address_opt(text).is_some()
}

/// Parses a numeric literal into its binary form.
///
/// Fails with [`DomainError::InvalidAddressFormat`] carrying the input when
/// the text is not numeric. Host names are never looked up.
pub fn parse_numeric_address(text: &str) -> Result<ParsedAddress, DomainError> {
    parse_numeric_address_opt(text)
        .ok_or_else(|| DomainError::InvalidAddressFormat(text.to_string()))
}

/// Non-failing variant of [`parse_numeric_address`].
pub fn parse_numeric_address_opt(text: &str) -> Option<ParsedAddress> {
    let family = if text.contains(':') {
        AddressFamily::Ipv6
    } else {
        AddressFamily::Ipv4
    };

    let parsed = match family {
        AddressFamily::Ipv4 => parse_ipv4_decimal(text).map(ParsedAddress::V4),
        AddressFamily::Ipv6 => parse_ipv6(text).map(ParsedAddress::V6),
    };

    if parsed.is_none() {
        trace!(input = text, family = %family, "Rejected numeric literal");
    }
    parsed
}

/// Parses a dotted-quad of exactly four decimal octets.
///
/// Each octet is `0` or a digit run without a leading zero, at most `255`.
pub fn parse_ipv4_decimal(text: &str) -> Option<[u8; 4]> {
    if text.is_empty() {
        return None;
    }

    let mut parts = text.splitn(5, '.');
    let mut octets = [0u8; 4];
    for octet in &mut octets {
        *octet = parse_octet(parts.next()?)?;
    }

    if parts.next().is_some() {
        return None;
    }
    Some(octets)
}

fn parse_octet(part: &str) -> Option<u8> {
    let digits = part.as_bytes();
    if digits.is_empty() || digits.len() > MAX_OCTET_DIGITS {
        return None;
    }
    // Octal ambiguity.
    if digits.len() > 1 && digits[0] == b'0' {
        return None;
    }

    let mut value: u16 = 0;
    for &b in digits {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u16::from(b - b'0');
    }
    u8::try_from(value).ok()
}

/// Parses colon-hex IPv6 text into 16 network-order bytes.
///
/// Supports the full eight-group form, a single `::` run standing for one or
/// more zero groups, and a trailing dotted-quad in place of the last two
/// groups (`::ffff:192.0.2.1`).
pub fn parse_ipv6(text: &str) -> Option<[u8; 16]> {
    if text.is_empty() {
        return None;
    }

    let mut head = [0u16; IPV6_GROUPS];
    let mut tail = [0u16; IPV6_GROUPS];

    let groups = match text.find("::") {
        Some(pos) => {
            let (before, after) = (&text[..pos], &text[pos + 2..]);
            if after.contains("::") {
                return None;
            }
            let head_len = parse_groups(before, false, &mut head)?;
            let tail_len = parse_groups(after, true, &mut tail)?;

            // `::` must elide at least one group.
            if head_len + tail_len >= IPV6_GROUPS {
                return None;
            }
            let mut groups = [0u16; IPV6_GROUPS];
            groups[..head_len].copy_from_slice(&head[..head_len]);
            groups[IPV6_GROUPS - tail_len..].copy_from_slice(&tail[..tail_len]);
            groups
        }
        None => {
            if parse_groups(text, true, &mut head)? != IPV6_GROUPS {
                return None;
            }
            head
        }
    };

    let mut bytes = [0u8; 16];
    for (chunk, group) in bytes.chunks_exact_mut(2).zip(groups) {
        chunk.copy_from_slice(&group.to_be_bytes());
    }
    Some(bytes)
}

/// Parses `:`-separated groups into `out`, returning how many slots were
/// filled. An embedded IPv4 suffix fills two slots and may only appear as the
/// last component when `allow_ipv4` is set.
fn parse_groups(part: &str, allow_ipv4: bool, out: &mut [u16; IPV6_GROUPS]) -> Option<usize> {
    if part.is_empty() {
        return Some(0);
    }

    let mut filled = 0;
    let mut components = part.split(':').peekable();
    while let Some(component) = components.next() {
        if component.contains('.') {
            if !allow_ipv4 || components.peek().is_some() || filled + 2 > IPV6_GROUPS {
                return None;
            }
            let [a, b, c, d] = parse_ipv4_decimal(component)?;
            out[filled] = u16::from_be_bytes([a, b]);
            out[filled + 1] = u16::from_be_bytes([c, d]);
            filled += 2;
            continue;
        }

        if filled == IPV6_GROUPS {
            return None;
        }
        out[filled] = parse_hex_group(component)?;
        filled += 1;
    }
    Some(filled)
}

fn parse_hex_group(component: &str) -> Option<u16> {
    let digits = component.as_bytes();
    if digits.is_empty() || digits.len() > MAX_GROUP_DIGITS {
        return None;
    }

    digits.iter().try_fold(0u16, |acc, &b| {
        let nibble = char::from(b).to_digit(16)?;
        Some((acc << 4) | nibble as u16)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octet_bounds() {
        assert_eq!(parse_octet("0"), Some(0));
        assert_eq!(parse_octet("255"), Some(255));
        assert_eq!(parse_octet("256"), None);
        assert_eq!(parse_octet("999"), None);
        assert_eq!(parse_octet("1000"), None);
        assert_eq!(parse_octet(""), None);
    }

    #[test]
    fn test_octet_rejects_leading_zero() {
        assert_eq!(parse_octet("00"), None);
        assert_eq!(parse_octet("01"), None);
        assert_eq!(parse_octet("010"), None);
    }

    #[test]
    fn test_octet_rejects_signs_and_hex() {
        assert_eq!(parse_octet("+1"), None);
        assert_eq!(parse_octet("-1"), None);
        assert_eq!(parse_octet("0x1"), None);
        assert_eq!(parse_octet("1a"), None);
    }

    #[test]
    fn test_hex_group() {
        assert_eq!(parse_hex_group("0"), Some(0));
        assert_eq!(parse_hex_group("db8"), Some(0x0db8));
        assert_eq!(parse_hex_group("0DB8"), Some(0x0db8));
        assert_eq!(parse_hex_group("ffff"), Some(0xffff));
        assert_eq!(parse_hex_group("10000"), None);
        assert_eq!(parse_hex_group("+1"), None);
        assert_eq!(parse_hex_group("g"), None);
        assert_eq!(parse_hex_group(""), None);
    }

    #[test]
    fn test_groups_reject_ipv4_not_last() {
        let mut out = [0u16; IPV6_GROUPS];
        assert_eq!(parse_groups("1.2.3.4:1", true, &mut out), None);
        assert_eq!(parse_groups("1:1.2.3.4", false, &mut out), None);
        assert_eq!(parse_groups("1:1.2.3.4", true, &mut out), Some(3));
        assert_eq!(&out[..3], &[1, 0x0102, 0x0304]);
    }

    #[test]
    fn test_groups_overflow() {
        let mut out = [0u16; IPV6_GROUPS];
        assert_eq!(parse_groups("1:2:3:4:5:6:7:8:9", true, &mut out), None);
        assert_eq!(parse_groups("1:2:3:4:5:6:7:1.2.3.4", true, &mut out), None);
    }

    #[test]
    fn test_dispatch_by_colon() {
        assert!(matches!(
            parse_numeric_address_opt("10.0.0.1"),
            Some(ParsedAddress::V4(_))
        ));
        assert!(matches!(
            parse_numeric_address_opt("::1"),
            Some(ParsedAddress::V6(_))
        ));
        // Looks like decimal, still only evaluated as IPv6 (four groups, no `::`).
        assert_eq!(parse_numeric_address_opt("1:2:3:4"), None);
    }

    #[test]
    fn test_error_carries_input() {
        let err = parse_numeric_address("example.com").unwrap_err();
        assert_eq!(err, DomainError::InvalidAddressFormat("example.com".into()));
        assert_eq!(err.to_string(), "Not a numeric address: example.com");
    }
}
