// ── Hardware addresses ──
//
// The modem reports its MAC address as six colon-separated octets. Parsing
// is strict: a malformed address aborts the whole decode, unlike the
// lenient numeric fields.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Why a string was rejected as a hardware address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacParseError {
    #[error("expected 6 octets, found {0}")]
    OctetCount(usize),

    #[error("invalid octet {0:?}")]
    InvalidOctet(String),

    #[error("mixed or unsupported separators")]
    Separator,
}

/// 48-bit MAC address.
///
/// Accepts `aa:bb:cc:dd:ee:ff`, `aa-bb-cc-dd-ee-ff` and `aabb.ccdd.eeff`,
/// case-insensitive. Always displayed lowercase and colon-separated.
///
/// Only 48-bit addresses are accepted. EUI-64 and 20-octet InfiniBand forms,
/// which general-purpose MAC parsers often allow, fail with
/// [`MacParseError::OctetCount`]; the modem reports a 48-bit address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    fn from_groups(groups: &[&str], width: usize) -> Result<Self, MacParseError> {
        let mut octets = [0u8; 6];
        let mut filled = 0;
        for group in groups {
            if group.len() != width || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(MacParseError::InvalidOctet((*group).to_owned()));
            }
            // Dotted groups carry two octets each.
            for pair in group.as_bytes().chunks(2) {
                let text = std::str::from_utf8(pair)
                    .map_err(|_| MacParseError::InvalidOctet((*group).to_owned()))?;
                let slot = octets
                    .get_mut(filled)
                    .ok_or(MacParseError::OctetCount(filled + 1))?;
                *slot = u8::from_str_radix(text, 16)
                    .map_err(|_| MacParseError::InvalidOctet((*group).to_owned()))?;
                filled += 1;
            }
        }
        if filled == octets.len() {
            Ok(Self(octets))
        } else {
            Err(MacParseError::OctetCount(filled))
        }
    }
}

impl FromStr for MacAddress {
    type Err = MacParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let has_colon = s.contains(':');
        let has_dash = s.contains('-');
        let has_dot = s.contains('.');

        match (has_colon, has_dash, has_dot) {
            (true, false, false) => parse_octets(s, ':'),
            (false, true, false) => parse_octets(s, '-'),
            (false, false, true) => {
                let groups: Vec<&str> = s.split('.').collect();
                if groups.len() != 3 {
                    return Err(MacParseError::OctetCount(groups.len() * 2));
                }
                Self::from_groups(&groups, 4)
            }
            _ => Err(MacParseError::Separator),
        }
    }
}

fn parse_octets(s: &str, sep: char) -> Result<MacAddress, MacParseError> {
    let groups: Vec<&str> = s.split(sep).collect();
    if groups.len() != 6 {
        return Err(MacParseError::OctetCount(groups.len()));
    }
    MacAddress::from_groups(&groups, 2)
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_colon_form() {
        let mac: MacAddress = "55:55:55:55:55:55".parse().unwrap();
        assert_eq!(mac.octets(), [0x55; 6]);
    }

    #[test]
    fn parses_dash_form_and_normalizes_case() {
        let mac: MacAddress = "AA-BB-CC-DD-EE-0F".parse().unwrap();
        assert_eq!(mac.to_string(), "aa:bb:cc:dd:ee:0f");
    }

    #[test]
    fn parses_dotted_form() {
        let mac: MacAddress = "0011.2233.4455".parse().unwrap();
        assert_eq!(mac.octets(), [0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
    }

    #[test]
    fn rejects_short_address() {
        let err = "55:55:55:55:55".parse::<MacAddress>().unwrap_err();
        assert_eq!(err, MacParseError::OctetCount(5));
    }

    #[test]
    fn rejects_eui64_address() {
        let err = "00:11:22:33:44:55:66:77".parse::<MacAddress>().unwrap_err();
        assert_eq!(err, MacParseError::OctetCount(8));
    }

    #[test]
    fn rejects_non_hex_octet() {
        let err = "55:55:55:55:55:zz".parse::<MacAddress>().unwrap_err();
        assert_eq!(err, MacParseError::InvalidOctet("zz".into()));
    }

    #[test]
    fn rejects_single_digit_octet() {
        assert!("5:55:55:55:55:55".parse::<MacAddress>().is_err());
    }

    #[test]
    fn rejects_mixed_separators() {
        let err = "55:55-55:55:55:55".parse::<MacAddress>().unwrap_err();
        assert_eq!(err, MacParseError::Separator);
    }

    #[test]
    fn rejects_empty_and_padded_input() {
        assert!("".parse::<MacAddress>().is_err());
        assert!(" 55:55:55:55:55:55".parse::<MacAddress>().is_err());
    }
}
