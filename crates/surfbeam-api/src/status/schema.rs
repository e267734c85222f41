// ── Positional schema of the status page ──
//
// One entry per `##`-separated field, in wire order. Each entry names the
// field, declares how its text is coerced, and stores the result into the
// matching `ModemStatus` member. The decoder walks this table and nothing
// else, so the positional contract can be read (and tested) here in full.

use std::fmt;

use super::coerce;
use super::record::ModemStatus;
use crate::error::DecodeError;

/// Number of fields the decoder reads from a status page.
pub const FIELD_COUNT: usize = 33;

/// How a field's raw text becomes a typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Kept verbatim, no trimming.
    Text,
    /// Strict IPv4/IPv6 address.
    Ip,
    /// Strict 48-bit MAC address.
    Mac,
    /// Lenient unsigned 32-bit integer.
    Uint32,
    /// Lenient unsigned 64-bit integer.
    Uint64,
    /// Lenient decimal float.
    Float,
    /// Lenient decimal float with `%` signs removed.
    Percentage,
}

impl FieldKind {
    pub fn is_address(self) -> bool {
        matches!(self, Self::Ip | Self::Mac)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Ip => "ip",
            Self::Mac => "mac",
            Self::Uint32 => "u32",
            Self::Uint64 => "u64",
            Self::Float => "float",
            Self::Percentage => "percentage",
        };
        f.write_str(name)
    }
}

type Apply = fn(&mut ModemStatus, &str) -> Result<(), String>;

/// One positional field of the status page.
pub struct FieldSpec {
    pub index: usize,
    pub name: &'static str,
    pub kind: FieldKind,
    apply: Apply,
}

impl FieldSpec {
    /// Coerce `raw` and store it into `status`, or describe why it failed.
    pub(crate) fn apply(&self, status: &mut ModemStatus, raw: &str) -> Result<(), DecodeError> {
        (self.apply)(status, raw).map_err(|reason| {
            if self.kind.is_address() {
                DecodeError::InvalidAddress {
                    index: self.index,
                    field: self.name,
                    raw: raw.to_owned(),
                    reason,
                }
            } else {
                DecodeError::InvalidNumber {
                    index: self.index,
                    field: self.name,
                    raw: raw.to_owned(),
                    reason,
                }
            }
        })
    }

    pub(crate) fn missing(&self, found: usize) -> DecodeError {
        DecodeError::MissingField {
            index: self.index,
            field: self.name,
            found,
        }
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

#[allow(clippy::unnecessary_wraps)]
fn text(raw: &str) -> Result<String, String> {
    Ok(raw.to_owned())
}

macro_rules! field {
    ($index:literal, $member:ident, $kind:ident, $coerce:path) => {
        FieldSpec {
            index: $index,
            name: stringify!($member),
            kind: FieldKind::$kind,
            apply: |status, raw| {
                status.$member = $coerce(raw)?;
                Ok(())
            },
        }
    };
}

/// The status page layout, index 0 through 32.
pub static FIELDS: [FieldSpec; FIELD_COUNT] = [
    field!(0, ip_address, Ip, coerce::ip),
    field!(1, mac_address, Mac, coerce::mac),
    field!(2, software_version, Text, text),
    field!(3, hardware_version, Text, text),
    field!(4, status, Text, text),
    field!(5, transmitted_packets, Uint64, coerce::uint64),
    field!(6, transmitted_bytes, Uint64, coerce::uint64),
    field!(7, received_packets, Uint64, coerce::uint64),
    field!(8, received_bytes, Uint64, coerce::uint64),
    field!(9, online_time, Text, text),
    field!(10, loss_of_sync_count, Uint32, coerce::uint32),
    field!(11, rx_snr, Float, coerce::float),
    field!(12, rx_snr_percentage, Percentage, coerce::percentage),
    field!(13, serial_number, Text, text),
    field!(14, rx_power, Float, coerce::float),
    field!(15, rx_power_percentage, Percentage, coerce::percentage),
    field!(16, cable_resistance, Float, coerce::float),
    field!(17, cable_resistance_percentage, Percentage, coerce::percentage),
    field!(18, odu_telemetry_status, Text, text),
    field!(19, cable_attenuation, Float, coerce::float),
    field!(20, cable_attenuation_percentage, Percentage, coerce::percentage),
    field!(21, ifl_type, Text, text),
    field!(22, part_number, Text, text),
    field!(23, status_image_uri, Text, text),
    field!(24, satellite_status_uri, Text, text),
    field!(25, unknown25, Text, text),
    field!(26, status_html, Text, text),
    field!(27, health_html, Text, text),
    field!(28, unknown28, Text, text),
    field!(29, unknown29, Text, text),
    field!(30, last_page_load_duration, Text, text),
    field!(31, unknown31, Text, text),
    field!(32, unknown32, Text, text),
];

/// Look up a field by its name.
pub fn field_by_name(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}
