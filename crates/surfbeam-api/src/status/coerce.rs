// ── Field coercion ──
//
// Numeric fields on the status page are formatted for people: padded with
// spaces, grouped with commas, and sometimes suffixed with `%`. These
// helpers undo that formatting. Errors are plain reason strings; the decoder
// attaches the field index, name and raw value.

use std::net::IpAddr;
use std::str::FromStr;

use super::address::MacAddress;

/// Trim, map empty to `None`, and drop every `,` wherever it appears.
///
/// Comma placement is not validated: `"1,22,3"` reads as `1223`.
fn clean_numeric(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.replace(',', ""))
}

fn parse_lenient<T>(raw: &str) -> Result<T, String>
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    match clean_numeric(raw) {
        None => Ok(T::default()),
        Some(cleaned) => cleaned.parse::<T>().map_err(|e| e.to_string()),
    }
}

/// Unsigned fields take digits only; `str::parse` would also accept a `+`.
fn parse_unsigned<T>(raw: &str) -> Result<T, String>
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    if clean_numeric(raw).is_some_and(|cleaned| cleaned.starts_with('+')) {
        return Err("unsigned field must not carry a sign".into());
    }
    parse_lenient(raw)
}

pub(crate) fn uint32(raw: &str) -> Result<u32, String> {
    parse_unsigned(raw)
}

pub(crate) fn uint64(raw: &str) -> Result<u64, String> {
    parse_unsigned(raw)
}

pub(crate) fn float(raw: &str) -> Result<f64, String> {
    parse_lenient(raw)
}

/// Like [`float`], after removing every `%` sign.
pub(crate) fn percentage(raw: &str) -> Result<f64, String> {
    float(&raw.replace('%', ""))
}

pub(crate) fn ip(raw: &str) -> Result<IpAddr, String> {
    raw.parse::<IpAddr>().map_err(|e| e.to_string())
}

pub(crate) fn mac(raw: &str) -> Result<MacAddress, String> {
    raw.parse::<MacAddress>().map_err(|e| e.to_string())
}
