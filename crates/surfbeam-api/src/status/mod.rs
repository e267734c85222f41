// Status page decoding.
//
// The modem's `modemStatusData` page is a single line of text with fields
// separated by `##`. There is no escaping, so a separator inside one of the
// HTML fragments would shift every later field; the decoder does not try to
// recover from that.

mod address;
mod coerce;
mod record;
mod schema;

use tracing::{debug, trace};

use crate::error::DecodeError;

pub use address::{MacAddress, MacParseError};
pub use record::ModemStatus;
pub use schema::{FIELD_COUNT, FIELDS, FieldKind, FieldSpec, field_by_name};

/// Literal separator between fields on the status page.
pub const FIELD_SEPARATOR: &str = "##";

/// Decode a raw status page into a [`ModemStatus`].
///
/// Fields are read strictly by position. Anything past the last known field
/// (including the empty remainder after a trailing `##`) is ignored. The
/// first field that is missing or fails coercion aborts the decode.
pub fn decode(raw: &str) -> Result<ModemStatus, DecodeError> {
    let parts: Vec<&str> = raw.split(FIELD_SEPARATOR).collect();
    trace!(fields = parts.len(), "splitting status page");

    let mut status = ModemStatus::blank();
    for spec in &FIELDS {
        let Some(value) = parts.get(spec.index) else {
            let err = spec.missing(parts.len());
            debug!(error = %err, "status page truncated");
            return Err(err);
        };
        trace!(index = spec.index, field = spec.name, kind = %spec.kind, raw = value, "coercing field");
        if let Err(err) = spec.apply(&mut status, value) {
            debug!(error = %err, "status field rejected");
            return Err(err);
        }
    }

    Ok(status)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = "55.55.55.55##55:55:55:55:55:55##UT_1.5.2.2.3##UT_7 P3_V1##Online##7,088,473##1,693,689,905##9,378,757##9,532,929,796##000:01:37:54##2##6.2##32%##012345678901##-44.3##47%##1.5##6%##Active##12.4##82%##Single##0123456789##images/Modem_Status_005_Online.png##/images/Satellite_Status_Purple.png##0##<p>Connected</p>##<p>Good</p>##0.00%##0.00%##6.67s##195##10000000##";

    /// Replace one field of the sample page.
    fn with_field(index: usize, value: &str) -> String {
        let mut parts: Vec<&str> = SAMPLE.split(FIELD_SEPARATOR).collect();
        parts[index] = value;
        parts.join(FIELD_SEPARATOR)
    }

    #[test]
    fn decodes_sample_page() {
        let status = decode(SAMPLE).unwrap();

        assert_eq!(status.ip_address, IpAddr::V4(Ipv4Addr::new(55, 55, 55, 55)));
        assert_eq!(status.mac_address.to_string(), "55:55:55:55:55:55");
        assert_eq!(status.software_version, "UT_1.5.2.2.3");
        assert_eq!(status.hardware_version, "UT_7 P3_V1");
        assert_eq!(status.status, "Online");
        assert_eq!(status.transmitted_packets, 7_088_473);
        assert_eq!(status.transmitted_bytes, 1_693_689_905);
        assert_eq!(status.received_packets, 9_378_757);
        assert_eq!(status.received_bytes, 9_532_929_796);
        assert_eq!(status.online_time, "000:01:37:54");
        assert_eq!(status.loss_of_sync_count, 2);
        assert_eq!(status.rx_snr, 6.2);
        assert_eq!(status.rx_snr_percentage, 32.0);
        assert_eq!(status.serial_number, "012345678901");
        assert_eq!(status.rx_power, -44.3);
        assert_eq!(status.rx_power_percentage, 47.0);
        assert_eq!(status.cable_resistance, 1.5);
        assert_eq!(status.cable_resistance_percentage, 6.0);
        assert_eq!(status.odu_telemetry_status, "Active");
        assert_eq!(status.cable_attenuation, 12.4);
        assert_eq!(status.cable_attenuation_percentage, 82.0);
        assert_eq!(status.ifl_type, "Single");
        assert_eq!(status.part_number, "0123456789");
        assert_eq!(status.status_image_uri, "images/Modem_Status_005_Online.png");
        assert_eq!(status.satellite_status_uri, "/images/Satellite_Status_Purple.png");
        assert_eq!(status.unknown25, "0");
        assert_eq!(status.status_html, "<p>Connected</p>");
        assert_eq!(status.health_html, "<p>Good</p>");
        assert_eq!(status.unknown28, "0.00%");
        assert_eq!(status.unknown29, "0.00%");
        assert_eq!(status.last_page_load_duration, "6.67s");
        assert_eq!(status.unknown31, "195");
        assert_eq!(status.unknown32, "10000000");
        assert!(status.is_online());
    }

    #[test]
    fn decoding_is_repeatable() {
        assert_eq!(decode(SAMPLE).unwrap(), decode(SAMPLE).unwrap());
    }

    #[test]
    fn from_str_matches_decode() {
        let parsed: ModemStatus = SAMPLE.parse().unwrap();
        assert_eq!(parsed, decode(SAMPLE).unwrap());
    }

    #[test]
    fn exactly_thirty_three_fields_is_enough() {
        let trimmed = SAMPLE.trim_end_matches(FIELD_SEPARATOR);
        assert_eq!(trimmed.split(FIELD_SEPARATOR).count(), FIELD_COUNT);
        assert!(decode(trimmed).is_ok());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let longer = format!("{SAMPLE}extra##more");
        assert_eq!(decode(&longer).unwrap(), decode(SAMPLE).unwrap());
    }

    #[test]
    fn text_fields_are_not_trimmed() {
        let status = decode(&with_field(4, "  Online ")).unwrap();
        assert_eq!(status.status, "  Online ");
        assert!(status.is_online());
    }

    #[test]
    fn blank_numeric_field_decodes_as_zero() {
        let status = decode(&with_field(6, " ")).unwrap();
        assert_eq!(status.transmitted_bytes, 0);

        let status = decode(&with_field(10, "")).unwrap();
        assert_eq!(status.loss_of_sync_count, 0);
    }

    #[test]
    fn lenient_number_formats() {
        let status = decode(&with_field(5, "1,234,554")).unwrap();
        assert_eq!(status.transmitted_packets, 1_234_554);

        let status = decode(&with_field(12, "12.345 %")).unwrap();
        assert_eq!(status.rx_snr_percentage, 12.345);

        let status = decode(&with_field(19, "1,22,3.677")).unwrap();
        assert_eq!(status.cable_attenuation, 1223.677);
    }

    #[test]
    fn short_page_reports_first_missing_field() {
        let parts: Vec<&str> = SAMPLE.split(FIELD_SEPARATOR).take(20).collect();
        let err = decode(&parts.join(FIELD_SEPARATOR)).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingField {
                index: 20,
                field: "cable_attenuation_percentage",
                found: 20,
            }
        );
    }

    #[test]
    fn empty_page_fails_on_the_first_field() {
        // "" splits into a single empty field, which fails as an IP first.
        let err = decode("").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidAddress { index: 0, .. }), "{err:?}");

        let err = decode("55.55.55.55").unwrap_err();
        assert!(matches!(err, DecodeError::MissingField { index: 1, found: 1, .. }), "{err:?}");
    }

    #[test]
    fn malformed_mac_aborts_decode() {
        let err = decode(&with_field(1, "55:55:55:55:55")).unwrap_err();
        assert_eq!(err.index(), 1);
        assert_eq!(err.field(), "mac_address");
        assert!(matches!(err, DecodeError::InvalidAddress { .. }), "{err:?}");
    }

    #[test]
    fn malformed_ip_aborts_decode() {
        let err = decode(&with_field(0, "300.1.1.1")).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidAddress { index: 0, .. }), "{err:?}");
    }

    #[test]
    fn address_failure_wins_over_later_number_failure() {
        let page = with_field(1, "bogus");
        let mut parts: Vec<&str> = page.split(FIELD_SEPARATOR).collect();
        parts[5] = "abc";
        let err = decode(&parts.join(FIELD_SEPARATOR)).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidAddress { index: 1, .. }), "{err:?}");
    }

    #[test]
    fn non_numeric_field_names_the_field() {
        let err = decode(&with_field(7, "abc")).unwrap_err();
        match err {
            DecodeError::InvalidNumber {
                index, field, raw, ..
            } => {
                assert_eq!(index, 7);
                assert_eq!(field, "received_packets");
                assert_eq!(raw, "abc");
            }
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn commas_only_is_not_zero() {
        let err = decode(&with_field(8, ",,,")).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidNumber { index: 8, .. }), "{err:?}");
    }

    #[test]
    fn embedded_separator_shifts_fields() {
        // Known upstream fragility: an extra `##` inside the HTML misaligns
        // the tail of the page, which is still decoded positionally.
        let status = decode(&with_field(26, "<p>Con##nected</p>")).unwrap();
        assert_eq!(status.status_html, "<p>Con");
        assert_eq!(status.health_html, "nected</p>");
        assert_eq!(status.unknown32, "195");
    }

    #[test]
    fn error_message_includes_field_and_value() {
        let err = decode(&with_field(11, "n/a")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("rx_snr"), "{msg}");
        assert!(msg.contains("\"n/a\""), "{msg}");
    }
}
