use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use serde::Serialize;

use super::address::MacAddress;
use crate::error::DecodeError;

/// Decoded contents of the modem's `modemStatusData` page.
///
/// Fields appear in wire order. Several carry HTML fragments or image paths
/// exactly as the modem sent them, and the `unknown*` fields are kept
/// verbatim because their meaning has not been worked out yet.
///
/// A `ModemStatus` only ever comes out of [`decode`](super::decode) fully
/// populated; there is no partially decoded form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModemStatus {
    pub ip_address: IpAddr,
    pub mac_address: MacAddress,
    pub software_version: String,
    pub hardware_version: String,
    pub status: String,
    pub transmitted_packets: u64,
    pub transmitted_bytes: u64,
    pub received_packets: u64,
    pub received_bytes: u64,
    /// Uptime as displayed by the modem (e.g. `000:01:37:54`). Not parsed.
    pub online_time: String,
    pub loss_of_sync_count: u32,
    pub rx_snr: f64,
    pub rx_snr_percentage: f64,
    pub serial_number: String,
    pub rx_power: f64,
    pub rx_power_percentage: f64,
    pub cable_resistance: f64,
    pub cable_resistance_percentage: f64,
    /// Outdoor unit telemetry state.
    pub odu_telemetry_status: String,
    pub cable_attenuation: f64,
    pub cable_attenuation_percentage: f64,
    pub ifl_type: String,
    pub part_number: String,
    pub status_image_uri: String,
    pub satellite_status_uri: String,
    pub unknown25: String,
    pub status_html: String,
    pub health_html: String,
    pub unknown28: String,
    pub unknown29: String,
    pub last_page_load_duration: String,
    pub unknown31: String,
    pub unknown32: String,
}

impl ModemStatus {
    /// Starting point for the decoder; every field is overwritten before
    /// the value leaves the crate.
    pub(crate) fn blank() -> Self {
        Self {
            ip_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            mac_address: MacAddress::new([0; 6]),
            software_version: String::new(),
            hardware_version: String::new(),
            status: String::new(),
            transmitted_packets: 0,
            transmitted_bytes: 0,
            received_packets: 0,
            received_bytes: 0,
            online_time: String::new(),
            loss_of_sync_count: 0,
            rx_snr: 0.0,
            rx_snr_percentage: 0.0,
            serial_number: String::new(),
            rx_power: 0.0,
            rx_power_percentage: 0.0,
            cable_resistance: 0.0,
            cable_resistance_percentage: 0.0,
            odu_telemetry_status: String::new(),
            cable_attenuation: 0.0,
            cable_attenuation_percentage: 0.0,
            ifl_type: String::new(),
            part_number: String::new(),
            status_image_uri: String::new(),
            satellite_status_uri: String::new(),
            unknown25: String::new(),
            status_html: String::new(),
            health_html: String::new(),
            unknown28: String::new(),
            unknown29: String::new(),
            last_page_load_duration: String::new(),
            unknown31: String::new(),
            unknown32: String::new(),
        }
    }

    /// Whether the modem reports its satellite link as up.
    pub fn is_online(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case("online")
    }
}

impl FromStr for ModemStatus {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::decode(s)
    }
}
