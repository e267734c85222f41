//! Status command handlers: live fetch and offline decode.

use std::io::Read;
use std::path::Path;

use surfbeam_api::ModemStatus;
use tabled::Tabled;

use crate::cli::{DecodeArgs, GlobalOpts};
use crate::config::ModemTarget;
use crate::error::CliError;
use crate::output;

// ── Detail rows ─────────────────────────────────────────────────────

#[derive(Tabled)]
struct DetailRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn row(field: &'static str, value: impl ToString) -> DetailRow {
    DetailRow {
        field,
        value: value.to_string(),
    }
}

fn with_percentage(value: f64, percentage: f64) -> String {
    format!("{value} ({percentage}%)")
}

fn detail(status: &ModemStatus, color: bool) -> String {
    let rows = vec![
        row(
            "Status",
            output::paint_link_state(&status.status, status.is_online(), color),
        ),
        row("Online time", &status.online_time),
        row("IP address", status.ip_address),
        row("MAC address", status.mac_address),
        row("Serial number", &status.serial_number),
        row("Part number", &status.part_number),
        row("Software version", &status.software_version),
        row("Hardware version", &status.hardware_version),
        row("ODU telemetry", &status.odu_telemetry_status),
        row("IFL type", &status.ifl_type),
        row("Transmitted packets", status.transmitted_packets),
        row("Transmitted bytes", status.transmitted_bytes),
        row("Received packets", status.received_packets),
        row("Received bytes", status.received_bytes),
        row("Loss of sync count", status.loss_of_sync_count),
        row(
            "Rx SNR",
            with_percentage(status.rx_snr, status.rx_snr_percentage),
        ),
        row(
            "Rx power",
            with_percentage(status.rx_power, status.rx_power_percentage),
        ),
        row(
            "Cable resistance",
            with_percentage(status.cable_resistance, status.cable_resistance_percentage),
        ),
        row(
            "Cable attenuation",
            with_percentage(status.cable_attenuation, status.cable_attenuation_percentage),
        ),
        row("Page load", &status.last_page_load_duration),
    ];
    output::render_table(&rows)
}

fn render(status: &ModemStatus, global: &GlobalOpts) -> Result<(), CliError> {
    let color = output::should_color(global.color_mode());
    let out = output::render_single(
        global.output_format(),
        status,
        |s| detail(s, color),
        |s| s.status.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn handle(target: &ModemTarget, global: &GlobalOpts) -> Result<(), CliError> {
    let client = target.client()?;
    let status = client
        .modem_status()
        .await
        .map_err(|e| CliError::from_api(e, target.url.as_str()))?;
    render(&status, global)
}

pub fn handle_decode(args: &DecodeArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let raw = match args.file.as_deref() {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().lock().read_to_string(&mut buf)?;
            buf
        }
    };

    // Saved captures usually gain a trailing newline that the modem never sent.
    let page = raw.trim_end_matches(['\r', '\n']);
    tracing::debug!(bytes = page.len(), "decoding captured status page");

    let status = surfbeam_api::decode(page)?;
    render(&status, global)
}
