//! Endpoint listing for the selected modem.

use serde::Serialize;

use crate::cli::GlobalOpts;
use crate::config::ModemTarget;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct Endpoints {
    base: String,
    modem_status: String,
    tria_status: String,
}

fn detail(e: &Endpoints) -> String {
    [
        format!("Base:          {}", e.base),
        format!("Modem status:  {}", e.modem_status),
        format!("TRIA status:   {}", e.tria_status),
    ]
    .join("\n")
}

pub fn handle(target: &ModemTarget, global: &GlobalOpts) -> Result<(), CliError> {
    let client = target.client()?;
    let url_err = |e| CliError::from_api(e, target.url.as_str());

    let endpoints = Endpoints {
        base: client.base_url().to_string(),
        modem_status: client.modem_status_url().map_err(url_err)?.to_string(),
        tria_status: client.tria_status_url().map_err(url_err)?.to_string(),
    };

    let out = output::render_single(global.output_format(), &endpoints, detail, |e| {
        e.modem_status.clone()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
