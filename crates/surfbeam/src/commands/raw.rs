//! Raw page command handler.

use serde::Serialize;

use crate::cli::{GlobalOpts, RawArgs};
use crate::config::ModemTarget;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct RawPage {
    url: String,
    body: String,
}

pub async fn handle(
    target: &ModemTarget,
    args: &RawArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = target.client()?;
    let url = if args.tria {
        client.tria_status_url()
    } else {
        client.modem_status_url()
    }
    .map_err(|e| CliError::from_api(e, target.url.as_str()))?;

    let body = if args.tria {
        client.raw_tria_status().await
    } else {
        client.raw_modem_status().await
    }
    .map_err(|e| CliError::from_api(e, url.as_str()))?;

    let page = RawPage {
        url: url.to_string(),
        body,
    };

    // The body is the payload; table and plain both print it untouched.
    let out = output::render_single(
        global.output_format(),
        &page,
        |p| p.body.clone(),
        |p| p.body.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
