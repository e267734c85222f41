//! Field layout listing. Works offline.

use serde::Serialize;
use tabled::Tabled;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize, Tabled)]
struct FieldInfo {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "Kind")]
    kind: String,
}

pub fn handle(global: &GlobalOpts) -> Result<(), CliError> {
    let fields: Vec<FieldInfo> = surfbeam_api::FIELDS
        .iter()
        .map(|spec| FieldInfo {
            index: spec.index,
            name: spec.name,
            kind: spec.kind.to_string(),
        })
        .collect();

    let out = output::render_list(
        global.output_format(),
        &fields,
        |f| FieldInfo {
            index: f.index,
            name: f.name,
            kind: f.kind.clone(),
        },
        |f| f.name.to_owned(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
