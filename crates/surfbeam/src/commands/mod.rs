//! Command dispatch: bridges CLI args -> modem client -> output formatting.

pub mod config_cmd;
pub mod endpoints;
pub mod fields;
pub mod raw;
pub mod status;

use crate::cli::{Command, GlobalOpts};
use crate::config::ModemTarget;
use crate::error::CliError;

/// Dispatch a modem-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    target: &ModemTarget,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Status => status::handle(target, global).await,
        Command::Raw(args) => raw::handle(target, &args, global).await,
        Command::Endpoints => endpoints::handle(target, global),
        // Offline commands are handled before dispatch
        Command::Decode(_) | Command::Fields | Command::Config(_) | Command::Completions(_) => {
            unreachable!("offline command routed to modem dispatch")
        }
    }
}
