mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose, cli.global.quiet);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8, quiet: bool) {
    let filter = match (quiet, verbosity) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    // Logs go to stderr so piped output stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        mut global,
        command,
    } = cli;

    match command {
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "surfbeam", &mut std::io::stdout());
            Ok(())
        }

        // Config commands stay usable when the file or its defaults are broken
        Command::Config(args) => {
            if let Ok(cfg) = config::load_config() {
                let _ = config::apply_defaults(&mut global, &cfg.defaults);
            }
            commands::config_cmd::handle(args, &global)
        }

        cmd => {
            let cfg = config::load_config()?;
            config::apply_defaults(&mut global, &cfg.defaults)?;

            match cmd {
                // Offline commands never touch the modem
                Command::Decode(args) => commands::status::handle_decode(&args, &global),
                Command::Fields => commands::fields::handle(&global),
                cmd => {
                    let target = config::resolve_target(&global, &cfg)?;

                    tracing::debug!(command = ?cmd, "dispatching command");
                    commands::dispatch(cmd, &target, &global).await
                }
            }
        }
    }
}
