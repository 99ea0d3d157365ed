//! `chargily`: command-line client for the Chargily Pay API.

use std::path::Path;
use std::process::ExitCode;

use chargily_pay::config::{Cli, Command, ValidatedConfig, write_default_config};

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};
use run::RunError;

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // `init` must work before any config file exists
    if let Command::Init { output } = &cli.command {
        return write_template(output);
    }

    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => return report_config_error(&e),
    };

    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    execute_command(&config, &cli.command)
}

fn write_template(output: &Path) -> ExitCode {
    if let Err(e) = write_default_config(output) {
        eprintln!("Error: {e}");
        return exit_code::CONFIG_ERROR;
    }

    println!("Configuration template written to: {}", output.display());
    exit_code::SUCCESS
}

fn report_config_error(error: &chargily_pay::config::ConfigError) -> ExitCode {
    eprintln!("Configuration error: {error}");
    print_config_hint(error);
    exit_code::CONFIG_ERROR
}

/// Runs `command` on a fresh Tokio runtime and maps the outcome to an exit code.
#[cfg(not(tarpaulin_include))]
fn execute_command(config: &ValidatedConfig, command: &Command) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start async runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    match runtime.block_on(run::execute(config, command)) {
        Ok(()) => exit_code::SUCCESS,
        Err(RunError::Config(e)) => report_config_error(&e),
        Err(e) => {
            tracing::error!("{e}");
            exit_code::runtime_error()
        }
    }
}
