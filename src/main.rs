use cidr_calc::cli::{run_to_stdout, Cli};
use cidr_calc::config::{init_logging, LogConfig, OutputConfig};
use cidr_calc::output::Painter;
use clap::Parser;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let output = OutputConfig::from_env(cli.no_color);

    match start(&cli, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("failed: {e:?}");
            eprintln!("{} {e}", Painter::new(&output).failure("error:"));
            eprintln!("See 'cidr-calc --help' for help and examples");
            ExitCode::FAILURE
        }
    }
}

fn start(cli: &Cli, output: &OutputConfig) -> Result<(), Box<dyn Error>> {
    let log_config = LogConfig::from_env(cli.debug)?;
    init_logging(&log_config, cli.log_config.as_deref())?;
    log::debug!("#Start main() {log_config:?}");

    run_to_stdout(&cli.command, output)
}
