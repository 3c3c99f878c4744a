use clap::Parser;
use tracing_subscriber::EnvFilter;

use agent_config_check::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(cli.log_level().into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = run(&cli);
    std::process::exit(exit_code.into());
}
