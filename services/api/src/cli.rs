use crate::demo::{run_demo, run_domains, run_estimate, DemoArgs, EstimateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use intake_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Case Intake Valuation Service",
    about = "Estimate case values and run the intake valuation service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Estimate one case from a JSON answers file or score a lead sheet CSV
    Estimate(EstimateArgs),
    /// List the available case domains
    Domains,
    /// Run an end-to-end CLI demo covering the intake and estimation workflows
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Estimate(args) => run_estimate(args),
        Command::Domains => run_domains(),
        Command::Demo(args) => run_demo(args),
    }
}
