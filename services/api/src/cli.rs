use crate::demo::{run_casino_list, run_casino_show, run_demo, CasinoListArgs, CasinoShowArgs, DemoArgs};
use crate::server;
use casino_review::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Casino Review Catalog",
    about = "Serve and inspect the casino review catalog from the command line",
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
    /// Browse casinos the way the listing and detail pages show them
    Casinos {
        #[command(subcommand)]
        command: CasinosCommand,
    },
    /// Walk through listing, review moderation, and rating changes on the demo catalog
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CasinosCommand {
    /// Print one page of the casino listing
    List(CasinoListArgs),
    /// Print the detail view of a single casino
    Show(CasinoShowArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// JSON catalog snapshot to serve instead of CATALOG_PATH or the demo data
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Casino CSV export merged over the catalog (overrides CATALOG_CASINOS_CSV)
    #[arg(long)]
    pub(crate) casinos_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Casinos {
            command: CasinosCommand::List(args),
        } => run_casino_list(args),
        Command::Casinos {
            command: CasinosCommand::Show(args),
        } => run_casino_show(args),
        Command::Demo(args) => run_demo(args),
    }
}
