use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
use commands::{
    analyze::AnalyzeArgs, examples::ExamplesArgs, parse::ParseArgs, serve::ServeArgs,
};

#[derive(Parser)]
#[command(name = "canary")]
#[command(about = "Web shim and command line front end for the 2LS C analyzer")]
#[command(version)]
struct Cli {
    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),

    /// Run 2LS on a C file and report the bugs it finds
    Analyze(AnalyzeArgs),

    /// Scrape bugs from saved 2LS output
    Parse(ParseArgs),

    /// List the bundled example programs
    Examples(ExamplesArgs),

    /// Print the CWE table
    Cwe,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Serve(args) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(commands::serve::execute(args))
        }
        Commands::Analyze(args) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(commands::analyze::execute(args))
        }
        Commands::Parse(args) => commands::parse::execute(args),
        Commands::Examples(args) => commands::examples::execute(args),
        Commands::Cwe => commands::cwe::execute(),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
