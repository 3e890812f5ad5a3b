use anyhow::Result;
use clap::{Parser, Subcommand};
use perksplus::Config;

mod cli {
    pub mod server;
}

/// perksplus - lead capture relay for the Perks Plus website
#[derive(Parser)]
#[command(name = "perksplus")]
#[command(about = "Relays website lead submissions to the team inbox", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config)?;
    config.validate().map_err(anyhow::Error::msg)?;

    perksplus::observability::init_observability(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
    }
}
