// crates/stfeat-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "stfeat-cli")]
#[command(about = "Decode sensor feature payloads (compass, sensor fusion)", long_about = None)]
pub struct Cli {
    /// Logging verbosity (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: Level,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode back-to-back feature records from a file or hex string
    Decode(cmd::decode::DecodeArgs),

    /// Print the field descriptors of a feature
    Fields(cmd::fields::FieldsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.cmd {
        Commands::Decode(args) => cmd::decode::run(args),
        Commands::Fields(args) => cmd::fields::run(args),
    }
}
