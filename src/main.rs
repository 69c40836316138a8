use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use hytale_manifest::errors::HytaleError;

#[derive(Parser)]
#[command(
    name = "hytale-manifest",
    about = "hytale-manifest — Generate Hytale plugin manifests",
    long_about = "hytale-manifest turns the metadata in plugin.toml into the manifest.json a Hytale server reads to load a plugin.",
    version,
    help_template = "{bin} — {about}\n\nUsage: {usage}\n\nCommands:\n{subcommands}\n\nOptions:\n{options}\n"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write manifest.json from plugin.toml
    Generate(hytale_manifest::cmds::generate::GenerateArgs),

    /// Validate plugin.toml without writing anything
    Check(hytale_manifest::cmds::check::CheckArgs),

    /// Create a starter plugin.toml
    Init(hytale_manifest::cmds::init::InitArgs),
}

fn main() -> Result<(), HytaleError> {
    dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => hytale_manifest::cmds::generate::run(args),
        Commands::Check(args) => hytale_manifest::cmds::check::run(args),
        Commands::Init(args) => hytale_manifest::cmds::init::run(args),
    }
}
