use clap::Parser;
use poemsweep::{CollisionPolicy, MalformedPolicy, SweepConfig, Sweeper};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "poemsweep",
    version,
    about = "Quarantines JSON poem records with no poem content"
)]
struct Cli {
    /// Directory containing the JSON record files
    #[arg(long, env = "SOURCE_DIR")]
    source_dir: PathBuf,

    /// Directory that receives quarantined records; created if missing
    #[arg(long, env = "QUARANTINE_DIR")]
    quarantine_dir: PathBuf,

    /// Extension marking an entry as a record file
    #[arg(long, default_value = "json")]
    extension: String,

    /// How to treat record files that fail to parse
    #[arg(long, value_enum, default_value_t = MalformedPolicy::Skip)]
    on_malformed: MalformedPolicy,

    /// How to handle filename collisions in the quarantine directory
    #[arg(long, value_enum, default_value_t = CollisionPolicy::Overwrite)]
    on_collision: CollisionPolicy,

    /// Output the machine-readable JSON report
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SweepConfig::new(cli.source_dir, cli.quarantine_dir)
        .with_extension(cli.extension)
        .with_malformed_policy(cli.on_malformed)
        .with_collision_policy(cli.on_collision);

    let report = Sweeper::new(config).run()?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: &report
            })?
        );
    } else {
        println!("{}", report.summary());
        println!("Operation completed.");
    }

    Ok(())
}
