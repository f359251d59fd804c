use boardedit::{init_logging, load_script, run_script, Config};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// boardedit drag-script replay
///
/// Examples:
///   boardedit drag.json                       # Use the platform config
///   boardedit drag.json --config editor.toml  # Use a specific config file
#[derive(Parser, Debug)]
#[clap(
    name = "boardedit",
    version,
    about = "Replay a drag script against the board point editor and print the result as JSON"
)]
struct Cli {
    /// JSON drag script to replay
    script: PathBuf,

    /// Config file (TOML or JSON) to use instead of the platform default
    #[clap(long, short = 'c')]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default(&Config::default_path()?)?,
    };

    let script = load_script(&cli.script)?;
    info!(
        "Replaying {} actions from {}",
        script.actions.len(),
        cli.script.display()
    );

    let report = run_script(&script, config.editor);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
