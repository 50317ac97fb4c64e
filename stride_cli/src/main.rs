use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stride_core::*;

#[derive(Parser)]
#[command(name = "stride")]
#[command(about = "Workout statistics from raw sensor packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the packages input file (JSONL)
    #[arg(long, global = true)]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print workout reports (default)
    Report {
        /// Use the built-in sample batch, ignoring any input file
        #[arg(long)]
        sample: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    stride_core::logging::init_with_level(&config.log.level);

    match cli.command {
        Some(Commands::Report { sample }) => cmd_report(cli.input, sample, &config),
        None => {
            // Default to "report" command
            cmd_report(cli.input, false, &config)
        }
    }
}

fn cmd_report(input: Option<PathBuf>, sample: bool, config: &Config) -> Result<()> {
    let packages = if sample {
        sample_packages().to_vec()
    } else {
        // CLI flag wins over the configured feed; with neither, fall back
        // to the built-in sample batch.
        match input.or_else(|| config.input.packages_path.clone()) {
            Some(path) => load_packages(&path)?,
            None => sample_packages().to_vec(),
        }
    };

    tracing::info!("Processing {} sensor packages", packages.len());

    for line in process_packages(&packages)? {
        println!("{}", line);
    }

    Ok(())
}
