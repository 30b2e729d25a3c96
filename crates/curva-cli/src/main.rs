mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "curva",
    version,
    about = "Extract product sales from Curva ABC retail reports"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect products and the sector in a report (PDF or extracted .txt)
    Parse {
        /// Path to PDF or text file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Filename used for the sector hint (defaults to the input's name)
        #[arg(long, value_name = "NAME")]
        filename: Option<String>,
    },
    /// Build sheet rows (name, sector, month, week, quantity, value)
    Export {
        /// Path to PDF or text file
        input_file: PathBuf,

        /// JSON config file with sector/month/week defaults
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Sector label (overrides the guessed one)
        #[arg(long)]
        sector: Option<String>,

        /// Month as MM/YYYY (default: current month)
        #[arg(long)]
        month: Option<String>,

        /// Week label, e.g. "1ª semana de ago/2025"
        #[arg(long)]
        week: Option<String>,

        /// Product to include (repeatable; default: top products by value)
        #[arg(short, long = "select", value_name = "NAME")]
        select: Vec<String>,

        /// Number of top products to include when none are selected
        #[arg(long, value_name = "N")]
        top: Option<usize>,

        /// Write rows as JSON to this file (or into this directory)
        #[arg(short = 'O', long = "out", value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: could not install logger: {e}");
    }

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            filename,
        } => commands::parse::run(input_file, &output, filename),
        Commands::Export {
            input_file,
            config,
            sector,
            month,
            week,
            select,
            top,
            out,
        } => commands::export::run(commands::export::ExportArgs {
            input_file,
            config,
            sector,
            month,
            week,
            select,
            top,
            out,
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
