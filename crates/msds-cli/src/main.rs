mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "msds",
    version,
    about = "Catalog tool for Material Safety Data Sheets"
)]
struct Cli {
    /// Config file (defaults to $MSDS_CONFIG, then built-in settings)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one record: labels with descriptions, locations, related laws and links
    Show {
        /// JSON file saved from the MSDS API (list, search or detail response)
        records: PathBuf,

        /// Record id (mid)
        mid: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Search and page through records
    List {
        /// JSON file saved from the MSDS API
        records: PathBuf,

        /// Keyword matched against title, usage and mid
        #[arg(short, long, default_value = "")]
        query: String,

        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Page size (default from config)
        #[arg(long)]
        per_page: Option<usize>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// List distinct warning labels, protective equipment or usage locations
    Labels {
        /// JSON file saved from the MSDS API
        records: PathBuf,

        /// warning, equipment or location
        #[arg(short, long, default_value = "warning")]
        kind: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Derive related laws from flags and usage text
    Regulations {
        /// Occupational safety flag ("1" or "0")
        #[arg(long, default_value = "0")]
        osh: String,

        /// Chemical hazard flag ("1" or "0")
        #[arg(long, default_value = "0")]
        chr: String,

        /// Usage text
        #[arg(long)]
        usage: Option<String>,
    },
    /// Explain an equipment or warning label title
    Describe {
        /// equipment or warning
        domain: String,

        title: String,
    },
    /// Print PDF and QR detail-page links for a record id
    Links {
        mid: String,
    },
    /// Import attachment definitions from an xlsx sheet (aid, title, type, file_loc)
    Import {
        input_file: PathBuf,

        /// Write the imported attachments to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = msds_core::config::load_config(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            Commands::Show {
                records,
                mid,
                output,
            } => commands::show::run(&records, &mid, &output, &config),
            Commands::List {
                records,
                query,
                page,
                per_page,
                output,
            } => commands::list::run(&records, &query, page, per_page, &output, &config),
            Commands::Labels {
                records,
                kind,
                output,
            } => commands::labels::run(&records, &kind, &output),
            Commands::Regulations { osh, chr, usage } => {
                commands::lookup::regulations(&osh, &chr, usage.as_deref())
            }
            Commands::Describe { domain, title } => commands::lookup::describe(&domain, &title),
            Commands::Links { mid } => commands::lookup::links(&mid, &config),
            Commands::Import { input_file, out } => commands::import::run(&input_file, out),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
