use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{OutputFormat, TagMatch};

#[derive(Parser)]
#[command(
    name = "carebase",
    about = "Query tagged locations and validate registry records",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the YAML dataset
    #[arg(
        short,
        long,
        env = "CAREBASE_DATA",
        default_value = "carebase.yml",
        global = true
    )]
    data: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List location tags
    Tags {
        /// Include retired tags
        #[arg(long)]
        include_retired: bool,
    },

    /// Find locations by tag (ids or names; prefix with `id:` or `name:` to be explicit)
    #[command(group(ArgGroup::new("match").required(true).args(["all", "any"])))]
    Locations {
        /// Locations carrying every listed tag; with no tags, every location
        #[arg(long, num_args = 0..)]
        all: Option<Vec<String>>,

        /// Locations carrying at least one listed tag
        #[arg(long, num_args = 1..)]
        any: Option<Vec<String>>,
    },

    /// Validate every record in the dataset
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    match cli.command {
        Commands::Tags { include_retired } => {
            commands::tags_command(&cli.data, include_retired, cli.format)?;
        }
        Commands::Locations { all, any } => {
            let matching = match (all, any) {
                (Some(all), _) => TagMatch::All(all),
                (None, Some(any)) => TagMatch::Any(any),
                (None, None) => unreachable!("clap requires --all or --any"),
            };
            commands::locations_command(&cli.data, matching, cli.format)?;
        }
        Commands::Validate => {
            commands::validate_command(&cli.data, cli.format)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("carebase=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("carebase=info"), // -v: info messages
        _ => EnvFilter::new("carebase=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
