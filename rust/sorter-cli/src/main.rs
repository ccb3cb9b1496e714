//! Sorter CLI — sort integer sequences with a chosen classical algorithm.

use clap::{ArgAction, Parser as ClapParser, Subcommand, ValueEnum};
use sorter_cli::colors::{error_prefix, status_label};
use sorter_cli::config::{OutputFormat, SorterConfig, CONFIG_FILE_NAME};
use sorter_cli::error::{format_chain, CliError};
use sorter_cli::report::{algorithm_table, verify, SortReport};
use sorter_cli::{input, logging};
use sorter_core::{Algorithm, Sorter};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(ClapParser)]
#[command(name = "sorter", version, about = "Classical integer sorting algorithms")]
struct Cli {
    /// Config file (default: search for sorter.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort integers given as arguments, in a file, or on stdin
    Sort {
        /// Values to sort (separated by spaces or commas)
        #[arg(allow_hyphen_values = true)]
        values: Vec<String>,

        /// Algorithm name (see `sorter list`)
        #[arg(short, long)]
        algorithm: Option<Algorithm>,

        /// Inclusive key bound for counting-histogram
        #[arg(long)]
        max_key: Option<i64>,

        /// Decimal digit count for radix
        #[arg(long)]
        digits: Option<u32>,

        /// Use the unstable merge for merge sort
        #[arg(long)]
        unstable: bool,

        /// Read values from a file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Check the result is a sorted permutation of the input
        #[arg(long)]
        verify: bool,
    },
    /// List available algorithms
    List,
    /// Create a sorter.toml config file in the current directory
    Init,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let (config_path, config) = match load_config(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => fail(&e),
    };
    logging::init(cli.verbose, &config.log.level);
    match &config_path {
        Some(path) => debug!(path = %path.display(), "loaded config"),
        None => debug!("no {} found, using defaults", CONFIG_FILE_NAME),
    }

    let result = match cli.command {
        Commands::Sort {
            values,
            algorithm,
            max_key,
            digits,
            unstable,
            input,
            format,
            verify,
        } => {
            let mut options = config.sort.to_options();
            if let Some(a) = algorithm {
                options.algorithm = a;
            }
            if max_key.is_some() {
                options.max_key = max_key;
            }
            if digits.is_some() {
                options.num_digits = digits;
            }
            if unstable {
                options.stable = false;
            }
            let format = format.map(OutputFormat::from).unwrap_or(config.output.format);
            cmd_sort(
                Sorter::new(options),
                &values,
                input.as_deref(),
                format,
                verify || config.output.verify,
            )
        }
        Commands::List => {
            print!("{}", algorithm_table());
            Ok(())
        }
        Commands::Init => cmd_init(),
    };

    if let Err(e) = result {
        fail(&e);
    }
}

/// An explicit `--config` path must load; a discovered file that fails to
/// parse is reported rather than replaced by defaults.
fn load_config(explicit: Option<&Path>) -> Result<(Option<PathBuf>, SorterConfig), CliError> {
    match explicit {
        Some(path) => Ok((Some(path.to_path_buf()), SorterConfig::load_from(path)?)),
        None => Ok(match SorterConfig::load_with_path()? {
            Some((path, cfg)) => (Some(path), cfg),
            None => (None, SorterConfig::default()),
        }),
    }
}

fn cmd_sort(
    sorter: Sorter,
    args: &[String],
    file: Option<&Path>,
    format: OutputFormat,
    check: bool,
) -> Result<(), CliError> {
    let values = input::read_values(args, file)?;
    debug!(len = values.len(), options = ?sorter.options(), "read input");

    let sorted = sorter.sort(&values)?;
    if check {
        verify(&sorted, &values)?;
        info!("verified sorted permutation of {} values", values.len());
    }

    let report = SortReport::new(&sorter, values.len(), sorted);
    println!("{}", report.render(format)?);
    Ok(())
}

fn cmd_init() -> Result<(), CliError> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if path.exists() {
        return Err(CliError::AlreadyExists {
            path: CONFIG_FILE_NAME.to_string(),
        });
    }
    std::fs::write(&path, SorterConfig::default_template())?;
    println!("{} {}", status_label("Created"), CONFIG_FILE_NAME);
    Ok(())
}

fn fail(err: &CliError) -> ! {
    eprintln!("{} {}", error_prefix(), format_chain(err));
    std::process::exit(1);
}
