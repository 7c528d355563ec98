//! bmt-extract - pulls the embedded JPEG out of BMT thermal-imaging files.

mod inspect;

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

use inspect::InspectOptions;

#[derive(Parser, Debug)]
#[command(name = "bmt-extract")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// BMT file to read
    source: PathBuf,

    /// Where to write the extracted JPEG (overwritten if present)
    #[arg(required_unless_present = "inspect", conflicts_with = "inspect")]
    destination: Option<PathBuf>,

    /// Report marker offsets and printable strings instead of extracting
    #[arg(short, long, default_value_t = false)]
    inspect: bool,

    /// Minimum length of printable strings shown by --inspect
    #[arg(long, requires = "inspect", default_value_t = bmt_core::strings::DEFAULT_MIN_LEN)]
    min_len: usize,

    /// Maximum number of printable strings shown by --inspect
    #[arg(long, requires = "inspect", default_value_t = 100)]
    limit: usize,

    /// Print the --inspect report as JSON
    #[arg(long, requires = "inspect", default_value_t = false)]
    json: bool,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.inspect {
        let options = InspectOptions {
            min_len: args.min_len,
            limit: args.limit,
            json: args.json,
        };
        inspect::run(&args.source, &options)?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(destination) = args.destination else {
        anyhow::bail!("a destination path is required unless --inspect is given");
    };

    if bmt_core::extract(&args.source, &destination) {
        println!(
            "{} {}",
            style("Extracted:").green().bold(),
            destination.display()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
