//! psmcdata: write psmc results as two columns, (1) time before present in
//! years and (2) effective population size.
//!
//! Usage: `psmcdata [-u <mutrate>] [-g <gentime>] <inputfile.psmc>`

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use psmc_history::{convert_file, PsmcError, ScalingConfig, DEFAULT_PRECISION};

#[derive(Parser, Debug)]
#[command(name = "psmcdata")]
#[command(about = "Rescale psmc output into years and individuals")]
struct Args {
    /// psmc output file (`.gz` is decompressed, `-` reads stdin)
    input: PathBuf,

    /// Mutation rate per site per generation
    #[arg(short = 'u', long = "mutrate", default_value_t = 1.0)]
    mutation_rate: f64,

    /// Generation time in years
    #[arg(short = 'g', long = "gentime", default_value_t = 1.0)]
    generation_time: f64,

    /// Sites per bin used when the .psmcfa input was made
    #[arg(short = 'b', long = "bin-size", default_value_t = 100.0)]
    bin_size: f64,

    /// Decimals printed for t and Ne
    #[arg(short = 'p', long = "precision", default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Write here instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("psmcdata: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), PsmcError> {
    let config = ScalingConfig::new(args.mutation_rate, args.generation_time)?
        .with_bin_size(args.bin_size)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[
                "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
            ])
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Reading {}...", args.input.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let history = match convert_file(&args.input, &config) {
        Ok(history) => history,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };
    spinner.finish_and_clear();

    match &args.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            history.write_history(&mut out, args.precision)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            history.write_history(&mut out, args.precision)?;
            out.flush()?;
        }
    }

    log::info!("Wrote {} point(s)", history.points.len());
    Ok(())
}
