use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use icetower_dump::floor::utils::parse_encoding;
use icetower_dump::{dump, ReportOptions};
use log::info;

/// Dump the floors of an IceTower floor file as text.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the floor file, or `-` to read standard input
    path: PathBuf,

    /// Difficulty at or above which a floor's map is not printed
    #[arg(long, allow_negative_numbers = true, default_value_t = icetower_dump::floor::report::DEFAULT_SUPPRESSION_THRESHOLD)]
    threshold: i32,

    /// Print every floor map regardless of difficulty
    #[arg(long)]
    show_all: bool,

    /// Encoding used to display the header comment
    #[arg(long, default_value = "utf-8")]
    encoding: String,

    /// Print an object inventory after each floor map
    #[arg(long)]
    inventory: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let options = ReportOptions {
        threshold: cli.threshold,
        show_all: cli.show_all,
        encoding: parse_encoding(&cli.encoding),
        inventory: cli.inventory,
    };

    let input: Box<dyn Read> = if cli.path.as_os_str() == "-" {
        info!("Reading floor file from standard input");
        Box::new(io::stdin().lock())
    } else {
        info!("Opening floor file: {}", cli.path.display());
        match File::open(&cli.path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("ERROR: cannot open {}: {}", cli.path.display(), e);
                process::exit(1);
            }
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match dump(input, &mut out, &options) {
        Ok(summary) => info!(
            "{} floors decoded, {} suppressed, {} trailing bytes",
            summary.floors_decoded, summary.floors_suppressed, summary.trailing_bytes
        ),
        Err(e) => {
            let _ = out.flush();
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    }
}
