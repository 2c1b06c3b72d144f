//! `paintshop` command-line interface.
//!
//! Reads a JSON request from a file or stdin and prints the answer line on
//! stdout. Exit codes: 0 for an answer (including `IMPOSSIBLE`), 1 when a
//! limit stopped the search before any assignment was found, 2 for decode,
//! configuration and IO errors.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use paintshop::{load_config, Answer, PaintShopError, Request, SolverConfig, CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(name = "paintshop")]
#[command(about = "Pick glossy or matte for every color, with as few matte colors as possible")]
#[command(version)]
struct Cli {
    /// Request JSON path ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    input: PathBuf,

    /// Solver configuration, TOML or YAML (default: ./paintshop.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop searching after this many seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    time_limit: Option<u64>,

    /// Stop searching after this many candidate assignments
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    candidate_limit: Option<u64>,

    /// Log solver events to stderr (-v for lifecycle, -vv for progress)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.verbose {
        0 => {}
        1 => paintshop_console::init(),
        _ => paintshop_console::init_verbose(),
    }

    match run(&cli) {
        Ok(Answer::Undecided) => {
            eprintln!("error: search stopped before any assignment was found");
            ExitCode::from(1)
        }
        Ok(answer) => {
            println!("{answer}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<Answer, PaintShopError> {
    let config = resolve_config(cli)?;
    let json = read_input(&cli.input)?;
    let request = Request::from_json_str(&json)?;
    Ok(paintshop::solve_with_config(&request, config).answer)
}

// Explicit file, then the working-directory default, then command-line limits.
fn resolve_config(cli: &Cli) -> Result<SolverConfig, PaintShopError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None if Path::new(CONFIG_FILE).exists() => load_config(CONFIG_FILE)?,
        None => SolverConfig::default(),
    };
    if let Some(seconds) = cli.time_limit {
        config = config.with_termination_seconds(seconds);
    }
    if let Some(limit) = cli.candidate_limit {
        config = config.with_candidate_count_limit(limit);
    }
    Ok(config)
}

fn read_input(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut json = String::new();
        io::stdin().read_to_string(&mut json)?;
        Ok(json)
    } else {
        fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests;
