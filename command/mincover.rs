//! Read subsets and the elements they cover, one per line,
//! and print every minimum cover, one per line.

mod input;

use std::fs::read_to_string;
use std::io::{stdin, Read};

use anyhow::{Context as _, Result};
use atty::Stream;
use clap::{Parser, ValueEnum};

use mincover_solver::Cover;
use mincover_tracer::Trace;

use crate::input::{format_cover, parse};

#[derive(Parser)]
#[command(name = "mincover", version)]
#[command(about = "Find every minimum set cover of the subsets given as `subset: element ...` lines.")]
struct Args {
    /// Input file; `-` or nothing reads standard input.
    file: Option<String>,

    /// Trace reduction or search steps on standard error.
    #[arg(long, value_enum)]
    trace: Vec<TraceLevel>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TraceLevel {
    Reduce,
    Search,
    All,
}

impl From<TraceLevel> for Trace {
    fn from(level: TraceLevel) -> Self {
        match level {
            TraceLevel::Reduce => Trace::Reduce,
            TraceLevel::Search => Trace::Search,
            TraceLevel::All => Trace::Reduce | Trace::Search,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let trace = args
        .trace
        .iter()
        .fold(Trace::none(), |trace, &level| trace | Trace::from(level));
    if args.file.is_none() && atty::is(Stream::Stdin) && atty::is(Stream::Stdout) {
        println!("Welcome to mincover! Please enter `subset: element ...` lines, terminated with Ctrl-D.");
    }

    let input = read_file(args.file.as_deref())?;
    let mut cover = Cover::with_trace(trace);
    for (subset, elements) in parse(&input).context("Parsing subsets")? {
        cover.add(subset, elements);
    }
    for solution in cover.minimize() {
        println!("{}", format_cover(&solution));
    }
    Ok(())
}

/// Read a file or standard input and return the content as a string.
fn read_file(filename: Option<&str>) -> Result<String> {
    match filename {
        None | Some("-") => {
            let mut buffer = String::new();
            stdin()
                .read_to_string(&mut buffer)
                .context("Reading from stdin")?;
            Ok(buffer)
        }
        Some(filename) => read_to_string(filename).with_context(|| format!("Reading {filename}")),
    }
}
