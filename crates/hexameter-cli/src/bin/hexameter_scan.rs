// hexameter-scan: scan Beta Code hexameter lines.
//
// Reads verse lines from a file or stdin (one per line, optionally
// `NUMBER<TAB>TEXT`), scans each against the given lexicon and parse table,
// and prints one result per line. The corpus summary goes to stderr.
//
// Usage:
//   hexameter-scan [--lexicon PATH] [--parses PATH] [--last-pass N]
//                  [--book N] [--json] [FILE]
//
// Logging is controlled with RUST_LOG (e.g. RUST_LOG=hexameter_scan=debug).

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hexameter_cli::{CliError, load_lexicon, load_parses, read_lines, render_json, render_text};
use hexameter_core::{Lexicon, ParseTable};
use hexameter_scan::{CorpusSummary, Pass, ScanOptions, ScansionEngine};
use tracing_subscriber::EnvFilter;

/// Scan Greek dactylic hexameter written in Beta Code.
#[derive(Parser)]
#[command(name = "hexameter-scan", version)]
struct Args {
    /// Lexicon JSON (`{"entries": [...], "overrides": [...]}`)
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Parse table JSON (token form -> list of parses)
    #[arg(long)]
    parses: Option<PathBuf>,

    /// Last scanner pass to try (1-5)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=5))]
    last_pass: u8,

    /// Book number recorded on every line
    #[arg(long, default_value_t = 1)]
    book: u32,

    /// Print one JSON feature record per line
    #[arg(long)]
    json: bool,

    /// Keep clitic junctions as full word breaks
    #[arg(long)]
    no_clitics: bool,

    /// Input file; stdin if omitted
    input: Option<PathBuf>,
}

fn run(args: Args) -> Result<CorpusSummary, CliError> {
    let lexicon = match &args.lexicon {
        Some(path) => load_lexicon(path)?,
        None => Lexicon::new(),
    };
    let parses = match &args.parses {
        Some(path) => load_parses(path)?,
        None => ParseTable::new(),
    };
    let lines = match &args.input {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            read_lines(BufReader::new(file), args.book)?
        }
        None => read_lines(io::stdin().lock(), args.book)?,
    };

    let options = ScanOptions {
        last_pass: Pass::new(args.last_pass).unwrap_or_default(),
        resolve_clitics: !args.no_clitics,
    };
    let engine = ScansionEngine::with_options(lexicon, parses, options);
    let (reports, summary) = engine.scan_corpus(&lines);

    let stdout_error = |source: io::Error| CliError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    };
    let mut out = BufWriter::new(io::stdout().lock());
    for report in &reports {
        let rendered = if args.json {
            render_json(report).map_err(|source| CliError::Json {
                path: PathBuf::from("<stdout>"),
                source,
            })?
        } else {
            render_text(report)
        };
        writeln!(out, "{rendered}").map_err(stdout_error)?;
    }
    out.flush().map_err(stdout_error)?;
    Ok(summary)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(summary) => {
            eprintln!(
                "{} lines: {} scanned, {} ambiguous, {} exhausted",
                summary.lines, summary.scanned, summary.ambiguous, summary.exhausted
            );
            for (pass, count) in Pass::LAST.up_to().zip(summary.by_pass) {
                eprintln!("  pass {pass}: {count}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
