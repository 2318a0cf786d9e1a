// hexameter-cli: input loading and report rendering for the scanner binary.

use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use hexameter_core::{Lexicon, Line, ParseTable};
use hexameter_scan::{LineFeatures, LineReport, Pass};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line} of the input: {message}")]
    Input { line: usize, message: String },
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a lexicon file (`{"entries": [...], "overrides": [...]}`).
pub fn load_lexicon(path: &Path) -> Result<Lexicon, CliError> {
    let lexicon: Lexicon = read_json(path)?;
    tracing::info!(path = %path.display(), lemmas = lexicon.len(), "lexicon loaded");
    Ok(lexicon)
}

/// Load a parse table file (`{"form": [parse, ...], ...}`).
pub fn load_parses(path: &Path) -> Result<ParseTable, CliError> {
    let parses: ParseTable = read_json(path)?;
    tracing::info!(path = %path.display(), forms = parses.len(), "parse table loaded");
    Ok(parses)
}

/// Read verse lines, one per input line.
///
/// A line may start with its number and a tab (`42\tmh=nin ...`); otherwise
/// lines are numbered from 1 in input order. Blank lines are skipped.
pub fn read_lines(reader: impl BufRead, book: u32) -> Result<Vec<Line>, CliError> {
    let mut lines = Vec::new();
    let mut next_number = 1;
    for (index, raw) in reader.lines().enumerate() {
        let raw = raw.map_err(|source| CliError::Io {
            path: PathBuf::from("<input>"),
            source,
        })?;
        let raw = raw.trim_end();
        if raw.trim().is_empty() {
            continue;
        }
        let (number, text) = match raw.split_once('\t') {
            Some((number, text)) => {
                let number = number.trim().parse().map_err(|_| CliError::Input {
                    line: index + 1,
                    message: format!("bad line number {number:?}"),
                })?;
                (number, text)
            }
            None => (next_number, raw),
        };
        next_number = number + 1;
        lines.push(Line::new(text, number, book));
    }
    Ok(lines)
}

/// Human-readable report: location, foot notation, pass and dotted syllables.
pub fn render_text(report: &LineReport) -> String {
    match &report.outcome {
        Ok(line) => format!(
            "{}.{}\t{}\tpass {}\t{}\t{}",
            report.book,
            report.number,
            line.notation(),
            line.pass(),
            line.marks(),
            line
        ),
        Err(failure) => format!("{}.{}\t-\t{}", report.book, report.number, failure),
    }
}

/// One JSON record per line.
#[derive(Debug, Serialize)]
pub struct LineRecord<'a> {
    pub book: u32,
    pub number: u32,
    pub scanned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass: Option<Pass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syllables: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<&'a LineFeatures>,
}

impl<'a> From<&'a LineReport> for LineRecord<'a> {
    fn from(report: &'a LineReport) -> Self {
        let line = report.outcome.as_ref().ok();
        LineRecord {
            book: report.book,
            number: report.number,
            scanned: line.is_some(),
            pass: line.map(|l| l.pass()),
            notation: line.map(|l| l.notation()),
            syllables: line.map(ToString::to_string),
            failure: report.outcome.as_ref().err().map(ToString::to_string),
            features: report.features.as_ref(),
        }
    }
}

pub fn render_json(report: &LineReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(&LineRecord::from(report))
}
