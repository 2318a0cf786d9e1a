// ScansionEngine: top-level integration point for hexameter scansion.
//
// Owns the lexicon and the parse table and runs the whole pipeline for a line
// (segmentation, multi-pass scanning, feature extraction). Corpus scanning
// fans lines out over rayon when the `parallel` feature is on; every line is
// independent and the shared data is read-only.

use hexameter_core::{Lexicon, Line, ParseTable};
use serde::Serialize;

use crate::features::LineFeatures;
use crate::phonology::{Phoneme, segment_line};
use crate::scanner::{Pass, ScannedLine, ScansionFailure, scan};

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Last pass to try before giving up.
    pub last_pass: Pass,
    /// Treat clitic junctions as non-breaks for caesura and diaeresis.
    pub resolve_clitics: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            last_pass: Pass::LAST,
            resolve_clitics: true,
        }
    }
}

/// The result of scanning one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    pub book: u32,
    pub number: u32,
    pub outcome: Result<ScannedLine, ScansionFailure>,
    /// Present exactly when the line scanned.
    pub features: Option<LineFeatures>,
}

impl LineReport {
    pub fn is_scanned(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Counts over a scanned corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CorpusSummary {
    pub lines: usize,
    pub scanned: usize,
    pub ambiguous: usize,
    pub exhausted: usize,
    /// Successful lines per pass, index 0 = pass 1.
    pub by_pass: [usize; 5],
}

impl CorpusSummary {
    pub fn from_reports(reports: &[LineReport]) -> Self {
        let mut summary = CorpusSummary {
            lines: reports.len(),
            ..CorpusSummary::default()
        };
        for report in reports {
            match &report.outcome {
                Ok(line) => {
                    summary.scanned += 1;
                    summary.by_pass[usize::from(line.pass().number()) - 1] += 1;
                }
                Err(ScansionFailure::Ambiguous { .. }) => summary.ambiguous += 1,
                Err(ScansionFailure::Exhausted { .. }) => summary.exhausted += 1,
            }
        }
        summary
    }
}

/// Owns the read-only inputs and scans lines against them.
#[derive(Debug, Clone, Default)]
pub struct ScansionEngine {
    lexicon: Lexicon,
    parses: ParseTable,
    options: ScanOptions,
}

impl ScansionEngine {
    pub fn new(lexicon: Lexicon, parses: ParseTable) -> Self {
        Self::with_options(lexicon, parses, ScanOptions::default())
    }

    pub fn with_options(lexicon: Lexicon, parses: ParseTable, options: ScanOptions) -> Self {
        tracing::debug!(
            lemmas = lexicon.len(),
            forms = parses.len(),
            last_pass = options.last_pass.number(),
            "scansion engine ready"
        );
        Self {
            lexicon,
            parses,
            options,
        }
    }

    // -- Options --

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    pub fn set_last_pass(&mut self, pass: Pass) {
        self.options.last_pass = pass;
    }

    pub fn set_resolve_clitics(&mut self, value: bool) {
        self.options.resolve_clitics = value;
    }

    // -- Accessors --

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn parses(&self) -> &ParseTable {
        &self.parses
    }

    // -- Pipeline --

    /// Phoneme sequence of a line.
    pub fn phonemes(&self, line: &Line) -> Vec<Phoneme> {
        let tokens = self.parses.tokens(line);
        segment_line(&tokens, &self.lexicon, self.options.resolve_clitics)
    }

    /// Scan one line.
    pub fn scan_line(&self, line: &Line) -> LineReport {
        let outcome = scan(&self.phonemes(line), self.options.last_pass);
        if let Err(failure) = &outcome {
            tracing::debug!(book = line.book, line = line.number, %failure, "line not scanned");
        }
        let features = outcome.as_ref().ok().map(LineFeatures::from_scansion);
        LineReport {
            book: line.book,
            number: line.number,
            outcome,
            features,
        }
    }

    /// Scan many lines; reports keep the input order.
    pub fn scan_corpus(&self, lines: &[Line]) -> (Vec<LineReport>, CorpusSummary) {
        #[cfg(feature = "parallel")]
        let reports: Vec<LineReport> = {
            use rayon::prelude::*;
            lines.par_iter().map(|line| self.scan_line(line)).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let reports: Vec<LineReport> = lines.iter().map(|line| self.scan_line(line)).collect();

        let summary = CorpusSummary::from_reports(&reports);
        tracing::info!(
            lines = summary.lines,
            scanned = summary.scanned,
            ambiguous = summary.ambiguous,
            exhausted = summary.exhausted,
            "corpus scanned"
        );
        (reports, summary)
    }
}
