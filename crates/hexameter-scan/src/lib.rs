//! Greek dactylic hexameter scansion.
//!
//! - [`phonology`] -- phoneme segmentation, clitics, stem alignment, ending rules
//! - [`syllable`] -- syllabification, contraction, syllable lengths
//! - [`scanner`] -- multi-pass foot matching and finalization
//! - [`features`] -- caesurae, diaereses, licence counts, Meyer's laws
//! - [`engine`] -- `ScansionEngine`, the per-line and per-corpus driver

pub mod engine;
pub mod features;
pub mod phonology;
pub mod scanner;
pub mod syllable;

pub use engine::{CorpusSummary, LineReport, ScanOptions, ScansionEngine};
pub use features::LineFeatures;
pub use phonology::AlignmentMiss;
pub use scanner::{Pass, ScannedLine, ScansionFailure};
