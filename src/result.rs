//! The structured result object returned for each analyzed function,
//! and the program-level aggregate (§6, §7).

use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, SystemTime};

use crate::error::AnalyzerError;
use crate::matrix::Matrix;

/// A choice vector: one non-empty subset of `{0,1,2}` per choice
/// index (§3, §4.8).
pub type ChoiceVector = Vec<BTreeSet<u8>>;

/// A statement or expression the analyzer declined to model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub description: String,
}

impl Warning {
    pub fn unsupported(description: impl Into<String>) -> Self {
        Warning { description: description.into() }
    }
}

/// How analysis of one function concluded (§4.10, §7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionStatus {
    /// The body was fully (or, in skip mode, partially) traversed;
    /// `AnalysisResult::infinite`/`bound` are meaningful.
    Analyzed,
    /// Strict mode saw an unsupported construct and aborted before
    /// producing a bound (§4.7, §7).
    Unsupported,
    /// An internal-invariant violation made the result unusable
    /// (§7). Sibling functions are unaffected.
    Aborted(AnalyzerError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub started_at: SystemTime,
    pub elapsed: Duration,
}

/// The per-function result (§6 "Result object").
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub function_name: String,
    pub variables: Vec<String>,
    pub matrix: Option<Matrix>,
    pub choice_vectors: Vec<ChoiceVector>,
    pub infinite: bool,
    /// `(source -> targets)` pairs whose matrix cell held an
    /// `infinity` coefficient under every surviving choice (§7).
    /// Populated only when `infinite` is set.
    pub problematic_flows: BTreeMap<String, BTreeSet<String>>,
    pub bound: Option<String>,
    pub warnings: Vec<Warning>,
    /// Total number of non-deterministic choice points consumed
    /// while analyzing this function (§3 "Choice index").
    pub index: usize,
    pub status: FunctionStatus,
    pub timing: Timing,
}

impl AnalysisResult {
    pub fn is_bounded(&self) -> bool {
        self.status == FunctionStatus::Analyzed && !self.infinite
    }
}

/// The shape an external parser's failure would need to report
/// through, mirrored here for completeness (§1, §7); this crate
/// never produces this variant itself since it has no parser.
#[derive(Debug, Clone)]
pub enum AnalysisOutcome {
    Completed(AnalysisResult),
    ParseFailure(String),
}

/// Aggregate over every function in a [`crate::ast::Program`]. A
/// failure analyzing one function never prevents analysis of its
/// siblings (§7 propagation policy).
#[derive(Debug, Clone, Default)]
pub struct ProgramResult {
    pub functions: Vec<AnalysisOutcome>,
}

impl ProgramResult {
    pub fn completed(&self) -> impl Iterator<Item = &AnalysisResult> {
        self.functions.iter().filter_map(|o| match o {
            AnalysisOutcome::Completed(r) => Some(r),
            AnalysisOutcome::ParseFailure(_) => None,
        })
    }
}
