//! Error kinds for the analyzer core (§7). Only internal-invariant
//! violations and the fixpoint iteration-cap backstop are modeled as
//! `Err`; unsupported-syntax and infinite are ordinary analysis
//! outcomes carried in [`crate::result::AnalysisResult`], and
//! parse failure belongs to an external collaborator (§1, §6).

use std::fmt;

/// Fatal errors raised by the core algebra/analyzer. These always
/// abort analysis of the affected function; they never propagate to
/// sibling functions (§7 propagation policy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    /// The loop-fixpoint iteration (§4.6) did not reach a fixed
    /// point within `iteration_cap` steps. The lattice is finite and
    /// the iteration monotone (§4.6, §9), so this indicates a bug in
    /// the matrix algebra rather than a genuinely divergent input.
    FixpointDidNotConverge { iteration_cap: usize },
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzerError::FixpointDidNotConverge { iteration_cap } => write!(
                f,
                "loop fixpoint did not converge within {iteration_cap} iterations"
            ),
        }
    }
}

impl std::error::Error for AnalyzerError {}
