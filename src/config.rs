//! Analyzer configuration: the semantic subset of the CLI surface
//! described in §6 (`--strict`, `--fin`) plus the iteration-cap
//! backstop recommended in §9. Purely cosmetic flags
//! (`--silent`/`--info`/`--debug`, `--no_save`, `-o <dir>`) belong to
//! the external CLI collaborator and have no representation here —
//! verbosity is controlled the ordinary way, by installing a
//! `tracing` subscriber with the desired filter.

/// How the analyzer reacts to a statement or expression it does not
/// model (pointers, arrays, function calls, compound assignment,
/// `!`/`sizeof`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedPolicy {
    /// Skip the offending statement, recording a warning, and keep
    /// analyzing the rest of the function (§4.7, §7 default policy).
    #[default]
    Skip,
    /// Abort the whole function with an *unsupported* status as soon
    /// as an unsupported construct is seen (`--strict`).
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub unsupported_policy: UnsupportedPolicy,
    /// Mirrors `--fin`: when `true`, [`crate::result::AnalysisResult::choice_vectors`]
    /// holds every valid choice vector the simplifier's Stage 2
    /// antichain reduces to. When `false`, the simplifier still runs
    /// to completion internally (the matrix itself is always fully
    /// built), but only the first valid vector is kept — a caller
    /// that only needs one witness to extract a bound does not pay
    /// for carrying the rest of the disjunction.
    pub run_to_completion: bool,
    /// Guards `Matrix::fixpoint` (§4.6, §9) against a runaway
    /// iteration that would indicate a bug rather than a genuinely
    /// unbounded lattice.
    pub fixpoint_iteration_cap: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig {
            unsupported_policy: UnsupportedPolicy::default(),
            run_to_completion: true,
            fixpoint_iteration_cap: 10_000,
        }
    }
}

impl AnalyzerConfig {
    pub fn strict() -> Self {
        AnalyzerConfig { unsupported_policy: UnsupportedPolicy::Strict, ..Default::default() }
    }
}
