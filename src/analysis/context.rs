//! Per-function analyzer context (§3 Lifecycle, §4.10): the choice
//! index counter, the fixed variable list, accumulated warnings and
//! outputs, and the tiny state machine governing whether the
//! function can still be analyzed.

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::result::Warning;

/// §4.10: *initial* before any statement is composed, *building*
/// while the body is traversed, *final* once traversal completes
/// normally, *aborted* if strict mode hit an unsupported construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    Initial,
    Building,
    Final,
    Aborted,
}

pub struct Context {
    vars: Vec<String>,
    next_choice_index: usize,
    outputs: Vec<String>,
    config: AnalyzerConfig,
    warnings: Vec<Warning>,
    state: ContextState,
    fatal: Option<AnalyzerError>,
}

impl Context {
    /// `vars` must already be the full parameters-union-declared-
    /// variables list in appearance order (§4.7 step 1); this
    /// context does not grow the variable set during traversal.
    pub fn new(vars: Vec<String>, config: AnalyzerConfig) -> Self {
        Context {
            vars,
            next_choice_index: 0,
            outputs: Vec::new(),
            config,
            warnings: Vec::new(),
            state: ContextState::Initial,
            fatal: None,
        }
    }

    pub fn vars(&self) -> &[String] {
        &self.vars
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn state(&self) -> ContextState {
        self.state
    }

    pub fn mark_building(&mut self) {
        if self.state == ContextState::Initial {
            self.state = ContextState::Building;
        }
    }

    pub fn mark_final(&mut self) {
        if self.state != ContextState::Aborted {
            self.state = ContextState::Final;
        }
    }

    pub fn mark_aborted(&mut self) {
        self.state = ContextState::Aborted;
    }

    pub fn is_aborted(&self) -> bool {
        self.state == ContextState::Aborted
    }

    /// Records an internal-invariant violation (§7) and aborts
    /// traversal. Distinct from [`Context::mark_aborted`]: that one
    /// is the ordinary *unsupported-in-strict-mode* transition, this
    /// one carries the fatal error out for `AnalysisResult::Aborted`.
    pub fn mark_fatal(&mut self, err: AnalyzerError) {
        self.fatal = Some(err);
        self.state = ContextState::Aborted;
    }

    pub fn take_fatal(&mut self) -> Option<AnalyzerError> {
        self.fatal.take()
    }

    /// Allocates the next choice index (§3 "Choice index"). Every
    /// binary/unary arithmetic assignment consumes exactly one.
    pub fn next_choice(&mut self) -> usize {
        let idx = self.next_choice_index;
        self.next_choice_index += 1;
        idx
    }

    pub fn choice_count(&self) -> usize {
        self.next_choice_index
    }

    pub fn record_output(&mut self, var: &str) {
        if self.vars.iter().any(|v| v == var) && !self.outputs.contains(&var.to_string()) {
            self.outputs.push(var.to_string());
        }
    }

    /// The variables to report a bound for: explicit `return`
    /// targets if any were seen, otherwise every declared variable.
    pub fn outputs(&self) -> Vec<String> {
        if self.outputs.is_empty() {
            self.vars.clone()
        } else {
            self.outputs.clone()
        }
    }

    pub fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
