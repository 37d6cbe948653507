//! mwp-bound flow analysis: decide, for a restricted imperative
//! language, whether every variable's final value is bounded by a
//! polynomial in the initial values of the input variables, and when
//! so, report the symbolic bound.
//!
//! The crate is organized leaves-first, mirroring the design's
//! component table: [`algebra`] is the five-element semiring lifted
//! to deltas, monomials and normalized polynomials; [`matrix`] is
//! matrices over that algebra plus the named relations the analyzer
//! composes; [`analysis`] walks an [`ast::Program`] and produces a
//! [`result::ProgramResult`].

#![allow(dead_code)]

pub mod algebra;
pub mod analysis;
pub mod ast;
pub mod config;
pub mod error;
pub mod matrix;
pub mod result;

pub use analysis::analyzer::{analyze_function, analyze_program};
pub use config::AnalyzerConfig;
pub use result::{AnalysisResult, ProgramResult};
