//! The AST-traversal engine and its supporting pieces: the
//! per-function [`context`], the inference rules in [`analyzer`], the
//! choice [`simplifier`], and the [`bound`] extractor.

pub mod analyzer;
pub mod bound;
pub mod context;
pub mod simplifier;
