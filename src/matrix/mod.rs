//! Matrices over the polynomial algebra, and relations that name
//! their rows/columns by variable.

pub mod matrix;
pub mod relation;

pub use matrix::Matrix;
pub use relation::{Relation, RelationList};
