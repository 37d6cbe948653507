//! The algebra underlying mwp-bound inference: a five-element
//! semiring of dependency strengths, lifted to deltas, monomials and
//! normalized polynomials.

pub mod delta;
pub mod monomial;
pub mod polynomial;
pub mod scalar;

pub use delta::Delta;
pub use monomial::Monomial;
pub use polynomial::Polynomial;
pub use scalar::Scalar;
