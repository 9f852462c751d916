//! Scalar node, its recorded operations, and operator overloads.

pub(crate) mod op;
mod overloads;
pub mod scalar;
