//! Constraint types for version matching

mod comparator;
mod operator;
mod range;

pub use comparator::{Comparator, Operand};
pub use operator::Operator;
pub use range::{is_satisfiable, Direction, Range};
