#![allow(clippy::module_inception)]
#![allow(clippy::type_complexity)]
#![warn(clippy::disallowed_types)]
#![warn(missing_docs)]

//! calcbazaar - A stateless four-function calculator over integer and floating point operands.
//!
//! ```
//! use calcbazaar::{Calculator, Number};
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.add(2, 3), Number::Int(5));
//! assert_eq!(calc.divide(5, 2).unwrap(), Number::Float(2.5));
//! assert_eq!(
//!     calc.divide(10, 0).unwrap_err().current_context().to_string(),
//!     "Cannot divide by zero"
//! );
//! ```

mod prelude;

/// The calculator and the operations it dispatches.
pub mod calculator;
/// Error handling utilities.
pub mod errors;
/// Logging utilities
pub mod log;
/// Numeric operand/result type.
pub mod number;
#[cfg(any(test, feature = "test"))]
/// Rstest fixtures and test helpers.
pub mod test;

#[cfg(test)]
mod proptests;

pub use calculator::{Calculator, Operation};
pub use errors::CalcErr;
pub use number::Number;
