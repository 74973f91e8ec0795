use error_stack::Context;

/// The ways a calculation can fail.
///
/// Only division can currently fail, every other operation is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalcErr {
    /// The divisor was zero (integer zero or a float zero of either sign).
    DivisionByZero,
}

impl std::fmt::Display for CalcErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcErr::DivisionByZero => write!(f, "Cannot divide by zero"),
        }
    }
}

impl Context for CalcErr {}
