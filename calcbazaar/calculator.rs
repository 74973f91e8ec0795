use serde::{Deserialize, Serialize};

use crate::{number::Number, prelude::*};

/// One of the four operations a [`Calculator`] can perform.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    /// `a + b`
    Add,
    /// `a - b`
    Subtract,
    /// `a * b`
    Multiply,
    /// `a / b`, fails when `b` is zero.
    Divide,
}

impl Operation {
    /// The infix symbol, e.g. `+` for [`Operation::Add`].
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }
}

/// A stateless four-function calculator.
///
/// Holds nothing between calls, so a single instance can be shared freely between threads.
///
/// Operands are anything convertible into a [`Number`]: integers stay integers where possible,
/// floats propagate float results.
///
/// ```
/// use calcbazaar::{Calculator, Number, Operation};
///
/// let calc = Calculator::new();
/// assert_eq!(calc.subtract(5, -3), Number::Int(8));
/// assert_eq!(calc.multiply(1.5, 2), Number::Float(3.0));
/// assert_eq!(calc.apply(Operation::Divide, 10, -2).unwrap(), Number::Int(-5));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Create a new calculator.
    pub fn new() -> Self {
        Self
    }

    /// Returns `a + b`.
    pub fn add(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        let res = a + b;
        trace!(op = %Operation::Add, %a, %b, %res, "evaluated");
        res
    }

    /// Returns `a - b`.
    pub fn subtract(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        let res = a - b;
        trace!(op = %Operation::Subtract, %a, %b, %res, "evaluated");
        res
    }

    /// Returns `a * b`.
    pub fn multiply(&self, a: impl Into<Number>, b: impl Into<Number>) -> Number {
        let (a, b) = (a.into(), b.into());
        let res = a * b;
        trace!(op = %Operation::Multiply, %a, %b, %res, "evaluated");
        res
    }

    /// Returns `a / b`.
    ///
    /// When both operands are integers and the division is exact the result is a [`Number::Int`],
    /// otherwise a [`Number::Float`].
    ///
    /// Errors with [`CalcErr::DivisionByZero`] when `b` is zero.
    #[track_caller]
    pub fn divide(&self, a: impl Into<Number>, b: impl Into<Number>) -> RResult<Number, CalcErr> {
        let (a, b) = (a.into(), b.into());
        match a.checked_div(b) {
            Some(res) => {
                trace!(op = %Operation::Divide, %a, %b, %res, "evaluated");
                Ok(res)
            }
            None => {
                debug!(%a, %b, "rejected division by zero");
                Err(Report::new(CalcErr::DivisionByZero)
                    .attach_printable(format!("{} {} {}", a, Operation::Divide.symbol(), b)))
            }
        }
    }

    /// Perform `op` on the operands, only [`Operation::Divide`] can fail.
    #[track_caller]
    pub fn apply(
        &self,
        op: Operation,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> RResult<Number, CalcErr> {
        Ok(match op {
            Operation::Add => self.add(a, b),
            Operation::Subtract => self.subtract(a, b),
            Operation::Multiply => self.multiply(a, b),
            Operation::Divide => self.divide(a, b).loc()?,
        })
    }
}
