use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

use serde::{Deserialize, Serialize};

/// An operand or result of a calculation.
///
/// Integers stay integers for as long as the arithmetic allows, anything touching a float,
/// an inexact integer division or an `i64` overflow promotes to [`Number::Float`].
///
/// Equality and ordering follow the exact numeric value, so `Int(5) == Float(5.0)`
/// while `Int(2^53 + 1) != Float(2^53)` even though the integer rounds to that float.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// A whole number.
    Int(i64),
    /// A floating point number.
    Float(f64),
}

impl Number {
    /// True when the value is integer or float zero, of either sign.
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int(i) => *i == 0,
            Number::Float(f) => *f == 0.0,
        }
    }

    /// True when held as [`Number::Int`].
    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// True when held as [`Number::Float`].
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// The value as a float, may lose precision for integers beyond 2^53.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    /// Divide, returning `None` when `rhs` is zero.
    ///
    /// Exact integer division stays an integer, everything else produces a float:
    /// ```
    /// use calcbazaar::Number;
    ///
    /// assert_eq!(Number::Int(10).checked_div(Number::Int(2)), Some(Number::Int(5)));
    /// assert_eq!(Number::Int(5).checked_div(Number::Int(2)), Some(Number::Float(2.5)));
    /// assert_eq!(Number::Int(5).checked_div(Number::Float(0.0)), None);
    /// ```
    pub fn checked_div(self, rhs: Number) -> Option<Number> {
        if rhs.is_zero() {
            return None;
        }
        Some(match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match (a.checked_rem(b), a.checked_div(b)) {
                (Some(0), Some(quotient)) => Number::Int(quotient),
                // Inexact, or i64::MIN / -1:
                _ => Number::Float(a as f64 / b as f64),
            },
            (a, b) => Number::Float(a.as_f64() / b.as_f64()),
        })
    }

    /// Shared promotion logic for the infallible binary operators.
    fn promote(
        self,
        rhs: Number,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Number {
        if let (Number::Int(a), Number::Int(b)) = (self, rhs) {
            if let Some(res) = int_op(a, b) {
                return Number::Int(res);
            }
        }
        Number::Float(float_op(self.as_f64(), rhs.as_f64()))
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        self.promote(rhs, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        self.promote(rhs, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        self.promote(rhs, i64::checked_mul, |a, b| a * b)
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Int(i) => i
                .checked_neg()
                .map_or_else(|| Number::Float(-(i as f64)), Number::Int),
            Number::Float(f) => Number::Float(-f),
        }
    }
}

/// Exact ordering of an integer against a float, no rounding of the integer through `f64`.
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
    // 2^63, the first float past i64::MAX:
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        None
    } else if f >= I64_BOUND {
        Some(Ordering::Less)
    } else if f < -I64_BOUND {
        Some(Ordering::Greater)
    } else {
        // In range, so the whole part converts exactly:
        let whole = f.trunc();
        Some(i.cmp(&(whole as i64)).then_with(|| whole.total_cmp(&f)))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            // Display never uses exponents, just make sure whole floats keep a ".0":
            Number::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{}.0", x),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

macro_rules! from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::Int(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! from_float {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::Float(f64::from(value))
                }
            }
        )*
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);
from_float!(f32, f64);
