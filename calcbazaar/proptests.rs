//! Property-based tests for the calculator's arithmetic laws.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{errors::CalcErr, Calculator, Number};

    // Small enough that sums and products never leave i64:
    fn small_int() -> impl Strategy<Value = i64> {
        -1_000_000i64..1_000_000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1_000_000i64..=-1i64), (1i64..=1_000_000i64)]
    }

    fn finite_float() -> impl Strategy<Value = f64> {
        -1.0e6f64..1.0e6f64
    }

    fn non_zero_float() -> impl Strategy<Value = f64> {
        prop_oneof![(-1.0e6f64..-1.0e-3f64), (1.0e-3f64..1.0e6f64)]
    }

    fn any_number() -> impl Strategy<Value = Number> {
        prop_oneof![small_int().prop_map(Number::Int), finite_float().prop_map(Number::Float)]
    }

    fn approx_eq(a: Number, b: Number) -> bool {
        let (a, b) = (a.as_f64(), b.as_f64());
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    proptest! {
        #[test]
        fn add_commutative(a in any_number(), b in any_number()) {
            let calc = Calculator::new();
            prop_assert_eq!(calc.add(a, b), calc.add(b, a));
        }

        #[test]
        fn int_add_associative(a in small_int(), b in small_int(), c in small_int()) {
            let calc = Calculator::new();
            let lhs = calc.add(calc.add(a, b), c);
            let rhs = calc.add(a, calc.add(b, c));
            prop_assert_eq!(lhs, rhs);
            prop_assert!(lhs.is_int());
        }

        #[test]
        fn add_associative_within_tolerance(a in any_number(), b in any_number(), c in any_number()) {
            let calc = Calculator::new();
            let lhs = calc.add(calc.add(a, b), c);
            let rhs = calc.add(a, calc.add(b, c));
            prop_assert!(approx_eq(lhs, rhs), "{} != {}", lhs, rhs);
        }

        #[test]
        fn subtract_is_add_negated(a in any_number(), b in any_number()) {
            let calc = Calculator::new();
            prop_assert_eq!(calc.subtract(a, b), calc.add(a, -b));
        }

        #[test]
        fn int_divide_multiply_round_trip(a in small_int(), b in non_zero_int()) {
            let calc = Calculator::new();
            let quotient = calc.divide(a, b).map_err(|e| TestCaseError::fail(format!("{:?}", e)))?;
            prop_assert!(approx_eq(calc.multiply(quotient, b), Number::Int(a)));
            // Exact divisions stay integers:
            prop_assert_eq!(quotient.is_int(), a % b == 0);
        }

        #[test]
        fn float_divide_multiply_round_trip(a in finite_float(), b in non_zero_float()) {
            let calc = Calculator::new();
            let quotient = calc.divide(a, b).map_err(|e| TestCaseError::fail(format!("{:?}", e)))?;
            prop_assert!(quotient.is_float());
            prop_assert!(approx_eq(calc.multiply(quotient, b), Number::Float(a)));
        }

        #[test]
        fn divide_by_zero_always_fails(a in any_number(), zero in prop_oneof![Just(Number::Int(0)), Just(Number::Float(0.0)), Just(Number::Float(-0.0))]) {
            let calc = Calculator::new();
            match calc.divide(a, zero) {
                Ok(res) => prop_assert!(false, "{} / {} gave {}", a, zero, res),
                Err(report) => {
                    prop_assert_eq!(report.current_context(), &CalcErr::DivisionByZero);
                    prop_assert_eq!(report.current_context().to_string(), "Cannot divide by zero");
                }
            }
        }

        #[test]
        fn multiply_by_zero_is_zero(a in any_number()) {
            let calc = Calculator::new();
            prop_assert!(calc.multiply(a, 0).is_zero());
            prop_assert!(calc.multiply(0, a).is_zero());
        }

        #[test]
        fn int_ops_never_panic(a in any::<i64>(), b in any::<i64>()) {
            let calc = Calculator::new();
            let sum = calc.add(a, b);
            prop_assert_eq!(sum.is_int(), a.checked_add(b).is_some());
            let product = calc.multiply(a, b);
            prop_assert_eq!(product.is_int(), a.checked_mul(b).is_some());
            let _ = calc.subtract(a, b);
            let _ = calc.divide(a, b);
        }
    }
}
