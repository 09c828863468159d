//! Arithmetic operation handlers.
//!
//! Each handler is a pure function over validated numbers. Results follow
//! native `f64` semantics: overflow yields infinity and invalid powers yield
//! NaN, both of which pass through as ordinary results. The only failures are
//! the named domain conditions in [`CalcError`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Arity, CalcError, CalcResult};
use crate::validation::{validate_pair, validate_single};

/// Returns `a + b`.
pub fn add(a: f64, b: f64) -> CalcResult<f64> {
    Ok(a + b)
}

/// Returns `a - b`.
pub fn subtract(a: f64, b: f64) -> CalcResult<f64> {
    Ok(a - b)
}

/// Returns `a * b`.
pub fn multiply(a: f64, b: f64) -> CalcResult<f64> {
    Ok(a * b)
}

/// Returns `a / b`, rejecting an exactly-zero divisor (either sign).
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::division_by_zero(Operation::Divide));
    }
    Ok(a / b)
}

/// Returns `base` raised to `exponent`.
pub fn power(base: f64, exponent: f64) -> CalcResult<f64> {
    Ok(base.powf(exponent))
}

/// Returns the square root of `a`, rejecting negative input.
pub fn sqrt(a: f64) -> CalcResult<f64> {
    if a < 0.0 {
        return Err(CalcError::NegativeRadicand);
    }
    Ok(a.sqrt())
}

/// Returns the floating-point remainder of `dividend / divisor`.
///
/// The sign of the result follows the dividend: `-7 % 3 == -1`.
pub fn modulo(dividend: f64, divisor: f64) -> CalcResult<f64> {
    if divisor == 0.0 {
        return Err(CalcError::division_by_zero(Operation::Modulo));
    }
    Ok(dividend % divisor)
}

/// The arithmetic operations exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition.
    Add,
    /// Subtraction.
    Subtract,
    /// Multiplication.
    Multiply,
    /// Division.
    Divide,
    /// Exponentiation.
    Power,
    /// Square root.
    Sqrt,
    /// Floating-point remainder.
    Modulo,
}

impl Operation {
    /// All operations, in route order.
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Sqrt,
        Operation::Modulo,
    ];

    /// Route segment for this operation (`"add"`, `"sqrt"`, ...).
    pub fn path(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Sqrt => "sqrt",
            Operation::Modulo => "modulo",
        }
    }

    /// Resolves a route segment back to its operation.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_start_matches('/');
        Self::ALL.into_iter().find(|op| op.path() == path)
    }

    /// Human-readable name used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
            Operation::Power => "Exponentiation",
            Operation::Sqrt => "Square Root",
            Operation::Modulo => "Modulo",
        }
    }

    /// Infix or prefix symbol used in log lines.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Power => "^",
            Operation::Sqrt => "√",
            Operation::Modulo => "%",
        }
    }

    /// Number of inputs this operation consumes.
    pub fn arity(self) -> Arity {
        match self {
            Operation::Sqrt => Arity::Single,
            _ => Arity::Pair,
        }
    }

    /// Validates raw inputs for this operation.
    ///
    /// Unary operations read only `num1`; `num2` is ignored even if malformed.
    pub fn validate(self, num1: Option<&str>, num2: Option<&str>) -> CalcResult<Operands> {
        match self.arity() {
            Arity::Single => validate_single(num1).map(Operands::Unary),
            Arity::Pair => validate_pair(num1, num2).map(|(a, b)| Operands::Binary(a, b)),
        }
    }

    /// Evaluates this operation over already-validated operands.
    ///
    /// Operands of the wrong arity are reported as missing input.
    pub fn evaluate(self, operands: Operands) -> CalcResult<Calculation> {
        let result = match (self, operands) {
            (Operation::Add, Operands::Binary(a, b)) => add(a, b),
            (Operation::Subtract, Operands::Binary(a, b)) => subtract(a, b),
            (Operation::Multiply, Operands::Binary(a, b)) => multiply(a, b),
            (Operation::Divide, Operands::Binary(a, b)) => divide(a, b),
            (Operation::Power, Operands::Binary(a, b)) => power(a, b),
            (Operation::Modulo, Operands::Binary(a, b)) => modulo(a, b),
            (Operation::Sqrt, Operands::Unary(a)) => sqrt(a),
            _ => Err(CalcError::MissingInput(self.arity())),
        }?;

        Ok(Calculation {
            operation: self,
            operands,
            result,
        })
    }

    /// Validates raw inputs and evaluates in one step.
    pub fn calculate(self, num1: Option<&str>, num2: Option<&str>) -> CalcResult<Calculation> {
        self.validate(num1, num2)
            .and_then(|operands| self.evaluate(operands))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Validated inputs for one operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operands {
    /// Input of a unary operation.
    Unary(f64),
    /// Inputs of a binary operation, in request order.
    Binary(f64, f64),
}

/// A successfully evaluated operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    /// The operation performed.
    pub operation: Operation,
    /// The validated inputs.
    pub operands: Operands,
    /// The numeric result; may be NaN or infinite.
    pub result: f64,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.operation;
        match self.operands {
            Operands::Unary(a) => write!(
                f,
                "{} operation: {}{} = {}",
                op.name(),
                op.symbol(),
                a,
                self.result
            ),
            Operands::Binary(a, b) => write!(
                f,
                "{} operation: {} {} {} = {}",
                op.name(),
                a,
                op.symbol(),
                b,
                self.result
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(add(2.0, 3.0), Ok(5.0));
        assert_eq!(subtract(2.0, 3.0), Ok(-1.0));
        assert_eq!(multiply(2.5, 4.0), Ok(10.0));
        assert_eq!(divide(9.0, 3.0), Ok(3.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            divide(1.0, 0.0),
            Err(CalcError::division_by_zero(Operation::Divide))
        );
        assert_eq!(
            divide(0.0, -0.0),
            Err(CalcError::division_by_zero(Operation::Divide))
        );
    }

    #[test]
    fn test_divide_near_zero_is_allowed() {
        let result = divide(1.0, 1e-300).unwrap();
        assert_relative_eq!(result, 1e300);
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 10.0), Ok(1024.0));
        assert_relative_eq!(power(4.0, 0.5).unwrap(), 2.0);
        assert_eq!(power(2.0, -2.0), Ok(0.25));
    }

    #[test]
    fn test_power_passes_through_non_finite() {
        assert!(power(-8.0, 1.0 / 3.0).unwrap().is_nan());
        assert!(power(10.0, 400.0).unwrap().is_infinite());
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(16.0), Ok(4.0));
        assert_eq!(sqrt(0.0), Ok(0.0));
        assert_eq!(sqrt(-1.0), Err(CalcError::NegativeRadicand));
        assert_relative_eq!(sqrt(2.0).unwrap(), std::f64::consts::SQRT_2);
    }

    #[test]
    fn test_modulo() {
        assert_eq!(modulo(10.0, 3.0), Ok(1.0));
        assert_eq!(modulo(-7.0, 3.0), Ok(-1.0));
        assert_eq!(modulo(7.0, -3.0), Ok(1.0));
        assert_relative_eq!(modulo(5.5, 2.0).unwrap(), 1.5);
        assert_eq!(
            modulo(10.0, 0.0),
            Err(CalcError::division_by_zero(Operation::Modulo))
        );
    }

    #[test]
    fn test_path_round_trip() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_path(op.path()), Some(op));
        }
        assert_eq!(Operation::from_path("/sqrt"), Some(Operation::Sqrt));
        assert_eq!(Operation::from_path("log"), None);
    }

    #[test]
    fn test_serde_uses_route_names() {
        let json = serde_json::to_string(&Operation::Modulo).unwrap();
        assert_eq!(json, "\"modulo\"");
    }

    #[test]
    fn test_arity() {
        assert_eq!(Operation::Sqrt.arity(), Arity::Single);
        assert_eq!(Operation::Power.arity(), Arity::Pair);
    }

    #[test]
    fn test_sqrt_ignores_second_input() {
        let calc = Operation::Sqrt.calculate(Some("9"), Some("junk")).unwrap();
        assert_eq!(calc.result, 3.0);
        assert_eq!(calc.operands, Operands::Unary(9.0));
    }

    #[test]
    fn test_calculate_reports_validation_before_domain() {
        assert_eq!(
            Operation::Divide.calculate(Some("1"), None),
            Err(CalcError::MissingInput(Arity::Pair))
        );
        assert_eq!(
            Operation::Divide.calculate(Some("1"), Some("zero")),
            Err(CalcError::InvalidNumber(Arity::Pair))
        );
        assert_eq!(
            Operation::Divide.calculate(Some("1"), Some("0")),
            Err(CalcError::division_by_zero(Operation::Divide))
        );
    }

    #[test]
    fn test_evaluate_rejects_wrong_arity() {
        assert_eq!(
            Operation::Add.evaluate(Operands::Unary(1.0)),
            Err(CalcError::MissingInput(Arity::Pair))
        );
        assert_eq!(
            Operation::Sqrt.evaluate(Operands::Binary(1.0, 2.0)),
            Err(CalcError::MissingInput(Arity::Single))
        );
    }

    #[test]
    fn test_calculation_display() {
        let add = Operation::Add.calculate(Some("2"), Some("3")).unwrap();
        assert_eq!(add.to_string(), "Addition operation: 2 + 3 = 5");

        let root = Operation::Sqrt.calculate(Some("16"), None).unwrap();
        assert_eq!(root.to_string(), "Square Root operation: √16 = 4");

        let pow = Operation::Power.calculate(Some("2"), Some("0.5")).unwrap();
        assert!(pow.to_string().starts_with("Exponentiation operation: 2 ^ 0.5 = 1.414"));
    }

    proptest! {
        #[test]
        fn prop_add_matches_native(a in -1e150f64..1e150, b in -1e150f64..1e150) {
            let calc = Operation::Add
                .calculate(Some(&a.to_string()), Some(&b.to_string()))
                .unwrap();
            prop_assert_eq!(calc.result, a + b);
        }

        #[test]
        fn prop_divide_by_zero_always_fails(a in proptest::num::f64::NORMAL) {
            prop_assert_eq!(
                divide(a, 0.0),
                Err(CalcError::division_by_zero(Operation::Divide))
            );
        }

        #[test]
        fn prop_negative_sqrt_always_fails(a in -1e300f64..-1e-300) {
            prop_assert_eq!(sqrt(a), Err(CalcError::NegativeRadicand));
        }

        #[test]
        fn prop_modulo_sign_follows_dividend(a in -1e6f64..1e6, b in 1e-3f64..1e3) {
            let r = modulo(a, b).unwrap();
            prop_assert!(r == 0.0 || r.signum() == a.signum());
            prop_assert!(r.abs() < b);
        }
    }
}
