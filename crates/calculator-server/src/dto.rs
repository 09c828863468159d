//! Request and response bodies.

use serde::{Deserialize, Serialize, Serializer};

use calculator_core::{Arity, CalcError, CalcResult, Calculation, Operation};

/// Query parameters shared by every operation endpoint.
///
/// Values stay as raw strings here; parsing happens in the validator. Every
/// occurrence of a key is kept so a repeated operand can be told apart from a
/// missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperandQuery {
    /// Values given for `num1` (base for power, radicand for sqrt).
    pub num1: Vec<String>,
    /// Values given for `num2`; ignored by unary operations.
    pub num2: Vec<String>,
}

impl OperandQuery {
    /// Collects `num1`/`num2` from decoded query pairs; other keys are dropped.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "num1" => query.num1.push(value),
                "num2" => query.num2.push(value),
                _ => {}
            }
        }
        query
    }

    /// Raw operands for `operation`, ready for [`Operation::calculate`].
    ///
    /// `num2` is dropped for unary operations. A key the operation reads that
    /// appears more than once is not a number; a missing key still takes
    /// precedence so the validator reports it first.
    pub fn operands(&self, operation: Operation) -> CalcResult<(Option<&str>, Option<&str>)> {
        let arity = operation.arity();
        let num2 = match arity {
            Arity::Single => None,
            Arity::Pair => Some(&self.num2),
        };
        let mut read = std::iter::once(&self.num1).chain(num2);

        let complete = read.clone().all(|values| !values.is_empty());
        if complete && read.any(|values| values.len() > 1) {
            return Err(CalcError::InvalidNumber(arity));
        }

        Ok((first(&self.num1), num2.and_then(|values| first(values))))
    }
}

fn first(values: &[String]) -> Option<&str> {
    values.first().map(String::as_str)
}

/// Successful operation response: `{"result": n}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CalculationResponse {
    #[serde(serialize_with = "serialize_number")]
    pub result: f64,
}

impl From<Calculation> for CalculationResponse {
    fn from(calculation: Calculation) -> Self {
        Self {
            result: calculation.result,
        }
    }
}

/// Error response: `{"error": "message"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

// Largest integer every JSON consumer can represent exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Writes integral values as JSON integers (`4`, not `4.0`).
///
/// Non-finite values become `null`, as serde_json does for any NaN/infinity.
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
