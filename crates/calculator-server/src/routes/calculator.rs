//! Operation endpoints.
//!
//! Every endpoint reads `num1`/`num2` from the query string, runs the
//! operation through [`Operation::calculate`] and reports the outcome to the
//! state's journal before responding.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use tracing::error;

use calculator_core::Operation;

use crate::dto::{CalculationResponse, OperandQuery};
use crate::error::ApiResult;
use crate::state::AppState;

// Pairs rather than a struct so a repeated key reaches the validator instead
// of failing deserialization.
type OperandExtractor = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// `GET /add?num1=a&num2=b`
pub async fn add(
    State(state): State<AppState>,
    query: OperandExtractor,
) -> ApiResult<Json<CalculationResponse>> {
    calculate(&state, Operation::Add, query)
}

/// `GET /subtract?num1=a&num2=b`
pub async fn subtract(
    State(state): State<AppState>,
    query: OperandExtractor,
) -> ApiResult<Json<CalculationResponse>> {
    calculate(&state, Operation::Subtract, query)
}

/// `GET /multiply?num1=a&num2=b`
pub async fn multiply(
    State(state): State<AppState>,
    query: OperandExtractor,
) -> ApiResult<Json<CalculationResponse>> {
    calculate(&state, Operation::Multiply, query)
}

/// `GET /divide?num1=a&num2=b`
pub async fn divide(
    State(state): State<AppState>,
    query: OperandExtractor,
) -> ApiResult<Json<CalculationResponse>> {
    calculate(&state, Operation::Divide, query)
}

/// `GET /power?num1=base&num2=exponent`
pub async fn power(
    State(state): State<AppState>,
    query: OperandExtractor,
) -> ApiResult<Json<CalculationResponse>> {
    calculate(&state, Operation::Power, query)
}

/// `GET /sqrt?num1=a`
pub async fn sqrt(
    State(state): State<AppState>,
    query: OperandExtractor,
) -> ApiResult<Json<CalculationResponse>> {
    calculate(&state, Operation::Sqrt, query)
}

/// `GET /modulo?num1=dividend&num2=divisor`
pub async fn modulo(
    State(state): State<AppState>,
    query: OperandExtractor,
) -> ApiResult<Json<CalculationResponse>> {
    calculate(&state, Operation::Modulo, query)
}

fn calculate(
    state: &AppState,
    operation: Operation,
    query: OperandExtractor,
) -> ApiResult<Json<CalculationResponse>> {
    let Query(pairs) = query.inspect_err(|rejection| {
        error!(operation = %operation, "{}", rejection.body_text());
    })?;
    let query = OperandQuery::from_pairs(pairs);

    let outcome = query
        .operands(operation)
        .and_then(|(num1, num2)| operation.calculate(num1, num2));

    match outcome {
        Ok(calculation) => {
            state.journal.record(&calculation);
            Ok(Json(calculation.into()))
        }
        Err(err) => {
            state.journal.reject(operation, &err);
            Err(err.into())
        }
    }
}
