//! # Calculator Core
//!
//! Validation and arithmetic for the calculator service.
//!
//! This crate provides:
//!
//! - **Validation**: turning raw, untyped query values into finite `f64`s
//! - **Operations**: seven pure handlers (add, subtract, multiply, divide,
//!   power, sqrt, modulo) and the [`Operation`] dispatcher
//! - **Errors**: the [`CalcError`] taxonomy whose messages are part of the
//!   public HTTP contract
//!
//! Nothing here performs I/O or holds state; every call is independent.
//!
//! ## Example
//!
//! ```
//! use calculator_core::Operation;
//!
//! let calc = Operation::Power.calculate(Some("2"), Some("10")).unwrap();
//! assert_eq!(calc.result, 1024.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::trivially_copy_pass_by_ref)]
#![allow(clippy::unnecessary_wraps)]

pub mod error;
pub mod operations;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Arity, CalcError, CalcResult};
    pub use crate::operations::{Calculation, Operands, Operation};
    pub use crate::validation::{parse_number, validate_pair, validate_single};
}

pub use error::{Arity, CalcError, CalcResult};
pub use operations::{Calculation, Operands, Operation};
pub use validation::{validate_pair, validate_single};
