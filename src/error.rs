//! Errors reported by the resolver and the calculator.

use thiserror::Error;

use crate::types::MAX_PERIODS;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoanError {
    // Flag-shape errors
    #[error("--type is required (annuity or diff)")]
    MissingType,

    #[error("--{0} is required")]
    MissingFlag(&'static str),

    #[error(
        "expecting exactly {expected} of --principal, --periods, --payment, --interest, got {found}"
    )]
    FlagCount { expected: usize, found: usize },

    // Flag-value errors
    #[error("unknown --type value: '{0}' (expected annuity or diff)")]
    UnknownType(String),

    #[error("--payment cannot be combined with --type diff")]
    PaymentInDiffMode,

    #[error("--{flag} must not be negative, got {value}")]
    NegativeValue { flag: &'static str, value: f64 },

    #[error("--{flag} must be a finite number")]
    NotANumber { flag: &'static str },

    #[error("--periods must be a whole number of months from 1 to {}, got {}", MAX_PERIODS, .0)]
    InvalidPeriods(f64),

    // Domain errors
    #[error(
        "payment {payment} does not cover the monthly interest of {interest:.2}, the loan is never repaid"
    )]
    PaymentTooSmall { payment: f64, interest: f64 },

    #[error("calculated {quantity} is out of range")]
    Unrepresentable { quantity: &'static str },
}
