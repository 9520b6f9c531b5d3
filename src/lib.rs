//! Loan calculator for annuity and differentiated repayment schemes.
//!
//! Features:
//! - Solve an annuity for the monthly payment, the principal or the term
//! - Month-by-month differentiated payment schedule
//! - Optional overpayment summary

pub mod args;
pub mod calculator;
pub mod error;
pub mod formatter;
pub mod types;
