//! Type definitions and constants for loan calculations.

use std::fmt;
use std::str::FromStr;

use crate::error::LoanError;

/// Repayment scheme selected with `--type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanType {
    /// Level monthly payment.
    Annuity,
    /// Equal principal installments plus interest on the remaining balance.
    Diff,
}

impl FromStr for LoanType {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "annuity" => Ok(LoanType::Annuity),
            "diff" => Ok(LoanType::Diff),
            other => Err(LoanError::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanType::Annuity => write!(f, "annuity"),
            LoanType::Diff => write!(f, "diff"),
        }
    }
}

/// The quantity an annuity request solves for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationTarget {
    Payment,
    Principal,
    Periods,
}

/// A validated calculation carrying exactly the inputs it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Calculation {
    Payment { principal: f64, periods: u32 },
    Principal { payment: f64, periods: u32 },
    Periods { principal: f64, payment: f64 },
    Differentiated { principal: f64, periods: u32 },
}

/// Loan request produced by the argument resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanRequest {
    /// Annual interest rate in percent (10 means 10%).
    pub annual_interest_percent: f64,
    pub calculation: Calculation,
}

impl LoanRequest {
    pub fn loan_type(&self) -> LoanType {
        match self.calculation {
            Calculation::Differentiated { .. } => LoanType::Diff,
            _ => LoanType::Annuity,
        }
    }

    /// Solved-for quantity; `None` for differentiated schedules.
    pub fn target(&self) -> Option<CalculationTarget> {
        match self.calculation {
            Calculation::Payment { .. } => Some(CalculationTarget::Payment),
            Calculation::Principal { .. } => Some(CalculationTarget::Principal),
            Calculation::Periods { .. } => Some(CalculationTarget::Periods),
            Calculation::Differentiated { .. } => None,
        }
    }
}

/// Result of a calculation, in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculationResult {
    Payment(u64),
    Principal(u64),
    Periods(u32),
    /// Payment per month, month 1 first.
    Schedule(Vec<u64>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanOutcome {
    pub result: CalculationResult,
    /// Total paid over the life of the loan minus the principal.
    pub overpayment: i64,
}

pub const MONTHS_PER_YEAR: u32 = 12;

// Longest term accepted as input (1000 years)
pub const MAX_PERIODS: u32 = 12_000;

// 12 months * 100 to turn an annual percentage into a monthly fraction
pub const ANNUAL_PERCENT_TO_MONTHLY: f64 = 1200.0;
