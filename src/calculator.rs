//! Annuity and differentiated payment calculations.
//!
//! All money results are rounded up to whole currency units, and a computed
//! number of months is rounded up so that a partial month counts as a full one.

use log::{debug, trace};

use crate::error::LoanError;
use crate::types::{
    ANNUAL_PERCENT_TO_MONTHLY, Calculation, CalculationResult, LoanOutcome, LoanRequest,
};

impl LoanRequest {
    /// Monthly interest rate as a fraction.
    pub fn monthly_rate(&self) -> f64 {
        monthly_rate(self.annual_interest_percent)
    }
}

pub fn monthly_rate(annual_interest_percent: f64) -> f64 {
    annual_interest_percent / ANNUAL_PERCENT_TO_MONTHLY
}

/// Share of the principal paid each month by a level annuity payment:
/// `i * (1 + i)^n / ((1 + i)^n - 1)`.
///
/// `(1 + i)^n - 1` is evaluated as `expm1(n * ln_1p(i))` so that small rates
/// keep their precision.
pub fn annuity_factor(monthly_rate: f64, periods: u32) -> f64 {
    let interest_growth = (periods as f64 * monthly_rate.ln_1p()).exp_m1();
    if interest_growth == 0.0 {
        // zero-rate limit
        return 1.0 / periods as f64;
    }
    if interest_growth.is_infinite() {
        // (1 + i)^n / ((1 + i)^n - 1) tends to 1 for very long loans
        return monthly_rate;
    }
    monthly_rate * (1.0 + interest_growth) / interest_growth
}

pub fn solve_for_payment(
    principal: f64,
    periods: u32,
    monthly_rate: f64,
) -> Result<u64, LoanError> {
    let payment = if monthly_rate == 0.0 {
        principal / periods as f64
    } else {
        principal * annuity_factor(monthly_rate, periods)
    };
    debug!("raw payment {}", payment);
    round_up(payment, "payment")
}

pub fn solve_for_principal(
    payment: f64,
    periods: u32,
    monthly_rate: f64,
) -> Result<u64, LoanError> {
    let principal = if monthly_rate == 0.0 {
        payment * periods as f64
    } else {
        payment / annuity_factor(monthly_rate, periods)
    };
    debug!("raw principal {}", principal);
    round_up(principal, "principal")
}

/// Number of months for `payment` to repay `principal`.
///
/// Fails with [`LoanError::PaymentTooSmall`] when the payment does not exceed
/// the first month's interest, since the balance would then never decrease.
pub fn solve_for_periods(
    principal: f64,
    payment: f64,
    monthly_rate: f64,
) -> Result<u32, LoanError> {
    let first_interest = monthly_rate * principal;
    if payment <= first_interest {
        return Err(LoanError::PaymentTooSmall {
            payment,
            interest: first_interest,
        });
    }

    let periods = if monthly_rate == 0.0 {
        principal / payment
    } else {
        (payment / (payment - first_interest)).ln() / monthly_rate.ln_1p()
    };
    debug!("raw periods {}", periods);

    let periods = round_up(periods, "periods")?;
    u32::try_from(periods).map_err(|_| LoanError::Unrepresentable { quantity: "periods" })
}

/// Per-month payments for equal principal installments.
///
/// Month `m` pays `principal / periods` plus interest on the balance left
/// after `m - 1` installments.
pub fn differentiated_schedule(
    principal: f64,
    periods: u32,
    monthly_rate: f64,
) -> Result<Vec<u64>, LoanError> {
    let n = periods as f64;
    let installment = principal / n;

    (1..=periods)
        .map(|month| {
            let remaining = principal * (n - (month - 1) as f64) / n;
            let payment = installment + monthly_rate * remaining;
            trace!("month {}, remaining {}, payment {}", month, remaining, payment);
            round_up(payment, "payment")
        })
        .collect()
}

/// Run the calculation described by `request`.
pub fn calculate(request: &LoanRequest) -> Result<LoanOutcome, LoanError> {
    let rate = request.monthly_rate();
    debug!(
        "annual interest {}%, monthly rate {}",
        request.annual_interest_percent, rate
    );

    let outcome = match request.calculation {
        Calculation::Payment { principal, periods } => {
            let payment = solve_for_payment(principal, periods, rate)?;
            LoanOutcome {
                result: CalculationResult::Payment(payment),
                overpayment: overpayment(payment as f64 * periods as f64, principal),
            }
        }
        Calculation::Principal { payment, periods } => {
            let principal = solve_for_principal(payment, periods, rate)?;
            LoanOutcome {
                result: CalculationResult::Principal(principal),
                overpayment: overpayment(payment * periods as f64, principal as f64),
            }
        }
        Calculation::Periods { principal, payment } => {
            let periods = solve_for_periods(principal, payment, rate)?;
            LoanOutcome {
                result: CalculationResult::Periods(periods),
                overpayment: overpayment(payment * periods as f64, principal),
            }
        }
        Calculation::Differentiated { principal, periods } => {
            let schedule = differentiated_schedule(principal, periods, rate)?;
            let total: f64 = schedule.iter().map(|&p| p as f64).sum();
            LoanOutcome {
                result: CalculationResult::Schedule(schedule),
                overpayment: overpayment(total, principal),
            }
        }
    };

    debug!("overpayment {}", outcome.overpayment);
    Ok(outcome)
}

fn overpayment(total_paid: f64, principal: f64) -> i64 {
    (total_paid - principal).ceil() as i64
}

fn round_up(value: f64, quantity: &'static str) -> Result<u64, LoanError> {
    let rounded = value.ceil();
    // u64::MAX as f64 rounds up to 2^64, which is already out of range
    if !rounded.is_finite() || rounded < 0.0 || rounded >= u64::MAX as f64 {
        return Err(LoanError::Unrepresentable { quantity });
    }
    Ok(rounded as u64)
}
