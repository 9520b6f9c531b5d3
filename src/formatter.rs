//! Console rendering of calculation results.

use crate::types::{CalculationResult, LoanOutcome, MONTHS_PER_YEAR};

/// Describe a number of months as years and months.
///
/// Whole years drop the months part and spans under a year drop the years
/// part: 24 gives "2 years", 11 gives "11 months", 70 gives
/// "5 years and 10 months".
pub fn format_periods(periods: u32) -> String {
    let years = periods / MONTHS_PER_YEAR;
    let months = periods % MONTHS_PER_YEAR;

    if months == 0 {
        format!("It will take {} years to repay this loan!", years)
    } else if years == 0 {
        format!("It will take {} months to repay this loan!", months)
    } else {
        format!(
            "It will take {} years and {} months to repay this loan!",
            years, months
        )
    }
}

pub fn format_payment(payment: u64) -> String {
    format!("Your monthly payment = {}!", payment)
}

pub fn format_principal(principal: u64) -> String {
    format!("Your loan principal = {}!", principal)
}

pub fn format_schedule_line(month: usize, payment: u64) -> String {
    format!("Month {}: payment is {}", month, payment)
}

pub fn format_overpayment(overpayment: i64) -> String {
    format!("Overpayment = {}", overpayment)
}

/// Render an outcome as output lines.
pub fn format_outcome(outcome: &LoanOutcome, show_overpayment: bool) -> Vec<String> {
    let mut lines = match &outcome.result {
        CalculationResult::Payment(payment) => vec![format_payment(*payment)],
        CalculationResult::Principal(principal) => vec![format_principal(*principal)],
        CalculationResult::Periods(periods) => vec![format_periods(*periods)],
        CalculationResult::Schedule(schedule) => schedule
            .iter()
            .enumerate()
            .map(|(i, &payment)| format_schedule_line(i + 1, payment))
            .collect(),
    };

    if show_overpayment {
        // Blank line separates the schedule from the total
        if matches!(outcome.result, CalculationResult::Schedule(_)) {
            lines.push(String::new());
        }
        lines.push(format_overpayment(outcome.overpayment));
    }
    lines
}

/// Print an outcome to stdout.
pub fn print_outcome(outcome: &LoanOutcome, show_overpayment: bool) {
    for line in format_outcome(outcome, show_overpayment) {
        println!("{}", line);
    }
}
