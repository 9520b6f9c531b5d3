//! Command-line argument parsing using clap.
//!
//! Flags follow the `--name=value` convention: `--type`, `--principal`,
//! `--payment`, `--periods`, `--interest`.

use clap::Parser;
use log::debug;

use crate::error::LoanError;
use crate::types::{Calculation, LoanRequest, LoanType, MAX_PERIODS};

#[derive(Parser, Debug)]
#[command(name = "loancalc")]
#[command(about = "Calculates annuity and differentiated loan payments", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Payment scheme (annuity or diff).
    #[arg(long = "type", value_name = "type", help_heading = "Loan options")]
    pub loan_type: Option<String>,

    /// Loan principal.
    #[arg(long, allow_negative_numbers = true, help_heading = "Loan options")]
    pub principal: Option<f64>,

    /// Monthly payment (annuity only).
    #[arg(long, allow_negative_numbers = true, help_heading = "Loan options")]
    pub payment: Option<f64>,

    /// Number of months needed to repay the loan.
    #[arg(long, allow_negative_numbers = true, help_heading = "Loan options")]
    pub periods: Option<f64>,

    /// Annual interest rate in percent (10 means 10%).
    #[arg(long, allow_negative_numbers = true, help_heading = "Loan options")]
    pub interest: Option<f64>,

    /// Also print the overpayment (total paid minus principal).
    #[arg(long, help_heading = "Output options")]
    pub overpayment: bool,

    /// Log calculation details to stderr.
    #[arg(short = 'v', long, help_heading = "Output options")]
    pub verbose: bool,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Supply --type, --interest and two of --principal, --periods, --payment
to solve for the third. With --type diff, supply --principal and --periods.

Examples:
  loancalc --type=annuity --principal=1000000 --periods=60 --interest=10
  loancalc --type=annuity --payment=8722 --periods=120 --interest=5.6
  loancalc --type=annuity --principal=500000 --payment=23000 --interest=7.8
  loancalc --type=diff --principal=500000 --periods=8 --interest=7.8";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

/// Validate the parsed flags and decide what to calculate.
pub fn resolve(args: &Args) -> Result<LoanRequest, LoanError> {
    let loan_type: LoanType = args
        .loan_type
        .as_deref()
        .ok_or(LoanError::MissingType)?
        .parse()?;

    // Which flags are set is validated before any of their values
    check_flag_shape(loan_type, args)?;

    let principal = checked("principal", args.principal)?;
    let payment = checked("payment", args.payment)?;
    let periods = args.periods.map(whole_periods).transpose()?;
    let interest =
        checked("interest", args.interest)?.ok_or(LoanError::MissingFlag("interest"))?;

    // Unknown is checked in the order payment, principal, periods
    let calculation = match (loan_type, payment, principal, periods) {
        (LoanType::Diff, None, Some(principal), Some(periods)) => {
            Calculation::Differentiated { principal, periods }
        }
        (LoanType::Annuity, None, Some(principal), Some(periods)) => {
            Calculation::Payment { principal, periods }
        }
        (LoanType::Annuity, Some(payment), None, Some(periods)) => {
            Calculation::Principal { payment, periods }
        }
        (LoanType::Annuity, Some(payment), Some(principal), None) => {
            Calculation::Periods { principal, payment }
        }
        _ => unreachable!("flag shape is checked before values"),
    };

    let request = LoanRequest {
        annual_interest_percent: interest,
        calculation,
    };
    debug!(
        "resolved {} request, target {:?}",
        request.loan_type(),
        request.target()
    );
    Ok(request)
}

fn check_flag_shape(loan_type: LoanType, args: &Args) -> Result<(), LoanError> {
    match loan_type {
        LoanType::Diff => {
            if args.payment.is_some() {
                return Err(LoanError::PaymentInDiffMode);
            }
            let required = [
                ("principal", args.principal),
                ("periods", args.periods),
                ("interest", args.interest),
            ];
            if let Some((flag, _)) = required.iter().find(|(_, value)| value.is_none()) {
                return Err(LoanError::MissingFlag(*flag));
            }
        }
        LoanType::Annuity => {
            let found = [args.principal, args.periods, args.payment, args.interest]
                .iter()
                .filter(|value| value.is_some())
                .count();
            if found != 3 {
                return Err(LoanError::FlagCount { expected: 3, found });
            }
            if args.interest.is_none() {
                return Err(LoanError::MissingFlag("interest"));
            }
        }
    }
    Ok(())
}

fn checked(flag: &'static str, value: Option<f64>) -> Result<Option<f64>, LoanError> {
    match value {
        Some(v) if !v.is_finite() => Err(LoanError::NotANumber { flag }),
        Some(v) if v < 0.0 => Err(LoanError::NegativeValue { flag, value: v }),
        other => Ok(other),
    }
}

fn whole_periods(value: f64) -> Result<u32, LoanError> {
    checked("periods", Some(value))?;
    if value < 1.0 || value.fract() != 0.0 || value > MAX_PERIODS as f64 {
        return Err(LoanError::InvalidPeriods(value));
    }
    Ok(value as u32)
}
