//! Loan calculator CLI application.
//!
//! # Usage
//! ```ignore
//! loancalc --type=annuity --principal=1000000 --periods=60 --interest=10   // monthly payment
//! loancalc --type=annuity --payment=8722 --periods=120 --interest=5.6      // principal
//! loancalc --type=annuity --principal=500000 --payment=23000 --interest=7.8 // term
//! loancalc --type=diff --principal=500000 --periods=8 --interest=7.8       // schedule
//! ```

use log::LevelFilter;
use simple_logger::SimpleLogger;

use loancalc::args::{Args, resolve};
use loancalc::calculator::calculate;
use loancalc::error::LoanError;
use loancalc::formatter::print_outcome;

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    // RUST_LOG takes precedence over --verbose
    if let Err(e) = SimpleLogger::new().with_level(level).env().init() {
        eprintln!("loancalc: failed to initialize logging: {}", e);
    }

    if let Err(e) = run(&args) {
        eprintln!("loancalc: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), LoanError> {
    let request = resolve(args)?;
    let outcome = calculate(&request)?;
    print_outcome(&outcome, args.overpayment);
    Ok(())
}
