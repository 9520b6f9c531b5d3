//! End-to-end tests running the loancalc binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn loancalc() -> Command {
    let mut cmd = Command::cargo_bin("loancalc").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

mod annuity {
    use super::*;

    #[test]
    fn monthly_payment() {
        loancalc()
            .args(["--type=annuity", "--principal=1000000", "--periods=60", "--interest=10"])
            .assert()
            .success()
            .stdout("Your monthly payment = 21248!\n")
            .stderr("");
    }

    #[test]
    fn loan_principal() {
        loancalc()
            .args(["--type=annuity", "--payment=8722", "--periods=120", "--interest=5.6"])
            .assert()
            .success()
            .stdout("Your loan principal = 800019!\n");
    }

    #[test]
    fn repayment_term() {
        loancalc()
            .args(["--type=annuity", "--principal=500000", "--payment=23000", "--interest=7.8"])
            .assert()
            .success()
            .stdout("It will take 2 years to repay this loan!\n");
    }

    #[test]
    fn repayment_term_years_and_months() {
        loancalc()
            .args(["--type=annuity", "--principal=50000", "--payment=1000", "--interest=12"])
            .assert()
            .success()
            .stdout("It will take 5 years and 10 months to repay this loan!\n");
    }

    #[test]
    fn overpayment() {
        loancalc()
            .args([
                "--type=annuity",
                "--principal=500000",
                "--payment=23000",
                "--interest=7.8",
                "--overpayment",
            ])
            .assert()
            .success()
            .stdout("It will take 2 years to repay this loan!\nOverpayment = 52000\n");
    }
}

mod differentiated {
    use super::*;

    #[test]
    fn six_month_schedule() {
        loancalc()
            .args(["--type=diff", "--principal=500000", "--periods=6", "--interest=7.8"])
            .assert()
            .success()
            .stdout(
                "Month 1: payment is 86584\n\
                 Month 2: payment is 86042\n\
                 Month 3: payment is 85500\n\
                 Month 4: payment is 84959\n\
                 Month 5: payment is 84417\n\
                 Month 6: payment is 83875\n",
            );
    }

    #[test]
    fn schedule_with_overpayment() {
        loancalc()
            .args([
                "--type=diff",
                "--principal=500000",
                "--periods=6",
                "--interest=7.8",
                "--overpayment",
            ])
            .assert()
            .success()
            .stdout(predicate::str::ends_with(
                "Month 6: payment is 83875\n\nOverpayment = 11377\n",
            ));
    }
}

mod errors {
    use super::*;

    #[test]
    fn all_four_annuity_flags() {
        loancalc()
            .args([
                "--type=annuity",
                "--principal=1000",
                "--periods=12",
                "--payment=100",
                "--interest=5",
            ])
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("expecting exactly 3"));
    }

    #[test]
    fn payment_with_diff() {
        loancalc()
            .args([
                "--type=diff",
                "--payment=50",
                "--principal=1000",
                "--periods=10",
                "--interest=5",
            ])
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "--payment cannot be combined with --type diff",
            ));
    }

    #[test]
    fn missing_type() {
        loancalc()
            .args(["--principal=1000", "--periods=12", "--interest=5"])
            .assert()
            .code(1)
            .stderr("loancalc: --type is required (annuity or diff)\n");
    }

    #[test]
    fn unknown_type() {
        loancalc()
            .args(["--type=fixed", "--principal=1000", "--periods=12", "--interest=5"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("unknown --type value: 'fixed'"));
    }

    #[test]
    fn missing_interest() {
        loancalc()
            .args(["--type=annuity", "--principal=1000", "--periods=12", "--payment=100"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("--interest is required"));
    }

    #[test]
    fn negative_value() {
        loancalc()
            .args(["--type=annuity", "--principal", "-1000", "--periods=12", "--interest=5"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("--principal must not be negative"));
    }

    #[test]
    fn periods_above_cap() {
        loancalc()
            .args(["--type=diff", "--principal=1000", "--periods=4000000000", "--interest=5"])
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("from 1 to 12000"));
    }

    #[test]
    fn payment_never_covers_interest() {
        loancalc()
            .args(["--type=annuity", "--principal=100000", "--payment=500", "--interest=10"])
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("never repaid"));
    }

    #[test]
    fn unparsable_number_is_a_clap_error() {
        loancalc()
            .args(["--type=annuity", "--principal=lots", "--periods=12", "--interest=5"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--principal"));
    }
}

mod cli {
    use super::*;

    #[test]
    fn help_lists_examples() {
        loancalc()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Examples:"))
            .stdout(predicate::str::contains("--interest"));
    }

    #[test]
    fn verbose_logs_to_stderr() {
        loancalc()
            .args([
                "-v",
                "--type=annuity",
                "--principal=1000000",
                "--periods=60",
                "--interest=10",
            ])
            .assert()
            .success()
            .stdout("Your monthly payment = 21248!\n")
            .stderr(predicate::str::contains("monthly rate"));
    }
}
