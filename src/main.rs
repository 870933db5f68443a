//! Personal Finance CLI
//!
//! Command-line front end for the calculators. Every subcommand prints the
//! formatted result, or JSON with `--json`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use personal_finance::{
    debt::{self, load_debts},
    growth, loan, retirement, Assumptions, PayoffStrategy,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "personal_finance", version, about = "Personal finance calculators")]
struct Cli {
    /// JSON file overriding default assumptions
    #[arg(long, global = true)]
    assumptions: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Debt-to-income ratio in percent
    Dti { debt_payments: f64, income: f64 },

    /// Order debts from a CSV file, smallest balance first
    Snowball { file: PathBuf },

    /// Order debts from a CSV file, highest interest rate first
    Avalanche { file: PathBuf },

    /// Simulate paying off debts with a fixed monthly budget
    Payoff {
        file: PathBuf,
        #[arg(long)]
        budget: f64,
        #[arg(long, value_enum, default_value_t = StrategyArg::Avalanche)]
        strategy: StrategyArg,
    },

    /// Monthly loan instalment (rate in percent)
    Emi {
        principal: f64,
        rate_percent: f64,
        years: f64,
        /// Print the full amortization schedule
        #[arg(long)]
        schedule: bool,
    },

    /// Future value of a lump sum (rate as a fraction)
    LumpSum {
        principal: f64,
        years: f64,
        roi: f64,
        /// Subtract inflation from the return
        #[arg(long)]
        real: bool,
        #[arg(long)]
        inflation: Option<f64>,
    },

    /// Present value of a future amount (rate as a fraction)
    PresentValue {
        future_amount: f64,
        years: f64,
        roi: f64,
        #[arg(long)]
        real: bool,
        #[arg(long)]
        inflation: Option<f64>,
    },

    /// Value of a monthly contribution plan (rate as a fraction)
    Sip {
        monthly_payment: f64,
        months: u32,
        roi: f64,
        #[arg(long)]
        real: bool,
        #[arg(long)]
        inflation: Option<f64>,
    },

    /// Additional savings needed for retirement (rate in percent)
    RetirementGoal {
        monthly_expenses: f64,
        years: f64,
        rate_percent: f64,
        current_savings: f64,
    },

    /// Withdrawal rate as a percentage of savings
    WithdrawalRate {
        savings: f64,
        years: f64,
        annual_expenses: f64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Snowball,
    Avalanche,
}

impl From<StrategyArg> for PayoffStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Snowball => PayoffStrategy::Snowball,
            StrategyArg::Avalanche => PayoffStrategy::Avalanche,
        }
    }
}

#[derive(Serialize)]
struct ValueOutput<'a> {
    calculation: &'a str,
    value: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let assumptions = match &cli.assumptions {
        Some(path) => Assumptions::from_json_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => Assumptions::default(),
    };
    log::debug!("Using assumptions {:?}", assumptions);

    // Explicit --inflation wins over the assumptions file
    let inflation = |flag: Option<f64>| Some(flag.unwrap_or(assumptions.inflation_rate));

    match cli.command {
        Command::Dti { debt_payments, income } => {
            print_value(cli.json, "dti", debt::calculate_dti(debt_payments, income)?)?;
        }
        Command::Snowball { file } => {
            let debts = load_debts(&file).with_context(|| format!("reading {}", file.display()))?;
            print_debts(cli.json, &debt::debt_snowball(debts)?)?;
        }
        Command::Avalanche { file } => {
            let debts = load_debts(&file).with_context(|| format!("reading {}", file.display()))?;
            print_debts(cli.json, &debt::debt_avalanche(debts)?)?;
        }
        Command::Payoff { file, budget, strategy } => {
            let debts = load_debts(&file).with_context(|| format!("reading {}", file.display()))?;
            let plan = debt::simulate_payoff(&debts, strategy.into(), budget, &assumptions)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                println!("Strategy: {:?}", plan.strategy);
                println!("Months to debt free: {}", plan.months);
                println!("Total interest: {}", personal_finance::format_money(plan.total_interest));
                for event in &plan.payoff_order {
                    println!("  {:>4}  {}", event.month, event.name);
                }
            }
        }
        Command::Emi { principal, rate_percent, years, schedule } => {
            if schedule {
                let schedule = loan::amortization_schedule(principal, rate_percent, years)?;
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&schedule)?);
                } else {
                    println!("{:>5} {:>14} {:>12} {:>12} {:>12} {:>14}",
                        "Month", "Opening", "Payment", "Interest", "Principal", "Closing");
                    for row in &schedule.rows {
                        println!("{:>5} {:>14.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
                            row.month, row.opening_balance, row.payment, row.interest,
                            row.principal, row.closing_balance);
                    }
                    println!("Total interest: {:.2}", schedule.total_interest);
                }
            } else {
                print_value(cli.json, "emi", loan::calculate_emi(principal, rate_percent, years)?)?;
            }
        }
        Command::LumpSum { principal, years, roi, real, inflation: flag } => {
            let value = if real {
                growth::lump_sum_returns_with_inflation(principal, years, roi, inflation(flag))?
            } else {
                growth::lump_sum_returns(principal, years, roi)?
            };
            print_value(cli.json, "lump_sum", value)?;
        }
        Command::PresentValue { future_amount, years, roi, real, inflation: flag } => {
            let value = if real {
                growth::present_value_with_inflation(future_amount, years, roi, inflation(flag))?
            } else {
                growth::present_value_without_inflation(future_amount, years, roi)?
            };
            print_value(cli.json, "present_value", value)?;
        }
        Command::Sip { monthly_payment, months, roi, real, inflation: flag } => {
            let value = if real {
                growth::sip_returns_with_inflation(monthly_payment, months, roi, inflation(flag))?
            } else {
                growth::sip_returns(monthly_payment, months, roi)?
            };
            print_value(cli.json, "sip", value)?;
        }
        Command::RetirementGoal { monthly_expenses, years, rate_percent, current_savings } => {
            let value = retirement::retirement_savings_goal(monthly_expenses, years, rate_percent, current_savings)?;
            print_value(cli.json, "retirement_goal", value)?;
        }
        Command::WithdrawalRate { savings, years, annual_expenses } => {
            let value = retirement::safe_withdrawal_rate(savings, years, annual_expenses)?;
            print_value(cli.json, "withdrawal_rate", value)?;
        }
    }

    Ok(())
}

fn print_value(json: bool, calculation: &str, value: String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&ValueOutput { calculation, value })?);
    } else {
        println!("{}", value);
    }
    Ok(())
}

fn print_debts(json: bool, debts: &[debt::Debt]) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(debts)?);
        return Ok(());
    }

    println!("{:<24} {:>14} {:>8}", "Debt", "Balance", "Rate");
    println!("{}", "-".repeat(48));
    for d in debts {
        let rate = d
            .interest_rate
            .map(|r| format!("{:.2}%", r * 100.0))
            .unwrap_or_else(|| "-".to_string());
        println!("{:<24} {:>14.2} {:>8}", d.name, d.balance, rate);
    }
    Ok(())
}
