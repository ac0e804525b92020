//! Price repayment plans for a single purchase
//!
//! Example: quote --principal 1000 --score 800 --prorate

use anyhow::{Context, Result};
use bnpl_pricing::pricing::{load_calculator_config, load_tier_policy, CalculatorConfig};
use bnpl_pricing::{CreditScore, InterestTierPolicy, Quote, RepaymentPlanCalculator};
use bnpl_pricing::quote::format_rate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quote", about = "Price repayment plans for a purchase")]
struct Args {
    /// Purchase price / loan amount
    #[arg(long)]
    principal: f64,

    /// Credit score; values outside 300-850 are clamped
    #[arg(long, allow_negative_numbers = true)]
    score: i64,

    /// Term lengths in weeks, overrides the config file
    #[arg(long, value_delimiter = ',')]
    terms: Option<Vec<u32>>,

    /// Tier table CSV (min_score,rate,label)
    #[arg(long)]
    tiers: Option<PathBuf>,

    /// Calculator config JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Collect a larger first installment
    #[arg(long)]
    prorate: bool,

    /// Applicant name shown in the output
    #[arg(long)]
    name: Option<String>,

    /// Print the checkout response JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_calculator_config(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    if let Some(terms) = args.terms {
        config.terms = terms;
    }
    if args.prorate {
        config.prorate_first_payment = true;
    }

    let policy = match &args.tiers {
        Some(path) => load_tier_policy(path)
            .with_context(|| format!("loading tier table {}", path.display()))?,
        None => InterestTierPolicy::default(),
    };

    let calculator = RepaymentPlanCalculator::new(policy, config).context("invalid calculator setup")?;
    let mut quote = Quote::price(&calculator, args.principal, CreditScore::clamped(args.score))?;
    quote.name = args.name;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&quote.legacy_json())?);
        return Ok(());
    }

    println!(
        "Score {} ({}), rate {}, principal ${:.2}",
        quote.score,
        quote.tier,
        format_rate(quote.interest_rate),
        quote.principal
    );
    println!("{:<8} {:<12} {:<12} {:<12}", "Weeks", "Weekly", "First", "Total");
    for plan in &quote.plans {
        println!(
            "{:<8} {:<12.2} {:<12.2} {:<12.2}",
            plan.term,
            plan.per_period_payment,
            plan.first_installment(),
            plan.total_repayment
        );
    }

    Ok(())
}
