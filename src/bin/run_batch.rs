//! Price a CSV of applications in parallel
//!
//! Input columns: name,principal,score
//! Output: one row per application and term, or one error row per rejected application

use anyhow::{Context, Result};
use bnpl_pricing::pricing::{load_calculator_config, load_tier_policy, CalculatorConfig};
use bnpl_pricing::quote::{quote_batch, Application};
use bnpl_pricing::{InterestTierPolicy, RepaymentPlanCalculator};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Price a CSV of BNPL applications")]
struct Args {
    /// Applications CSV (name,principal,score)
    #[arg(long)]
    input: PathBuf,

    #[arg(long, default_value = "batch_quotes.csv")]
    output: PathBuf,

    /// Tier table CSV (min_score,rate,label)
    #[arg(long)]
    tiers: Option<PathBuf>,

    /// Calculator config JSON
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    name: &'a str,
    score: u16,
    tier: Option<&'static str>,
    interest_rate: Option<f64>,
    term: Option<u32>,
    per_period_payment: Option<f64>,
    first_payment: Option<f64>,
    total_repayment: Option<f64>,
    error: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let config = match &args.config {
        Some(path) => load_calculator_config(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    let policy = match &args.tiers {
        Some(path) => load_tier_policy(path)
            .with_context(|| format!("loading tier table {}", path.display()))?,
        None => InterestTierPolicy::default(),
    };
    let calculator = RepaymentPlanCalculator::new(policy, config)?;

    let mut reader = csv::Reader::from_path(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;
    let applications: Vec<Application> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .with_context(|| format!("reading {}", args.input.display()))?;
    println!("Loaded {} applications in {:?}", applications.len(), start.elapsed());

    let price_start = Instant::now();
    let results = quote_batch(&calculator, &applications);
    println!("Priced in {:?}", price_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut rejected = 0usize;

    for (app, result) in applications.iter().zip(&results) {
        match result {
            Ok(quote) => {
                for plan in &quote.plans {
                    writer.serialize(OutputRow {
                        name: &app.name,
                        score: quote.score.value(),
                        tier: Some(quote.tier.label()),
                        interest_rate: Some(quote.interest_rate),
                        term: Some(plan.term),
                        per_period_payment: Some(plan.per_period_payment),
                        first_payment: Some(plan.first_installment()),
                        total_repayment: Some(plan.total_repayment),
                        error: None,
                    })?;
                }
            }
            Err(err) => {
                rejected += 1;
                log::warn!("Rejected application for {}: {}", app.name, err);
                writer.serialize(OutputRow {
                    name: &app.name,
                    score: app.score.value(),
                    tier: None,
                    interest_rate: None,
                    term: None,
                    per_period_payment: None,
                    first_payment: None,
                    total_repayment: None,
                    error: Some(err.to_string()),
                })?;
            }
        }
    }
    writer.flush()?;

    println!("Output written to {}", args.output.display());
    println!(
        "\nBatch Summary:\n  Priced:   {}\n  Rejected: {}\n  Total time: {:?}",
        results.len() - rejected,
        rejected,
        start.elapsed()
    );

    Ok(())
}
