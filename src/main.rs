//! Census Rater CLI
//!
//! Loads a census CSV and an age-banded rate sheet CSV, computes each
//! member's age as of the renewal date, matches rates for every plan, and
//! writes the augmented census out.

use anyhow::Context;
use census_rater::census::load_census;
use census_rater::rates::{load_rate_table, RATE_SHEET_SKIP_ROWS};
use census_rater::{rate_census, CensusTable};
use chrono::NaiveDate;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "census_rater",
    version,
    about = "Match age-banded plan rates to an employee census"
)]
struct Args {
    /// Census CSV (must contain a DOB column)
    census: PathBuf,

    /// Rate sheet CSV (first column: age range, remaining columns: plans)
    rates: PathBuf,

    /// Renewal/effective date used for every age computation (YYYY-MM-DD)
    #[arg(long)]
    renewal: NaiveDate,

    /// Leading title rows to skip in the rate sheet
    #[arg(long, default_value_t = RATE_SHEET_SKIP_ROWS)]
    skip_rows: usize,

    /// Where to write the augmented census CSV
    #[arg(long, default_value = "rated_census.csv")]
    output: PathBuf,

    /// Emit the augmented census as JSON to stdout instead of writing CSV
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let census = load_census(&args.census)
        .with_context(|| format!("loading census {}", args.census.display()))?;
    let rates = load_rate_table(&args.rates, args.skip_rows)
        .with_context(|| format!("loading rate sheet {}", args.rates.display()))?;

    println!(
        "Loaded census: {} records, {} columns",
        census.len(),
        census.columns.len()
    );
    println!(
        "Loaded rate table: {} plans, {} age bands",
        rates.plans().len(),
        rates.bands().len()
    );

    let rated = rate_census(&census, &rates, args.renewal)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rated)?);
        return Ok(());
    }

    write_csv(&rated, &args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    // Console preview of the first few rated rows
    println!("\n{}", rated.columns.join(" | "));
    println!("{}", "-".repeat(80));
    for row in rated.rows.iter().take(10) {
        let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        println!("{}", cells.join(" | "));
    }
    if rated.rows.len() > 10 {
        println!("... ({} more records)", rated.rows.len() - 10);
    }

    println!("\nAugmented census written to: {}", args.output.display());
    Ok(())
}

fn write_csv(table: &CensusTable, path: &Path) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        writer.write_record(&cells)?;
    }
    writer.flush()?;
    Ok(())
}
