use std::fs::File;
use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use compute::rentroll::dataframe::rent_roll_to_dataframe;
use compute::{default_resolver, ReferenceDate, RentRollCalculator};
use polars::prelude::CsvWriter;
use polars::prelude::SerWriter;
use sea_orm::Database;
use tracing::{debug, info, warn};

/// Resolves the rent roll and prints it, with an optional CSV export.
pub async fn resolve(
    database_url: &str,
    as_of: Option<NaiveDate>,
    csv_path: Option<&Path>,
) -> Result<()> {
    info!("Resolving rent roll");
    debug!("Database URL: {}", database_url);

    let db = Database::connect(database_url).await?;

    let reference = match as_of {
        Some(date) => ReferenceDate::Explicit(date),
        None => ReferenceDate::LastClosedPeriod,
    };

    let resolver = default_resolver();
    let roll = resolver.compute_rent_roll(&db, reference).await?;

    let mut df = rent_roll_to_dataframe(&roll)?;
    println!("Rent roll as of {}:", roll.as_of);
    println!("{}", df);
    println!(
        "Portfolio monthly rent: {} across {} leases",
        roll.total_monthly_rent(),
        roll.records.len()
    );

    let d = &roll.diagnostics;
    if d.is_clean() {
        info!("No data-quality findings");
    } else {
        warn!(
            duplicate_active_amendments = d.duplicate_active_amendments,
            orphaned_charge_lines = d.orphaned_charge_lines,
            amendments_missing_rent_charge = d.amendments_missing_rent_charge,
            invalid_status_count = d.invalid_status_count,
            "data-quality findings; the roll should be read with care"
        );
        for key in &d.missing_rent_charge_keys {
            warn!(lease = %key, "no rent charge covering the reference date");
        }
    }

    if let Some(path) = csv_path {
        let file = File::create(path)?;
        CsvWriter::new(file).finish(&mut df)?;
        info!("Rent roll written to {}", path.display());
    }

    Ok(())
}
