pub mod scenario_dirty_snapshot;
pub mod scenario_portfolio;

pub use scenario_dirty_snapshot::ScenarioDirtySnapshot;
pub use scenario_portfolio::ScenarioPortfolio;

use async_trait::async_trait;
use chrono::NaiveDate;
use common::{LeaseKey, RentRollDiagnostics};
use rust_decimal::Decimal;
use sea_orm::{Database, DatabaseConnection, DbErr};

use crate::error::Result as ComputeResult;
use crate::reference_date::ReferenceDate;
use crate::rentroll::RentRollCalculator;
use migration::{Migrator, MigratorTrait};

async fn setup_db() -> Result<DatabaseConnection, DbErr> {
    // Connect to the SQLite database
    let db = Database::connect("sqlite::memory:").await?;

    // Try to apply migrations first
    Migrator::up(&db, None).await.expect("Migrations failed.");
    Ok(db)
}

/// Expected rent per lease pair, in output order.
pub type ExpectedRents = Vec<(LeaseKey, Decimal)>;

/// Prepared test scenario: a seeded database, the reference date to resolve
/// against, and the expected records and diagnostics.
pub type TestScenario = (
    DatabaseConnection,
    NaiveDate,
    ExpectedRents,
    RentRollDiagnostics,
);

/// Trait for building test scenarios.
#[async_trait]
pub trait TestScenarioBuilder {
    async fn get_scenario(&self) -> Result<TestScenario, DbErr>;
}

/// Runs the calculator against the scenario's database and asserts the roll
/// matches the expectations, diagnostics included.
pub async fn run_and_assert_scenario(
    builder: &dyn TestScenarioBuilder,
    calculator: &dyn RentRollCalculator,
) -> ComputeResult<()> {
    let (db, as_of, expected_rents, expected_diagnostics) = builder.get_scenario().await?;

    let roll = calculator
        .compute_rent_roll(&db, ReferenceDate::Explicit(as_of))
        .await?;

    assert_eq!(roll.as_of, as_of);
    assert_eq!(
        roll.records.len(),
        expected_rents.len(),
        "unexpected record count: {:#?}",
        roll.records
    );
    for (record, (key, rent)) in roll.records.iter().zip(&expected_rents) {
        assert_eq!(&record.lease_key(), key);
        assert_eq!(
            &record.monthly_rent, rent,
            "wrong monthly rent for {}",
            key
        );
    }
    assert_eq!(roll.diagnostics, expected_diagnostics);

    Ok(())
}
