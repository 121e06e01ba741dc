use async_trait::async_trait;
use chrono::NaiveDate;
use common::{LeaseKey, RentRollDiagnostics};
use model::entities::{amendment, charge_line};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DbErr, Set};

use super::{setup_db, TestScenario, TestScenarioBuilder};

/// A snapshot exercising every diagnostic counter at once: a pair with two
/// Activated amendments, a row with a vendor-garbage status, a lease with no
/// rent charge, and an orphaned charge line.
pub struct ScenarioDirtySnapshot {}

impl ScenarioDirtySnapshot {
    pub fn new() -> Self {
        Self {}
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[async_trait]
impl TestScenarioBuilder for ScenarioDirtySnapshot {
    async fn get_scenario(&self) -> Result<TestScenario, DbErr> {
        let db = setup_db().await?;

        // (P300, T001): two concurrent Activated amendments. Latest
        // sequence must win and the pair must be counted once.
        let lower = amendment::ActiveModel {
            property_id: Set("P300".to_string()),
            tenant_id: Set("T001".to_string()),
            sequence: Set(3),
            status: Set("Activated".to_string()),
            amendment_type: Set("Renewal".to_string()),
            area: Set(Some(Decimal::new(3_000, 0))),
            start_date: Set(date(2022, 1, 1)),
            end_date: Set(None),
            term_months: Set(0),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let upper = amendment::ActiveModel {
            property_id: Set("P300".to_string()),
            tenant_id: Set("T001".to_string()),
            sequence: Set(4),
            status: Set("Activated".to_string()),
            amendment_type: Set("Renewal".to_string()),
            area: Set(Some(Decimal::new(3_000, 0))),
            start_date: Set(date(2023, 1, 1)),
            end_date: Set(None),
            term_months: Set(0),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let _lower_rent = charge_line::ActiveModel {
            amendment_id: Set(lower.id),
            charge_code: Set("rent".to_string()),
            from_date: Set(date(2022, 1, 1)),
            to_date: Set(None),
            monthly_amount: Set(Decimal::new(1_000_00, 2)),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let _upper_rent = charge_line::ActiveModel {
            amendment_id: Set(upper.id),
            charge_code: Set("rent".to_string()),
            from_date: Set(date(2023, 1, 1)),
            to_date: Set(None),
            monthly_amount: Set(Decimal::new(1_100_00, 2)),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // (P300, T002): the export's known-bad status value.
        let _in_process = amendment::ActiveModel {
            property_id: Set("P300".to_string()),
            tenant_id: Set("T002".to_string()),
            sequence: Set(0),
            status: Set("In Process".to_string()),
            amendment_type: Set("Original Lease".to_string()),
            area: Set(Some(Decimal::new(1_200, 0))),
            start_date: Set(date(2023, 1, 1)),
            end_date: Set(None),
            term_months: Set(0),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // (P300, T003): current amendment billed only CAM; rent is missing,
        // which must be flagged rather than read as a free lease.
        let no_rent = amendment::ActiveModel {
            property_id: Set("P300".to_string()),
            tenant_id: Set("T003".to_string()),
            sequence: Set(2),
            status: Set("Activated".to_string()),
            amendment_type: Set("Renewal".to_string()),
            area: Set(Some(Decimal::new(500, 0))),
            start_date: Set(date(2021, 1, 1)),
            end_date: Set(None),
            term_months: Set(0),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let _cam_only = charge_line::ActiveModel {
            amendment_id: Set(no_rent.id),
            charge_code: Set("cam".to_string()),
            from_date: Set(date(2021, 1, 1)),
            to_date: Set(None),
            monthly_amount: Set(Decimal::new(250_00, 2)),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // A charge line pointing at an amendment that is not in the export.
        let _orphan = charge_line::ActiveModel {
            amendment_id: Set(9_999),
            charge_code: Set("rent".to_string()),
            from_date: Set(date(2020, 1, 1)),
            to_date: Set(None),
            monthly_amount: Set(Decimal::new(640_00, 2)),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let as_of = date(2024, 6, 1);
        let expected_rents = vec![
            (LeaseKey::new("P300", "T001"), Decimal::new(1_100_00, 2)),
            (LeaseKey::new("P300", "T003"), Decimal::ZERO),
        ];
        let expected_diagnostics = RentRollDiagnostics {
            duplicate_active_amendments: 1,
            orphaned_charge_lines: 1,
            amendments_missing_rent_charge: 1,
            invalid_status_count: 1,
            missing_rent_charge_keys: vec![LeaseKey::new("P300", "T003")],
        };

        Ok((db, as_of, expected_rents, expected_diagnostics))
    }
}
