use async_trait::async_trait;
use chrono::NaiveDate;
use common::{LeaseKey, RentRollDiagnostics};
use model::entities::{amendment, charge_line};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DbErr, Set};

use super::{setup_db, TestScenario, TestScenarioBuilder};

/// A small clean portfolio: a renewed lease whose current version is marked
/// Superseded, a plain single-amendment lease, and a terminated lease that
/// must not appear at all.
pub struct ScenarioPortfolio {}

impl ScenarioPortfolio {
    pub fn new() -> Self {
        Self {}
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[async_trait]
impl TestScenarioBuilder for ScenarioPortfolio {
    async fn get_scenario(&self) -> Result<TestScenario, DbErr> {
        let db = setup_db().await?;

        // (P100, T001): original lease, later renewed. The renewal was
        // itself marked Superseded by a non-rent amendment that is not in
        // the snapshot, so the Superseded row is still the current version.
        let original = amendment::ActiveModel {
            property_id: Set("P100".to_string()),
            tenant_id: Set("T001".to_string()),
            sequence: Set(0),
            status: Set("Activated".to_string()),
            amendment_type: Set("Original Lease".to_string()),
            area: Set(Some(Decimal::new(10_000, 0))),
            start_date: Set(date(2020, 1, 1)),
            end_date: Set(Some(date(2022, 12, 31))),
            term_months: Set(36),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let renewal = amendment::ActiveModel {
            property_id: Set("P100".to_string()),
            tenant_id: Set("T001".to_string()),
            sequence: Set(2),
            status: Set("Superseded".to_string()),
            amendment_type: Set("Renewal".to_string()),
            area: Set(Some(Decimal::new(10_000, 0))),
            start_date: Set(date(2023, 1, 1)),
            end_date: Set(None),
            term_months: Set(0),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let _old_rent = charge_line::ActiveModel {
            amendment_id: Set(original.id),
            charge_code: Set("rent".to_string()),
            from_date: Set(date(2020, 1, 1)),
            to_date: Set(Some(date(2022, 12, 31))),
            monthly_amount: Set(Decimal::new(2_000_00, 2)),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // Base rent plus a contractual step, both active on the reference
        // date; they must sum.
        let _base = charge_line::ActiveModel {
            amendment_id: Set(renewal.id),
            charge_code: Set("rent".to_string()),
            from_date: Set(date(2023, 1, 1)),
            to_date: Set(None),
            monthly_amount: Set(Decimal::new(2_500_00, 2)),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let _step = charge_line::ActiveModel {
            amendment_id: Set(renewal.id),
            charge_code: Set("rent".to_string()),
            from_date: Set(date(2024, 1, 1)),
            to_date: Set(None),
            monthly_amount: Set(Decimal::new(150_00, 2)),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // CAM is billed too but never counts toward monthly rent.
        let _cam = charge_line::ActiveModel {
            amendment_id: Set(renewal.id),
            charge_code: Set("cam".to_string()),
            from_date: Set(date(2023, 1, 1)),
            to_date: Set(None),
            monthly_amount: Set(Decimal::new(300_00, 2)),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // (P100, T002): single activated amendment, one rent line.
        let simple = amendment::ActiveModel {
            property_id: Set("P100".to_string()),
            tenant_id: Set("T002".to_string()),
            sequence: Set(0),
            status: Set("Activated".to_string()),
            amendment_type: Set("Original Lease".to_string()),
            area: Set(Some(Decimal::new(4_500, 0))),
            start_date: Set(date(2021, 6, 1)),
            end_date: Set(Some(date(2026, 5, 31))),
            term_months: Set(60),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let _simple_rent = charge_line::ActiveModel {
            amendment_id: Set(simple.id),
            charge_code: Set("rent".to_string()),
            from_date: Set(date(2021, 6, 1)),
            to_date: Set(None),
            monthly_amount: Set(Decimal::new(1_800_00, 2)),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        // (P200, T010): terminated lease; must be absent from the roll.
        let _terminated = amendment::ActiveModel {
            property_id: Set("P200".to_string()),
            tenant_id: Set("T010".to_string()),
            sequence: Set(1),
            status: Set("Activated".to_string()),
            amendment_type: Set("Termination".to_string()),
            area: Set(Some(Decimal::new(2_000, 0))),
            start_date: Set(date(2019, 1, 1)),
            end_date: Set(Some(date(2024, 12, 31))),
            term_months: Set(72),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        let as_of = date(2024, 6, 30);
        let expected_rents = vec![
            (LeaseKey::new("P100", "T001"), Decimal::new(2_650_00, 2)),
            (LeaseKey::new("P100", "T002"), Decimal::new(1_800_00, 2)),
        ];

        Ok((db, as_of, expected_rents, RentRollDiagnostics::default()))
    }
}
