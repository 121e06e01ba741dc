use chrono::NaiveDate;
use common::RentRoll;
use polars::prelude::*;
use tracing::debug;

use crate::error::Result;

/// Converts a resolved rent roll into a polars DataFrame.
///
/// Decimal columns are rendered as strings to avoid float rounding on money
/// amounts. The row order is the roll's own (property, tenant) order.
pub fn rent_roll_to_dataframe(roll: &RentRoll) -> Result<DataFrame> {
    let mut property_ids = Vec::with_capacity(roll.records.len());
    let mut tenant_ids = Vec::with_capacity(roll.records.len());
    let mut areas: Vec<Option<String>> = Vec::with_capacity(roll.records.len());
    let mut monthly_rents = Vec::with_capacity(roll.records.len());
    let mut annual_rents = Vec::with_capacity(roll.records.len());
    let mut rent_psfs: Vec<Option<String>> = Vec::with_capacity(roll.records.len());
    let mut start_dates: Vec<NaiveDate> = Vec::with_capacity(roll.records.len());
    let mut end_dates: Vec<Option<NaiveDate>> = Vec::with_capacity(roll.records.len());
    let mut missing_flags = Vec::with_capacity(roll.records.len());

    for record in &roll.records {
        property_ids.push(record.property_id.clone());
        tenant_ids.push(record.tenant_id.clone());
        areas.push(record.area.map(|a| a.to_string()));
        monthly_rents.push(record.monthly_rent.to_string());
        annual_rents.push(record.annual_rent.to_string());
        rent_psfs.push(record.rent_psf.map(|r| r.to_string()));
        start_dates.push(record.start_date);
        end_dates.push(record.end_date);
        missing_flags.push(record.missing_rent_charge);
    }

    let df = DataFrame::new(vec![
        Series::new("property_id".into(), property_ids).into(),
        Series::new("tenant_id".into(), tenant_ids).into(),
        Series::new("area".into(), areas).into(),
        Series::new("monthly_rent".into(), monthly_rents).into(),
        Series::new("annual_rent".into(), annual_rents).into(),
        Series::new("rent_psf".into(), rent_psfs).into(),
        Series::new("start_date".into(), start_dates).into(),
        Series::new("end_date".into(), end_dates).into(),
        Series::new("missing_rent_charge".into(), missing_flags).into(),
    ])?;

    debug!("Converted rent roll to DataFrame with {} rows", df.height());
    Ok(df)
}

#[cfg(test)]
mod tests {
    use common::{RentRollDiagnostics, ResolvedLeaseRecord};
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_dataframe_shape() {
        let roll = RentRoll {
            as_of: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            records: vec![ResolvedLeaseRecord {
                property_id: "P1".to_string(),
                tenant_id: "T1".to_string(),
                area: Some(Decimal::new(1000, 0)),
                monthly_rent: Decimal::new(1200_00, 2),
                annual_rent: Decimal::new(14_400_00, 2),
                rent_psf: Some(Decimal::new(14_40, 2)),
                start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                end_date: None,
                month_to_month: true,
                missing_rent_charge: false,
            }],
            diagnostics: RentRollDiagnostics::default(),
        };

        let df = rent_roll_to_dataframe(&roll).unwrap();
        assert_eq!(df.height(), 1);
        assert_eq!(df.width(), 9);
        assert!(df.column("monthly_rent").is_ok());
    }

    #[test]
    fn test_empty_roll_produces_empty_frame() {
        let roll = RentRoll {
            as_of: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            records: vec![],
            diagnostics: RentRollDiagnostics::default(),
        };

        let df = rent_roll_to_dataframe(&roll).unwrap();
        assert_eq!(df.height(), 0);
    }
}
