use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create amendments table
        manager
            .create_table(
                Table::create()
                    .table(Amendments::Table)
                    .if_not_exists()
                    .col(pk_auto(Amendments::Id))
                    .col(string(Amendments::PropertyId))
                    .col(string(Amendments::TenantId))
                    .col(integer(Amendments::Sequence))
                    .col(string(Amendments::Status))
                    .col(string(Amendments::AmendmentType))
                    .col(decimal_len_null(Amendments::Area, 16, 4))
                    .col(date(Amendments::StartDate))
                    .col(date_null(Amendments::EndDate))
                    .col(integer(Amendments::TermMonths).default(0))
                    .to_owned(),
            )
            .await?;

        // Lookups during resolution group by lease pair and order by sequence
        manager
            .create_index(
                Index::create()
                    .name("idx_amendments_lease_pair")
                    .table(Amendments::Table)
                    .col(Amendments::PropertyId)
                    .col(Amendments::TenantId)
                    .col(Amendments::Sequence)
                    .to_owned(),
            )
            .await?;

        // Create charge_lines table.
        // No foreign key on amendment_id: vendor snapshots are loaded as-is
        // and orphaned rows are detected by the resolver, not rejected here.
        manager
            .create_table(
                Table::create()
                    .table(ChargeLines::Table)
                    .if_not_exists()
                    .col(pk_auto(ChargeLines::Id))
                    .col(integer(ChargeLines::AmendmentId))
                    .col(string(ChargeLines::ChargeCode))
                    .col(date(ChargeLines::FromDate))
                    .col(date_null(ChargeLines::ToDate))
                    .col(decimal_len(ChargeLines::MonthlyAmount, 16, 4))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_charge_lines_amendment")
                    .table(ChargeLines::Table)
                    .col(ChargeLines::AmendmentId)
                    .to_owned(),
            )
            .await?;

        // Create accounting_periods table
        manager
            .create_table(
                Table::create()
                    .table(AccountingPeriods::Table)
                    .if_not_exists()
                    .col(pk_auto(AccountingPeriods::Id))
                    .col(date_uniq(AccountingPeriods::PeriodEnd))
                    .col(boolean(AccountingPeriods::Closed).default(false))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccountingPeriods::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ChargeLines::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Amendments::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Amendments {
    Table,
    Id,
    PropertyId,
    TenantId,
    Sequence,
    Status,
    AmendmentType,
    Area,
    StartDate,
    EndDate,
    TermMonths,
}

#[derive(DeriveIden)]
enum ChargeLines {
    Table,
    Id,
    AmendmentId,
    ChargeCode,
    FromDate,
    ToDate,
    MonthlyAmount,
}

#[derive(DeriveIden)]
enum AccountingPeriods {
    Table,
    Id,
    PeriodEnd,
    Closed,
}
