pub mod error;
pub mod quality;
pub mod reference_date;
pub mod rentroll;

#[cfg(test)]
pub mod testing;

pub use reference_date::ReferenceDate;
pub use rentroll::{resolve_rent_roll, RentRollCalculator, RentRollResolver};

/// Returns the standard pre-configured resolver used by the API and CLI.
///
/// The resolver itself carries no clock and no configuration; the reference
/// date is injected per call via `ReferenceDate`.
pub fn default_resolver() -> RentRollResolver {
    RentRollResolver::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use testing::{run_and_assert_scenario, ScenarioDirtySnapshot, ScenarioPortfolio};

    /// A clean portfolio resolves to the expected rents with clean
    /// diagnostics, including the Superseded-current-version case.
    #[tokio::test]
    async fn test_default_resolver_portfolio() {
        let scenario = ScenarioPortfolio::new();
        let resolver = default_resolver();

        run_and_assert_scenario(&scenario, &resolver)
            .await
            .expect("Failed to run portfolio scenario");
    }

    /// A dirty snapshot still resolves deterministically and every
    /// diagnostic counter reports its finding.
    #[tokio::test]
    async fn test_default_resolver_dirty_snapshot() {
        let scenario = ScenarioDirtySnapshot::new();
        let resolver = default_resolver();

        run_and_assert_scenario(&scenario, &resolver)
            .await
            .expect("Failed to run dirty snapshot scenario");
    }
}
