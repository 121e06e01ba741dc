use std::collections::BTreeMap;

use common::LeaseKey;
use model::entities::amendment;
use tracing::{debug, warn};

use super::status::AmendmentStatus;

/// Result of picking the current amendment per lease pair.
#[derive(Debug)]
pub struct SelectionOutcome {
    /// The winning amendment per pair. BTreeMap keeps the output in a stable
    /// (property, tenant) order, which makes repeated runs byte-identical.
    pub selected: BTreeMap<LeaseKey, amendment::Model>,
    /// Number of pairs that had more than one Activated candidate.
    pub duplicate_active_amendments: u64,
}

/// Groups filter survivors by lease pair and picks the latest version of
/// each.
///
/// The maximum `sequence` wins; sequence gaps are normal and no consecutive
/// numbering is assumed. Sequence dominates status: a max-sequence
/// Superseded row beats a lower-sequence Activated row. When two rows share
/// the maximum sequence, the higher `id` wins so the choice stays
/// deterministic.
///
/// A pair with several Activated candidates violates the source system's
/// single-active invariant. Selection still proceeds (the latest sequence is
/// unambiguous) but the pair is counted so upstream can fix the data.
pub fn select_current_amendments(candidates: Vec<amendment::Model>) -> SelectionOutcome {
    let mut groups: BTreeMap<LeaseKey, Vec<amendment::Model>> = BTreeMap::new();
    for amendment in candidates {
        let key = LeaseKey::new(amendment.property_id.clone(), amendment.tenant_id.clone());
        groups.entry(key).or_default().push(amendment);
    }

    let mut selected = BTreeMap::new();
    let mut duplicate_active_amendments = 0u64;

    for (key, group) in groups {
        let active_count = group
            .iter()
            .filter(|a| {
                a.status.parse::<AmendmentStatus>() == Ok(AmendmentStatus::Activated)
            })
            .count();
        if active_count > 1 {
            warn!(
                lease = %key,
                active_count,
                "multiple Activated amendments for one lease pair; selecting latest sequence"
            );
            duplicate_active_amendments += 1;
        }

        let winner = group
            .into_iter()
            .max_by_key(|a| (a.sequence, a.id))
            .expect("groups are built from non-empty pushes");

        debug!(
            lease = %key,
            amendment_id = winner.id,
            sequence = winner.sequence,
            status = %winner.status,
            "selected current amendment"
        );
        selected.insert(key, winner);
    }

    SelectionOutcome {
        selected,
        duplicate_active_amendments,
    }
}
