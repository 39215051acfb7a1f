use super::*;
use shared::domain::{EntityId, EntityKind};

fn beneficiaries_with(shares: &[&str]) -> Collection {
    let mut collection = Collection::new(EntityKind::Beneficiary);
    for _ in 1..shares.len() {
        collection.add();
    }
    for (idx, share) in shares.iter().enumerate() {
        let id = EntityId(idx as i64 + 1);
        assert!(collection.update(id, SHARE_PERCENTAGE_FIELD, *share));
    }
    collection
}

#[test]
fn forty_and_sixty_is_exact() {
    let allocation = ShareAllocation::from_collection(&beneficiaries_with(&["40", "60"]));
    assert_eq!(allocation.total(), 100.0);
    assert_eq!(allocation.status(), ShareStatus::Exact);
    assert!(allocation.warning().is_none());
}

#[test]
fn forty_and_thirty_is_under() {
    let allocation = ShareAllocation::from_collection(&beneficiaries_with(&["40", "30"]));
    assert_eq!(allocation.total(), 70.0);
    assert_eq!(allocation.status(), ShareStatus::Under);
}

#[test]
fn seventy_and_fifty_is_over_but_not_clamped() {
    let allocation = ShareAllocation::from_collection(&beneficiaries_with(&["70", "50"]));
    assert_eq!(allocation.total(), 120.0);
    assert_eq!(allocation.status(), ShareStatus::Over);
    assert_eq!(allocation.progress_percent(), 100.0);
    assert_eq!(allocation.warning(), Some(OVER_ALLOCATION_WARNING));
}

#[test]
fn exact_status_follows_float_addition_order() {
    // 33.3 + 33.3 + 33.4 rounds to exactly 100.0
    let forward = ShareAllocation::from_values(["33.3", "33.3", "33.4"]);
    assert_eq!(forward.total(), 33.3_f64 + 33.3 + 33.4);
    assert_eq!(forward.status(), ShareStatus::Exact);

    // the same shares in another order fall just short
    let reordered = ShareAllocation::from_values(["33.4", "33.3", "33.3"]);
    assert_eq!(reordered.total(), 99.99999999999999);
    assert_eq!(reordered.status(), ShareStatus::Under);

    let overshoot = ShareAllocation::from_values(["60.1", "39.7", "0.2"]);
    assert!(overshoot.total() > 100.0);
    assert_eq!(overshoot.status(), ShareStatus::Over);
}

#[test]
fn blank_and_garbage_shares_count_as_zero() {
    let allocation = ShareAllocation::from_values(["", "abc", "25", "-10", "."]);
    assert_eq!(allocation.total(), 25.0);
    assert_eq!(allocation.status(), ShareStatus::Under);
}

#[test]
fn fresh_beneficiary_collection_totals_zero() {
    let allocation = ShareAllocation::from_collection(&Collection::new(EntityKind::Beneficiary));
    assert_eq!(allocation.total(), 0.0);
    assert_eq!(allocation.status(), ShareStatus::Under);
    assert_eq!(allocation.to_string(), "0% / 100%");
}

#[test]
fn parse_share_reads_leading_number() {
    assert_eq!(parse_share("40"), 40.0);
    assert_eq!(parse_share("  12.5"), 12.5);
    assert_eq!(parse_share("40%"), 40.0);
    assert_eq!(parse_share("5."), 5.0);
    assert_eq!(parse_share(".5"), 0.5);
    assert_eq!(parse_share("+7"), 7.0);
    assert_eq!(parse_share("1e2"), 100.0);
    assert_eq!(parse_share("3e"), 3.0);
    assert_eq!(parse_share("2.5.1"), 2.5);
    assert_eq!(parse_share("-"), 0.0);
    assert_eq!(parse_share("NaN"), 0.0);
    assert_eq!(parse_share("Infinity"), 0.0);
}

#[test]
fn label_uses_shortest_number_form() {
    assert_eq!(ShareAllocation::from_values(["70", "50"]).to_string(), "120% / 100%");
    assert_eq!(ShareAllocation::from_values(["12.5"]).to_string(), "12.5% / 100%");
}
