use super::*;

#[test]
fn wizard_starts_on_personal_and_walks_forward() {
    let mut wizard = WillWizard::new();
    assert_eq!(wizard.active(), WillSection::Personal);
    assert!(!wizard.previous());

    assert!(wizard.next());
    assert!(wizard.next());
    assert!(wizard.next());
    assert_eq!(wizard.active(), WillSection::Witnesses);
    assert!(!wizard.next());
    assert_eq!(wizard.active(), WillSection::Witnesses);

    assert!(wizard.previous());
    assert_eq!(wizard.active(), WillSection::Beneficiaries);
}

#[test]
fn wizard_accepts_any_direct_jump() {
    let mut wizard = WillWizard::new();
    for from in WillSection::ALL {
        for to in WillSection::ALL {
            wizard.navigate_to(from);
            wizard.navigate_to(to);
            assert_eq!(wizard.active(), to);
        }
    }
}

#[test]
fn jump_back_to_personal_keeps_asset_data() {
    let mut session = WillSession::new();
    session.navigate_to(WillSection::Assets);
    let asset = session.assets().first().expect("seed asset").id();
    session.update_asset(asset, "name", "House in Mumbai");
    session.update_asset(asset, "type", "Real Estate");
    let second = session.add_asset();
    session.update_asset(second, "value", "1200000");
    let assets_before = session.assets().clone();

    session.navigate_to(WillSection::Beneficiaries);
    session.navigate_to(WillSection::Personal);
    assert_eq!(session.active_section(), WillSection::Personal);
    session.navigate_to(WillSection::Assets);

    assert_eq!(session.assets(), &assets_before);
}

#[test]
fn personal_info_uses_form_fields() {
    let mut session = WillSession::new();
    assert!(session.set_personal("fullName", "Asha Rao"));
    assert!(session.set_personal("dob", "01/02/1980"));
    assert!(!session.set_personal("nickname", "A"));
    assert_eq!(session.personal().get("fullName"), Some("Asha Rao"));
    assert_eq!(session.personal().get("fathersName"), Some(""));
}

#[test]
fn every_asset_gets_its_own_beneficiaries() {
    let mut session = WillSession::new();
    let house = EntityId(1);
    let car = session.add_asset();

    assert!(session.update_beneficiary(house, EntityId(1), "sharePercentage", "40"));
    let second = session.add_beneficiary(house).expect("known asset");
    assert_eq!(second, EntityId(2));
    assert!(session.update_beneficiary(house, second, "sharePercentage", "60"));
    assert!(session.update_beneficiary(car, EntityId(1), "sharePercentage", "70"));

    let house_share = session.share_allocation(house).expect("house");
    assert_eq!(house_share.status(), ShareStatus::Exact);
    let car_share = session.share_allocation(car).expect("car");
    assert_eq!(car_share.total(), 70.0);
    assert_eq!(car_share.status(), ShareStatus::Under);
}

#[test]
fn beneficiary_operations_on_unknown_asset_are_noops() {
    let mut session = WillSession::new();
    let ghost = EntityId(99);
    assert!(session.add_beneficiary(ghost).is_none());
    assert!(!session.update_beneficiary(ghost, EntityId(1), "name", "x"));
    assert!(!session.remove_beneficiary(ghost, EntityId(1)));
    assert!(session.beneficiaries(ghost).is_none());
    assert!(session.share_allocation(ghost).is_none());
}

#[test]
fn last_beneficiary_of_an_asset_cannot_be_removed() {
    let mut session = WillSession::new();
    let asset = session.active_asset();
    assert!(!session.remove_beneficiary(asset, EntityId(1)));
    let added = session.add_beneficiary(asset).expect("asset");
    assert!(session.remove_beneficiary(asset, EntityId(1)));
    assert!(!session.remove_beneficiary(asset, added));
    assert_eq!(session.beneficiaries(asset).map(Collection::len), Some(1));
}

#[test]
fn removing_an_asset_drops_its_beneficiaries_and_reselects() {
    let mut session = WillSession::new();
    let second = session.add_asset();
    assert!(session.select_asset(second));
    assert!(session.remove_asset(second));

    assert!(session.beneficiaries(second).is_none());
    assert_eq!(session.active_asset(), EntityId(1));
    assert!(!session.remove_asset(EntityId(1)));
    assert!(!session.select_asset(second));
}

#[test]
fn over_allocation_is_reported_not_blocked() {
    let mut session = WillSession::new();
    let asset = session.active_asset();
    session.update_beneficiary(asset, EntityId(1), "sharePercentage", "80");
    let other = session.add_beneficiary(asset).expect("asset");
    session.update_beneficiary(asset, other, "sharePercentage", "50");
    let third = session.add_beneficiary(asset).expect("asset");
    assert!(session.update_beneficiary(asset, third, "sharePercentage", "10"));

    let allocation = session.share_allocation(asset).expect("asset");
    assert_eq!(allocation.total(), 140.0);
    assert!(allocation.is_over_allocated());
}

#[test]
fn witnesses_and_executors_are_separate_collections() {
    let mut session = WillSession::new();
    let witness = session.add_person(PersonRole::Witness);
    assert_eq!(witness, EntityId(2));
    assert!(session.update_person(PersonRole::Executor, EntityId(1), "address", "Pune"));

    assert_eq!(session.people(PersonRole::Witness).len(), 2);
    assert_eq!(session.people(PersonRole::Executor).len(), 1);
    assert!(!session.remove_person(PersonRole::Executor, EntityId(1)));
    assert!(session.remove_person(PersonRole::Witness, witness));
    assert_eq!(
        session
            .people(PersonRole::Executor)
            .get(EntityId(1))
            .map(|r| r.get("address")),
        Some("Pune")
    );
}

#[test]
fn submit_is_only_offered_on_witnesses() {
    let mut session = WillSession::new();
    session.navigate_to(WillSection::Assets);
    assert_eq!(
        session.submit(),
        Err(WillError::SubmitOutsideWitnesses {
            section: WillSection::Assets
        })
    );
}

#[test]
fn submit_snapshots_everything_without_moving_wizard() {
    let mut session = WillSession::new();
    session.set_personal("fullName", "Asha Rao");
    session.update_asset(EntityId(1), "name", "House in Mumbai");
    session.update_beneficiary(EntityId(1), EntityId(1), "sharePercentage", "100");
    session.update_person(PersonRole::Witness, EntityId(1), "name", "Ravi");
    session.navigate_to(WillSection::Witnesses);

    let submission = session.submit().expect("submit");
    assert_eq!(session.active_section(), WillSection::Witnesses);
    assert_eq!(submission.personal["fullName"], "Asha Rao");
    assert_eq!(submission.assets.len(), 1);
    assert_eq!(submission.assets[0].fields["name"], "House in Mumbai");
    assert_eq!(submission.assets[0].share_status, ShareStatus::Exact);
    assert_eq!(submission.witnesses[0].fields["name"], "Ravi");
    assert_eq!(submission.executors.len(), 1);
}
