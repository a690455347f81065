use crate::{
    CapsuleLimitData, EditChange, EditEvent, LimitDataCommon, LimitId, LimitKind, LimitRecord,
    LimitsAsset, LimitsProperty, SequentialIds, SphericalLimitData,
};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

fn sphere(id: u128) -> SphericalLimitData {
    SphericalLimitData {
        common: LimitDataCommon::new(LimitId::from_u128(id)),
        ..SphericalLimitData::default()
    }
}

/// Mimics an editor duplicating element `index`: the copy lands right after it.
fn duplicate_sphere(asset: &mut LimitsAsset, index: usize) {
    let copy = asset.spherical_limits_data[index].clone();
    asset.spherical_limits_data.insert(index + 1, copy);
}

#[test]
fn duplicate_edit_assigns_fresh_id() {
    let mut asset = LimitsAsset::new("limits");
    asset.spherical_limits_data = vec![sphere(1), sphere(2), sphere(3)];
    duplicate_sphere(&mut asset, 1);
    assert_eq!(asset.spherical_limits_data[1].id(), asset.spherical_limits_data[2].id());

    let mut ids = SequentialIds::starting_at(1000);
    let assigned = asset.handle_edit(&EditEvent::duplicate(LimitKind::Spherical, 2), &mut ids);

    assert_eq!(assigned, Some(LimitId::from_u128(1000)));
    let got: Vec<_> = asset.spherical_limits_data.iter().map(|r| r.id()).collect();
    assert_eq!(
        got,
        vec![
            LimitId::from_u128(1),
            LimitId::from_u128(2),
            LimitId::from_u128(1000),
            LimitId::from_u128(3),
        ]
    );
    let unique: HashSet<_> = got.iter().collect();
    assert_eq!(unique.len(), got.len());
    assert!(asset.is_dirty());
}

#[test]
fn duplicate_edit_targets_named_collection() {
    let mut asset = LimitsAsset::new("limits");
    asset.spherical_limits_data = vec![sphere(1)];
    asset.capsule_limits_data = vec![CapsuleLimitData {
        common: LimitDataCommon::new(LimitId::from_u128(1)),
        ..CapsuleLimitData::default()
    }];

    let mut ids = SequentialIds::starting_at(50);
    let event = EditEvent::new(
        LimitsProperty::from_name("capsuleLimitsData"),
        EditChange::Duplicate,
        Some(0),
    );
    asset.handle_edit(&event, &mut ids);

    assert_eq!(asset.capsule_limits_data[0].id(), LimitId::from_u128(50));
    assert_eq!(asset.spherical_limits_data[0].id(), LimitId::from_u128(1));
}

#[test]
fn other_edits_keep_ids() {
    let mut asset = LimitsAsset::new("limits");
    asset.spherical_limits_data = vec![sphere(1), sphere(2)];
    let mut ids = SequentialIds::starting_at(100);

    let events = [
        EditEvent::new(LimitsProperty::SphericalLimitsData, EditChange::ValueSet, Some(0)),
        EditEvent::new(LimitsProperty::SphericalLimitsData, EditChange::ArrayAdd, Some(1)),
        EditEvent::new(LimitsProperty::Skeleton, EditChange::Duplicate, Some(0)),
        EditEvent::new(LimitsProperty::Other("name".to_string()), EditChange::Duplicate, Some(0)),
        EditEvent::new(LimitsProperty::SphericalLimitsData, EditChange::Duplicate, None),
        EditEvent::new(LimitsProperty::SphericalLimitsData, EditChange::Duplicate, Some(9)),
    ];
    for event in &events {
        assert_eq!(asset.handle_edit(event, &mut ids), None, "{event:?}");
    }

    assert_eq!(asset.spherical_limits_data[0].id(), LimitId::from_u128(1));
    assert_eq!(asset.spherical_limits_data[1].id(), LimitId::from_u128(2));
    assert!(!asset.is_dirty());
}

#[test]
fn observers_run_in_registration_order_for_every_edit() {
    let mut asset = LimitsAsset::new("limits");
    asset.spherical_limits_data = vec![sphere(1)];
    let calls = Rc::new(RefCell::new(Vec::<(&'static str, EditChange)>::new()));

    let first = calls.clone();
    asset.on_limits_changed(move |event| first.borrow_mut().push(("first", event.change)));
    let second = calls.clone();
    asset.on_limits_changed(move |event| second.borrow_mut().push(("second", event.change)));

    let mut ids = SequentialIds::starting_at(1);
    asset.handle_edit(
        &EditEvent::new(LimitsProperty::Skeleton, EditChange::ValueSet, None),
        &mut ids,
    );
    asset.handle_edit(&EditEvent::duplicate(LimitKind::Spherical, 0), &mut ids);

    assert_eq!(
        *calls.borrow(),
        vec![
            ("first", EditChange::ValueSet),
            ("second", EditChange::ValueSet),
            ("first", EditChange::Duplicate),
            ("second", EditChange::Duplicate),
        ]
    );
}

#[test]
fn observers_see_reassigned_id_event_and_can_be_removed() {
    let mut asset = LimitsAsset::new("limits");
    let count = Rc::new(RefCell::new(0usize));

    let counter = count.clone();
    let id = asset.on_limits_changed(move |_| *counter.borrow_mut() += 1);
    let mut ids = SequentialIds::starting_at(1);
    let event = EditEvent::new(LimitsProperty::BoxLimitsData, EditChange::ArrayClear, None);

    asset.handle_edit(&event, &mut ids);
    assert_eq!(*count.borrow(), 1);

    assert!(asset.remove_observer(id));
    assert!(!asset.remove_observer(id));
    asset.handle_edit(&event, &mut ids);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn property_names_map_to_collections() {
    assert_eq!(
        LimitsProperty::from_name("sphericalLimitsData").record_kind(),
        Some(LimitKind::Spherical)
    );
    assert_eq!(
        LimitsProperty::from_name("boxLimitsData").record_kind(),
        Some(LimitKind::Box)
    );
    assert_eq!(
        LimitsProperty::from_name("planarLimitsData").record_kind(),
        Some(LimitKind::Planar)
    );
    assert_eq!(LimitsProperty::from_name("skeleton").record_kind(), None);
    assert_eq!(
        LimitsProperty::from_name("somethingElse"),
        LimitsProperty::Other("somethingElse".to_string())
    );
}
