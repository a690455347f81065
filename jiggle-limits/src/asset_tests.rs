use crate::{
    BoneReference, BoxLimitData, CapsuleLimitData, LimitData, LimitDataCommon, LimitId, LimitKind,
    LimitRecord, LimitsAsset, Plane, PlanarLimitData, SphericalLimitData,
};
use glam::Vec3;

fn sphere(id: u128, radius: f32) -> SphericalLimitData {
    SphericalLimitData {
        common: LimitDataCommon::new(LimitId::from_u128(id)),
        radius,
        ..SphericalLimitData::default()
    }
}

fn capsule(id: u128, length: f32) -> CapsuleLimitData {
    CapsuleLimitData {
        common: LimitDataCommon::new(LimitId::from_u128(id)),
        length,
        ..CapsuleLimitData::default()
    }
}

fn populated_asset() -> LimitsAsset {
    let mut asset = LimitsAsset::new("hair_limits");
    asset.spherical_limits_data = vec![sphere(1, 5.0), sphere(2, 6.0), sphere(3, 7.0)];
    asset.capsule_limits_data = vec![capsule(10, 10.0), capsule(11, 20.0)];
    asset.box_limits_data = vec![BoxLimitData {
        common: LimitDataCommon::new(LimitId::from_u128(20)),
        extent: Vec3::new(1.0, 2.0, 3.0),
    }];
    asset.planar_limits_data = vec![PlanarLimitData {
        common: LimitDataCommon::new(LimitId::from_u128(30)),
        plane: Plane::new(Vec3::Z, -4.0),
    }];
    asset
}

#[test]
fn update_replaces_matching_record_in_place() {
    let mut asset = populated_asset();
    let before = asset.spherical_limits_data.clone();

    asset.update(sphere(2, 42.0));

    assert_eq!(asset.spherical_limits_data.len(), 3);
    assert_eq!(asset.spherical_limits_data[0], before[0]);
    assert_eq!(asset.spherical_limits_data[1].radius, 42.0);
    assert_eq!(asset.spherical_limits_data[1].id(), LimitId::from_u128(2));
    assert_eq!(asset.spherical_limits_data[2], before[2]);
    assert!(asset.is_dirty());
}

#[test]
fn update_only_touches_the_record_kind_collection() {
    let mut asset = populated_asset();
    let spheres = asset.spherical_limits_data.clone();

    asset.update(capsule(11, 99.0));

    assert_eq!(asset.spherical_limits_data, spheres);
    assert_eq!(asset.capsule_limits_data[0].length, 10.0);
    assert_eq!(asset.capsule_limits_data[1].length, 99.0);
}

#[test]
fn update_replaces_first_match_only() {
    let mut asset = populated_asset();
    asset.spherical_limits_data.push(sphere(1, 8.0));

    asset.update(sphere(1, 50.0));

    assert_eq!(asset.spherical_limits_data[0].radius, 50.0);
    assert_eq!(asset.spherical_limits_data[3].radius, 8.0);
}

#[test]
fn update_with_unknown_id_is_a_no_op() {
    let mut asset = populated_asset();
    let spheres = asset.spherical_limits_data.clone();
    let capsules = asset.capsule_limits_data.clone();

    asset.update(sphere(404, 1.0));
    asset.update(capsule(404, 1.0));

    assert_eq!(asset.spherical_limits_data, spheres);
    assert_eq!(asset.capsule_limits_data, capsules);
    assert!(asset.is_dirty());
}

#[test]
fn update_with_none_kind_is_a_no_op() {
    let mut asset = populated_asset();
    let spheres = asset.spherical_limits_data.clone();

    asset.update(LimitData::None);

    assert_eq!(asset.spherical_limits_data, spheres);
    assert_eq!(asset.record_count(LimitKind::None), 0);
}

#[test]
fn dirty_flag_clears() {
    let mut asset = populated_asset();
    assert!(!asset.is_dirty());
    asset.update(sphere(1, 1.0));
    assert!(asset.is_dirty());
    asset.clear_dirty();
    assert!(!asset.is_dirty());
}

#[test]
fn sync_rebuilds_every_runtime_collection() {
    let mut asset = populated_asset();
    asset.sync();

    for kind in LimitKind::COLLECTIONS {
        assert_eq!(asset.limit_count(kind), asset.record_count(kind), "{kind:?}");
    }
    for (record, limit) in asset
        .spherical_limits_data
        .iter()
        .zip(asset.spherical_limits())
    {
        assert_eq!(*limit, record.convert());
    }
    for (record, limit) in asset.capsule_limits_data.iter().zip(asset.capsule_limits()) {
        assert_eq!(*limit, record.convert());
    }
    assert_eq!(asset.box_limits()[0], asset.box_limits_data[0].convert());
    assert_eq!(asset.planar_limits()[0], asset.planar_limits_data[0].convert());
}

#[test]
fn sync_discards_stale_runtime_limits() {
    let mut asset = populated_asset();
    asset.sync();
    assert_eq!(asset.spherical_limits().len(), 3);

    asset.spherical_limits_data.truncate(1);
    asset.capsule_limits_data.clear();
    asset.sync();

    assert_eq!(asset.spherical_limits().len(), 1);
    assert!(asset.capsule_limits().is_empty());
    assert_eq!(asset.spherical_limits()[0].radius, 5.0);
}

#[test]
fn update_then_sync_uses_new_parameters() {
    let mut asset = LimitsAsset::new("head_limits");
    let mut record = sphere(1, 5.0);
    record.common.driving_bone = BoneReference::new("Head");
    asset.spherical_limits_data.push(record.clone());
    asset.sync();
    assert_eq!(asset.spherical_limits()[0].radius, 5.0);

    record.radius = 8.0;
    asset.update(record);
    asset.sync();

    assert_eq!(asset.spherical_limits().len(), 1);
    assert_eq!(asset.spherical_limits()[0].radius, 8.0);
    assert_eq!(
        asset.spherical_limits()[0].common.driving_bone,
        BoneReference::new("Head")
    );
}

#[test]
fn sync_on_empty_asset() {
    let mut asset = LimitsAsset::new("empty");
    asset.sync();
    for kind in LimitKind::COLLECTIONS {
        assert_eq!(asset.limit_count(kind), 0);
    }
    assert_eq!(asset.skeleton(), None);
}
