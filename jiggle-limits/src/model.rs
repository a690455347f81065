use crate::{BoneReference, LimitId};
use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LimitKind {
    #[default]
    None,
    Spherical,
    Capsule,
    Box,
    Planar,
}

impl LimitKind {
    /// Kinds that own a collection, in storage order.
    pub const COLLECTIONS: [Self; 4] = [Self::Spherical, Self::Capsule, Self::Box, Self::Planar];
}

/// Where a runtime limit came from. The solver mixes limits from several sources.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LimitSource {
    #[default]
    AnimNode,
    DataAsset,
    PhysicsAsset,
}

/// Euler rotation in degrees, as authored in the editor.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotator {
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Yaw about Z, then pitch about Y, then roll about X.
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::ZYX,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            normal: Vec3::Z,
            distance: 0.0,
        }
    }
}

impl Plane {
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SphereLimitType {
    /// Bones are pushed out of the sphere.
    #[default]
    Outer,
    /// Bones are kept inside the sphere.
    Inner,
}

/// Fields shared by every limit record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LimitDataCommon {
    pub id: LimitId,
    /// Superseded by `driving_bone`; only read when migrating old assets.
    pub driving_bone_name: String,
    pub driving_bone: BoneReference,
    pub offset_location: Vec3,
    pub offset_rotation: Rotator,
    pub location: Vec3,
    pub rotation: Quat,
    pub enabled: bool,
}

impl Default for LimitDataCommon {
    fn default() -> Self {
        Self {
            id: LimitId::NIL,
            driving_bone_name: String::new(),
            driving_bone: BoneReference::default(),
            offset_location: Vec3::ZERO,
            offset_rotation: Rotator::ZERO,
            location: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            enabled: true,
        }
    }
}

impl LimitDataCommon {
    pub fn new(id: LimitId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    fn convert(&self) -> LimitCommon {
        LimitCommon {
            id: self.id,
            driving_bone: self.driving_bone.clone(),
            offset_location: self.offset_location,
            offset_rotation: self.offset_rotation.to_quat(),
            location: self.location,
            rotation: self.rotation,
            enabled: self.enabled,
            source: LimitSource::DataAsset,
        }
    }
}

/// Fields shared by every runtime limit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LimitCommon {
    pub id: LimitId,
    pub driving_bone: BoneReference,
    pub offset_location: Vec3,
    pub offset_rotation: Quat,
    pub location: Vec3,
    pub rotation: Quat,
    pub enabled: bool,
    pub source: LimitSource,
}

impl Default for LimitCommon {
    fn default() -> Self {
        Self {
            id: LimitId::NIL,
            driving_bone: BoneReference::default(),
            offset_location: Vec3::ZERO,
            offset_rotation: Quat::IDENTITY,
            location: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            enabled: true,
            source: LimitSource::AnimNode,
        }
    }
}

fn default_radius() -> f32 {
    5.0
}

fn default_length() -> f32 {
    10.0
}

fn default_extent() -> Vec3 {
    Vec3::splat(5.0)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SphericalLimitData {
    #[serde(flatten)]
    pub common: LimitDataCommon,
    #[serde(default = "default_radius")]
    pub radius: f32,
    #[serde(default)]
    pub limit_type: SphereLimitType,
}

impl Default for SphericalLimitData {
    fn default() -> Self {
        Self {
            common: LimitDataCommon::default(),
            radius: default_radius(),
            limit_type: SphereLimitType::Outer,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapsuleLimitData {
    #[serde(flatten)]
    pub common: LimitDataCommon,
    #[serde(default = "default_radius")]
    pub radius: f32,
    #[serde(default = "default_length")]
    pub length: f32,
}

impl Default for CapsuleLimitData {
    fn default() -> Self {
        Self {
            common: LimitDataCommon::default(),
            radius: default_radius(),
            length: default_length(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxLimitData {
    #[serde(flatten)]
    pub common: LimitDataCommon,
    /// Half size along each local axis.
    #[serde(default = "default_extent")]
    pub extent: Vec3,
}

impl Default for BoxLimitData {
    fn default() -> Self {
        Self {
            common: LimitDataCommon::default(),
            extent: default_extent(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanarLimitData {
    #[serde(flatten)]
    pub common: LimitDataCommon,
    #[serde(default)]
    pub plane: Plane,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SphericalLimit {
    #[serde(flatten)]
    pub common: LimitCommon,
    #[serde(default)]
    pub radius: f32,
    #[serde(default)]
    pub limit_type: SphereLimitType,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapsuleLimit {
    #[serde(flatten)]
    pub common: LimitCommon,
    #[serde(default)]
    pub radius: f32,
    #[serde(default)]
    pub length: f32,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxLimit {
    #[serde(flatten)]
    pub common: LimitCommon,
    #[serde(default)]
    pub extent: Vec3,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanarLimit {
    #[serde(flatten)]
    pub common: LimitCommon,
    #[serde(default)]
    pub plane: Plane,
}

/// An editor-facing limit record and the runtime limit it converts into.
pub trait LimitRecord: Clone {
    type Limit: Clone;

    const KIND: LimitKind;

    fn common(&self) -> &LimitDataCommon;

    fn common_mut(&mut self) -> &mut LimitDataCommon;

    /// Pure conversion; never touches `self`.
    fn convert(&self) -> Self::Limit;

    fn id(&self) -> LimitId {
        self.common().id
    }
}

impl LimitRecord for SphericalLimitData {
    type Limit = SphericalLimit;
    const KIND: LimitKind = LimitKind::Spherical;

    fn common(&self) -> &LimitDataCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut LimitDataCommon {
        &mut self.common
    }

    fn convert(&self) -> SphericalLimit {
        SphericalLimit {
            common: self.common.convert(),
            radius: self.radius,
            limit_type: self.limit_type,
        }
    }
}

impl LimitRecord for CapsuleLimitData {
    type Limit = CapsuleLimit;
    const KIND: LimitKind = LimitKind::Capsule;

    fn common(&self) -> &LimitDataCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut LimitDataCommon {
        &mut self.common
    }

    fn convert(&self) -> CapsuleLimit {
        CapsuleLimit {
            common: self.common.convert(),
            radius: self.radius,
            length: self.length,
        }
    }
}

impl LimitRecord for BoxLimitData {
    type Limit = BoxLimit;
    const KIND: LimitKind = LimitKind::Box;

    fn common(&self) -> &LimitDataCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut LimitDataCommon {
        &mut self.common
    }

    fn convert(&self) -> BoxLimit {
        BoxLimit {
            common: self.common.convert(),
            extent: self.extent,
        }
    }
}

impl LimitRecord for PlanarLimitData {
    type Limit = PlanarLimit;
    const KIND: LimitKind = LimitKind::Planar;

    fn common(&self) -> &LimitDataCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut LimitDataCommon {
        &mut self.common
    }

    fn convert(&self) -> PlanarLimit {
        PlanarLimit {
            common: self.common.convert(),
            plane: self.plane,
        }
    }
}

/// A record of any kind, tagged by `"type"` when serialized.
///
/// Unknown tags deserialize to [`LimitData::None`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LimitData {
    Spherical(SphericalLimitData),
    Capsule(CapsuleLimitData),
    Box(BoxLimitData),
    Planar(PlanarLimitData),
    #[serde(other)]
    None,
}

impl LimitData {
    pub fn kind(&self) -> LimitKind {
        match self {
            Self::Spherical(_) => LimitKind::Spherical,
            Self::Capsule(_) => LimitKind::Capsule,
            Self::Box(_) => LimitKind::Box,
            Self::Planar(_) => LimitKind::Planar,
            Self::None => LimitKind::None,
        }
    }

    pub fn id(&self) -> Option<LimitId> {
        match self {
            Self::Spherical(d) => Some(d.id()),
            Self::Capsule(d) => Some(d.id()),
            Self::Box(d) => Some(d.id()),
            Self::Planar(d) => Some(d.id()),
            Self::None => None,
        }
    }
}

impl From<SphericalLimitData> for LimitData {
    fn from(value: SphericalLimitData) -> Self {
        Self::Spherical(value)
    }
}

impl From<CapsuleLimitData> for LimitData {
    fn from(value: CapsuleLimitData) -> Self {
        Self::Capsule(value)
    }
}

impl From<BoxLimitData> for LimitData {
    fn from(value: BoxLimitData) -> Self {
        Self::Box(value)
    }
}

impl From<PlanarLimitData> for LimitData {
    fn from(value: PlanarLimitData) -> Self {
        Self::Planar(value)
    }
}
