use crate::LimitKind;

/// Property of a limits asset that an editor edit touched.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LimitsProperty {
    SphericalLimitsData,
    CapsuleLimitsData,
    BoxLimitsData,
    PlanarLimitsData,
    Skeleton,
    Other(String),
}

impl LimitsProperty {
    /// Maps a property name as reported by an editor; unknown names become [`Self::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "sphericalLimitsData" => Self::SphericalLimitsData,
            "capsuleLimitsData" => Self::CapsuleLimitsData,
            "boxLimitsData" => Self::BoxLimitsData,
            "planarLimitsData" => Self::PlanarLimitsData,
            "skeleton" => Self::Skeleton,
            other => Self::Other(other.to_string()),
        }
    }

    /// Record collection this property names, if any.
    pub fn record_kind(&self) -> Option<LimitKind> {
        match self {
            Self::SphericalLimitsData => Some(LimitKind::Spherical),
            Self::CapsuleLimitsData => Some(LimitKind::Capsule),
            Self::BoxLimitsData => Some(LimitKind::Box),
            Self::PlanarLimitsData => Some(LimitKind::Planar),
            Self::Skeleton | Self::Other(_) => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum EditChange {
    #[default]
    Unspecified,
    ArrayAdd,
    ArrayRemove,
    ArrayClear,
    ValueSet,
    Duplicate,
    Interactive,
    Redirected,
}

/// Notification that an editor changed the asset.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EditEvent {
    pub property: LimitsProperty,
    pub change: EditChange,
    /// Array element affected, for array edits.
    pub index: Option<usize>,
}

impl EditEvent {
    pub fn new(property: LimitsProperty, change: EditChange, index: Option<usize>) -> Self {
        Self {
            property,
            change,
            index,
        }
    }

    pub fn duplicate(kind: LimitKind, index: usize) -> Self {
        let property = match kind {
            LimitKind::Spherical => LimitsProperty::SphericalLimitsData,
            LimitKind::Capsule => LimitsProperty::CapsuleLimitsData,
            LimitKind::Box => LimitsProperty::BoxLimitsData,
            LimitKind::Planar => LimitsProperty::PlanarLimitsData,
            LimitKind::None => LimitsProperty::Other(String::new()),
        };
        Self::new(property, EditChange::Duplicate, Some(index))
    }
}
