//! Schema versions of persisted limits assets.

use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize, Serializer};

/// Migration checkpoints, in the order they were introduced.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(i32)]
pub enum LimitsVersion {
    /// Driving bones moved from a plain name to a [`crate::BoneReference`].
    ChangeToBoneReference = 0,
    /// Runtime limits became the stored form; records are synced into them.
    DeprecateLimitData = 1,
}

impl LimitsVersion {
    pub const LATEST: Self = Self::DeprecateLimitData;

    pub const fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Version tag read from a stored asset.
///
/// `None` means the tag was missing or unreadable; such assets predate every checkpoint.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct StoredVersion(Option<i32>);

impl StoredVersion {
    pub const UNVERSIONED: Self = Self(None);

    pub const fn new(version: i32) -> Self {
        Self(Some(version))
    }

    pub const fn latest() -> Self {
        Self::new(LimitsVersion::LATEST.as_i32())
    }

    pub fn get(self) -> Option<i32> {
        self.0
    }

    /// Whether data stamped with this version still needs the `checkpoint` migration.
    pub fn predates(self, checkpoint: LimitsVersion) -> bool {
        match self.0 {
            None => true,
            Some(v) => v < checkpoint.as_i32(),
        }
    }

    pub fn is_newer_than_latest(self) -> bool {
        matches!(self.0, Some(v) if v > LimitsVersion::LATEST.as_i32())
    }
}

impl From<LimitsVersion> for StoredVersion {
    fn from(version: LimitsVersion) -> Self {
        Self::new(version.as_i32())
    }
}

impl Serialize for StoredVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StoredVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Anything that is not an in-range integer reads as unversioned.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Other(IgnoredAny),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(v) => Self(i32::try_from(v).ok()),
            Raw::Other(_) => Self::UNVERSIONED,
        })
    }
}
