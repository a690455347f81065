use crate::{
    BoneResolver, BoxLimit, BoxLimitData, CapsuleLimit, CapsuleLimitData, Error, LimitsAsset,
    PlanarLimit, PlanarLimitData, SphericalLimit, SphericalLimitData, StoredVersion,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Root {
    version: StoredVersion,
    #[serde(skip_serializing_if = "Option::is_none")]
    skeleton: Option<String>,
    spherical_limits_data: Vec<SphericalLimitData>,
    capsule_limits_data: Vec<CapsuleLimitData>,
    box_limits_data: Vec<BoxLimitData>,
    planar_limits_data: Vec<PlanarLimitData>,
    spherical_limits: Vec<SphericalLimit>,
    capsule_limits: Vec<CapsuleLimit>,
    box_limits: Vec<BoxLimit>,
    planar_limits: Vec<PlanarLimit>,
}

impl LimitsAsset {
    /// Loads an asset document and migrates it to the latest schema.
    pub fn from_json_str(
        name: impl Into<String>,
        input: &str,
        resolver: &impl BoneResolver,
    ) -> Result<Self, Error> {
        let root: Root = serde_json::from_str(input).map_err(|e| Error::JsonParse {
            message: e.to_string(),
        })?;

        let mut asset = LimitsAsset::with_version(name, root.version);
        asset.skeleton = root.skeleton;
        asset.spherical_limits_data = root.spherical_limits_data;
        asset.capsule_limits_data = root.capsule_limits_data;
        asset.box_limits_data = root.box_limits_data;
        asset.planar_limits_data = root.planar_limits_data;
        asset.spherical_limits = root.spherical_limits;
        asset.capsule_limits = root.capsule_limits;
        asset.box_limits = root.box_limits;
        asset.planar_limits = root.planar_limits;

        asset.post_load(resolver);
        Ok(asset)
    }

    /// Writes the asset as a document stamped with its current version.
    pub fn to_json_string(&self) -> Result<String, Error> {
        let root = Root {
            version: self.version,
            skeleton: self.skeleton.clone(),
            spherical_limits_data: self.spherical_limits_data.clone(),
            capsule_limits_data: self.capsule_limits_data.clone(),
            box_limits_data: self.box_limits_data.clone(),
            planar_limits_data: self.planar_limits_data.clone(),
            spherical_limits: self.spherical_limits.clone(),
            capsule_limits: self.capsule_limits.clone(),
            box_limits: self.box_limits.clone(),
            planar_limits: self.planar_limits.clone(),
        };
        serde_json::to_string_pretty(&root).map_err(|e| Error::JsonWrite {
            message: e.to_string(),
        })
    }
}
