use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reference to the bone that drives a limit.
///
/// `bone_index` is filled in only when the reference was resolved against a skeleton.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoneReference {
    pub bone_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bone_index: Option<usize>,
}

impl BoneReference {
    pub fn new(bone_name: impl Into<String>) -> Self {
        Self {
            bone_name: bone_name.into(),
            bone_index: None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.bone_name.is_empty()
    }

    pub fn is_resolved(&self) -> bool {
        self.bone_index.is_some()
    }
}

/// Turns a legacy bone name into a [`BoneReference`].
pub trait BoneResolver {
    fn resolve(&self, bone_name: &str) -> BoneReference;
}

/// Keeps the name only; the index is left for whoever owns the skeleton.
#[derive(Copy, Clone, Debug, Default)]
pub struct BoneByName;

impl BoneResolver for BoneByName {
    fn resolve(&self, bone_name: &str) -> BoneReference {
        BoneReference::new(bone_name)
    }
}

/// Resolves names against the bone list of a skeleton.
///
/// Names the skeleton does not contain keep an unresolved reference.
#[derive(Clone, Debug, Default)]
pub struct SkeletonBones {
    bone_index: HashMap<String, usize>,
}

impl SkeletonBones {
    pub fn new<I, S>(bone_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut bone_index = HashMap::new();
        for (index, name) in bone_names.into_iter().enumerate() {
            // First occurrence wins, like a linear name lookup would.
            bone_index.entry(name.into()).or_insert(index);
        }
        Self { bone_index }
    }

    pub fn find_bone(&self, bone_name: &str) -> Option<usize> {
        self.bone_index.get(bone_name).copied()
    }
}

impl BoneResolver for SkeletonBones {
    fn resolve(&self, bone_name: &str) -> BoneReference {
        BoneReference {
            bone_name: bone_name.to_string(),
            bone_index: self.find_bone(bone_name),
        }
    }
}

impl<R: BoneResolver + ?Sized> BoneResolver for &R {
    fn resolve(&self, bone_name: &str) -> BoneReference {
        (**self).resolve(bone_name)
    }
}
