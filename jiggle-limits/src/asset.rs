use crate::{
    BoneResolver, BoxLimit, BoxLimitData, CapsuleLimit, CapsuleLimitData, EditChange, EditEvent,
    IdSource, LimitData, LimitId, LimitKind, LimitRecord, LimitsVersion, PlanarLimit,
    PlanarLimitData, SphericalLimit, SphericalLimitData, StoredVersion,
};
use std::fmt;

/// Handle returned by [`LimitsAsset::on_limits_changed`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ObserverId(u64);

type LimitsChangedCallback = Box<dyn FnMut(&EditEvent)>;

/// Collision limits authored for one skeleton.
///
/// Records are the editable form. Runtime limits are derived from them by [`LimitsAsset::sync`]
/// and are what a solver reads.
pub struct LimitsAsset {
    pub name: String,
    /// Editor-only skeleton asset path.
    pub skeleton: Option<String>,

    pub spherical_limits_data: Vec<SphericalLimitData>,
    pub capsule_limits_data: Vec<CapsuleLimitData>,
    pub box_limits_data: Vec<BoxLimitData>,
    pub planar_limits_data: Vec<PlanarLimitData>,

    pub(crate) spherical_limits: Vec<SphericalLimit>,
    pub(crate) capsule_limits: Vec<CapsuleLimit>,
    pub(crate) box_limits: Vec<BoxLimit>,
    pub(crate) planar_limits: Vec<PlanarLimit>,

    pub(crate) version: StoredVersion,
    dirty: bool,
    observers: Vec<(ObserverId, LimitsChangedCallback)>,
    next_observer: u64,
}

impl fmt::Debug for LimitsAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LimitsAsset")
            .field("name", &self.name)
            .field("skeleton", &self.skeleton)
            .field("spherical_limits_data", &self.spherical_limits_data)
            .field("capsule_limits_data", &self.capsule_limits_data)
            .field("box_limits_data", &self.box_limits_data)
            .field("planar_limits_data", &self.planar_limits_data)
            .field("spherical_limits", &self.spherical_limits)
            .field("capsule_limits", &self.capsule_limits)
            .field("box_limits", &self.box_limits)
            .field("planar_limits", &self.planar_limits)
            .field("version", &self.version)
            .field("dirty", &self.dirty)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl LimitsAsset {
    /// An empty asset stamped with the latest schema version.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_version(name, StoredVersion::latest())
    }

    /// An empty asset carrying `version` as read from storage. Call [`Self::post_load`] once
    /// the collections are filled in.
    pub fn with_version(name: impl Into<String>, version: StoredVersion) -> Self {
        Self {
            name: name.into(),
            skeleton: None,
            spherical_limits_data: Vec::new(),
            capsule_limits_data: Vec::new(),
            box_limits_data: Vec::new(),
            planar_limits_data: Vec::new(),
            spherical_limits: Vec::new(),
            capsule_limits: Vec::new(),
            box_limits: Vec::new(),
            planar_limits: Vec::new(),
            version,
            dirty: false,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    pub fn version(&self) -> StoredVersion {
        self.version
    }

    pub fn skeleton(&self) -> Option<&str> {
        self.skeleton.as_deref()
    }

    pub fn spherical_limits(&self) -> &[SphericalLimit] {
        &self.spherical_limits
    }

    pub fn capsule_limits(&self) -> &[CapsuleLimit] {
        &self.capsule_limits
    }

    pub fn box_limits(&self) -> &[BoxLimit] {
        &self.box_limits
    }

    pub fn planar_limits(&self) -> &[PlanarLimit] {
        &self.planar_limits
    }

    pub fn record_count(&self, kind: LimitKind) -> usize {
        match kind {
            LimitKind::Spherical => self.spherical_limits_data.len(),
            LimitKind::Capsule => self.capsule_limits_data.len(),
            LimitKind::Box => self.box_limits_data.len(),
            LimitKind::Planar => self.planar_limits_data.len(),
            LimitKind::None => 0,
        }
    }

    pub fn limit_count(&self, kind: LimitKind) -> usize {
        match kind {
            LimitKind::Spherical => self.spherical_limits.len(),
            LimitKind::Capsule => self.capsule_limits.len(),
            LimitKind::Box => self.box_limits.len(),
            LimitKind::Planar => self.planar_limits.len(),
            LimitKind::None => 0,
        }
    }

    /// Whether the asset has changes that were not saved yet.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Called by the persistence layer after saving.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Replaces the record with the same id in the collection of `record`'s kind.
    ///
    /// Records are matched by id only; an id that is not present leaves the collection alone.
    /// The asset is marked dirty either way.
    pub fn update(&mut self, record: impl Into<LimitData>) {
        match record.into() {
            LimitData::Spherical(r) => {
                update_record(&mut self.spherical_limits_data, r);
            }
            LimitData::Capsule(r) => {
                update_record(&mut self.capsule_limits_data, r);
            }
            LimitData::Box(r) => {
                update_record(&mut self.box_limits_data, r);
            }
            LimitData::Planar(r) => {
                update_record(&mut self.planar_limits_data, r);
            }
            LimitData::None => {}
        }

        self.mark_dirty();
    }

    /// Rebuilds every runtime limit collection from the records.
    pub fn sync(&mut self) {
        sync_limits(&self.spherical_limits_data, &mut self.spherical_limits);
        sync_limits(&self.capsule_limits_data, &mut self.capsule_limits);
        sync_limits(&self.box_limits_data, &mut self.box_limits);
        sync_limits(&self.planar_limits_data, &mut self.planar_limits);
    }

    /// Registers a callback run after every editor edit. Callbacks run in registration order.
    pub fn on_limits_changed(&mut self, callback: impl FnMut(&EditEvent) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(callback)));
        id
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer, _)| *observer != id);
        self.observers.len() != before
    }

    /// Reacts to an editor edit of this asset.
    ///
    /// Duplicating a record copies its id, so the copy gets a fresh one from `ids`. Observers
    /// are notified for every edit. Returns the id assigned to a duplicate, if any.
    pub fn handle_edit(&mut self, event: &EditEvent, ids: &mut impl IdSource) -> Option<LimitId> {
        let mut assigned = None;

        if event.change == EditChange::Duplicate {
            if let (Some(kind), Some(index)) = (event.property.record_kind(), event.index) {
                assigned = match kind {
                    LimitKind::Spherical => {
                        reassign_id(&mut self.spherical_limits_data, index, ids)
                    }
                    LimitKind::Capsule => reassign_id(&mut self.capsule_limits_data, index, ids),
                    LimitKind::Box => reassign_id(&mut self.box_limits_data, index, ids),
                    LimitKind::Planar => reassign_id(&mut self.planar_limits_data, index, ids),
                    LimitKind::None => None,
                };
            }
        }

        if assigned.is_some() {
            self.mark_dirty();
        }

        for (_, callback) in &mut self.observers {
            callback(event);
        }

        assigned
    }

    /// Brings data loaded from an older schema up to date. Must run before the runtime limits
    /// are read.
    ///
    /// Returns the checkpoints that were applied, oldest first.
    pub fn post_load(&mut self, resolver: &impl BoneResolver) -> Vec<LimitsVersion> {
        let mut applied = Vec::new();

        if self.version.is_newer_than_latest() {
            log::debug!(
                "limits asset '{}' has version {:?}, newer than {:?}; leaving as is",
                self.name,
                self.version.get(),
                LimitsVersion::LATEST
            );
            return applied;
        }

        if self.version.predates(LimitsVersion::ChangeToBoneReference) {
            migrate_bones(&mut self.spherical_limits_data, resolver);
            migrate_bones(&mut self.capsule_limits_data, resolver);
            migrate_bones(&mut self.box_limits_data, resolver);
            migrate_bones(&mut self.planar_limits_data, resolver);
            log::info!("update: bone name -> bone reference ({})", self.name);
            applied.push(LimitsVersion::ChangeToBoneReference);
        }

        if self.version.predates(LimitsVersion::DeprecateLimitData) {
            self.sync();
            log::info!("update: deprecate limit data ({})", self.name);
            applied.push(LimitsVersion::DeprecateLimitData);
        }

        self.version = StoredVersion::latest();
        applied
    }
}

fn update_record<R: LimitRecord>(records: &mut [R], new_record: R) -> bool {
    match records.iter_mut().find(|r| r.id() == new_record.id()) {
        Some(slot) => {
            *slot = new_record;
            true
        }
        None => false,
    }
}

fn sync_limits<R: LimitRecord>(records: &[R], limits: &mut Vec<R::Limit>) {
    limits.clear();
    limits.extend(records.iter().map(LimitRecord::convert));
}

fn migrate_bones<R: LimitRecord>(records: &mut [R], resolver: &impl BoneResolver) {
    for record in records {
        let common = record.common_mut();
        common.driving_bone = resolver.resolve(&common.driving_bone_name);
    }
}

fn reassign_id<R: LimitRecord>(
    records: &mut [R],
    index: usize,
    ids: &mut impl IdSource,
) -> Option<LimitId> {
    let record = records.get_mut(index)?;
    let id = ids.next_id();
    record.common_mut().id = id;
    Some(id)
}
