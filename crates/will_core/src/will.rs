//! Will-authoring session: section navigation plus every section's form state.
//!
//! Navigation and data are independent. Moving between sections never
//! touches the data of the section being left or entered, and any section
//! can be opened from any other.

use std::collections::BTreeMap;

use serde::Serialize;
use shared::domain::{AssetId, EntityId, EntityKind, WillSection, PERSONAL_INFO_FIELDS};
use tracing::{debug, info, warn};

use crate::{
    collection::Collection,
    error::WillError,
    fields::FieldStore,
    share::{ShareAllocation, ShareStatus},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WillWizard {
    active: WillSection,
}

impl WillWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> WillSection {
        self.active
    }

    /// Jumps straight to `section`. Always accepted.
    pub fn navigate_to(&mut self, section: WillSection) {
        if self.active != section {
            debug!(from = %self.active, to = %section, "will section changed");
        }
        self.active = section;
    }

    /// "Continue" button. `false` on the last section.
    pub fn next(&mut self) -> bool {
        match self.active.next() {
            Some(section) => {
                self.navigate_to(section);
                true
            }
            None => false,
        }
    }

    /// "Back" button. `false` on the first section.
    pub fn previous(&mut self) -> bool {
        match self.active.previous() {
            Some(section) => {
                self.navigate_to(section);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonRole {
    Witness,
    Executor,
}

impl PersonRole {
    pub fn kind(self) -> EntityKind {
        match self {
            Self::Witness => EntityKind::Witness,
            Self::Executor => EntityKind::Executor,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WillSession {
    wizard: WillWizard,
    personal: FieldStore,
    assets: Collection,
    beneficiaries: BTreeMap<AssetId, Collection>,
    active_asset: AssetId,
    witnesses: Collection,
    executors: Collection,
}

impl Default for WillSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WillSession {
    pub fn new() -> Self {
        let assets = Collection::new(EntityKind::Asset);
        let beneficiaries = assets
            .iter()
            .map(|asset| (asset.id(), Collection::new(EntityKind::Beneficiary)))
            .collect();
        let active_asset = assets.first().map_or(EntityId(1), |asset| asset.id());

        Self {
            wizard: WillWizard::new(),
            personal: FieldStore::new(PERSONAL_INFO_FIELDS),
            assets,
            beneficiaries,
            active_asset,
            witnesses: Collection::new(EntityKind::Witness),
            executors: Collection::new(EntityKind::Executor),
        }
    }

    pub fn wizard(&self) -> &WillWizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut WillWizard {
        &mut self.wizard
    }

    pub fn active_section(&self) -> WillSection {
        self.wizard.active()
    }

    pub fn navigate_to(&mut self, section: WillSection) {
        self.wizard.navigate_to(section);
    }

    pub fn personal(&self) -> &FieldStore {
        &self.personal
    }

    pub fn set_personal(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.personal.set(field, value)
    }

    pub fn assets(&self) -> &Collection {
        &self.assets
    }

    pub fn add_asset(&mut self) -> AssetId {
        let id = self.assets.add();
        self.beneficiaries
            .insert(id, Collection::new(EntityKind::Beneficiary));
        id
    }

    /// Drops the asset together with its beneficiaries. Refused for the last asset.
    pub fn remove_asset(&mut self, id: AssetId) -> bool {
        if !self.assets.remove(id) {
            return false;
        }
        self.beneficiaries.remove(&id);
        if self.active_asset == id {
            if let Some(first) = self.assets.first() {
                self.active_asset = first.id();
            }
        }
        true
    }

    pub fn update_asset(&mut self, id: AssetId, field: &str, value: impl Into<String>) -> bool {
        self.assets.update(id, field, value)
    }

    pub fn active_asset(&self) -> AssetId {
        self.active_asset
    }

    /// Chooses which asset the beneficiaries view edits. Unknown ids are ignored.
    pub fn select_asset(&mut self, id: AssetId) -> bool {
        if !self.assets.contains(id) {
            return false;
        }
        self.active_asset = id;
        true
    }

    pub fn beneficiaries(&self, asset: AssetId) -> Option<&Collection> {
        self.beneficiaries.get(&asset)
    }

    pub fn add_beneficiary(&mut self, asset: AssetId) -> Option<EntityId> {
        self.beneficiaries.get_mut(&asset).map(Collection::add)
    }

    pub fn remove_beneficiary(&mut self, asset: AssetId, id: EntityId) -> bool {
        self.beneficiaries
            .get_mut(&asset)
            .is_some_and(|collection| collection.remove(id))
    }

    pub fn update_beneficiary(
        &mut self,
        asset: AssetId,
        id: EntityId,
        field: &str,
        value: impl Into<String>,
    ) -> bool {
        let Some(collection) = self.beneficiaries.get_mut(&asset) else {
            return false;
        };
        let changed = collection.update(id, field, value);
        if changed {
            let allocation = ShareAllocation::from_collection(collection);
            if allocation.is_over_allocated() {
                debug!(asset = asset.0, total = allocation.total(), "asset over-allocated");
            }
        }
        changed
    }

    pub fn share_allocation(&self, asset: AssetId) -> Option<ShareAllocation> {
        self.beneficiaries
            .get(&asset)
            .map(ShareAllocation::from_collection)
    }

    pub fn people(&self, role: PersonRole) -> &Collection {
        match role {
            PersonRole::Witness => &self.witnesses,
            PersonRole::Executor => &self.executors,
        }
    }

    fn people_mut(&mut self, role: PersonRole) -> &mut Collection {
        match role {
            PersonRole::Witness => &mut self.witnesses,
            PersonRole::Executor => &mut self.executors,
        }
    }

    pub fn add_person(&mut self, role: PersonRole) -> EntityId {
        self.people_mut(role).add()
    }

    pub fn remove_person(&mut self, role: PersonRole, id: EntityId) -> bool {
        self.people_mut(role).remove(id)
    }

    pub fn update_person(
        &mut self,
        role: PersonRole,
        id: EntityId,
        field: &str,
        value: impl Into<String>,
    ) -> bool {
        self.people_mut(role).update(id, field, value)
    }

    /// Snapshots the will. Only offered on the witnesses section and does not
    /// move the wizard. Share totals are reported, not enforced.
    pub fn submit(&self) -> Result<WillSubmission, WillError> {
        let section = self.active_section();
        if section != WillSection::Witnesses {
            return Err(WillError::SubmitOutsideWitnesses { section });
        }

        let assets: Vec<SubmittedAsset> = self
            .assets
            .iter()
            .map(|asset| {
                let beneficiaries = self.beneficiaries.get(&asset.id());
                let allocation = beneficiaries
                    .map(ShareAllocation::from_collection)
                    .unwrap_or_else(|| ShareAllocation::from_values([]));
                SubmittedAsset {
                    id: asset.id(),
                    fields: asset.fields().to_map(),
                    beneficiaries: beneficiaries.map(records_snapshot).unwrap_or_default(),
                    total_share: allocation.total(),
                    share_status: allocation.status(),
                }
            })
            .collect();

        for asset in assets
            .iter()
            .filter(|asset| asset.share_status != ShareStatus::Exact)
        {
            warn!(
                asset = asset.id.0,
                total_share = asset.total_share,
                status = ?asset.share_status,
                "submitting will with unbalanced beneficiary shares"
            );
        }

        let submission = WillSubmission {
            personal: self.personal.to_map(),
            assets,
            witnesses: records_snapshot(&self.witnesses),
            executors: records_snapshot(&self.executors),
        };
        info!(
            assets = submission.assets.len(),
            witnesses = submission.witnesses.len(),
            executors = submission.executors.len(),
            "will submitted"
        );
        Ok(submission)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmittedRecord {
    pub id: EntityId,
    pub fields: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmittedAsset {
    pub id: AssetId,
    pub fields: BTreeMap<String, String>,
    pub beneficiaries: Vec<SubmittedRecord>,
    pub total_share: f64,
    pub share_status: ShareStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WillSubmission {
    pub personal: BTreeMap<String, String>,
    pub assets: Vec<SubmittedAsset>,
    pub witnesses: Vec<SubmittedRecord>,
    pub executors: Vec<SubmittedRecord>,
}

fn records_snapshot(collection: &Collection) -> Vec<SubmittedRecord> {
    collection
        .iter()
        .map(|record| SubmittedRecord {
            id: record.id(),
            fields: record.fields().to_map(),
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/will_tests.rs"]
mod tests;
