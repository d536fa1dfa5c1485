//! Mole registry partitioned into unhoused, housed and dead buckets

use std::collections::BTreeMap;

use crate::core::error::{ArenaError, Result};
use crate::core::types::{MoleBucket, MoleId};
use crate::entity::Mole;

/// All moles of a game, keyed by id
#[derive(Debug, Default)]
pub struct MoleSet {
    unhoused: BTreeMap<MoleId, Mole>,
    housed: BTreeMap<MoleId, Mole>,
    dead: BTreeMap<MoleId, Mole>,
}

impl MoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn bucket(&self, bucket: MoleBucket) -> &BTreeMap<MoleId, Mole> {
        match bucket {
            MoleBucket::Unhoused => &self.unhoused,
            MoleBucket::Housed => &self.housed,
            MoleBucket::Dead => &self.dead,
        }
    }

    fn bucket_mut(&mut self, bucket: MoleBucket) -> &mut BTreeMap<MoleId, Mole> {
        match bucket {
            MoleBucket::Unhoused => &mut self.unhoused,
            MoleBucket::Housed => &mut self.housed,
            MoleBucket::Dead => &mut self.dead,
        }
    }

    pub fn contains(&self, id: MoleId) -> bool {
        self.bucket_of(id).is_some()
    }

    pub fn bucket_of(&self, id: MoleId) -> Option<MoleBucket> {
        [MoleBucket::Unhoused, MoleBucket::Housed, MoleBucket::Dead]
            .into_iter()
            .find(|&bucket| self.bucket(bucket).contains_key(&id))
    }

    pub fn get(&self, id: MoleId) -> Option<&Mole> {
        let bucket = self.bucket_of(id)?;
        self.bucket(bucket).get(&id)
    }

    /// Mutable access for state changes that do not move buckets
    /// (see [`Mole::toggle_state`])
    pub fn get_mut(&mut self, id: MoleId) -> Option<&mut Mole> {
        let bucket = self.bucket_of(id)?;
        self.bucket_mut(bucket).get_mut(&id)
    }

    /// Add a mole to a bucket
    ///
    /// Fails if the id is already present in any bucket.
    pub(crate) fn insert(&mut self, bucket: MoleBucket, mole: Mole) -> Result<()> {
        let id = mole.id();
        if self.contains(id) {
            return Err(ArenaError::DuplicateMole(id));
        }
        self.bucket_mut(bucket).insert(id, mole);
        Ok(())
    }

    /// Move a mole between buckets in one step
    pub(crate) fn transfer(
        &mut self,
        id: MoleId,
        from: MoleBucket,
        to: MoleBucket,
    ) -> Result<&mut Mole> {
        let mole = self
            .bucket_mut(from)
            .remove(&id)
            .ok_or(ArenaError::MoleNotInBucket { mole: id, bucket: from })?;
        Ok(self.bucket_mut(to).entry(id).or_insert(mole))
    }

    /// Snapshot of the ids in one bucket, ascending
    pub fn ids_in(&self, bucket: MoleBucket) -> Vec<MoleId> {
        self.bucket(bucket).keys().copied().collect()
    }

    pub fn housed(&self) -> impl Iterator<Item = &Mole> {
        self.housed.values()
    }

    pub fn unhoused_count(&self) -> usize {
        self.unhoused.len()
    }

    pub fn housed_count(&self) -> usize {
        self.housed.len()
    }

    pub fn dead_count(&self) -> usize {
        self.dead.len()
    }

    pub fn alive_count(&self) -> usize {
        self.unhoused.len() + self.housed.len()
    }

    pub fn len(&self) -> usize {
        self.alive_count() + self.dead.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mole> {
        self.unhoused
            .values()
            .chain(self.housed.values())
            .chain(self.dead.values())
    }
}
