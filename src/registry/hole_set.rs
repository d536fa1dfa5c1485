//! Hole registry partitioned into available and unavailable buckets

use std::collections::BTreeMap;

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::core::error::{ArenaError, Result};
use crate::core::types::{HoleBucket, HoleId};
use crate::entity::Hole;

/// All holes of a game, keyed by id
///
/// Every hole lives in exactly one bucket. Buckets are ordered by id, so a
/// seeded pick over the available holes is reproducible.
#[derive(Debug, Default)]
pub struct HoleSet {
    available: BTreeMap<HoleId, Hole>,
    unavailable: BTreeMap<HoleId, Hole>,
}

impl HoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn bucket(&self, bucket: HoleBucket) -> &BTreeMap<HoleId, Hole> {
        match bucket {
            HoleBucket::Available => &self.available,
            HoleBucket::Unavailable => &self.unavailable,
        }
    }

    fn bucket_mut(&mut self, bucket: HoleBucket) -> &mut BTreeMap<HoleId, Hole> {
        match bucket {
            HoleBucket::Available => &mut self.available,
            HoleBucket::Unavailable => &mut self.unavailable,
        }
    }

    pub fn contains(&self, id: HoleId) -> bool {
        self.bucket_of(id).is_some()
    }

    /// Which bucket currently holds the hole
    pub fn bucket_of(&self, id: HoleId) -> Option<HoleBucket> {
        [HoleBucket::Available, HoleBucket::Unavailable]
            .into_iter()
            .find(|&bucket| self.bucket(bucket).contains_key(&id))
    }

    /// Look up a hole regardless of bucket
    pub fn get(&self, id: HoleId) -> Option<&Hole> {
        self.available.get(&id).or_else(|| self.unavailable.get(&id))
    }

    pub(crate) fn get_mut(&mut self, id: HoleId) -> Option<&mut Hole> {
        let bucket = self.bucket_of(id)?;
        self.bucket_mut(bucket).get_mut(&id)
    }

    /// Add a hole to a bucket
    ///
    /// Fails if the id is already present in any bucket.
    pub(crate) fn insert(&mut self, bucket: HoleBucket, hole: Hole) -> Result<()> {
        let id = hole.id();
        if self.contains(id) {
            return Err(ArenaError::DuplicateHole(id));
        }
        self.bucket_mut(bucket).insert(id, hole);
        Ok(())
    }

    /// Move a hole between buckets in one step
    ///
    /// Nothing changes if the hole is not in `from`.
    pub(crate) fn transfer(
        &mut self,
        id: HoleId,
        from: HoleBucket,
        to: HoleBucket,
    ) -> Result<&mut Hole> {
        let hole = self
            .bucket_mut(from)
            .remove(&id)
            .ok_or(ArenaError::HoleNotInBucket { hole: id, bucket: from })?;
        Ok(self.bucket_mut(to).entry(id).or_insert(hole))
    }

    /// Lowest-id hole that is free to claim
    pub fn first_available(&self) -> Option<HoleId> {
        self.available.keys().next().copied()
    }

    /// Any available hole, chosen uniformly with `rng`
    pub fn random_available<R: Rng>(&self, rng: &mut R) -> Option<HoleId> {
        self.available.keys().copied().choose(rng)
    }

    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    pub fn unavailable_count(&self) -> usize {
        self.unavailable.len()
    }

    pub fn len(&self) -> usize {
        self.available.len() + self.unavailable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every hole id in ascending order, regardless of bucket
    pub fn ids(&self) -> Vec<HoleId> {
        let mut ids: Vec<HoleId> = self
            .available
            .keys()
            .chain(self.unavailable.keys())
            .copied()
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Every hole, available ones first
    pub fn iter(&self) -> impl Iterator<Item = &Hole> {
        self.available.values().chain(self.unavailable.values())
    }
}
