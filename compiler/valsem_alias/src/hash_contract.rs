//! Bucketed hash set over alias-graph members.
//!
//! Each entry stores a shared handle to its member and the member's hash
//! *as computed at insertion*. Lookups hash the probe now, index a bucket
//! and only then compare entries, first by cached hash, then by identity
//! or content. Nothing is rehashed from live content: a member mutated
//! after insertion stays in the bucket its old hash chose.

use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use rustc_hash::FxHasher;
use smallvec::SmallVec;

use crate::{AliasError, AliasGraph, Handle, NodeId};

const INITIAL_BUCKETS: usize = 16;

/// Hash of a sequence's current content.
///
/// Order-sensitive: reordering the items changes the hash.
pub fn hash_items<T: Hash>(items: &[T]) -> u64 {
    let mut hasher = FxHasher::default();
    items.hash(&mut hasher);
    hasher.finish()
}

struct Entry {
    member: Handle,
    cached_hash: u64,
}

/// An entry whose live hash no longer matches the hash it was filed under.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StaleEntry {
    pub node: NodeId,
    pub cached_hash: u64,
    pub live_hash: u64,
}

/// Hash set of alias-graph members.
///
/// The set holds its own share of every member, so the member's node
/// outlives the caller's handles. Call [`HashSetModel::release_all`] to
/// give those shares back.
pub struct HashSetModel<T> {
    buckets: Vec<SmallVec<[Entry; 2]>>,
    len: usize,
    _members: PhantomData<fn() -> T>,
}

impl<T: Hash + Eq> HashSetModel<T> {
    pub fn new() -> Self {
        HashSetModel {
            buckets: (0..INITIAL_BUCKETS).map(|_| SmallVec::new()).collect(),
            len: 0,
            _members: PhantomData,
        }
    }

    #[inline]
    fn bucket_index(&self, hash: u64) -> usize {
        // Fold the high half in so small tables still see every bit.
        #[expect(
            clippy::cast_possible_truncation,
            reason = "masked to the bucket count"
        )]
        let folded = (hash ^ (hash >> 32)) as usize;
        folded & (self.buckets.len() - 1)
    }

    /// Position of the entry matching `hash` and `probe`, if any.
    fn find(
        &self,
        graph: &AliasGraph<T>,
        hash: u64,
        node: Option<NodeId>,
        probe: &[T],
    ) -> Result<Option<(usize, usize)>, AliasError> {
        let index = self.bucket_index(hash);
        for (pos, entry) in self.buckets[index].iter().enumerate() {
            if entry.cached_hash != hash {
                continue;
            }
            if node == Some(entry.member.node()) || graph.read(&entry.member)? == probe {
                return Ok(Some((index, pos)));
            }
        }
        Ok(None)
    }

    /// Add `member`, caching its hash as of now.
    ///
    /// Returns `false` when an equal member is already present.
    pub fn insert(
        &mut self,
        graph: &mut AliasGraph<T>,
        member: &Handle,
    ) -> Result<bool, AliasError> {
        let hash = {
            let items = graph.read(member)?;
            let hash = hash_items(items);
            if self.find(graph, hash, Some(member.node()), items)?.is_some() {
                return Ok(false);
            }
            hash
        };

        let shared = graph.share(member)?;
        self.grow_if_needed();
        let index = self.bucket_index(hash);
        self.buckets[index].push(Entry {
            member: shared,
            cached_hash: hash,
        });
        self.len += 1;
        tracing::trace!(node = %member.node(), hash, bucket = index, "inserted member");
        Ok(true)
    }

    /// Whether `member` is found by its *current* hash.
    ///
    /// May return `false` for a member that was inserted and never
    /// removed, if its content changed since.
    pub fn contains(&self, graph: &AliasGraph<T>, member: &Handle) -> Result<bool, AliasError> {
        let items = graph.read(member)?;
        let hash = hash_items(items);
        let found = self.find(graph, hash, Some(member.node()), items)?;
        if found.is_none() {
            tracing::debug!(node = %member.node(), hash, "member not found");
        }
        Ok(found.is_some())
    }

    /// The stored member whose content equals `probe`, by bucket dispatch.
    pub fn lookup(
        &self,
        graph: &AliasGraph<T>,
        probe: &[T],
    ) -> Result<Option<&Handle>, AliasError> {
        let hash = hash_items(probe);
        Ok(self
            .find(graph, hash, None, probe)?
            .map(|(index, pos)| &self.buckets[index][pos].member))
    }

    /// Remove `member`, found the same way as [`contains`](Self::contains).
    ///
    /// Returns `false` if the member could not be found.
    pub fn remove(
        &mut self,
        graph: &mut AliasGraph<T>,
        member: &Handle,
    ) -> Result<bool, AliasError> {
        let found = {
            let items = graph.read(member)?;
            self.find(graph, hash_items(items), Some(member.node()), items)?
        };
        let Some((index, pos)) = found else {
            return Ok(false);
        };
        let entry = self.buckets[index].remove(pos);
        self.len -= 1;
        graph.release(entry.member)?;
        Ok(true)
    }

    /// Entries whose live hash differs from the hash they were filed under.
    pub fn audit(&self, graph: &AliasGraph<T>) -> Result<Vec<StaleEntry>, AliasError> {
        let mut stale = Vec::new();
        for entry in self.buckets.iter().flatten() {
            let live_hash = hash_items(graph.read(&entry.member)?);
            if live_hash != entry.cached_hash {
                stale.push(StaleEntry {
                    node: entry.member.node(),
                    cached_hash: entry.cached_hash,
                    live_hash,
                });
            }
        }
        Ok(stale)
    }

    /// Stored members, in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = &Handle> + '_ {
        self.buckets.iter().flatten().map(|entry| &entry.member)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Drop the set, returning its member shares to the graph.
    pub fn release_all(self, graph: &mut AliasGraph<T>) -> Result<(), AliasError> {
        for entry in self.buckets.into_iter().flatten() {
            graph.release(entry.member)?;
        }
        Ok(())
    }

    /// Double the bucket array once the next insert would pass 3/4 load.
    ///
    /// Entries are redistributed by their cached hash, not their content.
    fn grow_if_needed(&mut self) {
        if (self.len + 1) * 4 <= self.buckets.len() * 3 {
            return;
        }
        let new_len = self.buckets.len() * 2;
        let old = std::mem::replace(
            &mut self.buckets,
            (0..new_len).map(|_| SmallVec::new()).collect(),
        );
        for entry in old.into_iter().flatten() {
            let index = self.bucket_index(entry.cached_hash);
            self.buckets[index].push(entry);
        }
        tracing::debug!(buckets = new_len, len = self.len, "resized hash set");
    }
}

impl<T: Hash + Eq> Default for HashSetModel<T> {
    fn default() -> Self {
        Self::new()
    }
}
