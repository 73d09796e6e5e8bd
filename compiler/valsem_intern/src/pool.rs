//! Sharded canonical-instance pool.
//!
//! Provides O(1) interning with thread-safe concurrent access via
//! per-shard locking. Entries are never evicted.

use super::{IdentityToken, InternKey, PoolConfig};
use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

/// Number of shards.
const NUM_SHARDS: usize = 16;

/// How a construction request treats the pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum InternPolicy {
    /// Reuse the canonical token when the key is cacheable.
    #[default]
    AutoIntern,
    /// Always allocate a new identity (enum variants excepted; they
    /// cannot be instantiated twice).
    ForceFresh,
}

/// Per-shard storage for canonical tokens.
struct PoolShard {
    map: FxHashMap<InternKey, IdentityToken>,
}

impl PoolShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }
}

/// Canonical-instance pool.
///
/// # Thread Safety
/// Uses `RwLock` per shard. Concurrent interning of the same key yields
/// exactly one canonical token: the slow path re-checks under the write
/// lock before inserting.
pub struct InternPool {
    config: PoolConfig,
    shards: [RwLock<PoolShard>; NUM_SHARDS],
    /// Total count of canonical entries across all shards (O(1) `len()`).
    total_count: AtomicUsize,
}

impl InternPool {
    /// Create a pool with the default small-integer range.
    pub fn new() -> Self {
        Self::with_config(PoolConfig::default())
    }

    pub fn with_config(config: PoolConfig) -> Self {
        let pool = Self {
            config,
            shards: std::array::from_fn(|_| RwLock::new(PoolShard::new())),
            total_count: AtomicUsize::new(0),
        };
        pool.pre_intern_booleans();
        pool
    }

    /// The process-wide pool, created on first use with the default
    /// config.
    pub fn global() -> &'static InternPool {
        static GLOBAL: OnceLock<InternPool> = OnceLock::new();
        GLOBAL.get_or_init(InternPool::new)
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Compute shard for a key based on its hash.
    #[inline]
    fn shard_for(key: &InternKey) -> usize {
        let mut hasher = FxHasher::default();
        key.hash(&mut hasher);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "only the low bits select a shard"
        )]
        let hash = hasher.finish() as usize;
        hash % NUM_SHARDS
    }

    /// Whether `AutoIntern` returns the canonical token for `key`.
    pub fn is_cacheable(&self, key: &InternKey) -> bool {
        match key {
            InternKey::Bool(_) | InternKey::Text(_) | InternKey::Enum { .. } => true,
            InternKey::Int(n) => self.config.int_cache().contains(n),
            InternKey::Long(n) => PoolConfig::LONG_CACHE.contains(n),
            InternKey::Float(_) | InternKey::Double(_) => false,
        }
    }

    /// Resolve the identity for a new boxed value.
    ///
    /// Canonical when the policy allows pooling and the key is cacheable,
    /// fresh otherwise.
    pub fn intern(&self, key: &InternKey, policy: InternPolicy) -> IdentityToken {
        let pooled = match policy {
            InternPolicy::AutoIntern => self.is_cacheable(key),
            InternPolicy::ForceFresh => matches!(key, InternKey::Enum { .. }),
        };
        if pooled {
            self.canonical(key)
        } else {
            Self::fresh(key)
        }
    }

    /// Canonical token for `key`, inserting it if absent.
    ///
    /// Works for any key, cacheable or not (explicit interning).
    pub fn canonical(&self, key: &InternKey) -> IdentityToken {
        let shard = &self.shards[Self::shard_for(key)];

        // Fast path: already interned
        {
            let guard = shard.read();
            if let Some(&token) = guard.map.get(key) {
                return token;
            }
        }

        // Slow path: need to insert
        let mut guard = shard.write();

        // Double-check after acquiring write lock
        if let Some(&token) = guard.map.get(key) {
            return token;
        }

        let token = IdentityToken::allocate();
        guard.map.insert(key.clone(), token);
        self.total_count.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(kind = key.kind_name(), token = token.raw(), "pooled canonical instance");
        token
    }

    /// Canonical token for `key`, if one has been pooled.
    pub fn lookup(&self, key: &InternKey) -> Option<IdentityToken> {
        let shard = &self.shards[Self::shard_for(key)];
        let guard = shard.read();
        guard.map.get(key).copied()
    }

    fn fresh(key: &InternKey) -> IdentityToken {
        let token = IdentityToken::allocate();
        tracing::trace!(kind = key.kind_name(), token = token.raw(), "fresh instance");
        token
    }

    /// Both booleans are canonical from the start.
    fn pre_intern_booleans(&self) {
        self.canonical(&InternKey::Bool(false));
        self.canonical(&InternKey::Bool(true));
    }

    /// Number of canonical entries (O(1)).
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Never true for a constructed pool: the booleans are always there.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the pool holds nothing beyond the pre-interned booleans.
    pub fn holds_only_booleans(&self) -> bool {
        self.len() <= 2
    }
}

impl Default for InternPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared pool handle.
///
/// Use `SharedPool` when the pool must be cloned into several owners;
/// borrow `&InternPool` when the caller owns it.
#[derive(Clone)]
pub struct SharedPool(Arc<InternPool>);

impl SharedPool {
    pub fn new(config: PoolConfig) -> Self {
        SharedPool(Arc::new(InternPool::with_config(config)))
    }
}

impl Default for SharedPool {
    fn default() -> Self {
        Self::new(PoolConfig::default())
    }
}

impl std::ops::Deref for SharedPool {
    type Target = InternPool;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
