//! Content-addressed render cache
//!
//! Rendering is a pure function of the source text, so a finished result can be reused for any
//! later call with the exact same input. [`CachedRenderer`] keeps those results in a sharded
//! concurrent map. A key is populated through the map's entry API, which holds that shard's
//! write lock while rendering, so at most one caller ever fills a given key.
//!
//! Admission stops once `capacity` entries are held: further inputs are still rendered, just
//! not remembered. A miss reserves a slot before it inserts and hands the slot back when another
//! caller filled the key first, so concurrent misses never push the map past `capacity`.
//! [`CachedRenderer::clear`] starts over.

use crate::renderer::Renderer;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

/// Snapshot of cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

pub struct CachedRenderer<R> {
    inner: R,
    entries: DashMap<String, Arc<str>>,
    capacity: usize,
    reserved: AtomicUsize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<R: Renderer> CachedRenderer<R> {
    pub fn new(inner: R, capacity: usize) -> Self {
        Self {
            inner,
            entries: DashMap::new(),
            capacity,
            reserved: AtomicUsize::new(0),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// The wrapped renderer.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Render `source`, sharing the cached result when there is one.
    pub fn render_shared(&self, source: &str) -> Arc<str> {
        if let Some(hit) = self.entries.get(source) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(renderer = self.inner.name(), len = source.len(), "cache hit");
            return Arc::clone(hit.value());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        if !self.reserve_slot() {
            tracing::trace!(renderer = self.inner.name(), "cache full, rendering uncached");
            return Arc::from(self.inner.render(source));
        }

        tracing::trace!(renderer = self.inner.name(), len = source.len(), "cache miss");
        let mut inserted = false;
        let rendered = {
            let entry = self.entries.entry(source.to_string()).or_insert_with(|| {
                inserted = true;
                Arc::from(self.inner.render(source))
            });
            Arc::clone(entry.value())
        };
        if !inserted {
            self.reserved.fetch_sub(1, Ordering::AcqRel);
        }
        rendered
    }

    fn reserve_slot(&self) -> bool {
        self.reserved
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |held| {
                (held < self.capacity).then_some(held + 1)
            })
            .is_ok()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        *self.reserved.get_mut() = 0;
    }
}

impl<R: Renderer> Renderer for CachedRenderer<R> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn description(&self) -> &str {
        self.inner.description()
    }

    fn render(&self, source: &str) -> String {
        self.render_shared(source).to_string()
    }
}
