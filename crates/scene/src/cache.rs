//! Process-wide texture memoization keyed by (base color, style).
//!
//! Each key owns a `OnceLock` slot. The map mutex is held only long enough to
//! find or create the slot; generation then runs under the slot itself, so the
//! first caller for a key paints while later callers for the same key block on
//! the slot and share the result. Different keys never wait on each other's
//! generation.

use canvas_gallery_core::color::Rgb;
use canvas_gallery_core::config::{salted_seed, SeedPolicy};
use canvas_gallery_core::descriptor::{ArtworkDescriptor, StyleKind};
use canvas_gallery_core::texture::Texture;
use canvas_gallery_styles::brush::BrushSettings;
use canvas_gallery_styles::generate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Identity of a cached texture. Dimensions are not part of it: the first
/// request for a key fixes the size for the life of the cache.
pub type CacheKey = (Rgb, StyleKind);

type Slot = Arc<OnceLock<Arc<Texture>>>;

/// Shared, never-evicting store of painted textures.
///
/// `TextureCache` is `Send + Sync`; share it by reference or behind an `Arc`.
/// Each instance paints with one [`BrushSettings`] and one [`SeedPolicy`].
pub struct TextureCache {
    slots: Mutex<HashMap<CacheKey, Slot>>,
    brush: BrushSettings,
    seed_policy: SeedPolicy,
    salt: u64,
    generations: AtomicUsize,
}

impl TextureCache {
    /// Creates an empty cache. Under [`SeedPolicy::PerSession`] a fresh salt is
    /// drawn here, once, and used for every texture this instance paints.
    pub fn new(brush: BrushSettings, seed_policy: SeedPolicy) -> Self {
        let salt = match seed_policy {
            SeedPolicy::Deterministic => 0,
            SeedPolicy::PerSession => rand::random::<u64>(),
        };
        Self {
            slots: Mutex::new(HashMap::new()),
            brush,
            seed_policy,
            salt,
            generations: AtomicUsize::new(0),
        }
    }

    /// The seed this cache paints `descriptor` with.
    pub fn seed_for(&self, descriptor: &ArtworkDescriptor) -> u64 {
        match self.seed_policy {
            SeedPolicy::Deterministic => descriptor.seed(),
            SeedPolicy::PerSession => salted_seed(descriptor.seed(), self.salt),
        }
    }

    /// Returns the cached texture for `descriptor`'s key, painting it on first use.
    pub fn get_or_create(&self, descriptor: &ArtworkDescriptor) -> Arc<Texture> {
        let key = (descriptor.color, descriptor.style);
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(key).or_default())
        };

        if let Some(texture) = slot.get() {
            log::debug!("texture cache hit for {} {}", key.0.to_hex(), key.1);
            return Arc::clone(texture);
        }

        let texture = slot.get_or_init(|| {
            log::debug!("texture cache miss for {} {}", key.0.to_hex(), key.1);
            self.generations.fetch_add(1, Ordering::Relaxed);
            Arc::new(generate(descriptor, &self.brush, self.seed_for(descriptor)))
        });
        Arc::clone(texture)
    }

    /// Paints every distinct key in `descriptors` in parallel. Keys already
    /// cached are skipped.
    pub fn warm(&self, descriptors: &[ArtworkDescriptor]) {
        let mut pending: Vec<&ArtworkDescriptor> = Vec::new();
        for d in descriptors {
            let key = (d.color, d.style);
            if !self.contains(&key) && !pending.iter().any(|p| (p.color, p.style) == key) {
                pending.push(d);
            }
        }
        if pending.is_empty() {
            return;
        }

        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(pending.len());
        let chunk = pending.len().div_ceil(workers);
        log::debug!("warming {} textures on {workers} threads", pending.len());
        std::thread::scope(|scope| {
            for batch in pending.chunks(chunk) {
                scope.spawn(move || {
                    for d in batch {
                        self.get_or_create(d);
                    }
                });
            }
        });
    }

    /// Whether a finished texture exists for `key`.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Number of finished textures.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    /// Whether no texture has finished painting yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// How many times this cache has run a generator.
    pub fn generation_count(&self) -> usize {
        self.generations.load(Ordering::Relaxed)
    }

    /// The stroke settings every texture in this cache is painted with.
    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new(BrushSettings::default(), SeedPolicy::Deterministic)
    }
}
