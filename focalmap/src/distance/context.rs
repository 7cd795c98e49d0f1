//! Distance context: the loaded collection plus the per-asset cache.

use std::collections::HashMap;
use std::rc::Rc;

use super::engine::compute_distances;
use super::map::DistanceMap;
use super::metric::DistanceMetric;
use super::row::DistanceRow;
use crate::asset::Asset;
use crate::focal::{FocalPointCollection, FocalPointKind};

/// Memoized distance maps keyed by `(asset id, kind)`.
///
/// Entries are added on first request and never invalidated. The key does not
/// include the metric.
#[derive(Debug, Default)]
pub struct DistanceCache {
    entries: HashMap<(String, FocalPointKind), Rc<DistanceMap>>,
}

impl DistanceCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, asset_id: &str, kind: FocalPointKind) -> Option<Rc<DistanceMap>> {
        // HashMap lookups by borrowed tuple keys need an owned key
        self.entries.get(&(asset_id.to_string(), kind)).cloned()
    }

    pub fn insert(&mut self, asset_id: &str, kind: FocalPointKind, map: Rc<DistanceMap>) {
        self.entries.insert((asset_id.to_string(), kind), map);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Owns the focal point collection and the distance cache for one run.
///
/// # Metric discipline
///
/// The cache is keyed by asset and kind only. Requesting the same asset and
/// kind with a different metric returns the map computed with the first
/// metric. Use one metric per context.
///
/// # Example
///
/// ```
/// use focalmap::asset::Asset;
/// use focalmap::distance::{DistanceContext, DistanceMetric};
/// use focalmap::focal::{FocalPointCollection, FocalPointKind};
///
/// let mut ctx = DistanceContext::new(FocalPointCollection::default());
/// let asset = Asset::land("a-1", 10, -3);
///
/// let roads = ctx.distances_for_asset(&asset, FocalPointKind::Roads, DistanceMetric::Manhattan);
/// assert_eq!(roads.get("DIST_ROAD"), Some(0.0));
/// ```
#[derive(Debug)]
pub struct DistanceContext {
    collection: FocalPointCollection,
    cache: DistanceCache,
    computations: usize,
}

impl DistanceContext {
    /// Create a context with an empty cache.
    pub fn new(collection: FocalPointCollection) -> Self {
        Self {
            collection,
            cache: DistanceCache::new(),
            computations: 0,
        }
    }

    pub fn collection(&self) -> &FocalPointCollection {
        &self.collection
    }

    pub fn cache(&self) -> &DistanceCache {
        &self.cache
    }

    /// Number of cache misses served so far.
    pub fn computations(&self) -> usize {
        self.computations
    }

    /// Named distances from an asset to every group of `kind`.
    ///
    /// The first call per `(asset.id, kind)` computes and caches the map;
    /// later calls return the same shared map.
    pub fn distances_for_asset(
        &mut self,
        asset: &Asset,
        kind: FocalPointKind,
        metric: DistanceMetric,
    ) -> Rc<DistanceMap> {
        if let Some(cached) = self.cache.get(&asset.id, kind) {
            tracing::trace!(asset = %asset.id, kind = %kind, "Distance cache hit");
            return cached;
        }

        let map = Rc::new(compute_distances(
            &self.collection,
            asset.x,
            asset.y,
            kind,
            metric,
        ));
        self.computations += 1;
        tracing::debug!(
            asset = %asset.id,
            kind = %kind,
            metric = %metric,
            columns = map.len(),
            "Computed distances"
        );

        self.cache.insert(&asset.id, kind, Rc::clone(&map));
        map
    }

    /// Flattened row of plaza, road and district distances, in that order.
    pub fn row_for_asset(&mut self, asset: &Asset, metric: DistanceMetric) -> DistanceRow {
        let mut row = DistanceRow::new(&asset.id);
        for kind in FocalPointKind::ALL {
            let map = self.distances_for_asset(asset, kind, metric);
            row.extend(map.iter());
        }
        row
    }
}
