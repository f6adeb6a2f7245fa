//! Memoized sphere meshes keyed by subdivision depth.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::builder::SphereMeshBuilder;
use crate::error::MeshError;
use crate::sphere_mesh::SphereMesh;

/// Caches one built [`SphereMesh`] per subdivision depth.
///
/// Builds are deterministic, so a cached mesh is interchangeable with a fresh
/// one. Cached meshes are shared; use [`Arc::make_mut`] on a returned handle to
/// get a private copy before writing elevations.
#[derive(Default)]
pub struct SphereMeshCache {
    meshes: FxHashMap<u32, Arc<SphereMesh>>,
}

impl SphereMeshCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the mesh for `divisions`, building it on first request.
    ///
    /// Failed builds are not cached.
    pub fn get_or_build(&mut self, divisions: u32) -> Result<Arc<SphereMesh>, MeshError> {
        if let Some(mesh) = self.meshes.get(&divisions) {
            return Ok(Arc::clone(mesh));
        }

        let mesh = Arc::new(SphereMeshBuilder::new(divisions).build()?);
        self.meshes.insert(divisions, Arc::clone(&mesh));
        Ok(mesh)
    }

    /// The cached mesh for `divisions`, if already built.
    pub fn get(&self, divisions: u32) -> Option<Arc<SphereMesh>> {
        self.meshes.get(&divisions).cloned()
    }

    /// Number of cached depths.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Returns `true` if nothing has been built yet.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Drop every cached mesh.
    pub fn clear(&mut self) {
        self.meshes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::MAX_DIVISIONS;

    #[test]
    fn test_second_request_hits_cache() {
        let mut cache = SphereMeshCache::new();
        let first = cache.get_or_build(2).unwrap();
        let second = cache.get_or_build(2).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_depths_cached_separately() {
        let mut cache = SphereMeshCache::new();
        let coarse = cache.get_or_build(1).unwrap();
        let fine = cache.get_or_build(2).unwrap();
        assert_eq!(coarse.triangle_count() * 4, fine.triangle_count());
        assert_eq!(cache.len(), 2);
        assert!(cache.get(1).is_some());
        assert!(cache.get(3).is_none());
    }

    #[test]
    fn test_failed_build_not_cached() {
        let mut cache = SphereMeshCache::new();
        assert!(cache.get_or_build(MAX_DIVISIONS + 1).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_private_copy_leaves_cache_intact() {
        let mut cache = SphereMeshCache::new();
        let mut mesh = cache.get_or_build(1).unwrap();
        Arc::make_mut(&mut mesh).elevation_mut()[0] = 0.5;

        let cached = cache.get(1).unwrap();
        assert_eq!(cached.elevation[0], 0.0);
        assert_eq!(mesh.elevation[0], 0.5);
    }

    #[test]
    fn test_clear() {
        let mut cache = SphereMeshCache::new();
        cache.get_or_build(0).unwrap();
        cache.clear();
        assert!(cache.is_empty());
    }
}
