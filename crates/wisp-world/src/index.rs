//! `ContainerIndex` — R-tree over container cells for nearest-deposit
//! queries.
//!
//! Upstream code (whatever assigns deposit hints to agents) needs "the
//! closest container to this agent", often filtered by radius.  A linear
//! scan works for a handful of chests; the R-tree keeps the query O(log n)
//! when a scenario places hundreds.

use rstar::{RTree, primitives::GeomWithData};
use wisp_core::{CellPos, Vec3};

type Entry = GeomWithData<[f32; 3], CellPos>;

/// Immutable spatial index of container cells, keyed by their centers.
///
/// Rebuild after world mutation; the index does not track container
/// removal on its own.
pub struct ContainerIndex {
    tree: RTree<Entry>,
}

impl ContainerIndex {
    /// Index the given container cells.
    pub fn build(cells: impl IntoIterator<Item = CellPos>) -> Self {
        let entries: Vec<Entry> = cells
            .into_iter()
            .map(|cell| {
                let c = cell.center();
                GeomWithData::new([c.x, c.y, c.z], cell)
            })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    /// The container cell whose center is closest to `point`.
    pub fn nearest(&self, point: Vec3) -> Option<CellPos> {
        self.tree
            .nearest_neighbor(&[point.x, point.y, point.z])
            .map(|e| e.data)
    }

    /// All container cells whose centers lie within `radius` of `point`,
    /// unordered.
    pub fn within(&self, point: Vec3, radius: f32) -> Vec<CellPos> {
        self.tree
            .locate_within_distance([point.x, point.y, point.z], radius * radius)
            .map(|e| e.data)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}
