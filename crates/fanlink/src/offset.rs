//! Signed lateral offsets ("curviness") for parallel links.

use crate::group::{GroupKey, is_parallel_eligible, resolve_group, sort_group};
use fanlink_graph::{Diagram, LinkId};
use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};

/// Offsets smaller than this are treated as no offset at all.
pub const SNAP_TOLERANCE: f64 = 0.01;

/// Offset of the member at `index` in a group of `len` links, centered around zero.
pub fn offset_for_position(index: usize, len: usize, spacing: f64) -> f64 {
    let mid = (len as f64 - 1.0) / 2.0;
    let offset = (index as f64 - mid) * spacing;
    if offset.abs() < SNAP_TOLERANCE {
        0.0
    } else {
        offset
    }
}

/// Curviness for one link.
///
/// A nonzero baseline curviness always wins. Otherwise the link is offset by its position in
/// its parallel group, unless it is orthogonal, Bezier, has zero spacing or has no siblings.
pub fn compute_offset(diagram: &Diagram, id: LinkId) -> f64 {
    let base = diagram.baseline_curviness(id);
    if base != 0.0 {
        return base;
    }
    let Some(link) = diagram.link(id) else {
        return base;
    };
    if !is_parallel_eligible(link) {
        return base;
    }
    let spacing = link.parallel_spacing();
    if spacing == 0.0 {
        return base;
    }

    let group = resolve_group(diagram, id);
    if group.len() <= 1 {
        return base;
    }
    let Some(index) = group.iter().position(|&member| member == id) else {
        return base;
    };
    let offset = offset_for_position(index, group.len(), spacing);
    tracing::trace!(%id, index, len = group.len(), offset, "parallel offset");
    offset
}

/// Curviness for every link in the diagram, grouping eligible links in a single scan.
///
/// Produces the same value [`compute_offset`] yields for each link on its own.
pub fn assign_offsets(diagram: &Diagram) -> FxHashMap<LinkId, f64> {
    let mut groups: IndexMap<GroupKey<'_>, Vec<LinkId>, FxBuildHasher> = IndexMap::default();
    for (id, link) in diagram.links() {
        if is_parallel_eligible(link) {
            groups.entry(GroupKey::of(link)).or_default().push(id);
        }
    }

    let mut offsets: FxHashMap<LinkId, f64> = FxHashMap::default();
    for (id, _) in diagram.links() {
        offsets.insert(id, diagram.baseline_curviness(id));
    }

    for group in groups.values_mut() {
        if group.len() <= 1 {
            continue;
        }
        sort_group(diagram, group);
        for (index, &id) in group.iter().enumerate() {
            let Some(link) = diagram.link(id) else {
                continue;
            };
            let spacing = link.parallel_spacing();
            if diagram.baseline_curviness(id) != 0.0 || spacing == 0.0 {
                continue;
            }
            offsets.insert(id, offset_for_position(index, group.len(), spacing));
        }
    }
    tracing::debug!(
        links = offsets.len(),
        groups = groups.len(),
        "assigned parallel offsets"
    );
    offsets
}
