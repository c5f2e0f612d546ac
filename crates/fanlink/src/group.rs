//! Resolution of parallel sibling groups.

use fanlink_graph::{Diagram, Link, LinkId};
use std::cmp::Ordering;

/// Ordered endpoint identity shared by every member of a parallel group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub from_port: &'a str,
    pub to_port: &'a str,
}

impl<'a> GroupKey<'a> {
    pub fn of(link: &'a Link) -> Self {
        Self {
            from: &link.from,
            to: &link.to,
            from_port: &link.from_port,
            to_port: &link.to_port,
        }
    }
}

/// Orthogonal and Bezier links never take part in parallel fan-out.
pub fn is_parallel_eligible(link: &Link) -> bool {
    !link.is_orthogonal() && !link.is_bezier()
}

/// Every eligible link sharing `id`'s endpoints and ports, `id` included, in resolved order.
///
/// A link that is not part of `diagram` has no siblings and resolves to itself.
pub fn resolve_group(diagram: &Diagram, id: LinkId) -> Vec<LinkId> {
    let Some(link) = diagram.link(id) else {
        return vec![id];
    };
    let key = GroupKey::of(link);
    let mut group: Vec<LinkId> = diagram
        .links()
        .filter(|(_, other)| is_parallel_eligible(other) && GroupKey::of(other) == key)
        .map(|(other_id, _)| other_id)
        .collect();
    sort_group(diagram, &mut group);
    tracing::trace!(%id, size = group.len(), "resolved parallel group");
    group
}

/// Sorts by `parallelIndex` ascending, then by the diagram-assigned key. The sort is stable,
/// so links that tie on both keep their enumeration order.
pub fn sort_group(diagram: &Diagram, group: &mut [LinkId]) {
    group.sort_by(|&a, &b| compare_members(diagram, a, b));
}

fn compare_members(diagram: &Diagram, a: LinkId, b: LinkId) -> Ordering {
    let index = |id| {
        diagram
            .link(id)
            .map_or(0.0, |link: &Link| link.data.parallel_index())
    };
    match index(a).partial_cmp(&index(b)) {
        Some(Ordering::Equal) | None => {}
        Some(ord) => return ord,
    }
    match (diagram.key_of(a), diagram.key_of(b)) {
        (Some(ka), Some(kb)) => ka.cmp(kb),
        _ => Ordering::Equal,
    }
}
