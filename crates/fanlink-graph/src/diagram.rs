//! Diagram container: nodes, ports and (multi-)links.
//!
//! Links are stored in slots addressed by [`LinkId`]; removing a link frees its slot without
//! shifting the others, so handles held by callers stay meaningful.

mod entries;
mod key;
mod link;
mod node;
mod router;

pub use key::{LinkData, LinkKey};
pub use link::{
    Curve, DEFAULT_END_SEGMENT_LENGTH, DEFAULT_PARALLEL_SPACING, Link, LinkId, Routing,
    coerce_spacing,
};
pub use node::{Node, Port, Spot};
pub use router::{BaselineRouter, LinkRouter};

use crate::error::{Error, Result};
use crate::geom::Point;
use entries::LinkEntry;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;

/// Nodes plus link slots.
///
/// Link slots are never reused or compacted: a removed link leaves an empty slot behind, so
/// the slot vector only grows over the diagram's lifetime and a stale [`LinkId`] can never
/// alias a newer link.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    nodes: IndexMap<String, Node>,
    links: Vec<Option<LinkEntry>>,
    key_index: FxHashMap<LinkKey, LinkId>,
    next_auto_key: i64,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: impl Into<String>, node: Node) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.nodes.iter().map(|(id, n)| (id.as_str(), n))
    }

    /// Moves a node and invalidates the routes of every link attached to it.
    pub fn move_node(&mut self, id: &str, position: Point) -> bool {
        let Some(node) = self.nodes.get_mut(id) else {
            return false;
        };
        node.position = position;
        for entry in self.links.iter_mut().flatten() {
            if entry.link.from == id || entry.link.to == id {
                entry.route_valid = false;
            }
        }
        true
    }

    /// Removes a node together with every link attached to it.
    pub fn remove_node(&mut self, id: &str) -> bool {
        if self.nodes.shift_remove(id).is_none() {
            return false;
        }
        let attached: Vec<LinkId> = self
            .links()
            .filter(|(_, l)| l.from == id || l.to == id)
            .map(|(link_id, _)| link_id)
            .collect();
        for link_id in attached {
            self.remove_link(link_id);
        }
        true
    }

    /// Adds a link and assigns the unique key of its data record.
    ///
    /// The record's own `key` field is used when present (a whole-number float reads as an
    /// integer); otherwise the next free negative integer is assigned and written back into the
    /// record. A `key` that is neither an integer nor a string is rejected.
    pub fn add_link(&mut self, mut link: Link) -> Result<LinkId> {
        self.check_endpoint(&link.from, &link.from_port)?;
        self.check_endpoint(&link.to, &link.to_port)?;

        let key = match link.data.raw_key() {
            None => self.next_key(),
            Some(raw) => {
                let Some(key) = LinkKey::from_value(raw) else {
                    return Err(Error::InvalidKey {
                        value: raw.to_string(),
                    });
                };
                if self.key_index.contains_key(&key) {
                    return Err(Error::DuplicateKey { key });
                }
                key
            }
        };
        link.data.set_key(&key);

        let id = LinkId(self.links.len());
        self.invalidate_between(&link.from, &link.to);
        tracing::trace!(%id, %key, from = %link.from, to = %link.to, "link added");
        self.key_index.insert(key.clone(), id);
        self.links.push(Some(LinkEntry {
            link,
            key,
            route_valid: false,
        }));
        Ok(id)
    }

    pub fn remove_link(&mut self, id: LinkId) -> Option<Link> {
        let entry = self.links.get_mut(id.0)?.take()?;
        self.key_index.remove(&entry.key);
        self.invalidate_between(&entry.link.from, &entry.link.to);
        Some(entry.link)
    }

    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.entry(id).map(|e| &e.link)
    }

    /// Mutable access to a link. Callers that change routing-relevant fields should
    /// [`invalidate_route`](Self::invalidate_route) afterwards.
    pub fn link_mut(&mut self, id: LinkId) -> Option<&mut Link> {
        self.entry_mut(id).map(|e| &mut e.link)
    }

    pub fn contains_link(&self, id: LinkId) -> bool {
        self.entry(id).is_some()
    }

    pub fn link_count(&self) -> usize {
        self.key_index.len()
    }

    /// All links in insertion order.
    pub fn links(&self) -> impl Iterator<Item = (LinkId, &Link)> {
        self.links
            .iter()
            .enumerate()
            .filter_map(|(ix, slot)| slot.as_ref().map(|e| (LinkId(ix), &e.link)))
    }

    pub fn link_ids(&self) -> Vec<LinkId> {
        self.links().map(|(id, _)| id).collect()
    }

    pub fn key_of(&self, id: LinkId) -> Option<&LinkKey> {
        self.entry(id).map(|e| &e.key)
    }

    /// Maps a data record to the unique key the diagram assigned to it.
    pub fn key_for_link_data(&self, data: &LinkData) -> Option<&LinkKey> {
        let key = data.key()?;
        self.key_index.get_key_value(&key).map(|(k, _)| k)
    }

    pub fn find_link_by_key(&self, key: &LinkKey) -> Option<LinkId> {
        self.key_index.get(key).copied()
    }

    /// Sets a link's parallel spacing, invalidating its route when the value changes.
    pub fn set_parallel_spacing(&mut self, id: LinkId, spacing: f64) -> bool {
        let Some(entry) = self.entry_mut(id) else {
            return false;
        };
        let changed = entry.link.set_parallel_spacing(spacing);
        if changed {
            entry.route_valid = false;
        }
        changed
    }

    pub fn invalidate_route(&mut self, id: LinkId) {
        if let Some(entry) = self.entry_mut(id) {
            entry.route_valid = false;
        }
    }

    pub fn is_route_valid(&self, id: LinkId) -> bool {
        self.entry(id).is_some_and(|e| e.route_valid)
    }

    /// Curviness the host assigns on its own: the explicit value when set, else `0`.
    pub fn baseline_curviness(&self, id: LinkId) -> f64 {
        self.link(id)
            .and_then(|l| l.curviness)
            .filter(|c| c.is_finite())
            .unwrap_or(0.0)
    }

    /// Straight polyline between the two port points, with an end segment for every port
    /// that declares a spot.
    pub fn baseline_points(&self, id: LinkId) -> Vec<Point> {
        let Some(link) = self.link(id) else {
            return Vec::new();
        };
        let (Some(from_node), Some(to_node)) = (self.node(&link.from), self.node(&link.to))
        else {
            return link.points.clone();
        };
        let from_port = from_node.port(&link.from_port).unwrap_or_default();
        let to_port = to_node.port(&link.to_port).unwrap_or_default();
        let start = from_node.port_point(&from_port);
        let end = to_node.port_point(&to_port);

        let mut points = Vec::with_capacity(4);
        points.push(start);
        if let Some(spot) = from_port.spot {
            points.push(start + spot.direction() * link.end_segment_length);
        }
        if let Some(spot) = to_port.spot {
            points.push(end + spot.direction() * link.end_segment_length);
        }
        points.push(end);
        points
    }

    /// Recomputes the path of every link whose route is invalid.
    ///
    /// All paths are computed against the unchanged diagram first and written back afterwards,
    /// so a router never observes a half-updated pass. The router's `begin_pass` and `end_pass`
    /// bracket the pass. Returns the number of recomputed links.
    pub fn recompute_routes(&mut self, router: &mut dyn LinkRouter) -> usize {
        router.begin_pass(self);
        let routed: Vec<(LinkId, Vec<Point>)> = self
            .links()
            .filter(|(id, _)| !self.is_route_valid(*id))
            .map(|(id, _)| (id, router.compute_points(self, id)))
            .collect();

        let count = routed.len();
        for (id, points) in routed {
            if let Some(entry) = self.entry_mut(id) {
                entry.link.points = points;
                entry.route_valid = true;
            }
        }
        router.end_pass(self);
        tracing::debug!(count, links = self.link_count(), "recomputed link routes");
        count
    }

    fn entry(&self, id: LinkId) -> Option<&LinkEntry> {
        self.links.get(id.0).and_then(Option::as_ref)
    }

    fn entry_mut(&mut self, id: LinkId) -> Option<&mut LinkEntry> {
        self.links.get_mut(id.0).and_then(Option::as_mut)
    }

    fn check_endpoint(&self, node_id: &str, port_id: &str) -> Result<()> {
        let Some(node) = self.node(node_id) else {
            return Err(Error::MissingNode {
                node_id: node_id.to_string(),
            });
        };
        if node.port(port_id).is_none() {
            return Err(Error::MissingPort {
                node_id: node_id.to_string(),
                port_id: port_id.to_string(),
            });
        }
        Ok(())
    }

    fn next_key(&mut self) -> LinkKey {
        loop {
            self.next_auto_key -= 1;
            let key = LinkKey::Int(self.next_auto_key);
            if !self.key_index.contains_key(&key) {
                return key;
            }
        }
    }

    fn invalidate_between(&mut self, from: &str, to: &str) {
        for entry in self.links.iter_mut().flatten() {
            if entry.link.from == from && entry.link.to == to {
                entry.route_valid = false;
            }
        }
    }
}
