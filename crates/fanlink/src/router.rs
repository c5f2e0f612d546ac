use crate::bend::bend_path;
use crate::group::is_parallel_eligible;
use crate::offset::{assign_offsets, compute_offset};
use fanlink_graph::{Diagram, LinkId, LinkRouter, Point};
use rustc_hash::FxHashMap;

/// [`LinkRouter`] that fans parallel links out around their shared straight line.
///
/// In the default mode every link resolves its own group when asked. A batched router
/// assigns all offsets once in [`LinkRouter::begin_pass`], answers from that cache until
/// [`LinkRouter::end_pass`] drops it, and resolves independently outside a pass; both modes
/// produce the same routes.
#[derive(Debug, Clone, Default)]
pub struct ParallelRouter {
    batched: bool,
    offsets: Option<FxHashMap<LinkId, f64>>,
}

impl ParallelRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batched() -> Self {
        Self {
            batched: true,
            offsets: None,
        }
    }

    pub fn is_batched(&self) -> bool {
        self.batched
    }
}

impl LinkRouter for ParallelRouter {
    fn begin_pass(&mut self, diagram: &Diagram) {
        self.offsets = self.batched.then(|| assign_offsets(diagram));
    }

    fn end_pass(&mut self, _diagram: &Diagram) {
        self.offsets = None;
    }

    fn compute_curviness(&self, diagram: &Diagram, id: LinkId) -> f64 {
        match self.offsets.as_ref().and_then(|cache| cache.get(&id)) {
            Some(&offset) => offset,
            None => compute_offset(diagram, id),
        }
    }

    fn compute_points(&self, diagram: &Diagram, id: LinkId) -> Vec<Point> {
        let points = diagram.baseline_points(id);
        let Some(link) = diagram.link(id) else {
            return points;
        };
        if !is_parallel_eligible(link) || points.len() < 2 {
            return points;
        }
        let curviness = self.compute_curviness(diagram, id);
        if curviness == 0.0 {
            return points;
        }
        bend_path(&points, curviness)
    }
}
