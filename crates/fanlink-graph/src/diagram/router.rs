//! Override points invoked by [`Diagram::recompute_routes`](super::Diagram::recompute_routes).

use super::{Diagram, LinkId};
use crate::geom::Point;

/// Per-link routing hooks.
///
/// Implementations only read the diagram; the pass writes each computed path back to its own
/// link after every invalid link has been computed.
pub trait LinkRouter {
    /// Called once at the start of every recompute pass.
    fn begin_pass(&mut self, _diagram: &Diagram) {}

    /// Called once after every recomputed path has been written back.
    fn end_pass(&mut self, _diagram: &Diagram) {}

    fn compute_curviness(&self, diagram: &Diagram, id: LinkId) -> f64 {
        diagram.baseline_curviness(id)
    }

    fn compute_points(&self, diagram: &Diagram, id: LinkId) -> Vec<Point> {
        diagram.baseline_points(id)
    }
}

/// Router that only uses the built-in straight-line behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineRouter;

impl LinkRouter for BaselineRouter {}
