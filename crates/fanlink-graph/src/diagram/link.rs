//! Links between node ports.

use super::key::LinkData;
use crate::geom::Point;
use std::fmt;

pub const DEFAULT_PARALLEL_SPACING: f64 = 10.0;
pub const DEFAULT_END_SEGMENT_LENGTH: f64 = 10.0;

/// Handle to a link slot inside one [`Diagram`](super::Diagram).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(pub(in crate::diagram) usize);

impl LinkId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "link#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Routing {
    #[default]
    Normal,
    Orthogonal,
    AvoidsNodes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    #[default]
    None,
    Bezier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub from: String,
    pub to: String,
    pub from_port: String,
    pub to_port: String,
    pub routing: Routing,
    pub curve: Curve,
    /// Explicit curviness. `None` lets the router decide.
    pub curviness: Option<f64>,
    pub end_segment_length: f64,
    pub points: Vec<Point>,
    pub data: LinkData,
    parallel_spacing: f64,
}

impl Link {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            from_port: String::new(),
            to_port: String::new(),
            routing: Routing::default(),
            curve: Curve::default(),
            curviness: None,
            end_segment_length: DEFAULT_END_SEGMENT_LENGTH,
            points: Vec::new(),
            data: LinkData::default(),
            parallel_spacing: DEFAULT_PARALLEL_SPACING,
        }
    }

    pub fn with_ports(mut self, from_port: impl Into<String>, to_port: impl Into<String>) -> Self {
        self.from_port = from_port.into();
        self.to_port = to_port.into();
        self
    }

    pub fn with_routing(mut self, routing: Routing) -> Self {
        self.routing = routing;
        self
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_curviness(mut self, curviness: f64) -> Self {
        self.curviness = Some(curviness);
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = LinkData::from_value(data);
        self
    }

    pub fn with_parallel_spacing(mut self, spacing: f64) -> Self {
        self.set_parallel_spacing(spacing);
        self
    }

    pub fn is_orthogonal(&self) -> bool {
        matches!(self.routing, Routing::Orthogonal | Routing::AvoidsNodes)
    }

    pub fn is_bezier(&self) -> bool {
        self.curve == Curve::Bezier
    }

    pub fn parallel_spacing(&self) -> f64 {
        self.parallel_spacing
    }

    /// Sets the lateral spacing between parallel links. Negative or non-finite input becomes
    /// `0`, which disables fan-out. Returns whether the stored value changed.
    pub fn set_parallel_spacing(&mut self, spacing: f64) -> bool {
        let spacing = coerce_spacing(spacing);
        if self.parallel_spacing == spacing {
            return false;
        }
        self.parallel_spacing = spacing;
        true
    }
}

pub fn coerce_spacing(spacing: f64) -> f64 {
    if spacing.is_finite() && spacing >= 0.0 {
        spacing
    } else {
        tracing::debug!(spacing, "coercing invalid parallel spacing to 0");
        0.0
    }
}
