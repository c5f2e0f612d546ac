//! Nodes and their ports.

use crate::geom::{Point, Size, Vector, vector};
use indexmap::IndexMap;

/// Side of a node a port emits its links toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spot {
    Top,
    Bottom,
    Left,
    Right,
}

impl Spot {
    /// Unit direction pointing away from the node (y grows downward).
    pub fn direction(self) -> Vector {
        match self {
            Spot::Top => vector(0.0, -1.0),
            Spot::Bottom => vector(0.0, 1.0),
            Spot::Left => vector(-1.0, 0.0),
            Spot::Right => vector(1.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Port {
    /// Offset of the connection point from the node center.
    pub offset: Vector,
    /// When set, links leave/enter through an end segment along this side.
    pub spot: Option<Spot>,
}

impl Default for Port {
    fn default() -> Self {
        Self {
            offset: vector(0.0, 0.0),
            spot: None,
        }
    }
}

impl Port {
    pub fn at(offset: Vector) -> Self {
        Self { offset, spot: None }
    }

    pub fn with_spot(mut self, spot: Spot) -> Self {
        self.spot = Some(spot);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Center of the node.
    pub position: Point,
    pub size: Size,
    pub ports: IndexMap<String, Port>,
}

impl Node {
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            position,
            size,
            ports: IndexMap::new(),
        }
    }

    pub fn with_port(mut self, id: impl Into<String>, port: Port) -> Self {
        self.ports.insert(id.into(), port);
        self
    }

    /// Looks up a port. The empty id always names the implicit center port unless the node
    /// overrides it.
    pub fn port(&self, id: &str) -> Option<Port> {
        match self.ports.get(id) {
            Some(port) => Some(*port),
            None if id.is_empty() => Some(Port::default()),
            None => None,
        }
    }

    pub fn port_point(&self, port: &Port) -> Point {
        self.position + port.offset
    }
}
