#![forbid(unsafe_code)]

//! Diagram model consumed by `fanlink`.
//!
//! Holds nodes with named ports and any number of directed links between them, computes the
//! baseline straight-line route of each link, and runs the per-link recompute pass through a
//! pluggable [`LinkRouter`].

pub mod diagram;
pub mod error;
pub mod geom;

pub use diagram::{
    BaselineRouter, Curve, Diagram, Link, LinkData, LinkId, LinkKey, LinkRouter, Node, Port,
    Routing, Spot,
};
pub use error::{Error, Result};
pub use geom::{Point, Size, Vector, point, size, vector};
