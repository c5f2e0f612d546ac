#![forbid(unsafe_code)]

//! Curved fan-out for parallel links.
//!
//! Links that share the same source and target ports would draw on top of each other. `fanlink`
//! orders each such group deterministically, gives every member a signed offset centered on
//! zero, and bends its straight path sideways by that offset. [`ParallelRouter`] plugs the whole
//! thing into [`fanlink_graph::Diagram::recompute_routes`].

pub use fanlink_graph as graph;

pub mod bend;
pub mod config;
pub mod error;
pub mod group;
pub mod offset;
mod router;

pub use bend::bend_path;
pub use config::ParallelRouteConfig;
pub use error::{Error, Result};
pub use group::{is_parallel_eligible, resolve_group};
pub use offset::{assign_offsets, compute_offset};
pub use router::ParallelRouter;
