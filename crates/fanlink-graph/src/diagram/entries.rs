//! Internal storage entries for [`Diagram`](super::Diagram).

use super::{Link, LinkKey};

#[derive(Debug, Clone)]
pub(in crate::diagram) struct LinkEntry {
    pub(in crate::diagram) link: Link,
    pub(in crate::diagram) key: LinkKey,
    pub(in crate::diagram) route_valid: bool,
}
