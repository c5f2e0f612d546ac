use crate::diagram::LinkKey;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("link references a missing node: {node_id}")]
    MissingNode { node_id: String },

    #[error("link references a missing port {port_id:?} on node {node_id}")]
    MissingPort { node_id: String, port_id: String },

    #[error("link data key must be an integer or a string, got {value}")]
    InvalidKey { value: String },

    #[error("link data key is already in use: {key}")]
    DuplicateKey { key: LinkKey },
}
