pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(
        "chain graph contains a cycle through [{}] ({unassigned} nodes left without a layer)",
        .nodes.join(", ")
    )]
    CyclicGraph {
        nodes: Vec<String>,
        unassigned: usize,
    },

    #[error(
        "node {node} in layer {layer} has successor {successor} in layer {}, which is not below it",
        .successor_layer.map_or_else(|| "<unassigned>".to_string(), |l| l.to_string())
    )]
    InvariantViolation {
        node: String,
        layer: usize,
        successor: String,
        successor_layer: Option<usize>,
    },

    #[error("node {node} is already in layer {layer}; refusing to move it to layer {requested}")]
    LayerReassigned {
        node: String,
        layer: usize,
        requested: usize,
    },

    #[error("node {id} is not placed in the layering")]
    NotLayered { id: String },

    #[error("layer {layer} is out of range (layer count {layer_count})")]
    LayerOutOfRange { layer: usize, layer_count: usize },

    #[error("index {index} is out of range for layer {layer} (size {layer_size})")]
    IndexOutOfRange {
        layer: usize,
        index: usize,
        layer_size: usize,
    },

    #[error("link {link} references a missing node: {node}")]
    MissingEndpoint { link: String, node: String },

    #[error("unknown chain node: {id}")]
    UnknownNode { id: String },

    #[error("unknown chain link: {id}")]
    UnknownLink { id: String },

    #[error("duplicate node id: {id}")]
    DuplicateNode { id: String },

    #[error("duplicate link id: {id}")]
    DuplicateLink { id: String },

    #[error("Invalid layout options JSON: {message}")]
    InvalidOptions { message: String },
}
