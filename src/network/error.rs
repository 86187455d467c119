use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("node id `{0}` appears more than once")]
    DuplicateNode(String),
    #[error("node `{node}` references unknown parent `{parent}`")]
    UnknownParent { node: String, parent: String },
    #[error("edge {from} -> {to} references unknown node `{missing}`")]
    UnknownEdgeEndpoint {
        from: String,
        to: String,
        missing: String,
    },
    #[error("containment cycle through node `{0}`")]
    ContainmentCycle(String),
    #[error("node `{node}` has invalid alteration value {value}")]
    InvalidAlteration { node: String, value: f64 },
}
