//! Error types for the Cumulus pipeline.
//!
//! Every error is fatal for the current run: the first failure anywhere in
//! the builder or the render pipeline aborts with a message naming the
//! offending node, cluster, or edge.

use std::io;

use thiserror::Error;

/// The main error type for Cumulus operations.
#[derive(Debug, Error)]
pub enum CumulusError {
    /// Two nodes were declared with the same identity (cluster path + label).
    #[error("duplicate node identity `{identity}`")]
    DuplicateIdentity { identity: String },

    /// A cluster was closed out of LIFO order, closed twice, or left open
    /// when the graph was frozen.
    #[error("cluster scope mismatch: {reason}")]
    ScopeMismatch { reason: String },

    /// An edge referenced a node that does not exist in the graph.
    #[error("unknown node `{identity}` referenced by an edge")]
    UnknownNode { identity: String },

    /// Layout or rasterization could not proceed; the single externally
    /// observable render failure mode.
    #[error("render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<crate::export::Error> for CumulusError {
    fn from(error: crate::export::Error) -> Self {
        Self::Render(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = CumulusError::DuplicateIdentity {
            identity: "Api Layer::Courses".to_string(),
        };
        assert!(err.to_string().contains("Api Layer::Courses"));

        let err = CumulusError::UnknownNode {
            identity: "Ghost".to_string(),
        };
        assert!(err.to_string().contains("Ghost"));

        let err = CumulusError::ScopeMismatch {
            reason: "`Workers` is not the innermost open cluster".to_string(),
        };
        assert!(err.to_string().contains("Workers"));
    }
}
