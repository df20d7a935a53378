//! Adapts pipeline errors into miette diagnostics for terminal reporting.

use miette::Diagnostic;
use thiserror::Error;

use cumulus::CumulusError;

/// A reportable diagnostic wrapping a pipeline error.
#[derive(Debug, Error, Diagnostic)]
pub enum Reportable {
    #[error("{0}")]
    #[diagnostic(
        code(cumulus::duplicate_identity),
        help("every node identity (cluster path + label) must be unique within a run")
    )]
    DuplicateIdentity(String),

    #[error("{0}")]
    #[diagnostic(
        code(cumulus::scope_mismatch),
        help("clusters must close in the reverse order they were opened")
    )]
    ScopeMismatch(String),

    #[error("{0}")]
    #[diagnostic(
        code(cumulus::unknown_node),
        help("edge endpoints must reference nodes declared earlier in this run")
    )]
    UnknownNode(String),

    #[error("{0}")]
    #[diagnostic(code(cumulus::render))]
    Render(String),

    #[error("{0}")]
    #[diagnostic(code(cumulus::io))]
    Io(String),
}

/// Converts a pipeline error into its reportable form.
pub fn to_reportable(err: &CumulusError) -> Reportable {
    let message = err.to_string();
    match err {
        CumulusError::DuplicateIdentity { .. } => Reportable::DuplicateIdentity(message),
        CumulusError::ScopeMismatch { .. } => Reportable::ScopeMismatch(message),
        CumulusError::UnknownNode { .. } => Reportable::UnknownNode(message),
        CumulusError::Render(_) => Reportable::Render(message),
        CumulusError::Io(_) => Reportable::Io(message),
    }
}
