use thiserror::Error;

use crate::core::generate::GenerateError;
use crate::models::TemplateKind;

/// Failure modes of a single dispatch. A dispatch either fully succeeds
/// or fails with one of these; there are no partial results and no
/// locally synthesized fallback text.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A substitution point in the selected template had no value in the
    /// parameter map. Never retried; the request is aborted.
    #[error("missing required field `{field}` for {kind} template")]
    Template { kind: TemplateKind, field: String },

    /// The backend answered but produced no usable candidate.
    #[error("generation backend returned no usable candidate: {reason}")]
    BackendResponse { reason: String },

    /// The backend call itself failed (transport, auth, decode).
    #[error("generation backend call failed")]
    Backend(#[from] GenerateError),
}
