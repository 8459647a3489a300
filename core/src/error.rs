use crate::DocId;
use thiserror::Error;

/// Errors surfaced by the index and the engine facade.
///
/// Word lookups never fail: a word that was never indexed simply matches
/// nothing. Only document-identity violations are errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("document {0} has already been added")]
    DuplicateDocument(DocId),
    #[error("document {0} was never added")]
    UnknownDocument(DocId),
}
