use std::future::Future;

use crate::types::StructuredQuery;

/// The recipe-retrieval collaborator that turns a structured query into
/// results. The session only hands over an owned copy of the query; what
/// comes back is opaque to it.
pub trait RecipeRetriever: Send + Sync {
    type Output: Send;

    fn retrieve(&self, query: StructuredQuery) -> impl Future<Output = anyhow::Result<Self::Output>> + Send;
}
