use recipe_query_core::traits::RecipeRetriever;
use recipe_query_core::types::StructuredQuery;
use tracing::debug;

/// Stands in for the recipe backend: renders the structured query as the
/// JSON document a backend would receive.
#[derive(Debug, Default)]
pub struct JsonHandoffRetriever;

impl RecipeRetriever for JsonHandoffRetriever {
    type Output = String;

    async fn retrieve(&self, query: StructuredQuery) -> anyhow::Result<String> {
        let payload = serde_json::to_string_pretty(&query)?;
        debug!(bytes = payload.len(), "structured query handed off");
        Ok(payload)
    }
}
