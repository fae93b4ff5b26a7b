use std::env;

use anyhow::Result;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

/// How many reviews to retrieve per query. Fewer may come back when the
/// index holds fewer records, which is fine.
pub const TOP_K: usize = 3;

pub struct Pinecone {
    client: Client,
    base_url: String,
    api_key: String,
}

impl Pinecone {
    /// Builds a client for the index host configured in the environment.
    ///
    /// # Panics
    ///
    /// Panics if `$PINECONE_INDEX_HOST` or `$PINECONE_API_KEY` is not set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: env::var("PINECONE_INDEX_HOST").expect("$PINECONE_INDEX_HOST not set"),
            api_key: env::var("PINECONE_API_KEY").expect("$PINECONE_API_KEY not set"),
        }
    }

    #[must_use]
    pub fn namespace(self, name: &str) -> Namespace {
        Namespace {
            client: self.client,
            base_url: self.base_url,
            api_key: self.api_key,
            name: name.to_string(),
        }
    }
}

impl Default for Pinecone {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct ReviewMetadata {
    pub subject: String,
    pub stars: f32,
}

#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct ProfessorMatch {
    pub id: String,
    pub score: f32,
    #[serde(default)]
    pub metadata: ReviewMetadata,
}

#[derive(Debug, serde::Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<ProfessorMatch>,
}

pub struct Namespace {
    client: Client,
    base_url: String,
    api_key: String,
    name: String,
}

impl Namespace {
    /// Fetches the nearest professor reviews for a query vector.
    ///
    /// # Errors
    ///
    /// This function will return an error if the Pinecone API returns an
    /// error. An empty match list is not an error.
    pub async fn query(&self, vector: Vec<f32>) -> Result<Vec<ProfessorMatch>> {
        let response: QueryResponse = self
            .client
            .post(format!("{}/query", self.base_url))
            .header("Api-Key", &self.api_key)
            .json(&json!({
                "namespace": self.name,
                "topK": TOP_K,
                "includeMetadata": true,
                "vector": vector,
            }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!("Found {} matching reviews", response.matches.len());

        Ok(response.matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_full_result_set() {
        let response: QueryResponse = serde_json::from_str(
            r#"{
                "matches": [
                    {"id": "Dr. A", "score": 0.92, "values": [], "metadata": {"subject": "CS", "stars": 4.8}},
                    {"id": "Dr. B", "score": 0.88, "values": [], "metadata": {"subject": "CS", "stars": 4.5}},
                    {"id": "Dr. C", "score": 0.81, "values": [], "metadata": {"subject": "CS", "stars": 4.2}}
                ],
                "namespace": "ns1",
                "usage": {"readUnits": 6}
            }"#,
        )
        .unwrap();

        assert_eq!(response.matches.len(), 3);
        assert_eq!(response.matches[0].id, "Dr. A");
        assert_eq!(response.matches[0].metadata.subject, "CS");
        assert!((response.matches[2].metadata.stars - 4.2).abs() < f32::EPSILON);
    }

    #[test]
    fn decodes_a_partial_result_set() {
        let response: QueryResponse = serde_json::from_str(
            r#"{"matches": [{"id": "Dr. A", "score": 0.5, "metadata": {"subject": "Math", "stars": 3.9}}], "namespace": "ns1"}"#,
        )
        .unwrap();

        assert_eq!(response.matches.len(), 1);
    }

    #[test]
    fn decodes_an_empty_result_set() {
        let response: QueryResponse =
            serde_json::from_str(r#"{"matches": [], "namespace": "ns1"}"#).unwrap();

        assert!(response.matches.is_empty());
    }

    #[test]
    fn tolerates_a_missing_matches_field() {
        let response: QueryResponse = serde_json::from_str(r#"{"namespace": "ns1"}"#).unwrap();

        assert!(response.matches.is_empty());
    }
}
