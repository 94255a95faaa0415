use serde::{Deserialize, Serialize};

/// A document judged against a training query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    #[serde(default)]
    pub document_id: String,
    #[serde(default)]
    pub collection_id: String,
    #[serde(default)]
    pub relevance: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl TrainingExample {
    pub fn new(document_id: impl Into<String>, collection_id: impl Into<String>, relevance: i64) -> Self {
        Self {
            document_id: document_id.into(),
            collection_id: collection_id.into(),
            relevance,
            created: None,
            updated: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrainingQuery {
    pub query_id: Option<String>,
    pub natural_language_query: Option<String>,
    pub filter: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub examples: Option<Vec<TrainingExample>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TrainingQuerySet {
    pub queries: Option<Vec<TrainingQuery>>,
}

/// Body of `CreateTrainingQuery` and `UpdateTrainingQuery`.
/// `natural_language_query` and `examples` are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrainingQueryInput {
    pub natural_language_query: String,
    pub examples: Vec<TrainingExample>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}
