use serde::Deserialize;

/// A batch of documents waiting for an external enrichment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BatchDetails {
    pub batch_id: Option<String>,
    pub created: Option<String>,
    pub enrichment_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListBatchesResponse {
    pub batches: Option<Vec<BatchDetails>>,
}

/// Content of a pulled batch: newline-delimited JSON documents.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PullBatchesResponse {
    pub file: Option<String>,
}
