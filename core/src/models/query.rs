use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::document::Notice;

/// Values of `retrieval_details.document_retrieval_strategy`.
pub mod retrieval_strategy {
    pub const UNTRAINED: &str = "untrained";
    pub const RELEVANCY_TRAINING: &str = "relevancy_training";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryLargeTableResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryLargeSuggestedRefinements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryLargePassages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_document: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_per_document: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub find_answers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_answers_per_passage: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryLargeSimilar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

/// Body of `Query`. Every field is optional; an empty query matches all
/// documents of the project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natural_language_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(rename = "return", skip_serializing_if = "Option::is_none")]
    pub return_fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spelling_suggestions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_results: Option<QueryLargeTableResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_refinements: Option<QueryLargeSuggestedRefinements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passages: Option<QueryLargePassages>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar: Option<QueryLargeSimilar>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryResponse {
    pub matching_results: Option<i64>,
    pub results: Option<Vec<QueryResult>>,
    pub aggregations: Option<Vec<Value>>,
    pub retrieval_details: Option<RetrievalDetails>,
    pub suggested_query: Option<String>,
    pub suggested_refinements: Option<Vec<QuerySuggestedRefinement>>,
    pub table_results: Option<Vec<QueryTableResult>>,
    pub passages: Option<Vec<QueryResponsePassage>>,
}

/// One matching document. Document content is kept in `fields`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryResult {
    pub document_id: Option<String>,
    pub metadata: Option<Map<String, Value>>,
    pub result_metadata: Option<QueryResultMetadata>,
    pub document_passages: Option<Vec<QueryResultPassage>>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryResultMetadata {
    pub document_retrieval_source: Option<String>,
    pub collection_id: Option<String>,
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResultPassageAnswer {
    pub answer_text: Option<String>,
    pub start_offset: Option<i64>,
    pub end_offset: Option<i64>,
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryResultPassage {
    pub passage_text: Option<String>,
    pub start_offset: Option<i64>,
    pub end_offset: Option<i64>,
    pub field: Option<String>,
    pub answers: Option<Vec<ResultPassageAnswer>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryResponsePassage {
    pub passage_text: Option<String>,
    pub passage_score: Option<f64>,
    pub document_id: Option<String>,
    pub collection_id: Option<String>,
    pub start_offset: Option<i64>,
    pub end_offset: Option<i64>,
    pub field: Option<String>,
    pub answers: Option<Vec<ResultPassageAnswer>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RetrievalDetails {
    pub document_retrieval_strategy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuerySuggestedRefinement {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryTableResult {
    pub table_id: Option<String>,
    pub source_document_id: Option<String>,
    pub collection_id: Option<String>,
    pub table_html: Option<String>,
    pub table_html_offset: Option<i64>,
    pub table: Option<Value>,
}

/// Optional arguments of `GetAutocompletion`; `prefix` is passed separately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutocompletionOptions {
    /// Sent as one comma-separated `collection_ids` argument.
    pub collection_ids: Vec<String>,
    pub field: Option<String>,
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Completions {
    pub completions: Option<Vec<String>>,
}

/// Optional arguments of `QueryNotices` and `QueryCollectionNotices`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticesQuery {
    pub filter: Option<String>,
    pub query: Option<String>,
    pub natural_language_query: Option<String>,
    pub count: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryNoticesResponse {
    pub matching_results: Option<i64>,
    pub notices: Option<Vec<Notice>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_request_renames_return() {
        let body = QueryRequest {
            natural_language_query: Some("what is rust".to_string()),
            return_fields: Some(vec!["title".to_string()]),
            passages: Some(QueryLargePassages {
                enabled: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "natural_language_query": "what is rust",
                "return": ["title"],
                "passages": {"enabled": true}
            })
        );
    }

    #[test]
    fn empty_query_request_is_empty_object() {
        assert_eq!(serde_json::to_string(&QueryRequest::default()).unwrap(), "{}");
    }

    #[test]
    fn query_response_from_fixture() {
        let fixture = r#"{
            "matching_results": 24,
            "retrieval_details": {"document_retrieval_strategy": "untrained"},
            "results": [{
                "document_id": "d1",
                "title": "Ownership",
                "result_metadata": {
                    "collection_id": "c1", "confidence": 0.5, "document_retrieval_source": "search"
                },
                "document_passages": [
                    {"passage_text": "borrow", "start_offset": 1, "end_offset": 7, "field": "text"}
                ]
            }],
            "passages": [{"passage_text": "borrow", "passage_score": 12.5, "document_id": "d1"}],
            "suggested_refinements": [{"text": "lifetimes"}],
            "aggregations": [{"type": "term", "field": "author"}]
        }"#;
        let response: QueryResponse = serde_json::from_str(fixture).unwrap();
        assert_eq!(response.matching_results, Some(24));
        assert_eq!(
            response.retrieval_details.unwrap().document_retrieval_strategy.as_deref(),
            Some(retrieval_strategy::UNTRAINED)
        );
        let result = &response.results.unwrap()[0];
        assert_eq!(result.document_id.as_deref(), Some("d1"));
        assert_eq!(result.fields["title"], "Ownership");
        assert_eq!(result.result_metadata.as_ref().unwrap().confidence, Some(0.5));
        assert_eq!(result.document_passages.as_ref().unwrap()[0].end_offset, Some(7));
        assert_eq!(response.passages.unwrap()[0].passage_score, Some(12.5));
        assert_eq!(response.suggested_refinements.unwrap()[0].text.as_deref(), Some("lifetimes"));
        assert_eq!(response.aggregations.unwrap()[0]["type"], "term");
    }
}
