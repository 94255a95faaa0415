use serde::Deserialize;
use serde_json::{Map, Value};

use crate::multipart::FileUpload;

/// Values of the document `status` field and the `ListDocuments` filter.
pub mod document_status {
    pub const AVAILABLE: &str = "available";
    pub const FAILED: &str = "failed";
    pub const PENDING: &str = "pending";
    pub const PROCESSING: &str = "processing";
}

/// Values of the notice `severity` field.
pub mod notice_severity {
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

/// A warning or error raised while ingesting or querying.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Notice {
    pub notice_id: Option<String>,
    pub created: Option<String>,
    pub document_id: Option<String>,
    pub collection_id: Option<String>,
    pub query_id: Option<String>,
    pub severity: Option<String>,
    pub step: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentDetailsChildren {
    pub have_notices: Option<bool>,
    pub count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentDetails {
    pub document_id: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub status: Option<String>,
    pub notices: Option<Vec<Notice>>,
    pub children: Option<DocumentDetailsChildren>,
    pub filename: Option<String>,
    pub file_type: Option<String>,
    pub sha256: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListDocumentsResponse {
    pub matching_results: Option<i64>,
    pub documents: Option<Vec<DocumentDetails>>,
}

/// Returned by `AddDocument` and `UpdateDocument`; ingestion is asynchronous.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentAccepted {
    pub document_id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteDocumentResponse {
    pub document_id: Option<String>,
    pub status: Option<String>,
}

/// Optional filters of `ListDocuments`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListDocumentsOptions {
    pub count: Option<i64>,
    /// Sent as one comma-separated `status` argument.
    pub status: Vec<String>,
    pub has_notices: Option<bool>,
    pub is_parent: Option<bool>,
    pub parent_document_id: Option<String>,
    pub sha256: Option<String>,
}

/// Multipart content of `AddDocument`, `UpdateDocument`, and
/// `AnalyzeDocument`. `metadata` is a JSON object serialized to a string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentUpload {
    pub file: Option<FileUpload>,
    pub metadata: Option<String>,
}

impl DocumentUpload {
    pub fn file(file: FileUpload) -> Self {
        Self {
            file: Some(file),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: &Value) -> Self {
        self.metadata = Some(metadata.to_string());
        self
    }
}

/// Result of `AnalyzeDocument`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalyzedDocument {
    pub notices: Option<Vec<Notice>>,
    pub result: Option<AnalyzedResult>,
}

/// Enriched document content; fields depend on the collection's enrichments.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalyzedResult {
    pub metadata: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_documents_from_fixture() {
        let fixture = r#"{
            "matching_results": 1,
            "documents": [{
                "document_id": "d1",
                "status": "available",
                "children": {"have_notices": false, "count": 0},
                "notices": [{"notice_id": "n1", "severity": "warning", "step": "indexing"}],
                "sha256": "abc"
            }]
        }"#;
        let response: ListDocumentsResponse = serde_json::from_str(fixture).unwrap();
        assert_eq!(response.matching_results, Some(1));
        let doc = &response.documents.unwrap()[0];
        assert_eq!(doc.document_id.as_deref(), Some("d1"));
        assert_eq!(doc.status.as_deref(), Some(document_status::AVAILABLE));
        assert_eq!(doc.children.as_ref().unwrap().count, Some(0));
        let notices = doc.notices.as_ref().unwrap();
        assert_eq!(notices[0].severity.as_deref(), Some(notice_severity::WARNING));
    }

    #[test]
    fn analyzed_result_keeps_enrichment_fields() {
        let fixture = r#"{"result": {"metadata": {"a": 1}, "text": ["hello"], "enriched_text": []}}"#;
        let analyzed: AnalyzedDocument = serde_json::from_str(fixture).unwrap();
        let result = analyzed.result.unwrap();
        assert_eq!(result.metadata.unwrap()["a"], 1);
        assert_eq!(result.fields["text"][0], "hello");
        assert!(result.fields.contains_key("enriched_text"));
        assert!(!result.fields.contains_key("metadata"));
    }

    #[test]
    fn upload_metadata_is_serialized_json() {
        let upload = DocumentUpload::file(FileUpload::new("x")).with_metadata(&serde_json::json!({"k": "v"}));
        assert_eq!(upload.metadata.as_deref(), Some(r#"{"k":"v"}"#));
    }
}
