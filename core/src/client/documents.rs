use crate::builder::FORCE_HEADER;
use crate::endpoint;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::models::{DocumentUpload, ListDocumentsOptions};
use crate::multipart::MultipartForm;

use super::DiscoveryClient;

const OCTET_STREAM: &str = "application/octet-stream";

fn document_form(upload: &DocumentUpload) -> MultipartForm {
    MultipartForm::new()
        .file_opt("file", upload.file.as_ref(), OCTET_STREAM)
        .text_opt("metadata", upload.metadata.as_deref())
}

impl DiscoveryClient {
    pub fn build_list_documents(
        &self,
        project_id: &str,
        collection_id: &str,
        options: &ListDocumentsOptions,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::LIST_DOCUMENTS, &[project_id, collection_id])?
            .query_opt("count", options.count)
            .query_list("status", &options.status)
            .query_opt("has_notices", options.has_notices)
            .query_opt("is_parent", options.is_parent)
            .query_opt("parent_document_id", options.parent_document_id.as_deref())
            .query_opt("sha256", options.sha256.as_deref())
            .build())
    }

    /// `force` maps to the `X-Watson-Discovery-Force` header and is only
    /// sent when set.
    pub fn build_add_document(
        &self,
        project_id: &str,
        collection_id: &str,
        upload: &DocumentUpload,
        force: Option<bool>,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::ADD_DOCUMENT, &[project_id, collection_id])?
            .header_opt(FORCE_HEADER, force)
            .multipart(document_form(upload))
            .build())
    }

    pub fn build_get_document(
        &self,
        project_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::GET_DOCUMENT, &[project_id, collection_id, document_id])?
            .build())
    }

    pub fn build_update_document(
        &self,
        project_id: &str,
        collection_id: &str,
        document_id: &str,
        upload: &DocumentUpload,
        force: Option<bool>,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::UPDATE_DOCUMENT, &[project_id, collection_id, document_id])?
            .header_opt(FORCE_HEADER, force)
            .multipart(document_form(upload))
            .build())
    }

    pub fn build_delete_document(
        &self,
        project_id: &str,
        collection_id: &str,
        document_id: &str,
        force: Option<bool>,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::DELETE_DOCUMENT, &[project_id, collection_id, document_id])?
            .header_opt(FORCE_HEADER, force)
            .build())
    }

    /// Runs the collection's enrichments on `upload` without storing it.
    pub fn build_analyze_document(
        &self,
        project_id: &str,
        collection_id: &str,
        upload: &DocumentUpload,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::ANALYZE_DOCUMENT, &[project_id, collection_id])?
            .multipart(document_form(upload))
            .build())
    }
}
