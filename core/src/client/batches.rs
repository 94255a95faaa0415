use crate::endpoint;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::multipart::{FileUpload, MultipartForm};

use super::DiscoveryClient;

impl DiscoveryClient {
    pub fn build_list_batches(&self, project_id: &str, collection_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::LIST_BATCHES, &[project_id, collection_id])?
            .build())
    }

    pub fn build_pull_batches(
        &self,
        project_id: &str,
        collection_id: &str,
        batch_id: &str,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::PULL_BATCHES, &[project_id, collection_id, batch_id])?
            .build())
    }

    /// Returns externally enriched documents for `batch_id`.
    pub fn build_push_batches(
        &self,
        project_id: &str,
        collection_id: &str,
        batch_id: &str,
        file: Option<&FileUpload>,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::PUSH_BATCHES, &[project_id, collection_id, batch_id])?
            .multipart(MultipartForm::new().file_opt("file", file, "application/octet-stream"))
            .build())
    }
}
