use crate::builder::{require, require_list};
use crate::endpoint;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::models::{CreateCollection, Expansions, StopWordList, UpdateCollection};

use super::DiscoveryClient;

impl DiscoveryClient {
    pub fn build_list_collections(&self, project_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self.request(&endpoint::LIST_COLLECTIONS, &[project_id])?.build())
    }

    pub fn build_create_collection(
        &self,
        project_id: &str,
        body: &CreateCollection,
    ) -> Result<HttpRequest, ApiError> {
        let builder = self.request(&endpoint::CREATE_COLLECTION, &[project_id])?;
        require(endpoint::CREATE_COLLECTION.operation, "name", &body.name)?;
        Ok(builder.json(body)?.build())
    }

    pub fn build_get_collection(&self, project_id: &str, collection_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::GET_COLLECTION, &[project_id, collection_id])?
            .build())
    }

    pub fn build_update_collection(
        &self,
        project_id: &str,
        collection_id: &str,
        body: &UpdateCollection,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::UPDATE_COLLECTION, &[project_id, collection_id])?
            .json(body)?
            .build())
    }

    pub fn build_delete_collection(&self, project_id: &str, collection_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::DELETE_COLLECTION, &[project_id, collection_id])?
            .build())
    }

    pub fn build_get_stopword_list(&self, project_id: &str, collection_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::GET_STOPWORD_LIST, &[project_id, collection_id])?
            .build())
    }

    /// Replaces the collection's stopword list.
    pub fn build_create_stopword_list(
        &self,
        project_id: &str,
        collection_id: &str,
        body: &StopWordList,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::CREATE_STOPWORD_LIST, &[project_id, collection_id])?
            .json(body)?
            .build())
    }

    pub fn build_delete_stopword_list(
        &self,
        project_id: &str,
        collection_id: &str,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::DELETE_STOPWORD_LIST, &[project_id, collection_id])?
            .build())
    }

    pub fn build_list_expansions(&self, project_id: &str, collection_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::LIST_EXPANSIONS, &[project_id, collection_id])?
            .build())
    }

    /// Replaces the collection's expansion list; at least one expansion is required.
    pub fn build_create_expansions(
        &self,
        project_id: &str,
        collection_id: &str,
        body: &Expansions,
    ) -> Result<HttpRequest, ApiError> {
        let builder = self.request(&endpoint::CREATE_EXPANSIONS, &[project_id, collection_id])?;
        require_list(endpoint::CREATE_EXPANSIONS.operation, "expansions", &body.expansions)?;
        Ok(builder.json(body)?.build())
    }

    pub fn build_delete_expansions(&self, project_id: &str, collection_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::DELETE_EXPANSIONS, &[project_id, collection_id])?
            .build())
    }
}
