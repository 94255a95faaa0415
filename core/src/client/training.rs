use crate::builder::{require, require_list};
use crate::endpoint::{self, Endpoint};
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::models::TrainingQueryInput;

use super::DiscoveryClient;

fn check_input(endpoint: &Endpoint, body: &TrainingQueryInput) -> Result<(), ApiError> {
    require(endpoint.operation, "natural_language_query", &body.natural_language_query)?;
    require_list(endpoint.operation, "examples", &body.examples)
}

impl DiscoveryClient {
    pub fn build_list_training_queries(&self, project_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self.request(&endpoint::LIST_TRAINING_QUERIES, &[project_id])?.build())
    }

    /// Removes every training query of the project.
    pub fn build_delete_training_queries(&self, project_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self.request(&endpoint::DELETE_TRAINING_QUERIES, &[project_id])?.build())
    }

    pub fn build_create_training_query(
        &self,
        project_id: &str,
        body: &TrainingQueryInput,
    ) -> Result<HttpRequest, ApiError> {
        let builder = self.request(&endpoint::CREATE_TRAINING_QUERY, &[project_id])?;
        check_input(&endpoint::CREATE_TRAINING_QUERY, body)?;
        Ok(builder.json(body)?.build())
    }

    pub fn build_get_training_query(&self, project_id: &str, query_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::GET_TRAINING_QUERY, &[project_id, query_id])?
            .build())
    }

    pub fn build_update_training_query(
        &self,
        project_id: &str,
        query_id: &str,
        body: &TrainingQueryInput,
    ) -> Result<HttpRequest, ApiError> {
        let builder = self.request(&endpoint::UPDATE_TRAINING_QUERY, &[project_id, query_id])?;
        check_input(&endpoint::UPDATE_TRAINING_QUERY, body)?;
        Ok(builder.json(body)?.build())
    }

    pub fn build_delete_training_query(&self, project_id: &str, query_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::DELETE_TRAINING_QUERY, &[project_id, query_id])?
            .build())
    }
}
