use crate::endpoint::{self, Endpoint};
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::models::{AutocompletionOptions, NoticesQuery, QueryRequest};

use super::DiscoveryClient;

impl DiscoveryClient {
    pub fn build_query(&self, project_id: &str, body: &QueryRequest) -> Result<HttpRequest, ApiError> {
        Ok(self.request(&endpoint::QUERY, &[project_id])?.json(body)?.build())
    }

    /// Completions for `prefix`, which is required.
    pub fn build_get_autocompletion(
        &self,
        project_id: &str,
        prefix: &str,
        options: &AutocompletionOptions,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::GET_AUTOCOMPLETION, &[project_id])?
            .query_required("prefix", prefix)?
            .query_list("collection_ids", &options.collection_ids)
            .query_opt("field", options.field.as_deref())
            .query_opt("count", options.count)
            .build())
    }

    pub fn build_query_collection_notices(
        &self,
        project_id: &str,
        collection_id: &str,
        options: &NoticesQuery,
    ) -> Result<HttpRequest, ApiError> {
        self.notices_request(&endpoint::QUERY_COLLECTION_NOTICES, &[project_id, collection_id], options)
    }

    pub fn build_query_notices(&self, project_id: &str, options: &NoticesQuery) -> Result<HttpRequest, ApiError> {
        self.notices_request(&endpoint::QUERY_NOTICES, &[project_id], options)
    }

    fn notices_request(
        &self,
        endpoint: &Endpoint,
        path_params: &[&str],
        options: &NoticesQuery,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(endpoint, path_params)?
            .query_opt("filter", options.filter.as_deref())
            .query_opt("query", options.query.as_deref())
            .query_opt("natural_language_query", options.natural_language_query.as_deref())
            .query_opt("count", options.count)
            .query_opt("offset", options.offset)
            .build())
    }
}
