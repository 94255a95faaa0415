use crate::builder::{require, to_json_part};
use crate::endpoint;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::models::{CreateEnrichment, UpdateEnrichment};
use crate::multipart::{FileUpload, MultipartForm};

use super::DiscoveryClient;

impl DiscoveryClient {
    pub fn build_list_enrichments(&self, project_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self.request(&endpoint::LIST_ENRICHMENTS, &[project_id])?.build())
    }

    /// `file` carries the dictionary, model, or rules archive for enrichment
    /// types that need one.
    pub fn build_create_enrichment(
        &self,
        project_id: &str,
        enrichment: &CreateEnrichment,
        file: Option<&FileUpload>,
    ) -> Result<HttpRequest, ApiError> {
        let form = MultipartForm::new()
            .text("enrichment", to_json_part(enrichment)?)
            .file_opt("file", file, "application/octet-stream");
        Ok(self
            .request(&endpoint::CREATE_ENRICHMENT, &[project_id])?
            .multipart(form)
            .build())
    }

    pub fn build_get_enrichment(&self, project_id: &str, enrichment_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::GET_ENRICHMENT, &[project_id, enrichment_id])?
            .build())
    }

    pub fn build_update_enrichment(
        &self,
        project_id: &str,
        enrichment_id: &str,
        body: &UpdateEnrichment,
    ) -> Result<HttpRequest, ApiError> {
        let builder = self.request(&endpoint::UPDATE_ENRICHMENT, &[project_id, enrichment_id])?;
        require(endpoint::UPDATE_ENRICHMENT.operation, "name", &body.name)?;
        Ok(builder.json(body)?.build())
    }

    pub fn build_delete_enrichment(&self, project_id: &str, enrichment_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::DELETE_ENRICHMENT, &[project_id, enrichment_id])?
            .build())
    }
}

#[cfg(test)]
mod tests {
    use crate::http::HttpMethod;
    use crate::models::{enrichment_type, CreateEnrichment, UpdateEnrichment};
    use crate::multipart::FileUpload;
    use crate::{ApiError, DiscoveryClient};

    fn client() -> DiscoveryClient {
        DiscoveryClient::new("https://example.com", "2023-03-31").unwrap()
    }

    #[test]
    fn build_create_enrichment_without_file() {
        let enrichment = CreateEnrichment {
            name: Some("terms".to_string()),
            enrichment_type: Some(enrichment_type::DICTIONARY.to_string()),
            ..Default::default()
        };
        let req = client().build_create_enrichment("p1", &enrichment, None).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "https://example.com/v2/projects/p1/enrichments");
        let form = req.body.as_ref().unwrap().as_multipart().unwrap();
        assert_eq!(form.part_names(), vec!["enrichment"]);
        let part = form.part("enrichment").unwrap();
        assert!(part.content_type.is_none());
        let json: serde_json::Value = serde_json::from_str(part.text().unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"name": "terms", "type": "dictionary"}));
    }

    #[test]
    fn build_create_enrichment_with_file() {
        let file = FileUpload::new("term1\nterm2").with_filename("terms.csv");
        let req = client()
            .build_create_enrichment("p1", &CreateEnrichment::default(), Some(&file))
            .unwrap();
        let form = req.body.as_ref().unwrap().as_multipart().unwrap();
        assert_eq!(form.part_names(), vec!["enrichment", "file"]);
        let part = form.part("file").unwrap();
        assert_eq!(part.filename.as_deref(), Some("terms.csv"));
        assert_eq!(part.content_type.as_deref(), Some("application/octet-stream"));
    }

    #[test]
    fn build_update_enrichment_requires_name() {
        let body = UpdateEnrichment {
            name: String::new(),
            description: Some("d".to_string()),
        };
        let err = client().build_update_enrichment("p1", "e1", &body).unwrap_err();
        assert!(matches!(
            err,
            ApiError::MissingArgument {
                operation: "UpdateEnrichment",
                parameter: "name"
            }
        ));
    }

    #[test]
    fn build_get_and_delete_enrichment() {
        let get = client().build_get_enrichment("p1", "e 1").unwrap();
        assert_eq!(get.path, "https://example.com/v2/projects/p1/enrichments/e%201");
        let delete = client().build_delete_enrichment("p1", "e1").unwrap();
        assert_eq!(delete.method, HttpMethod::Delete);
    }
}
