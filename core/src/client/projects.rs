use crate::builder::require;
use crate::endpoint;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::models::{CreateProject, UpdateProject};

use super::DiscoveryClient;

impl DiscoveryClient {
    pub fn build_list_projects(&self) -> Result<HttpRequest, ApiError> {
        Ok(self.request(&endpoint::LIST_PROJECTS, &[])?.build())
    }

    pub fn build_create_project(&self, body: &CreateProject) -> Result<HttpRequest, ApiError> {
        let op = endpoint::CREATE_PROJECT.operation;
        require(op, "name", &body.name)?;
        require(op, "type", &body.project_type)?;
        Ok(self.request(&endpoint::CREATE_PROJECT, &[])?.json(body)?.build())
    }

    pub fn build_get_project(&self, project_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self.request(&endpoint::GET_PROJECT, &[project_id])?.build())
    }

    pub fn build_update_project(&self, project_id: &str, body: &UpdateProject) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::UPDATE_PROJECT, &[project_id])?
            .json(body)?
            .build())
    }

    pub fn build_delete_project(&self, project_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self.request(&endpoint::DELETE_PROJECT, &[project_id])?.build())
    }

    /// `collection_ids` restricts the listing and is sent comma-separated.
    pub fn build_list_fields(&self, project_id: &str, collection_ids: &[String]) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::LIST_FIELDS, &[project_id])?
            .query_list("collection_ids", collection_ids)
            .build())
    }

    pub fn build_get_component_settings(&self, project_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self.request(&endpoint::GET_COMPONENT_SETTINGS, &[project_id])?.build())
    }

    /// Deletes all data associated with `customer_id` across the instance.
    pub fn build_delete_user_data(&self, customer_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::DELETE_USER_DATA, &[])?
            .query_required("customer_id", customer_id)?
            .build())
    }
}

#[cfg(test)]
mod tests {
    use crate::http::HttpMethod;
    use crate::models::{project_type, CreateProject, UpdateProject};
    use crate::{ApiError, DiscoveryClient};

    fn client() -> DiscoveryClient {
        DiscoveryClient::new("https://example.com", "2023-03-31").unwrap()
    }

    #[test]
    fn build_create_project_produces_correct_request() {
        let body = CreateProject {
            name: "testString".to_string(),
            project_type: project_type::OTHER.to_string(),
            default_query_parameters: None,
        };
        let req = client().build_create_project(&body).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url(), "https://example.com/v2/projects?version=2023-03-31");
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        let json: serde_json::Value = serde_json::from_str(req.body.unwrap().as_json().unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"name": "testString", "type": "other"}));
    }

    #[test]
    fn build_create_project_requires_name_and_type() {
        let body = CreateProject {
            name: String::new(),
            project_type: project_type::OTHER.to_string(),
            default_query_parameters: None,
        };
        let err = client().build_create_project(&body).unwrap_err();
        assert!(matches!(
            err,
            ApiError::MissingArgument {
                operation: "CreateProject",
                parameter: "name"
            }
        ));

        let body = CreateProject {
            name: "n".to_string(),
            ..Default::default()
        };
        let err = client().build_create_project(&body).unwrap_err();
        assert!(matches!(err, ApiError::MissingArgument { parameter: "type", .. }));
    }

    #[test]
    fn build_update_project_posts_partial_body() {
        let req = client()
            .build_update_project("p1", &UpdateProject { name: None })
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "https://example.com/v2/projects/p1");
        assert_eq!(req.body.unwrap().as_json(), Some("{}"));
    }

    #[test]
    fn build_delete_project_requires_id() {
        let err = client().build_delete_project("").unwrap_err();
        assert!(matches!(
            err,
            ApiError::MissingArgument {
                operation: "DeleteProject",
                parameter: "project_id"
            }
        ));
    }

    #[test]
    fn build_list_fields_joins_collection_ids() {
        let ids = vec!["c1".to_string(), "c2".to_string()];
        let req = client().build_list_fields("p1", &ids).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "https://example.com/v2/projects/p1/fields");
        assert_eq!(req.query_arg("collection_ids"), Some("c1,c2"));

        let req = client().build_list_fields("p1", &[]).unwrap();
        assert_eq!(req.query.len(), 1);
    }

    #[test]
    fn build_delete_user_data_requires_customer_id() {
        let req = client().build_delete_user_data("cust 1").unwrap();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(
            req.url(),
            "https://example.com/v2/user_data?version=2023-03-31&customer_id=cust%201"
        );

        let err = client().build_delete_user_data("").unwrap_err();
        assert!(matches!(err, ApiError::MissingArgument { parameter: "customer_id", .. }));
    }
}
