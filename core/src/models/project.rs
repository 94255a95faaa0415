use serde::{Deserialize, Serialize};

/// Values of the project `type` field.
pub mod project_type {
    pub const DOCUMENT_RETRIEVAL: &str = "document_retrieval";
    pub const CONVERSATIONAL_SEARCH: &str = "conversational_search";
    pub const CONTENT_MINING: &str = "content_mining";
    pub const CONTENT_INTELLIGENCE: &str = "content_intelligence";
    pub const OTHER: &str = "other";
}

/// Relevancy training status of a project.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectRelTrainingStatus {
    pub data_updated: Option<String>,
    pub total_examples: Option<i64>,
    pub sufficient_label_diversity: Option<bool>,
    pub processing: Option<bool>,
    pub minimum_examples_added: Option<bool>,
    pub successfully_trained: Option<String>,
    pub available: Option<bool>,
    pub notices: Option<i64>,
    pub minimum_queries_added: Option<bool>,
}

/// Summary of a project as returned by `ListProjects`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectListEntry {
    pub project_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub relevancy_training_status: Option<ProjectRelTrainingStatus>,
    pub collection_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListProjectsResponse {
    pub projects: Option<Vec<ProjectListEntry>>,
}

/// Passage defaults applied to queries in a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultQueryParamsPassages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_document: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_per_document: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultQueryParamsTableResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_document: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultQueryParamsSuggestedRefinements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

/// Query parameters applied by default to every query in a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passages: Option<DefaultQueryParamsPassages>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_results: Option<DefaultQueryParamsTableResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_refinements: Option<DefaultQueryParamsSuggestedRefinements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spelling_suggestions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(rename = "return", skip_serializing_if = "Option::is_none")]
    pub return_fields: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProjectDetails {
    pub project_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub relevancy_training_status: Option<ProjectRelTrainingStatus>,
    pub collection_count: Option<i64>,
    pub default_query_parameters: Option<DefaultQueryParams>,
}

/// Body of `CreateProject`. `name` and `project_type` are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateProject {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_query_parameters: Option<DefaultQueryParams>,
}

/// Body of `UpdateProject`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateProject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A field that can be queried, as returned by `ListFields`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Field {
    pub field: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub collection_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListFieldsResponse {
    pub fields: Option<Vec<Field>>,
}

/// Display settings of the Discovery tooling for a project.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ComponentSettingsResponse {
    pub fields_shown: Option<ComponentSettingsFieldsShown>,
    pub autocomplete: Option<bool>,
    pub structured_search: Option<bool>,
    pub results_per_page: Option<i64>,
    pub aggregations: Option<Vec<ComponentSettingsAggregation>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ComponentSettingsFieldsShown {
    pub body: Option<ComponentSettingsFieldsShownBody>,
    pub title: Option<ComponentSettingsFieldsShownTitle>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ComponentSettingsFieldsShownBody {
    pub use_passage: Option<bool>,
    pub field: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ComponentSettingsFieldsShownTitle {
    pub field: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ComponentSettingsAggregation {
    pub name: Option<String>,
    pub label: Option<String>,
    pub multiple_selections_allowed: Option<bool>,
    pub visualization_type: Option<String>,
}
