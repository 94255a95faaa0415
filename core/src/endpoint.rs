//! Operation descriptors for the Discovery v2 API.
//!
//! Every operation is one `Endpoint`: its wire name, HTTP verb, and path
//! template. Placeholders in braces are filled, in order, with the path
//! parameters handed to the request builder.

use crate::http::HttpMethod;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub operation: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
}

impl Endpoint {
    /// Names of the `{placeholders}` in the path template, in order.
    pub fn path_params(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            names.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        names
    }
}

const fn get(operation: &'static str, path: &'static str) -> Endpoint {
    Endpoint {
        operation,
        method: HttpMethod::Get,
        path,
    }
}

const fn post(operation: &'static str, path: &'static str) -> Endpoint {
    Endpoint {
        operation,
        method: HttpMethod::Post,
        path,
    }
}

const fn delete(operation: &'static str, path: &'static str) -> Endpoint {
    Endpoint {
        operation,
        method: HttpMethod::Delete,
        path,
    }
}

const PROJECT: &str = "/v2/projects/{project_id}";
const COLLECTION: &str = "/v2/projects/{project_id}/collections/{collection_id}";

// `concat!` only accepts literals, so the shared prefixes are spelled out.
macro_rules! path {
    (PROJECT, $suffix:literal) => {
        concat!("/v2/projects/{project_id}", $suffix)
    };
    (COLLECTION, $suffix:literal) => {
        concat!("/v2/projects/{project_id}/collections/{collection_id}", $suffix)
    };
}

// Projects
pub const LIST_PROJECTS: Endpoint = get("ListProjects", "/v2/projects");
pub const CREATE_PROJECT: Endpoint = post("CreateProject", "/v2/projects");
pub const GET_PROJECT: Endpoint = get("GetProject", PROJECT);
pub const UPDATE_PROJECT: Endpoint = post("UpdateProject", PROJECT);
pub const DELETE_PROJECT: Endpoint = delete("DeleteProject", PROJECT);
pub const LIST_FIELDS: Endpoint = get("ListFields", path!(PROJECT, "/fields"));

// Collections
pub const LIST_COLLECTIONS: Endpoint = get("ListCollections", path!(PROJECT, "/collections"));
pub const CREATE_COLLECTION: Endpoint = post("CreateCollection", path!(PROJECT, "/collections"));
pub const GET_COLLECTION: Endpoint = get("GetCollection", COLLECTION);
pub const UPDATE_COLLECTION: Endpoint = post("UpdateCollection", COLLECTION);
pub const DELETE_COLLECTION: Endpoint = delete("DeleteCollection", COLLECTION);

// Documents
pub const LIST_DOCUMENTS: Endpoint = get("ListDocuments", path!(COLLECTION, "/documents"));
pub const ADD_DOCUMENT: Endpoint = post("AddDocument", path!(COLLECTION, "/documents"));
pub const GET_DOCUMENT: Endpoint =
    get("GetDocument", path!(COLLECTION, "/documents/{document_id}"));
pub const UPDATE_DOCUMENT: Endpoint =
    post("UpdateDocument", path!(COLLECTION, "/documents/{document_id}"));
pub const DELETE_DOCUMENT: Endpoint =
    delete("DeleteDocument", path!(COLLECTION, "/documents/{document_id}"));

// Queries
pub const QUERY: Endpoint = post("Query", path!(PROJECT, "/query"));
pub const GET_AUTOCOMPLETION: Endpoint =
    get("GetAutocompletion", path!(PROJECT, "/autocompletion"));
pub const QUERY_COLLECTION_NOTICES: Endpoint =
    get("QueryCollectionNotices", path!(COLLECTION, "/notices"));
pub const QUERY_NOTICES: Endpoint = get("QueryNotices", path!(PROJECT, "/notices"));

// Query modifications
pub const GET_STOPWORD_LIST: Endpoint = get("GetStopwordList", path!(COLLECTION, "/stopwords"));
pub const CREATE_STOPWORD_LIST: Endpoint =
    post("CreateStopwordList", path!(COLLECTION, "/stopwords"));
pub const DELETE_STOPWORD_LIST: Endpoint =
    delete("DeleteStopwordList", path!(COLLECTION, "/stopwords"));
pub const LIST_EXPANSIONS: Endpoint = get("ListExpansions", path!(COLLECTION, "/expansions"));
pub const CREATE_EXPANSIONS: Endpoint = post("CreateExpansions", path!(COLLECTION, "/expansions"));
pub const DELETE_EXPANSIONS: Endpoint =
    delete("DeleteExpansions", path!(COLLECTION, "/expansions"));

// Component settings
pub const GET_COMPONENT_SETTINGS: Endpoint =
    get("GetComponentSettings", path!(PROJECT, "/component_settings"));

// Training data
pub const LIST_TRAINING_QUERIES: Endpoint =
    get("ListTrainingQueries", path!(PROJECT, "/training_data/queries"));
pub const DELETE_TRAINING_QUERIES: Endpoint =
    delete("DeleteTrainingQueries", path!(PROJECT, "/training_data/queries"));
pub const CREATE_TRAINING_QUERY: Endpoint =
    post("CreateTrainingQuery", path!(PROJECT, "/training_data/queries"));
pub const GET_TRAINING_QUERY: Endpoint =
    get("GetTrainingQuery", path!(PROJECT, "/training_data/queries/{query_id}"));
pub const UPDATE_TRAINING_QUERY: Endpoint =
    post("UpdateTrainingQuery", path!(PROJECT, "/training_data/queries/{query_id}"));
pub const DELETE_TRAINING_QUERY: Endpoint =
    delete("DeleteTrainingQuery", path!(PROJECT, "/training_data/queries/{query_id}"));

// Enrichments
pub const LIST_ENRICHMENTS: Endpoint = get("ListEnrichments", path!(PROJECT, "/enrichments"));
pub const CREATE_ENRICHMENT: Endpoint = post("CreateEnrichment", path!(PROJECT, "/enrichments"));
pub const GET_ENRICHMENT: Endpoint =
    get("GetEnrichment", path!(PROJECT, "/enrichments/{enrichment_id}"));
pub const UPDATE_ENRICHMENT: Endpoint =
    post("UpdateEnrichment", path!(PROJECT, "/enrichments/{enrichment_id}"));
pub const DELETE_ENRICHMENT: Endpoint =
    delete("DeleteEnrichment", path!(PROJECT, "/enrichments/{enrichment_id}"));

// Batches
pub const LIST_BATCHES: Endpoint = get("ListBatches", path!(COLLECTION, "/batches"));
pub const PULL_BATCHES: Endpoint = get("PullBatches", path!(COLLECTION, "/batches/{batch_id}"));
pub const PUSH_BATCHES: Endpoint = post("PushBatches", path!(COLLECTION, "/batches/{batch_id}"));

// Document classifiers
pub const LIST_DOCUMENT_CLASSIFIERS: Endpoint =
    get("ListDocumentClassifiers", path!(PROJECT, "/document_classifiers"));
pub const CREATE_DOCUMENT_CLASSIFIER: Endpoint =
    post("CreateDocumentClassifier", path!(PROJECT, "/document_classifiers"));
pub const GET_DOCUMENT_CLASSIFIER: Endpoint =
    get("GetDocumentClassifier", path!(PROJECT, "/document_classifiers/{classifier_id}"));
pub const UPDATE_DOCUMENT_CLASSIFIER: Endpoint =
    post("UpdateDocumentClassifier", path!(PROJECT, "/document_classifiers/{classifier_id}"));
pub const DELETE_DOCUMENT_CLASSIFIER: Endpoint =
    delete("DeleteDocumentClassifier", path!(PROJECT, "/document_classifiers/{classifier_id}"));

// Document classifier models
pub const LIST_DOCUMENT_CLASSIFIER_MODELS: Endpoint =
    get("ListDocumentClassifierModels", path!(PROJECT, "/document_classifiers/{classifier_id}/models"));
pub const CREATE_DOCUMENT_CLASSIFIER_MODEL: Endpoint =
    post("CreateDocumentClassifierModel", path!(PROJECT, "/document_classifiers/{classifier_id}/models"));
pub const GET_DOCUMENT_CLASSIFIER_MODEL: Endpoint = get(
    "GetDocumentClassifierModel",
    path!(PROJECT, "/document_classifiers/{classifier_id}/models/{model_id}"),
);
pub const UPDATE_DOCUMENT_CLASSIFIER_MODEL: Endpoint = post(
    "UpdateDocumentClassifierModel",
    path!(PROJECT, "/document_classifiers/{classifier_id}/models/{model_id}"),
);
pub const DELETE_DOCUMENT_CLASSIFIER_MODEL: Endpoint = delete(
    "DeleteDocumentClassifierModel",
    path!(PROJECT, "/document_classifiers/{classifier_id}/models/{model_id}"),
);

// Analyze
pub const ANALYZE_DOCUMENT: Endpoint = post("AnalyzeDocument", path!(COLLECTION, "/analyze"));

// User data
pub const DELETE_USER_DATA: Endpoint = delete("DeleteUserData", "/v2/user_data");

/// Every operation the client knows, in declaration order.
pub const ALL: &[Endpoint] = &[
    LIST_PROJECTS,
    CREATE_PROJECT,
    GET_PROJECT,
    UPDATE_PROJECT,
    DELETE_PROJECT,
    LIST_FIELDS,
    LIST_COLLECTIONS,
    CREATE_COLLECTION,
    GET_COLLECTION,
    UPDATE_COLLECTION,
    DELETE_COLLECTION,
    LIST_DOCUMENTS,
    ADD_DOCUMENT,
    GET_DOCUMENT,
    UPDATE_DOCUMENT,
    DELETE_DOCUMENT,
    QUERY,
    GET_AUTOCOMPLETION,
    QUERY_COLLECTION_NOTICES,
    QUERY_NOTICES,
    GET_STOPWORD_LIST,
    CREATE_STOPWORD_LIST,
    DELETE_STOPWORD_LIST,
    LIST_EXPANSIONS,
    CREATE_EXPANSIONS,
    DELETE_EXPANSIONS,
    GET_COMPONENT_SETTINGS,
    LIST_TRAINING_QUERIES,
    DELETE_TRAINING_QUERIES,
    CREATE_TRAINING_QUERY,
    GET_TRAINING_QUERY,
    UPDATE_TRAINING_QUERY,
    DELETE_TRAINING_QUERY,
    LIST_ENRICHMENTS,
    CREATE_ENRICHMENT,
    GET_ENRICHMENT,
    UPDATE_ENRICHMENT,
    DELETE_ENRICHMENT,
    LIST_BATCHES,
    PULL_BATCHES,
    PUSH_BATCHES,
    LIST_DOCUMENT_CLASSIFIERS,
    CREATE_DOCUMENT_CLASSIFIER,
    GET_DOCUMENT_CLASSIFIER,
    UPDATE_DOCUMENT_CLASSIFIER,
    DELETE_DOCUMENT_CLASSIFIER,
    LIST_DOCUMENT_CLASSIFIER_MODELS,
    CREATE_DOCUMENT_CLASSIFIER_MODEL,
    GET_DOCUMENT_CLASSIFIER_MODEL,
    UPDATE_DOCUMENT_CLASSIFIER_MODEL,
    DELETE_DOCUMENT_CLASSIFIER_MODEL,
    ANALYZE_DOCUMENT,
    DELETE_USER_DATA,
];
