//! In-memory stand-in for the Discovery v2 REST API.
//!
//! Implements enough of the wire contract for end-to-end client tests:
//! projects, collections, documents (multipart uploads), project queries,
//! training queries, and user data deletion. Every route requires the
//! `version` query argument, like the real service.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Multipart, Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

const DEFAULT_QUERY_COUNT: usize = 10;

#[derive(Debug)]
pub struct MockError {
    status: StatusCode,
    message: String,
}

impl MockError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn not_found(what: &str, id: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("{what} {id} not found"),
        }
    }
}

/// Errors use the service's `{"code": .., "error": ..}` shape.
impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        let body = json!({"code": self.status.as_u16(), "error": self.message});
        (self.status, Json(body)).into_response()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub project_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: String,
    pub collection_count: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Collection {
    pub collection_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub language: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Document {
    pub document_id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(skip)]
    pub text: String,
    #[serde(skip)]
    pub metadata: Option<Map<String, Value>>,
}

#[derive(Deserialize)]
pub struct CreateProject {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: String,
}

#[derive(Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateCollection {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateCollection {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct QueryInput {
    pub collection_ids: Option<Vec<String>>,
    pub count: Option<usize>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainingExample {
    pub document_id: String,
    pub collection_id: String,
    pub relevance: i64,
}

#[derive(Deserialize)]
pub struct TrainingQueryInput {
    #[serde(default)]
    pub natural_language_query: String,
    pub filter: Option<String>,
    #[serde(default)]
    pub examples: Vec<TrainingExample>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainingQuery {
    pub query_id: String,
    pub natural_language_query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    pub examples: Vec<TrainingExample>,
}

#[derive(Default)]
struct ProjectEntry {
    name: String,
    project_type: String,
    collections: HashMap<String, CollectionEntry>,
    training_queries: Vec<TrainingQuery>,
}

impl ProjectEntry {
    fn view(&self, project_id: &str) -> Project {
        Project {
            project_id: project_id.to_string(),
            name: self.name.clone(),
            project_type: self.project_type.clone(),
            collection_count: self.collections.len(),
        }
    }
}

struct CollectionEntry {
    collection: Collection,
    /// Insertion order is the query result order.
    documents: Vec<Document>,
}

type Db = Arc<RwLock<HashMap<String, ProjectEntry>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/v2/projects", get(list_projects).post(create_project))
        .route(
            "/v2/projects/{project_id}",
            get(get_project).post(update_project).delete(delete_project),
        )
        .route(
            "/v2/projects/{project_id}/collections",
            get(list_collections).post(create_collection),
        )
        .route(
            "/v2/projects/{project_id}/collections/{collection_id}",
            get(get_collection).post(update_collection).delete(delete_collection),
        )
        .route(
            "/v2/projects/{project_id}/collections/{collection_id}/documents",
            get(list_documents).post(add_document),
        )
        .route(
            "/v2/projects/{project_id}/collections/{collection_id}/documents/{document_id}",
            get(get_document).delete(delete_document),
        )
        .route("/v2/projects/{project_id}/query", post(query))
        .route(
            "/v2/projects/{project_id}/training_data/queries",
            get(list_training_queries)
                .post(create_training_query)
                .delete(delete_training_queries),
        )
        .route("/v2/user_data", delete(delete_user_data))
        .layer(middleware::from_fn(require_version))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// True when `query` carries a non-empty `version` argument.
pub fn has_version(query: Option<&str>) -> bool {
    query
        .unwrap_or_default()
        .split('&')
        .any(|pair| pair.strip_prefix("version=").is_some_and(|v| !v.is_empty()))
}

async fn require_version(req: Request, next: Next) -> Response {
    debug!(method = %req.method(), uri = %req.uri(), "request");
    if !has_version(req.uri().query()) {
        return MockError::bad_request("Missing required query parameter: version").into_response();
    }
    next.run(req).await
}

// --- projects ---

async fn list_projects(State(db): State<Db>) -> Json<Value> {
    let projects = db.read().await;
    let list: Vec<Project> = projects.iter().map(|(id, entry)| entry.view(id)).collect();
    Json(json!({ "projects": list }))
}

async fn create_project(State(db): State<Db>, Json(input): Json<CreateProject>) -> (StatusCode, Json<Project>) {
    let project_id = Uuid::new_v4().to_string();
    let entry = ProjectEntry {
        name: input.name,
        project_type: input.project_type,
        ..Default::default()
    };
    let view = entry.view(&project_id);
    db.write().await.insert(project_id.clone(), entry);
    info!(%project_id, "created project");
    (StatusCode::OK, Json(view))
}

async fn get_project(State(db): State<Db>, Path(project_id): Path<String>) -> Result<Json<Project>, MockError> {
    let projects = db.read().await;
    let entry = projects
        .get(&project_id)
        .ok_or_else(|| MockError::not_found("Project", &project_id))?;
    Ok(Json(entry.view(&project_id)))
}

async fn update_project(
    State(db): State<Db>,
    Path(project_id): Path<String>,
    Json(input): Json<UpdateProject>,
) -> Result<Json<Project>, MockError> {
    let mut projects = db.write().await;
    let entry = projects
        .get_mut(&project_id)
        .ok_or_else(|| MockError::not_found("Project", &project_id))?;
    if let Some(name) = input.name {
        entry.name = name;
    }
    Ok(Json(entry.view(&project_id)))
}

async fn delete_project(State(db): State<Db>, Path(project_id): Path<String>) -> Result<StatusCode, MockError> {
    db.write()
        .await
        .remove(&project_id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| MockError::not_found("Project", &project_id))
}

// --- collections ---

async fn list_collections(State(db): State<Db>, Path(project_id): Path<String>) -> Result<Json<Value>, MockError> {
    let projects = db.read().await;
    let entry = projects
        .get(&project_id)
        .ok_or_else(|| MockError::not_found("Project", &project_id))?;
    let list: Vec<Value> = entry
        .collections
        .values()
        .map(|c| json!({"collection_id": c.collection.collection_id, "name": c.collection.name}))
        .collect();
    Ok(Json(json!({ "collections": list })))
}

async fn create_collection(
    State(db): State<Db>,
    Path(project_id): Path<String>,
    Json(input): Json<CreateCollection>,
) -> Result<(StatusCode, Json<Collection>), MockError> {
    let mut projects = db.write().await;
    let entry = projects
        .get_mut(&project_id)
        .ok_or_else(|| MockError::not_found("Project", &project_id))?;
    let collection = Collection {
        collection_id: Uuid::new_v4().to_string(),
        name: input.name,
        description: input.description,
        language: input.language.unwrap_or_else(|| "en".to_string()),
    };
    entry.collections.insert(
        collection.collection_id.clone(),
        CollectionEntry {
            collection: collection.clone(),
            documents: Vec::new(),
        },
    );
    info!(%project_id, collection_id = %collection.collection_id, "created collection");
    Ok((StatusCode::CREATED, Json(collection)))
}

async fn get_collection(
    State(db): State<Db>,
    Path((project_id, collection_id)): Path<(String, String)>,
) -> Result<Json<Collection>, MockError> {
    let projects = db.read().await;
    let entry = find_collection(&projects, &project_id, &collection_id)?;
    Ok(Json(entry.collection.clone()))
}

async fn update_collection(
    State(db): State<Db>,
    Path((project_id, collection_id)): Path<(String, String)>,
    Json(input): Json<UpdateCollection>,
) -> Result<Json<Collection>, MockError> {
    let mut projects = db.write().await;
    let entry = find_collection_mut(&mut projects, &project_id, &collection_id)?;
    if let Some(name) = input.name {
        entry.collection.name = name;
    }
    if input.description.is_some() {
        entry.collection.description = input.description;
    }
    Ok(Json(entry.collection.clone()))
}

async fn delete_collection(
    State(db): State<Db>,
    Path((project_id, collection_id)): Path<(String, String)>,
) -> Result<StatusCode, MockError> {
    let mut projects = db.write().await;
    let entry = projects
        .get_mut(&project_id)
        .ok_or_else(|| MockError::not_found("Project", &project_id))?;
    entry
        .collections
        .remove(&collection_id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| MockError::not_found("Collection", &collection_id))
}

fn find_collection<'a>(
    projects: &'a HashMap<String, ProjectEntry>,
    project_id: &str,
    collection_id: &str,
) -> Result<&'a CollectionEntry, MockError> {
    projects
        .get(project_id)
        .ok_or_else(|| MockError::not_found("Project", project_id))?
        .collections
        .get(collection_id)
        .ok_or_else(|| MockError::not_found("Collection", collection_id))
}

fn find_collection_mut<'a>(
    projects: &'a mut HashMap<String, ProjectEntry>,
    project_id: &str,
    collection_id: &str,
) -> Result<&'a mut CollectionEntry, MockError> {
    projects
        .get_mut(project_id)
        .ok_or_else(|| MockError::not_found("Project", project_id))?
        .collections
        .get_mut(collection_id)
        .ok_or_else(|| MockError::not_found("Collection", collection_id))
}

// --- documents ---

async fn list_documents(
    State(db): State<Db>,
    Path((project_id, collection_id)): Path<(String, String)>,
) -> Result<Json<Value>, MockError> {
    let projects = db.read().await;
    let entry = find_collection(&projects, &project_id, &collection_id)?;
    Ok(Json(json!({
        "matching_results": entry.documents.len(),
        "documents": entry.documents,
    })))
}

/// Accepts `file` and `metadata` parts; at least one must be present.
async fn add_document(
    State(db): State<Db>,
    Path((project_id, collection_id)): Path<(String, String)>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), MockError> {
    let mut document = Document {
        document_id: Uuid::new_v4().to_string(),
        status: "available".to_string(),
        filename: None,
        file_type: None,
        text: String::new(),
        metadata: None,
    };
    let mut received = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| MockError::bad_request(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| MockError::bad_request(e.body_text()))?;
        match name.as_str() {
            "file" => {
                document.filename = filename;
                document.file_type = content_type;
                document.text = String::from_utf8_lossy(&bytes).into_owned();
                received = true;
            }
            "metadata" => {
                let metadata: Map<String, Value> = serde_json::from_slice(&bytes)
                    .map_err(|e| MockError::bad_request(format!("invalid metadata: {e}")))?;
                document.metadata = Some(metadata);
                received = true;
            }
            other => return Err(MockError::bad_request(format!("unexpected part `{other}`"))),
        }
    }
    if !received {
        return Err(MockError::bad_request("No file or metadata provided"));
    }

    let mut projects = db.write().await;
    let entry = find_collection_mut(&mut projects, &project_id, &collection_id)?;
    let document_id = document.document_id.clone();
    entry.documents.push(document);
    info!(%collection_id, %document_id, "accepted document");
    Ok((
        StatusCode::ACCEPTED,
        Json(json!({"document_id": document_id, "status": "processing"})),
    ))
}

async fn get_document(
    State(db): State<Db>,
    Path((project_id, collection_id, document_id)): Path<(String, String, String)>,
) -> Result<Json<Document>, MockError> {
    let projects = db.read().await;
    let entry = find_collection(&projects, &project_id, &collection_id)?;
    entry
        .documents
        .iter()
        .find(|d| d.document_id == document_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| MockError::not_found("Document", &document_id))
}

async fn delete_document(
    State(db): State<Db>,
    Path((project_id, collection_id, document_id)): Path<(String, String, String)>,
) -> Result<Json<Value>, MockError> {
    let mut projects = db.write().await;
    let entry = find_collection_mut(&mut projects, &project_id, &collection_id)?;
    let before = entry.documents.len();
    entry.documents.retain(|d| d.document_id != document_id);
    if entry.documents.len() == before {
        return Err(MockError::not_found("Document", &document_id));
    }
    Ok(Json(json!({"document_id": document_id, "status": "deleted"})))
}

// --- query ---

/// Returns stored documents of the selected collections in insertion order,
/// at most `count` of them.
async fn query(
    State(db): State<Db>,
    Path(project_id): Path<String>,
    Json(input): Json<QueryInput>,
) -> Result<Json<Value>, MockError> {
    let projects = db.read().await;
    let entry = projects
        .get(&project_id)
        .ok_or_else(|| MockError::not_found("Project", &project_id))?;

    let mut collections: Vec<&CollectionEntry> = entry
        .collections
        .values()
        .filter(|c| {
            input
                .collection_ids
                .as_ref()
                .map_or(true, |ids| ids.contains(&c.collection.collection_id))
        })
        .collect();
    collections.sort_by(|a, b| a.collection.collection_id.cmp(&b.collection.collection_id));

    let matching: Vec<Value> = collections
        .iter()
        .flat_map(|c| c.documents.iter().map(move |d| query_result(&c.collection.collection_id, d)))
        .collect();
    let count = input.count.unwrap_or(DEFAULT_QUERY_COUNT);
    let results: Vec<Value> = matching.iter().take(count).cloned().collect();

    Ok(Json(json!({
        "matching_results": matching.len(),
        "results": results,
        "retrieval_details": {"document_retrieval_strategy": "untrained"},
    })))
}

fn query_result(collection_id: &str, document: &Document) -> Value {
    let mut result = json!({
        "document_id": document.document_id,
        "result_metadata": {"collection_id": collection_id, "confidence": 1.0},
        "text": document.text,
    });
    if let (Some(metadata), Some(object)) = (&document.metadata, result.as_object_mut()) {
        object.insert("metadata".to_string(), Value::Object(metadata.clone()));
    }
    result
}

// --- training data ---

async fn list_training_queries(
    State(db): State<Db>,
    Path(project_id): Path<String>,
) -> Result<Json<Value>, MockError> {
    let projects = db.read().await;
    let entry = projects
        .get(&project_id)
        .ok_or_else(|| MockError::not_found("Project", &project_id))?;
    Ok(Json(json!({ "queries": entry.training_queries })))
}

async fn create_training_query(
    State(db): State<Db>,
    Path(project_id): Path<String>,
    Json(input): Json<TrainingQueryInput>,
) -> Result<(StatusCode, Json<TrainingQuery>), MockError> {
    if input.natural_language_query.trim().is_empty() {
        return Err(MockError::bad_request("natural_language_query is required"));
    }
    if input.examples.is_empty() {
        return Err(MockError::bad_request("examples must not be empty"));
    }
    let mut projects = db.write().await;
    let entry = projects
        .get_mut(&project_id)
        .ok_or_else(|| MockError::not_found("Project", &project_id))?;
    let query = TrainingQuery {
        query_id: Uuid::new_v4().to_string(),
        natural_language_query: input.natural_language_query,
        filter: input.filter,
        examples: input.examples,
    };
    entry.training_queries.push(query.clone());
    Ok((StatusCode::CREATED, Json(query)))
}

async fn delete_training_queries(
    State(db): State<Db>,
    Path(project_id): Path<String>,
) -> Result<StatusCode, MockError> {
    let mut projects = db.write().await;
    let entry = projects
        .get_mut(&project_id)
        .ok_or_else(|| MockError::not_found("Project", &project_id))?;
    entry.training_queries.clear();
    Ok(StatusCode::NO_CONTENT)
}

// --- user data ---

async fn delete_user_data(Query(params): Query<HashMap<String, String>>) -> Result<StatusCode, MockError> {
    match params.get("customer_id").filter(|id| !id.is_empty()) {
        Some(customer_id) => {
            info!(%customer_id, "deleted user data");
            Ok(StatusCode::OK)
        }
        None => Err(MockError::bad_request("Missing required query parameter: customer_id")),
    }
}
