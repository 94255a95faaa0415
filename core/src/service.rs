//! Blocking Discovery v2 service: request building, authentication, and
//! transport wired together.
//!
//! # Design
//! Every operation method is `build -> authenticate -> transport -> parse`.
//! Building fails before any I/O when a required argument is missing.
//! Callers that need an extra header on one call build the request through
//! [`DiscoveryService::client`], attach it with `HttpRequest::with_header`,
//! and send it through [`DiscoveryService::execute`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::Authenticator;
use crate::client::DiscoveryClient;
use crate::config::{ClientConfig, ResolvedConfig};
use crate::error::ApiError;
use crate::http::{DetailedResponse, HttpRequest, HttpResponse};
use crate::models::{
    AnalyzedDocument, AutocompletionOptions, CollectionDetails, Completions, ComponentSettingsResponse,
    CreateCollection, CreateDocumentClassifier, CreateDocumentClassifierModel, CreateEnrichment, CreateProject,
    DeleteDocumentResponse, DocumentAccepted, DocumentClassifier, DocumentClassifierModel, DocumentClassifierModels,
    DocumentClassifiers, DocumentDetails, DocumentUpload, Enrichment, Enrichments, Expansions, ListBatchesResponse,
    ListCollectionsResponse, ListDocumentsOptions, ListDocumentsResponse, ListFieldsResponse, ListProjectsResponse,
    NoticesQuery, ProjectDetails, PullBatchesResponse, QueryNoticesResponse, QueryRequest, QueryResponse,
    StopWordList, TrainingQuery, TrainingQueryInput, TrainingQuerySet, UpdateCollection, UpdateDocumentClassifier,
    UpdateDocumentClassifierModel, UpdateEnrichment, UpdateProject,
};
use crate::multipart::FileUpload;
use crate::transport::Transport;
#[cfg(feature = "ureq")]
use crate::transport::UreqTransport;

type Response<T> = Result<DetailedResponse<T>, ApiError>;

#[derive(Debug)]
pub struct DiscoveryService<T> {
    client: DiscoveryClient,
    authenticator: Arc<dyn Authenticator>,
    transport: T,
}

#[cfg(feature = "ureq")]
impl DiscoveryService<UreqTransport> {
    /// Resolve `config` against the environment and talk HTTP through `ureq`.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let resolved = config.resolve()?;
        let transport = match &resolved.proxy {
            Some(url) => UreqTransport::with_proxy(url)?,
            None => UreqTransport::new(),
        };
        Self::from_resolved(resolved, transport)
    }
}

impl<T: Transport> DiscoveryService<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Result<Self, ApiError> {
        Self::from_resolved(config.resolve()?, transport)
    }

    pub fn from_resolved(config: ResolvedConfig, transport: T) -> Result<Self, ApiError> {
        Ok(Self {
            client: DiscoveryClient::new(&config.service_url, &config.version)?,
            authenticator: config.authenticator,
            transport,
        })
    }

    /// The request builder behind this service.
    pub fn client(&self) -> &DiscoveryClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request built by [`DiscoveryService::client`] and parse a JSON result.
    pub fn execute<R>(&self, request: HttpRequest) -> Response<R>
    where
        R: DeserializeOwned + Default,
    {
        let response = self.dispatch(request)?;
        self.client.parse_json(response)
    }

    /// Send a request whose response body is ignored.
    pub fn execute_empty(&self, request: HttpRequest) -> Response<()> {
        let response = self.dispatch(request)?;
        self.client.parse_empty(response)
    }

    fn dispatch(&self, mut request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.authenticator.authenticate(&mut request)?;
        debug!(
            operation = request.operation,
            method = request.method.as_str(),
            url = %request.url(),
            "dispatching request"
        );
        let response = self.transport.execute(&request)?;
        if (200..300).contains(&response.status) {
            debug!(operation = request.operation, status = response.status, "received response");
        } else {
            warn!(operation = request.operation, status = response.status, "request failed");
        }
        Ok(response)
    }

    // Projects

    pub fn list_projects(&self) -> Response<ListProjectsResponse> {
        self.execute(self.client.build_list_projects()?)
    }

    pub fn create_project(&self, body: &CreateProject) -> Response<ProjectDetails> {
        self.execute(self.client.build_create_project(body)?)
    }

    pub fn get_project(&self, project_id: &str) -> Response<ProjectDetails> {
        self.execute(self.client.build_get_project(project_id)?)
    }

    pub fn update_project(&self, project_id: &str, body: &UpdateProject) -> Response<ProjectDetails> {
        self.execute(self.client.build_update_project(project_id, body)?)
    }

    pub fn delete_project(&self, project_id: &str) -> Response<()> {
        self.execute_empty(self.client.build_delete_project(project_id)?)
    }

    pub fn list_fields(&self, project_id: &str, collection_ids: &[String]) -> Response<ListFieldsResponse> {
        self.execute(self.client.build_list_fields(project_id, collection_ids)?)
    }

    pub fn get_component_settings(&self, project_id: &str) -> Response<ComponentSettingsResponse> {
        self.execute(self.client.build_get_component_settings(project_id)?)
    }

    // Collections

    pub fn list_collections(&self, project_id: &str) -> Response<ListCollectionsResponse> {
        self.execute(self.client.build_list_collections(project_id)?)
    }

    pub fn create_collection(&self, project_id: &str, body: &CreateCollection) -> Response<CollectionDetails> {
        self.execute(self.client.build_create_collection(project_id, body)?)
    }

    pub fn get_collection(&self, project_id: &str, collection_id: &str) -> Response<CollectionDetails> {
        self.execute(self.client.build_get_collection(project_id, collection_id)?)
    }

    pub fn update_collection(
        &self,
        project_id: &str,
        collection_id: &str,
        body: &UpdateCollection,
    ) -> Response<CollectionDetails> {
        self.execute(self.client.build_update_collection(project_id, collection_id, body)?)
    }

    pub fn delete_collection(&self, project_id: &str, collection_id: &str) -> Response<()> {
        self.execute_empty(self.client.build_delete_collection(project_id, collection_id)?)
    }

    // Documents

    pub fn list_documents(
        &self,
        project_id: &str,
        collection_id: &str,
        options: &ListDocumentsOptions,
    ) -> Response<ListDocumentsResponse> {
        self.execute(self.client.build_list_documents(project_id, collection_id, options)?)
    }

    pub fn add_document(
        &self,
        project_id: &str,
        collection_id: &str,
        upload: &DocumentUpload,
        force: Option<bool>,
    ) -> Response<DocumentAccepted> {
        self.execute(self.client.build_add_document(project_id, collection_id, upload, force)?)
    }

    pub fn get_document(
        &self,
        project_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Response<DocumentDetails> {
        self.execute(self.client.build_get_document(project_id, collection_id, document_id)?)
    }

    pub fn update_document(
        &self,
        project_id: &str,
        collection_id: &str,
        document_id: &str,
        upload: &DocumentUpload,
        force: Option<bool>,
    ) -> Response<DocumentAccepted> {
        self.execute(
            self.client
                .build_update_document(project_id, collection_id, document_id, upload, force)?,
        )
    }

    pub fn delete_document(
        &self,
        project_id: &str,
        collection_id: &str,
        document_id: &str,
        force: Option<bool>,
    ) -> Response<DeleteDocumentResponse> {
        self.execute(
            self.client
                .build_delete_document(project_id, collection_id, document_id, force)?,
        )
    }

    pub fn analyze_document(
        &self,
        project_id: &str,
        collection_id: &str,
        upload: &DocumentUpload,
    ) -> Response<AnalyzedDocument> {
        self.execute(self.client.build_analyze_document(project_id, collection_id, upload)?)
    }

    // Queries

    pub fn query(&self, project_id: &str, body: &QueryRequest) -> Response<QueryResponse> {
        self.execute(self.client.build_query(project_id, body)?)
    }

    pub fn get_autocompletion(
        &self,
        project_id: &str,
        prefix: &str,
        options: &AutocompletionOptions,
    ) -> Response<Completions> {
        self.execute(self.client.build_get_autocompletion(project_id, prefix, options)?)
    }

    pub fn query_collection_notices(
        &self,
        project_id: &str,
        collection_id: &str,
        options: &NoticesQuery,
    ) -> Response<QueryNoticesResponse> {
        self.execute(
            self.client
                .build_query_collection_notices(project_id, collection_id, options)?,
        )
    }

    pub fn query_notices(&self, project_id: &str, options: &NoticesQuery) -> Response<QueryNoticesResponse> {
        self.execute(self.client.build_query_notices(project_id, options)?)
    }

    // Query modifications

    pub fn get_stopword_list(&self, project_id: &str, collection_id: &str) -> Response<StopWordList> {
        self.execute(self.client.build_get_stopword_list(project_id, collection_id)?)
    }

    pub fn create_stopword_list(
        &self,
        project_id: &str,
        collection_id: &str,
        body: &StopWordList,
    ) -> Response<StopWordList> {
        self.execute(self.client.build_create_stopword_list(project_id, collection_id, body)?)
    }

    pub fn delete_stopword_list(&self, project_id: &str, collection_id: &str) -> Response<()> {
        self.execute_empty(self.client.build_delete_stopword_list(project_id, collection_id)?)
    }

    pub fn list_expansions(&self, project_id: &str, collection_id: &str) -> Response<Expansions> {
        self.execute(self.client.build_list_expansions(project_id, collection_id)?)
    }

    pub fn create_expansions(
        &self,
        project_id: &str,
        collection_id: &str,
        body: &Expansions,
    ) -> Response<Expansions> {
        self.execute(self.client.build_create_expansions(project_id, collection_id, body)?)
    }

    pub fn delete_expansions(&self, project_id: &str, collection_id: &str) -> Response<()> {
        self.execute_empty(self.client.build_delete_expansions(project_id, collection_id)?)
    }

    // Training data

    pub fn list_training_queries(&self, project_id: &str) -> Response<TrainingQuerySet> {
        self.execute(self.client.build_list_training_queries(project_id)?)
    }

    pub fn delete_training_queries(&self, project_id: &str) -> Response<()> {
        self.execute_empty(self.client.build_delete_training_queries(project_id)?)
    }

    pub fn create_training_query(&self, project_id: &str, body: &TrainingQueryInput) -> Response<TrainingQuery> {
        self.execute(self.client.build_create_training_query(project_id, body)?)
    }

    pub fn get_training_query(&self, project_id: &str, query_id: &str) -> Response<TrainingQuery> {
        self.execute(self.client.build_get_training_query(project_id, query_id)?)
    }

    pub fn update_training_query(
        &self,
        project_id: &str,
        query_id: &str,
        body: &TrainingQueryInput,
    ) -> Response<TrainingQuery> {
        self.execute(self.client.build_update_training_query(project_id, query_id, body)?)
    }

    pub fn delete_training_query(&self, project_id: &str, query_id: &str) -> Response<()> {
        self.execute_empty(self.client.build_delete_training_query(project_id, query_id)?)
    }

    // Enrichments

    pub fn list_enrichments(&self, project_id: &str) -> Response<Enrichments> {
        self.execute(self.client.build_list_enrichments(project_id)?)
    }

    pub fn create_enrichment(
        &self,
        project_id: &str,
        enrichment: &CreateEnrichment,
        file: Option<&FileUpload>,
    ) -> Response<Enrichment> {
        self.execute(self.client.build_create_enrichment(project_id, enrichment, file)?)
    }

    pub fn get_enrichment(&self, project_id: &str, enrichment_id: &str) -> Response<Enrichment> {
        self.execute(self.client.build_get_enrichment(project_id, enrichment_id)?)
    }

    pub fn update_enrichment(
        &self,
        project_id: &str,
        enrichment_id: &str,
        body: &UpdateEnrichment,
    ) -> Response<Enrichment> {
        self.execute(self.client.build_update_enrichment(project_id, enrichment_id, body)?)
    }

    pub fn delete_enrichment(&self, project_id: &str, enrichment_id: &str) -> Response<()> {
        self.execute_empty(self.client.build_delete_enrichment(project_id, enrichment_id)?)
    }

    // Batches

    pub fn list_batches(&self, project_id: &str, collection_id: &str) -> Response<ListBatchesResponse> {
        self.execute(self.client.build_list_batches(project_id, collection_id)?)
    }

    pub fn pull_batches(
        &self,
        project_id: &str,
        collection_id: &str,
        batch_id: &str,
    ) -> Response<PullBatchesResponse> {
        self.execute(self.client.build_pull_batches(project_id, collection_id, batch_id)?)
    }

    pub fn push_batches(
        &self,
        project_id: &str,
        collection_id: &str,
        batch_id: &str,
        file: Option<&FileUpload>,
    ) -> Response<()> {
        self.execute_empty(
            self.client
                .build_push_batches(project_id, collection_id, batch_id, file)?,
        )
    }

    // Document classifiers

    pub fn list_document_classifiers(&self, project_id: &str) -> Response<DocumentClassifiers> {
        self.execute(self.client.build_list_document_classifiers(project_id)?)
    }

    pub fn create_document_classifier(
        &self,
        project_id: &str,
        training_data: &FileUpload,
        classifier: &CreateDocumentClassifier,
        test_data: Option<&FileUpload>,
    ) -> Response<DocumentClassifier> {
        self.execute(
            self.client
                .build_create_document_classifier(project_id, training_data, classifier, test_data)?,
        )
    }

    pub fn get_document_classifier(&self, project_id: &str, classifier_id: &str) -> Response<DocumentClassifier> {
        self.execute(self.client.build_get_document_classifier(project_id, classifier_id)?)
    }

    pub fn update_document_classifier(
        &self,
        project_id: &str,
        classifier_id: &str,
        classifier: &UpdateDocumentClassifier,
        training_data: Option<&FileUpload>,
        test_data: Option<&FileUpload>,
    ) -> Response<DocumentClassifier> {
        self.execute(self.client.build_update_document_classifier(
            project_id,
            classifier_id,
            classifier,
            training_data,
            test_data,
        )?)
    }

    pub fn delete_document_classifier(&self, project_id: &str, classifier_id: &str) -> Response<()> {
        self.execute_empty(self.client.build_delete_document_classifier(project_id, classifier_id)?)
    }

    pub fn list_document_classifier_models(
        &self,
        project_id: &str,
        classifier_id: &str,
    ) -> Response<DocumentClassifierModels> {
        self.execute(
            self.client
                .build_list_document_classifier_models(project_id, classifier_id)?,
        )
    }

    pub fn create_document_classifier_model(
        &self,
        project_id: &str,
        classifier_id: &str,
        body: &CreateDocumentClassifierModel,
    ) -> Response<DocumentClassifierModel> {
        self.execute(
            self.client
                .build_create_document_classifier_model(project_id, classifier_id, body)?,
        )
    }

    pub fn get_document_classifier_model(
        &self,
        project_id: &str,
        classifier_id: &str,
        model_id: &str,
    ) -> Response<DocumentClassifierModel> {
        self.execute(
            self.client
                .build_get_document_classifier_model(project_id, classifier_id, model_id)?,
        )
    }

    pub fn update_document_classifier_model(
        &self,
        project_id: &str,
        classifier_id: &str,
        model_id: &str,
        body: &UpdateDocumentClassifierModel,
    ) -> Response<DocumentClassifierModel> {
        self.execute(
            self.client
                .build_update_document_classifier_model(project_id, classifier_id, model_id, body)?,
        )
    }

    pub fn delete_document_classifier_model(
        &self,
        project_id: &str,
        classifier_id: &str,
        model_id: &str,
    ) -> Response<()> {
        self.execute_empty(
            self.client
                .build_delete_document_classifier_model(project_id, classifier_id, model_id)?,
        )
    }

    // User data

    /// Delete all data associated with `customer_id` across the instance.
    pub fn delete_user_data(&self, customer_id: &str) -> Response<()> {
        self.execute_empty(self.client.build_delete_user_data(customer_id)?)
    }
}
