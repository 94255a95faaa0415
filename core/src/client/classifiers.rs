use crate::builder::{require, to_json_part};
use crate::endpoint;
use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::models::{
    CreateDocumentClassifier, CreateDocumentClassifierModel, UpdateDocumentClassifier,
    UpdateDocumentClassifierModel,
};
use crate::multipart::{FileUpload, MultipartForm};

use super::DiscoveryClient;

const CSV: &str = "text/csv";

impl DiscoveryClient {
    pub fn build_list_document_classifiers(&self, project_id: &str) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::LIST_DOCUMENT_CLASSIFIERS, &[project_id])?
            .build())
    }

    /// `training_data` and `test_data` are CSV files; `classifier` travels as
    /// a JSON part.
    pub fn build_create_document_classifier(
        &self,
        project_id: &str,
        training_data: &FileUpload,
        classifier: &CreateDocumentClassifier,
        test_data: Option<&FileUpload>,
    ) -> Result<HttpRequest, ApiError> {
        let op = endpoint::CREATE_DOCUMENT_CLASSIFIER.operation;
        let builder = self.request(&endpoint::CREATE_DOCUMENT_CLASSIFIER, &[project_id])?;
        if training_data.data.is_empty() {
            return Err(ApiError::MissingArgument {
                operation: op,
                parameter: "training_data",
            });
        }
        require(op, "name", &classifier.name)?;
        require(op, "language", &classifier.language)?;
        require(op, "answer_field", &classifier.answer_field)?;

        let form = MultipartForm::new()
            .file("training_data", training_data, CSV)
            .text("classifier", to_json_part(classifier)?)
            .file_opt("test_data", test_data, CSV);
        Ok(builder.multipart(form).build())
    }

    pub fn build_get_document_classifier(
        &self,
        project_id: &str,
        classifier_id: &str,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::GET_DOCUMENT_CLASSIFIER, &[project_id, classifier_id])?
            .build())
    }

    pub fn build_update_document_classifier(
        &self,
        project_id: &str,
        classifier_id: &str,
        classifier: &UpdateDocumentClassifier,
        training_data: Option<&FileUpload>,
        test_data: Option<&FileUpload>,
    ) -> Result<HttpRequest, ApiError> {
        let form = MultipartForm::new()
            .text("classifier", to_json_part(classifier)?)
            .file_opt("training_data", training_data, CSV)
            .file_opt("test_data", test_data, CSV);
        Ok(self
            .request(&endpoint::UPDATE_DOCUMENT_CLASSIFIER, &[project_id, classifier_id])?
            .multipart(form)
            .build())
    }

    pub fn build_delete_document_classifier(
        &self,
        project_id: &str,
        classifier_id: &str,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::DELETE_DOCUMENT_CLASSIFIER, &[project_id, classifier_id])?
            .build())
    }

    pub fn build_list_document_classifier_models(
        &self,
        project_id: &str,
        classifier_id: &str,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::LIST_DOCUMENT_CLASSIFIER_MODELS, &[project_id, classifier_id])?
            .build())
    }

    pub fn build_create_document_classifier_model(
        &self,
        project_id: &str,
        classifier_id: &str,
        body: &CreateDocumentClassifierModel,
    ) -> Result<HttpRequest, ApiError> {
        let builder = self.request(&endpoint::CREATE_DOCUMENT_CLASSIFIER_MODEL, &[project_id, classifier_id])?;
        require(endpoint::CREATE_DOCUMENT_CLASSIFIER_MODEL.operation, "name", &body.name)?;
        Ok(builder.json(body)?.build())
    }

    pub fn build_get_document_classifier_model(
        &self,
        project_id: &str,
        classifier_id: &str,
        model_id: &str,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::GET_DOCUMENT_CLASSIFIER_MODEL, &[project_id, classifier_id, model_id])?
            .build())
    }

    pub fn build_update_document_classifier_model(
        &self,
        project_id: &str,
        classifier_id: &str,
        model_id: &str,
        body: &UpdateDocumentClassifierModel,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::UPDATE_DOCUMENT_CLASSIFIER_MODEL, &[project_id, classifier_id, model_id])?
            .json(body)?
            .build())
    }

    pub fn build_delete_document_classifier_model(
        &self,
        project_id: &str,
        classifier_id: &str,
        model_id: &str,
    ) -> Result<HttpRequest, ApiError> {
        Ok(self
            .request(&endpoint::DELETE_DOCUMENT_CLASSIFIER_MODEL, &[project_id, classifier_id, model_id])?
            .build())
    }
}
