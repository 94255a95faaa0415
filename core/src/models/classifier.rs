use serde::{Deserialize, Serialize};

/// Values of the classifier model `status` field.
pub mod model_status {
    pub const TRAINING: &str = "training";
    pub const AVAILABLE: &str = "available";
    pub const FAILED: &str = "failed";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentClassifierEnrichment {
    pub enrichment_id: String,
    pub fields: Vec<String>,
}

/// Field whose values split the training data into one model per value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifierFederatedModel {
    pub field: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentClassifier {
    pub classifier_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created: Option<String>,
    pub language: Option<String>,
    pub enrichments: Option<Vec<DocumentClassifierEnrichment>>,
    pub recognized_fields: Option<Vec<String>>,
    pub answer_field: Option<String>,
    pub training_data_file: Option<String>,
    pub test_data_file: Option<String>,
    pub federated_classification: Option<ClassifierFederatedModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentClassifiers {
    pub classifiers: Option<Vec<DocumentClassifier>>,
}

/// JSON `classifier` part of `CreateDocumentClassifier`.
/// `name`, `language`, and `answer_field` are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateDocumentClassifier {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub language: String,
    pub answer_field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichments: Option<Vec<DocumentClassifierEnrichment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub federated_classification: Option<ClassifierFederatedModel>,
}

/// JSON `classifier` part of `UpdateDocumentClassifier`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateDocumentClassifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModelEvaluationMicroAverage {
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModelEvaluationMacroAverage {
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PerClassModelEvaluation {
    pub name: Option<String>,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClassifierModelEvaluation {
    pub micro_average: Option<ModelEvaluationMicroAverage>,
    pub macro_average: Option<ModelEvaluationMacroAverage>,
    pub per_class: Option<Vec<PerClassModelEvaluation>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentClassifierModel {
    pub model_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    pub training_data_file: Option<String>,
    pub test_data_file: Option<String>,
    pub status: Option<String>,
    pub evaluation: Option<ClassifierModelEvaluation>,
    pub enrichment_id: Option<String>,
    pub deployed_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentClassifierModels {
    pub models: Option<Vec<DocumentClassifierModel>>,
}

/// Body of `CreateDocumentClassifierModel`. `name` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateDocumentClassifierModel {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l1_regularization_strengths: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l2_regularization_strengths: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_max_steps: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement_ratio: Option<f64>,
}

/// Body of `UpdateDocumentClassifierModel`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateDocumentClassifierModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
