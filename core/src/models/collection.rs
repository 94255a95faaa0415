use serde::{Deserialize, Serialize};

/// Values of `smart_document_understanding.model`.
pub mod sdu_model {
    pub const CUSTOM: &str = "custom";
    pub const PRE_TRAINED: &str = "pre_trained";
    pub const TEXT_EXTRACTION: &str = "text_extraction";
}

/// An enrichment applied to a set of collection fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionEnrichment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionDetailsSmartDocumentUnderstanding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Collection {
    pub collection_id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListCollectionsResponse {
    pub collections: Option<Vec<Collection>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CollectionDetails {
    pub collection_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created: Option<String>,
    pub language: Option<String>,
    pub ocr_enabled: Option<bool>,
    pub enrichments: Option<Vec<CollectionEnrichment>>,
    pub smart_document_understanding: Option<CollectionDetailsSmartDocumentUnderstanding>,
}

/// Body of `CreateCollection`. `name` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateCollection {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocr_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichments: Option<Vec<CollectionEnrichment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_document_understanding: Option<CollectionDetailsSmartDocumentUnderstanding>,
}

/// Body of `UpdateCollection`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocr_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichments: Option<Vec<CollectionEnrichment>>,
}

/// Query-time stopwords of a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopWordList {
    #[serde(default)]
    pub stopwords: Vec<String>,
}

/// One synonym or substitution rule.
///
/// With `input_terms` the rule is one-way (input terms expand to
/// `expanded_terms`); without it every term expands to all the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expansion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_terms: Option<Vec<String>>,
    #[serde(default)]
    pub expanded_terms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expansions {
    #[serde(default)]
    pub expansions: Vec<Expansion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_collection_serializes_only_supplied_fields() {
        let body = CreateCollection {
            name: "news".to_string(),
            enrichments: Some(vec![CollectionEnrichment {
                enrichment_id: Some("e1".to_string()),
                fields: Some(vec!["text".to_string()]),
            }]),
            ..Default::default()
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "news", "enrichments": [{"enrichment_id": "e1", "fields": ["text"]}]})
        );
    }

    #[test]
    fn bidirectional_expansion_has_no_input_terms_key() {
        let expansion = Expansion {
            input_terms: None,
            expanded_terms: vec!["car".to_string(), "automobile".to_string()],
        };
        let json = serde_json::to_string(&expansion).unwrap();
        assert_eq!(json, r#"{"expanded_terms":["car","automobile"]}"#);
    }

    #[test]
    fn collection_details_from_fixture() {
        let fixture = r#"{
            "collection_id": "c1",
            "name": "news",
            "language": "en",
            "smart_document_understanding": {"enabled": true, "model": "pre_trained"}
        }"#;
        let details: CollectionDetails = serde_json::from_str(fixture).unwrap();
        assert_eq!(details.collection_id.as_deref(), Some("c1"));
        assert_eq!(details.language.as_deref(), Some("en"));
        assert!(details.enrichments.is_none());
        assert_eq!(
            details.smart_document_understanding.unwrap().model.as_deref(),
            Some(sdu_model::PRE_TRAINED)
        );
    }
}
