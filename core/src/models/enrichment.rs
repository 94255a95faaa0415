use serde::{Deserialize, Serialize};

/// Values of the enrichment `type` field.
pub mod enrichment_type {
    pub const PART_OF_SPEECH: &str = "part_of_speech";
    pub const SENTIMENT: &str = "sentiment";
    pub const NATURAL_LANGUAGE_UNDERSTANDING: &str = "natural_language_understanding";
    pub const DICTIONARY: &str = "dictionary";
    pub const REGULAR_EXPRESSION: &str = "regular_expression";
    pub const UIMA_ANNOTATOR: &str = "uima_annotator";
    pub const RULE_BASED: &str = "rule_based";
    pub const WATSON_KNOWLEDGE_STUDIO_MODEL: &str = "watson_knowledge_studio_model";
    pub const CLASSIFIER: &str = "classifier";
    pub const WEBHOOK: &str = "webhook";
    pub const SENTENCE_CLASSIFIER: &str = "sentence_classifier";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookHeader {
    pub name: String,
    pub value: String,
}

/// Type-specific enrichment settings. Which fields apply depends on the
/// enrichment type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<WebhookHeader>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_encoding: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Enrichment {
    pub enrichment_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub enrichment_type: Option<String>,
    pub options: Option<EnrichmentOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Enrichments {
    pub enrichments: Option<Vec<Enrichment>>,
}

/// JSON `enrichment` part of `CreateEnrichment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateEnrichment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub enrichment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<EnrichmentOptions>,
}

/// Body of `UpdateEnrichment`. `name` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateEnrichment {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_enrichment_uses_type_key() {
        let body = CreateEnrichment {
            name: Some("terms".to_string()),
            enrichment_type: Some(enrichment_type::DICTIONARY.to_string()),
            options: Some(EnrichmentOptions {
                languages: Some(vec!["en".to_string()]),
                entity_type: Some("keyword".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "terms",
                "type": "dictionary",
                "options": {"languages": ["en"], "entity_type": "keyword"}
            })
        );
    }

    #[test]
    fn enrichments_from_fixture() {
        let fixture = r#"{"enrichments": [
            {"enrichment_id": "e1", "name": "Part of Speech", "type": "part_of_speech"},
            {"enrichment_id": "e2", "name": "hook", "type": "webhook",
             "options": {"url": "https://hook", "headers": [{"name": "k", "value": "v"}]}}
        ]}"#;
        let list: Enrichments = serde_json::from_str(fixture).unwrap();
        let enrichments = list.enrichments.unwrap();
        assert_eq!(enrichments.len(), 2);
        assert_eq!(enrichments[0].enrichment_type.as_deref(), Some(enrichment_type::PART_OF_SPEECH));
        let options = enrichments[1].options.as_ref().unwrap();
        assert_eq!(options.url.as_deref(), Some("https://hook"));
        assert_eq!(options.headers.as_ref().unwrap()[0].value, "v");
    }
}
