//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! `requests.json` describes operation inputs and the request each one must
//! produce (or the argument error it must raise). `responses.json` describes
//! simulated responses and the typed result or error they must map to.
//! Expected results are compared as typed values, so field order and unknown
//! fields in the fixture bodies do not matter.

use std::fmt::Debug;

use discovery_core::models::{
    AutocompletionOptions, CollectionDetails, DocumentAccepted, ListDocumentsOptions, ListProjectsResponse,
    NoticesQuery, ProjectDetails, QueryResponse, TrainingQuerySet,
};
use discovery_core::{ApiError, DiscoveryClient, HttpMethod, HttpRequest, HttpResponse};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| items.iter().map(|v| v.as_str().unwrap().to_string()).collect())
        .unwrap_or_default()
}

/// Build the request named by `operation` from the vector's `args`.
fn build(client: &DiscoveryClient, operation: &str, args: &Value) -> Result<HttpRequest, ApiError> {
    let arg = |name: &str| args[name].as_str().unwrap_or_default();
    match operation {
        "ListProjects" => client.build_list_projects(),
        "GetProject" => client.build_get_project(arg("project_id")),
        "DeleteProject" => client.build_delete_project(arg("project_id")),
        "ListFields" => client.build_list_fields(arg("project_id"), &string_list(&args["collection_ids"])),
        "ListDocuments" => {
            let options = ListDocumentsOptions {
                count: args["count"].as_i64(),
                status: string_list(&args["status"]),
                ..Default::default()
            };
            client.build_list_documents(arg("project_id"), arg("collection_id"), &options)
        }
        "DeleteDocument" => client.build_delete_document(
            arg("project_id"),
            arg("collection_id"),
            arg("document_id"),
            args["force"].as_bool(),
        ),
        "GetAutocompletion" => {
            let options = AutocompletionOptions {
                count: args["count"].as_i64(),
                ..Default::default()
            };
            client.build_get_autocompletion(arg("project_id"), arg("prefix"), &options)
        }
        "QueryNotices" => {
            let options = NoticesQuery {
                filter: args["filter"].as_str().map(str::to_string),
                count: args["count"].as_i64(),
                ..Default::default()
            };
            client.build_query_notices(arg("project_id"), &options)
        }
        "PullBatches" => client.build_pull_batches(arg("project_id"), arg("collection_id"), arg("batch_id")),
        "DeleteTrainingQuery" => client.build_delete_training_query(arg("project_id"), arg("query_id")),
        "GetDocumentClassifierModel" => {
            client.build_get_document_classifier_model(arg("project_id"), arg("classifier_id"), arg("model_id"))
        }
        "DeleteUserData" => client.build_delete_user_data(arg("customer_id")),
        other => panic!("no builder mapped for {other}"),
    }
}

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let service_url = vectors["service_url"].as_str().unwrap();
    let client = DiscoveryClient::new(service_url, vectors["version"].as_str().unwrap()).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let result = build(&client, case["operation"].as_str().unwrap(), &case["args"]);

        if let Some(expected) = case.get("expected_error") {
            match result {
                Err(ApiError::MissingArgument { operation, parameter }) => {
                    assert_eq!(operation, expected["operation"].as_str().unwrap(), "{name}: operation");
                    assert_eq!(parameter, expected["parameter"].as_str().unwrap(), "{name}: parameter");
                }
                other => panic!("{name}: expected a missing argument, got {other:?}"),
            }
            continue;
        }

        let req = result.unwrap_or_else(|e| panic!("{name}: {e}"));
        let expected = &case["expected_request"];
        assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(
            req.url(),
            format!("{service_url}{}", expected["url"].as_str().unwrap()),
            "{name}: url"
        );
        for header in expected["headers"].as_array().unwrap() {
            let key = header[0].as_str().unwrap();
            assert_eq!(req.header(key), header[1].as_str(), "{name}: header {key}");
        }
        assert!(req.body.is_none(), "{name}: unexpected body");
    }
}

fn check_response<T>(client: &DiscoveryClient, name: &str, case: &Value)
where
    T: DeserializeOwned + Default + PartialEq + Debug,
{
    let response = HttpResponse {
        status: case["response"]["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: case["response"]["body"].as_str().unwrap().to_string(),
    };
    let result = client.parse_json::<T>(response);

    if let Some(expected) = case.get("expected_error") {
        let err = match result {
            Err(err) => err,
            Ok(ok) => panic!("{name}: expected an error, got {ok:?}"),
        };
        match expected["kind"].as_str().unwrap() {
            "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: {err:?}"),
            "Http" => match &err {
                ApiError::Http { status, message } => {
                    assert_eq!(u64::from(*status), expected["status"].as_u64().unwrap(), "{name}: status");
                    assert_eq!(message, expected["message"].as_str().unwrap(), "{name}: message");
                }
                other => panic!("{name}: expected Http, got {other:?}"),
            },
            "Deserialization" => assert!(matches!(err, ApiError::Deserialization(_)), "{name}: {err:?}"),
            other => panic!("{name}: unknown error kind {other}"),
        }
        if let Some(status) = expected["status"].as_u64() {
            assert_eq!(err.status().map(u64::from), Some(status), "{name}: error status");
        }
        return;
    }

    let parsed = result.unwrap_or_else(|e| panic!("{name}: {e}"));
    let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
    assert_eq!(parsed.result, expected, "{name}: result");
}

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let client = DiscoveryClient::new("https://discovery.example.com", "2023-03-31").unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        match case["operation"].as_str().unwrap() {
            "GetProject" => check_response::<ProjectDetails>(&client, name, case),
            "ListProjects" => check_response::<ListProjectsResponse>(&client, name, case),
            "GetCollection" => check_response::<CollectionDetails>(&client, name, case),
            "Query" => check_response::<QueryResponse>(&client, name, case),
            "AddDocument" => check_response::<DocumentAccepted>(&client, name, case),
            "ListTrainingQueries" => check_response::<TrainingQuerySet>(&client, name, case),
            other => panic!("{name}: no result type mapped for {other}"),
        }
    }
}
