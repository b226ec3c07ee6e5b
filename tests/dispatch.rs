//! End-to-end dispatch: real HTTP client against a mocked backend.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use healthai::config::BackendConfig;
use healthai::core::dispatcher::{PatientContext, QueryDispatcher};
use healthai::core::generate::GraniteClient;
use healthai::error::DispatchError;
use healthai::models::{PatientProfile, PromptRequest, VitalsRecord};

fn profile() -> PatientProfile {
    PatientProfile {
        age: 45,
        gender: "female".to_string(),
        medical_history: "type 2 diabetes".to_string(),
    }
}

fn vitals() -> Vec<VitalsRecord> {
    vec![
        VitalsRecord {
            date: NaiveDate::from_ymd_opt(2025, 5, 31).unwrap(),
            heart_rate: 73.0,
            systolic_bp: 120.0,
            diastolic_bp: 80.0,
            blood_glucose: 98.0,
        },
        VitalsRecord {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            heart_rate: 78.0,
            systolic_bp: 128.0,
            diastolic_bp: 84.0,
            blood_glucose: 112.0,
        },
    ]
}

fn dispatcher_for(server: &MockServer) -> QueryDispatcher {
    let client = GraniteClient::new(&BackendConfig {
        endpoint: format!("{}/ml/v1/text/generation", server.uri()),
        api_key: "test-key".to_string(),
        model_id: "ibm/granite-13b-instruct-v2".to_string(),
        project_id: "proj-1".to_string(),
    });
    QueryDispatcher::new(Arc::new(client))
}

#[tokio::test]
async fn treatment_plan_round_trip_embeds_every_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ml/v1/text/generation"))
        .respond_with(|req: &Request| {
            let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
            let input = body["input"].as_str().unwrap();
            for literal in ["Hypertension", "45", "female", "type 2 diabetes"] {
                assert!(input.contains(literal), "prompt missing `{literal}`");
            }
            ResponseTemplate::new(200).set_body_json(json!({
                "results": [{ "generated_text": "Reduce sodium intake." }]
            }))
        })
        .expect(1)
        .mount(&server)
        .await;

    let profile = profile();
    let vitals = vitals();
    let response = dispatcher_for(&server)
        .dispatch(
            &PromptRequest::treatment_plan("Hypertension"),
            PatientContext {
                profile: &profile,
                vitals: &vitals,
            },
        )
        .await
        .unwrap();

    assert_eq!(response.text, "Reduce sodium intake.");
}

#[tokio::test]
async fn summary_round_trip_uses_previous_glucose() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(|req: &Request| {
            let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
            let input = body["input"].as_str().unwrap();
            assert!(input.contains("Blood Glucose: 112 mg/dL"));
            assert!(input.contains("Previous Blood Glucose: 98 mg/dL"));
            ResponseTemplate::new(200).set_body_json(json!({
                "results": [{ "generated_text": "Glucose trending up." }]
            }))
        })
        .mount(&server)
        .await;

    let profile = profile();
    let vitals = vitals();
    let response = dispatcher_for(&server)
        .dispatch(
            &PromptRequest::summary(),
            PatientContext {
                profile: &profile,
                vitals: &vitals,
            },
        )
        .await
        .unwrap();

    assert_eq!(response.text, "Glucose trending up.");
}

#[tokio::test]
async fn backend_with_no_candidates_fails_the_dispatch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let profile = profile();
    let vitals = vitals();
    let err = dispatcher_for(&server)
        .dispatch(
            &PromptRequest::chat("Is 112 mg/dL high?"),
            PatientContext {
                profile: &profile,
                vitals: &vitals,
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DispatchError::BackendResponse { .. }));
}
