use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::workflows::leads::router::score_handler;
use crate::workflows::leads::{
    leads_router, FixedClock, LeadDocument, LeadScoringService, PipelineConfig, ScoreRequest,
};

fn service() -> Arc<LeadScoringService> {
    Arc::new(LeadScoringService::with_clock(
        PipelineConfig::default(),
        Arc::new(FixedClock::on(today())),
    ))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn score_route_returns_lead_document() {
    let payload = json!({
        "cases": [
            {
                "caseNumber": "2025-CV-0100",
                "commenced": days_ago(300).format("%m/%d/%Y").to_string(),
                "plaintiff": "FIRST NATIONAL MORTGAGE",
                "defendant": "JANE SMITH",
                "hasJudgement": false,
                "status": "OPEN",
                "address": "25 ASPEN WAYSCHWENKSVILLE, PA 19473 UNITED STATES"
            }
        ],
        "dockets": {
            "2025-CV-0100": [
                { "date": days_ago(100).format("%Y-%m-%d").to_string(), "description": "MATTER SETTLED" }
            ]
        }
    });

    let config = PipelineConfig {
        max_days_old: 400,
        ..PipelineConfig::default()
    };
    let router = leads_router(Arc::new(LeadScoringService::with_clock(
        config,
        Arc::new(FixedClock::on(today())),
    )));
    let response = router
        .oneshot(
            Request::post("/api/v1/leads/score")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["totalCases"], 1);
    let case = &body["cases"][0];
    assert_eq!(case["caseNumber"], "2025-CV-0100");
    assert_eq!(case["address"]["city"], "SCHWENKSVILLE");
    assert_eq!(case["docketSummary"]["totalEntries"], 1);
    // 25 age + 2 entries + 15 settled + 3 address
    assert_eq!(case["leadScore"], 45);
    assert_eq!(case["leadGrade"], "D");
    assert_eq!(case["enrichment"]["status"], "complete");

    let document: LeadDocument = serde_json::from_value(body).expect("document round trips");
    assert_eq!(document.cases[0].score_factors.len(), 4);
}

#[tokio::test]
async fn score_handler_rejects_unreadable_collection() {
    let request = ScoreRequest {
        cases: vec![crate::workflows::leads::RawCase {
            commenced: "not a date".to_string(),
            ..raw_case("2025-CV-0200", 100)
        }],
        ..ScoreRequest::default()
    };

    let response = score_handler(State(service()), axum::Json(request)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("usable"));
}

#[tokio::test]
async fn request_day_overrides_service_clock() {
    let request = ScoreRequest {
        cases: vec![raw_case("2025-CV-0300", 100)],
        today: Some(days_ago(-30)),
        ..ScoreRequest::default()
    };

    let response = score_handler(State(service()), axum::Json(request)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["cases"][0]["daysOpen"], 130);
    assert_eq!(body["cases"][0]["enrichment"]["status"], "docketUnavailable");
}
