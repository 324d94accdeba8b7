use std::sync::Arc;

use api_rest::{router, AppState};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sluglabs_core::bson::{doc, oid::ObjectId};
use sluglabs_core::{
    CoreError, CoreResult, InMemoryPositionStore, InMemorySubmissionStore, Position,
    PositionService, PositionStore, SubmissionService,
};
use tower::ServiceExt;

const ROBOTICS_ID: &str = "65a1b2c3d4e5f6a7b8c9d0e1";
const REEF_ID: &str = "65a1b2c3d4e5f6a7b8c9d0e2";

fn position_documents() -> Vec<sluglabs_core::bson::Document> {
    vec![
        doc! {
            "_id": ObjectId::parse_str(ROBOTICS_ID).unwrap(),
            "title": "ML Robotics Lab",
            "description": "Research on robot perception for autonomous grasping.",
            "labname": "Robotics Lab",
            "contact_email": "robots@ucsc.edu",
            "website": "https://robots.ucsc.edu",
        },
        doc! {
            "_id": ObjectId::parse_str(REEF_ID).unwrap(),
            "title": "Coral Reef Survey",
            "subject": "Environmental Science",
            "full_description": "Dive surveys of reef health along the Monterey Bay coastline, \
                                 recording species counts, bleaching events and water quality \
                                 over a full academic year.",
        },
    ]
}

fn app() -> Router {
    let positions = PositionService::new(Arc::new(InMemoryPositionStore::new(
        position_documents(),
    )));
    let submissions = SubmissionService::new(Arc::new(InMemorySubmissionStore::seeded()));
    router(AppState::new(positions, submissions))
}

/// Store whose backend is unreachable.
struct UnreachableStore;

#[async_trait]
impl PositionStore for UnreachableStore {
    async fn list(&self) -> CoreResult<Vec<Position>> {
        Err(CoreError::Upstream("connection refused".into()))
    }

    async fn find(&self, _id: &ObjectId) -> CoreResult<Option<Position>> {
        Err(CoreError::Upstream("connection refused".into()))
    }

    async fn ping(&self) -> CoreResult<()> {
        Err(CoreError::Upstream("connection refused".into()))
    }
}

fn unreachable_app() -> Router {
    let positions = PositionService::new(Arc::new(UnreachableStore));
    let submissions = SubmissionService::new(Arc::new(InMemorySubmissionStore::seeded()));
    router(AppState::new(positions, submissions))
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_list_positions_shapes_summaries() {
    let (status, body) = send(&app(), Method::GET, "/positions").await;

    assert_eq!(status, StatusCode::OK);
    let positions = body["positions"].as_array().unwrap();
    assert_eq!(positions.len(), 2);
    assert_eq!(
        positions[0],
        json!({
            "_id": ROBOTICS_ID,
            "title": "ML Robotics Lab",
            "subject": "Computer Science",
            "shortDescription": "Research on robot perception for autonomous grasping.",
        })
    );
    assert!(body.get("error").is_none());

    let short = positions[1]["shortDescription"].as_str().unwrap();
    assert_eq!(short.chars().count(), 120);
    assert!(short.ends_with("..."));
}

#[tokio::test]
async fn test_list_positions_query_filter() {
    let (status, body) = send(&app(), Method::GET, "/positions?q=environmental").await;

    assert_eq!(status, StatusCode::OK);
    let positions = body["positions"].as_array().unwrap();
    assert_eq!(positions.len(), 1);
    assert_eq!(positions[0]["_id"], REEF_ID);
}

#[tokio::test]
async fn test_list_positions_upstream_failure_envelope() {
    let (status, body) = send(&unreachable_app(), Method::GET, "/positions").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "positions": [], "error": "connection refused" }));
}

#[tokio::test]
async fn test_match_returns_first_position() {
    let (status, body) = send(&app(), Method::GET, "/positions/match").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["position"]["_id"], ROBOTICS_ID);
}

#[tokio::test]
async fn test_get_position_detail() {
    let uri = format!("/positions/{ROBOTICS_ID}");
    let (status, body) = send(&app(), Method::GET, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "position": {
                "_id": ROBOTICS_ID,
                "title": "ML Robotics Lab",
                "subject": "Computer Science",
                "description": "Research on robot perception for autonomous grasping.",
                "labName": "Robotics Lab",
                "contactEmail": "robots@ucsc.edu",
                "link": "https://robots.ucsc.edu",
            }
        })
    );
}

#[tokio::test]
async fn test_get_position_invalid_id() {
    let (status, body) = send(&app(), Method::GET, "/positions/ZZZ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid id" }));
}

#[tokio::test]
async fn test_get_position_not_found() {
    let (status, body) = send(&app(), Method::GET, "/positions/65a1b2c3d4e5f6a7b8c9d0ff").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}

#[tokio::test]
async fn test_get_position_upstream_failure() {
    let uri = format!("/positions/{ROBOTICS_ID}");
    let (status, body) = send(&unreachable_app(), Method::GET, &uri).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "connection refused" }));
}

#[tokio::test]
async fn test_list_submissions() {
    let (status, body) = send(&app(), Method::GET, "/submissions").await;

    assert_eq!(status, StatusCode::OK);
    let submissions = body["submissions"].as_array().unwrap();
    assert_eq!(submissions.len(), 5);
    assert_eq!(submissions[0]["_id"], "sub_001");
    assert_eq!(submissions[0]["professorOrEmployerName"], "Dr. Sarah Chen");
    assert_eq!(submissions[0]["date"], "2026-01-15T10:30:00Z");
    assert_eq!(submissions[0]["status"], "sent");
}

#[tokio::test]
async fn test_list_submissions_status_filter() {
    let (status, body) = send(&app(), Method::GET, "/submissions?status=drafted").await;

    assert_eq!(status, StatusCode::OK);
    let submissions = body["submissions"].as_array().unwrap();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0]["_id"], "sub_003");
}

#[tokio::test]
async fn test_list_submissions_unknown_status() {
    let (status, body) = send(&app(), Method::GET, "/submissions?status=archived").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid status" }));
}

#[tokio::test]
async fn test_get_submission() {
    let (status, body) = send(&app(), Method::GET, "/submissions/sub_004").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["submission"]["opportunityName"], "Quantum Computing Internship");
    assert_eq!(body["submission"]["status"], "failed");
}

#[tokio::test]
async fn test_get_submission_not_found() {
    let (status, body) = send(&app(), Method::GET, "/submissions/sub_999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Submission not found" }));
}

#[tokio::test]
async fn test_delete_submission_then_gone() {
    let app = app();

    let (status, body) = send(&app, Method::DELETE, "/submissions/sub_005").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "deletedId": "sub_005" }));

    let (status, _) = send(&app, Method::GET, "/submissions/sub_005").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, "/submissions/sub_005").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Submission not found" }));
}

#[tokio::test]
async fn test_follow_up() {
    let (status, body) = send(&app(), Method::POST, "/submissions/sub_001/follow-up").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["subject"],
        "Follow-up: Machine Learning Research Assistant"
    );
    let text = body["body"].as_str().unwrap();
    assert!(text.starts_with("Dear Dr. Sarah Chen,"));
    assert!(text.contains("Machine Learning Research Assistant position"));
}

#[tokio::test]
async fn test_follow_up_not_found() {
    let (status, body) = send(&app(), Method::POST, "/submissions/sub_999/follow-up").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Submission not found" }));
}

#[tokio::test]
async fn test_db_health() {
    let (status, body) = send(&app(), Method::GET, "/db/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    let (status, body) = send(&unreachable_app(), Method::GET, "/db/health").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "ok": false, "error": "connection refused" }));
}

#[tokio::test]
async fn test_liveness_does_not_touch_store() {
    let (status, body) = send(&unreachable_app(), Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}
