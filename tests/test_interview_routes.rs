// End-to-end tests of the HTTP surface, driven through the router
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use interview_review::application::services::{AssignmentService, RatingService};
use interview_review::domain::entities::AssignApplicantResponse;
use interview_review::domain::ports::interview_repository::InterviewRepository;
use interview_review::infrastructure::http::middleware::AppState;
use interview_review::infrastructure::http::router::build_router;
use interview_review::infrastructure::persistence::InMemoryInterviewRepository;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

mod helpers;
use helpers::*;

struct TestApp {
    router: Router,
    dispatcher: RecordingDispatcher,
}

fn build_app(repo: Arc<dyn InterviewRepository>) -> TestApp {
    let dispatcher = RecordingDispatcher::new();
    let state = AppState {
        assignment_service: AssignmentService::new(
            repo.clone(),
            Arc::new(RecordingNotifier::new()),
            "https://reviews.example.com/",
            "interview-assignments-test",
        ),
        rating_service: RatingService::new(repo, Arc::new(dispatcher.clone())),
    };

    TestApp {
        router: build_router(state),
        dispatcher,
    }
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn assign_request(body: Vec<u8>) -> Request<Body> {
    Request::post("/assign")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn rate_request(id: &str, form: &str) -> Request<Body> {
    Request::post(format!("/interview/{}", id))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

async fn assign(app: &TestApp) -> AssignApplicantResponse {
    let response = app
        .router
        .clone()
        .oneshot(assign_request(serde_json::to_vec(&sample_request()).unwrap()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_str(&body_string(response).await).unwrap()
}

#[tokio::test]
async fn test_version_endpoint_returns_plain_text() {
    let app = build_app(Arc::new(InMemoryInterviewRepository::new()));

    let response = app
        .router
        .oneshot(Request::get("/interview").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert_eq!(body_string(response).await, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_rating_form_renders_for_any_id() {
    let app = build_app(Arc::new(InMemoryInterviewRepository::new()));

    let response = app
        .router
        .oneshot(
            Request::get("/interview/never-assigned")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("name=\"score\" value=\"0\""));
    assert!(html.contains("name=\"score\" value=\"100\""));
    assert!(html.contains("method=\"POST\""));
}

#[tokio::test]
async fn test_assign_then_rate_forwards_score() {
    let app = build_app(Arc::new(InMemoryInterviewRepository::new()));

    let assigned = assign(&app).await;
    let id = assigned
        .interview_url
        .strip_prefix("https://reviews.example.com/interview/")
        .expect("interview url should sit under the base url")
        .to_string();
    assert!(uuid::Uuid::parse_str(&id).is_ok());
    assert_eq!(assigned.recruiter_url, assigned.interview_url);

    let response = app
        .router
        .clone()
        .oneshot(rate_request(&id, "score=100&review=Review"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(&format!("Setting score: 100 for {}", id)));

    let calls = app.dispatcher.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, CALLBACK_URL);
    assert_eq!(calls[0].1.score, 100);
    assert_eq!(calls[0].1.req, serde_json::to_value(sample_request()).unwrap());
}

#[tokio::test]
async fn test_callback_replays_posted_body_unchanged() {
    let app = build_app(Arc::new(InMemoryInterviewRepository::new()));
    let posted = serde_json::json!({
        "InterviewType": 1,
        "InterviewId": "interview-002",
        "ApplicantEmail": "a@example.com",
        "InterviewStartDate": "2026-11-02T09:00:00Z",
        "InterviewEndDate": "2026-11-02T10:00:00Z",
        "CallbackData": { "CallbackUrl": CALLBACK_URL },
        "ExternalRef": "ats-9"
    });

    let response = app
        .router
        .clone()
        .oneshot(assign_request(serde_json::to_vec(&posted).unwrap()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let assigned: AssignApplicantResponse =
        serde_json::from_str(&body_string(response).await).unwrap();
    let id = assigned.interview_url.rsplit('/').next().unwrap().to_string();

    let response = app
        .router
        .clone()
        .oneshot(rate_request(&id, "score=0"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let calls = app.dispatcher.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, CALLBACK_URL);
    assert_eq!(calls[0].1.req, posted);
    assert_eq!(calls[0].1.req["ExternalRef"], "ats-9");
    assert!(calls[0].1.req.get("applicantEmail").is_none());
}

#[tokio::test]
async fn test_rating_unknown_id_renders_404_page() {
    let app = build_app(Arc::new(InMemoryInterviewRepository::new()));

    let response = app
        .router
        .oneshot(rate_request("unknown-id", "score=100"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(body_string(response).await.contains("Interview not found"));
    assert!(app.dispatcher.calls().is_empty());
}

#[tokio::test]
async fn test_rating_with_out_of_range_score_is_bad_request() {
    let app = build_app(Arc::new(InMemoryInterviewRepository::new()));
    let assigned = assign(&app).await;
    let id = assigned.interview_url.rsplit('/').next().unwrap().to_string();

    let response = app
        .router
        .clone()
        .oneshot(rate_request(&id, "score=250"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.dispatcher.calls().is_empty());
}

#[tokio::test]
async fn test_rating_without_score_is_bad_request() {
    let app = build_app(Arc::new(InMemoryInterviewRepository::new()));

    let response = app
        .router
        .oneshot(rate_request("some-id", "review=Review"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response).await.contains("choose a score"));
}

#[tokio::test]
async fn test_assign_with_malformed_json_is_bad_request() {
    let app = build_app(Arc::new(InMemoryInterviewRepository::new()));

    let response = app
        .router
        .oneshot(assign_request(b"{\"interviewType\":".to_vec()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_assign_missing_required_fields_is_bad_request() {
    let app = build_app(Arc::new(InMemoryInterviewRepository::new()));

    let response = app
        .router
        .oneshot(assign_request(br#"{"InterviewType":"LiveVideo"}"#.to_vec()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(body["error"].as_str().unwrap().contains("Invalid assignment request"));
}

#[tokio::test]
async fn test_assign_with_store_down_is_server_error() {
    let app = build_app(Arc::new(UnavailableRepository));

    let response = app
        .router
        .oneshot(assign_request(serde_json::to_vec(&sample_request()).unwrap()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert!(!body["error"].as_str().unwrap().contains("locked"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = build_app(Arc::new(InMemoryInterviewRepository::new()));

    let response = app
        .router
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "ok");
}
