pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::cv::handlers as cv;
use crate::documents::handlers as documents;
use crate::interview::handlers as interview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/features", get(health::features_handler))
        // Document panels
        .route("/api/v1/resume", post(documents::handle_resume))
        .route("/api/v1/cover-letter", post(documents::handle_cover_letter))
        .route(
            "/api/v1/linkedin-summary",
            post(documents::handle_linkedin_summary),
        )
        // CV Analyzer
        .route(
            "/api/v1/cv/extract",
            post(cv::handle_extract).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/cv/analyze",
            post(cv::handle_analyze).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/cv/analyze-text", post(cv::handle_analyze_text))
        // Mock Interview
        .route(
            "/api/v1/interview/sessions",
            post(interview::handle_create_session),
        )
        .route(
            "/api/v1/interview/sessions/:id",
            get(interview::handle_get_session).delete(interview::handle_end_session),
        )
        .route(
            "/api/v1/interview/sessions/:id/turns",
            post(interview::handle_post_turn),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::chain::testing::RecordingModel;
    use crate::config::Config;
    use crate::cv::extractor::fixtures::pdf_with_pages;

    const BOUNDARY: &str = "coach-test-boundary";

    fn app_with(model: Arc<RecordingModel>) -> Router {
        build_router(AppState::new(model, Config::default()))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(uri: &str, field: &str, payload: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"cv.pdf\"\r\nContent-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(payload);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_with(Arc::new(RecordingModel::replying("x")));
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_features_lists_five_panels_and_model() {
        let app = app_with(Arc::new(RecordingModel::replying("x")));
        let request = Request::builder()
            .uri("/api/v1/features")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["features"].as_array().unwrap().len(), 5);
        assert_eq!(body["model"], "recording");
    }

    #[tokio::test]
    async fn test_resume_over_http() {
        let model = Arc::new(RecordingModel::replying("## Resume\n..."));
        let app = app_with(model.clone());
        let request = json_request(
            "POST",
            "/api/v1/resume",
            json!({
                "job_title": "Backend Engineer",
                "experience": "5 years distributed systems",
                "skills": "Go, gRPC, Kubernetes"
            }),
        );

        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["output"], "## Resume\n...");
        assert_eq!(body["format"], "markdown");
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_field_is_bad_request() {
        let model = Arc::new(RecordingModel::replying("x"));
        let app = app_with(model.clone());
        let request = json_request(
            "POST",
            "/api/v1/linkedin-summary",
            json!({"name": "", "profession": "p", "goals": "g", "key_skills": "k"}),
        );

        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_interview_flow_over_http() {
        let model = Arc::new(RecordingModel::scripted(&["Q2?", "Thanks."]));
        let app = app_with(model.clone());

        let (status, created) = send(
            app.clone(),
            Request::builder()
                .method("POST")
                .uri("/api/v1/interview/sessions")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["session_id"].as_str().unwrap().to_string();
        let turns_uri = format!("/api/v1/interview/sessions/{id}/turns");

        let (_, first) = send(
            app.clone(),
            json_request("POST", &turns_uri, json!({"user_input": "Tell me about yourself"})),
        )
        .await;
        assert_eq!(first["reply"], "Q2?");

        let (status, second) = send(
            app.clone(),
            json_request("POST", &turns_uri, json!({"user_input": "What's your weakness?"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let turns = second["turns"].as_array().unwrap();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0]["user_input"], "Tell me about yourself");
        assert_eq!(turns[1]["reply"], "Thanks.");
        assert!(model.prompts()[1].contains("Candidate: Tell me about yourself\nCoach: Q2?"));

        let (status, _) = send(
            app.clone(),
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/v1/interview/sessions/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(
            app,
            json_request("POST", &turns_uri, json!({"user_input": "still there?"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_cv_extract_rejects_non_pdf() {
        let app = app_with(Arc::new(RecordingModel::replying("x")));
        let request = multipart_request("/api/v1/cv/extract", "file", b"plain text, not a pdf");

        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNREADABLE_PDF");
    }

    #[tokio::test]
    async fn test_cv_analyze_requires_file_field() {
        let model = Arc::new(RecordingModel::replying("x"));
        let app = app_with(model.clone());
        let request = multipart_request("/api/v1/cv/analyze", "attachment", b"%PDF-1.4");

        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_cv_analyze_pdf_over_http() {
        let model = Arc::new(RecordingModel::replying("Add a summary section."));
        let app = app_with(model.clone());
        let pdf = pdf_with_pages(&["JaneDoeEngineer", "ExperienceAcme"]);
        let request = multipart_request("/api/v1/cv/analyze", "file", &pdf);

        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["feedback"], "Add a summary section.");
        let extracted = body["extracted_text"].as_str().unwrap();
        assert!(extracted.find("JaneDoeEngineer").unwrap() < extracted.find("ExperienceAcme").unwrap());
        let prompts = model.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].ends_with(extracted));
    }

    #[tokio::test]
    async fn test_cv_upload_over_limit_is_payload_too_large() {
        let model = Arc::new(RecordingModel::replying("x"));
        let config = Config {
            max_upload_bytes: 256,
            ..Config::default()
        };
        let app = build_router(AppState::new(model.clone(), config));
        let request = multipart_request("/api/v1/cv/analyze", "file", &[b'a'; 4096]);

        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
        assert_eq!(model.call_count(), 0);
    }

    #[tokio::test]
    async fn test_cv_analyze_text_over_http() {
        let model = Arc::new(RecordingModel::replying("Add metrics to bullets."));
        let app = app_with(model);
        let request = json_request(
            "POST",
            "/api/v1/cv/analyze-text",
            json!({"cv_text": "Jane Doe, Engineer"}),
        );

        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["feedback"], "Add metrics to bullets.");
    }
}
