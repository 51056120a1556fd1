use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
    response::Response,
    routing::post,
};
use batchsort_config::Config;
use batchsort_core::SortError;
use batchsort_server::{
    create_app,
    errors::{AppError, AppResult},
    routes::paths,
};
use tower::ServiceExt;

fn request(method: Method, uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body))
        .expect("request")
}

async fn failing_unit() -> AppResult<&'static str> {
    Err(AppError::from(SortError::UnitFailed {
        index: 2,
        reason: "boom".to_owned(),
    }))
}

async fn panicking_task() -> AppResult<&'static str> {
    tokio::task::spawn_blocking(|| -> &'static str { panic!("sort task") })
        .await?;
    Ok("unreachable")
}

async fn assert_plain_text_server_error(response: Response) -> String {
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert!(
        content_type
            .as_deref()
            .is_some_and(|value| value.starts_with("text/plain")),
        "unexpected content type {content_type:?}"
    );

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn sort_failure_is_a_plain_text_server_error() {
    let app = Router::new().route("/fail", post(failing_unit));

    let response = app
        .oneshot(request(Method::POST, "/fail", ""))
        .await
        .expect("response");

    let body = assert_plain_text_server_error(response).await;
    assert_eq!(body, "sort unit for sequence 2 failed: boom");
}

#[tokio::test]
async fn panicked_task_is_a_plain_text_server_error() {
    let app = Router::new().route("/panic", post(panicking_task));

    let response = app
        .oneshot(request(Method::POST, "/panic", ""))
        .await
        .expect("response");

    let body = assert_plain_text_server_error(response).await;
    assert_eq!(body, "Sort task failed");
}

#[tokio::test]
async fn success_is_json_with_expected_fields() {
    let app = create_app(&Config::default());

    let response = app
        .oneshot(request(
            Method::POST,
            paths::PROCESS_SINGLE,
            r#"{"to_sort": [[2, 1]]}"#,
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("application/json")
    );

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body: serde_json::Value =
        serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["sorted_arrays"], serde_json::json!([[1, 2]]));
    assert!(body["time_ns"].as_i64().is_some());
    assert_eq!(body.as_object().map(|object| object.len()), Some(2));
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let app = create_app(&Config::default());

    let response = app
        .oneshot(request(Method::POST, "/process-parallel", "{}"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_post_methods_are_not_allowed() {
    for path in [paths::PROCESS_SINGLE, paths::PROCESS_CONCURRENT] {
        let app = create_app(&Config::default());

        let response = app
            .oneshot(request(Method::GET, path, ""))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}

#[tokio::test]
async fn missing_field_and_null_body_yield_empty_results() {
    for body in ["{}", "null", r#"{"to_sort": null}"#] {
        let app = create_app(&Config::default());

        let response = app
            .oneshot(request(Method::POST, paths::PROCESS_CONCURRENT, body))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK, "{body}");
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json: serde_json::Value =
            serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(json["sorted_arrays"], serde_json::json!([]));
    }
}
