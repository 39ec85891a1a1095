//! HTTP-level tests for multipart uploads.

mod common;

use aula_core::storage::ObjectStorage;
use axum::http::StatusCode;
use common::{body_json, multipart_body, post_json_auth, post_multipart, TestApp};
use serde_json::json;

const BOUNDARY: &str = "aula-test-boundary";

/// Create a course with one topic; returns `(course_id, topic_id)`.
async fn course_with_topic(test: &TestApp, admin: &str) -> (i64, i64) {
    let response = post_json_auth(
        test.app(),
        "/api/v1/courses",
        admin,
        json!({ "title": "Arte" }),
    )
    .await;
    let course = body_json(response).await["data"].clone();
    let course_id = course["id"].as_i64().unwrap();

    let response = post_json_auth(
        test.app(),
        &format!("/api/v1/courses/{course_id}/topics"),
        admin,
        json!({ "title": "Pintura" }),
    )
    .await;
    let topic_id = body_json(response).await["data"]["id"].as_i64().unwrap();
    (course_id, topic_id)
}

#[tokio::test]
async fn upload_creates_file_resource() {
    let test = TestApp::new();
    let (_, admin) = test.user("admin", "admin").await;
    let (course_id, topic_id) = course_with_topic(&test, &admin).await;
    let (course, topic) = (course_id.to_string(), topic_id.to_string());

    let body = multipart_body(
        BOUNDARY,
        &[
            ("courseId", course.as_str()),
            ("topicId", topic.as_str()),
            ("resourceType", "image"),
            ("title", "Paleta"),
        ],
        Some(("paleta de color.png", "image/png", &b"\x89PNG...."[..])),
    );
    let response = post_multipart(test.app(), "/api/v1/uploads", &admin, BOUNDARY, body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let resource = body_json(response).await["data"].clone();
    assert_eq!(resource["title"], "Paleta");
    assert_eq!(resource["kind"], "file");
    assert_eq!(resource["topic_id"], topic_id);
    assert_eq!(resource["mime_type"], "image/png");
    assert_eq!(resource["file_size"], 8);

    let url = resource["file_url"].as_str().unwrap();
    let key = test.storage.key_from_url(url).expect("URL belongs to storage");
    assert!(key.starts_with(&format!(
        "courses/{course_id}/topics/{topic_id}/paleta_de_color_"
    )));
    assert!(key.ends_with(".png"));
    assert!(test.storage.contains(&key));
}

#[tokio::test]
async fn upload_without_file_is_bad_request() {
    let test = TestApp::new();
    let (_, admin) = test.user("admin", "admin").await;
    let (course_id, topic_id) = course_with_topic(&test, &admin).await;
    let (course, topic) = (course_id.to_string(), topic_id.to_string());

    let body = multipart_body(
        BOUNDARY,
        &[
            ("courseId", course.as_str()),
            ("topicId", topic.as_str()),
            ("resourceType", "document"),
        ],
        None,
    );
    let response = post_multipart(test.app(), "/api/v1/uploads", &admin, BOUNDARY, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("file"));
    assert!(test.storage.is_empty());
}

#[tokio::test]
async fn upload_with_disallowed_type_stores_nothing() {
    let test = TestApp::new();
    let (_, admin) = test.user("admin", "admin").await;
    let (course_id, topic_id) = course_with_topic(&test, &admin).await;
    let (course, topic) = (course_id.to_string(), topic_id.to_string());

    let body = multipart_body(
        BOUNDARY,
        &[
            ("courseId", course.as_str()),
            ("topicId", topic.as_str()),
            ("resourceType", "document"),
        ],
        Some(("script.sh", "application/x-sh", &b"echo hola"[..])),
    );
    let response = post_multipart(test.app(), "/api/v1/uploads", &admin, BOUNDARY, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert!(test.storage.is_empty());
}

#[tokio::test]
async fn upload_with_non_numeric_id_is_bad_request() {
    let test = TestApp::new();
    let (_, admin) = test.user("admin", "admin").await;

    let body = multipart_body(
        BOUNDARY,
        &[("courseId", "abc"), ("topicId", "1"), ("resourceType", "document")],
        Some(("a.pdf", "application/pdf", &b"%PDF"[..])),
    );
    let response = post_multipart(test.app(), "/api/v1/uploads", &admin, BOUNDARY, body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"]
        .as_str()
        .unwrap()
        .contains("courseId"));
}

#[tokio::test]
async fn storage_failure_is_sanitized_500() {
    let test = TestApp::new();
    let (_, admin) = test.user("admin", "admin").await;
    let (course_id, topic_id) = course_with_topic(&test, &admin).await;
    let (course, topic) = (course_id.to_string(), topic_id.to_string());
    test.storage.fail_puts(true);

    let body = multipart_body(
        BOUNDARY,
        &[
            ("courseId", course.as_str()),
            ("topicId", topic.as_str()),
            ("resourceType", "document"),
        ],
        Some(("a.pdf", "application/pdf", &b"%PDF"[..])),
    );
    let response = post_multipart(test.app(), "/api/v1/uploads", &admin, BOUNDARY, body).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["error"],
        aula_core::messages::UNEXPECTED_ERROR
    );
}

#[tokio::test]
async fn upload_requires_authentication() {
    let test = TestApp::new();
    let body = multipart_body(BOUNDARY, &[], Some(("a.pdf", "application/pdf", &b"%PDF"[..])));
    let response = post_multipart(test.app(), "/api/v1/uploads", "", BOUNDARY, body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
