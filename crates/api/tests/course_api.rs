//! HTTP-level tests for the course lifecycle: creation, content editing,
//! assignments, publishing, progress and comments.

mod common;

use aula_core::messages;
use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get_auth, post_auth, post_json_auth, put_json_auth, TestApp,
};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a visible course as `token` and return the `data` payload.
async fn create_course(test: &TestApp, token: &str, title: &str) -> Value {
    let response = post_json_auth(
        test.app(),
        "/api/v1/courses",
        token,
        json!({ "title": title, "is_visible": true }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

async fn create_topic(test: &TestApp, token: &str, version_id: i64, title: &str) -> Value {
    let response = post_json_auth(
        test.app(),
        &format!("/api/v1/versions/{version_id}/topics"),
        token,
        json!({ "title": title }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

fn id(value: &Value) -> i64 {
    value["id"].as_i64().expect("payload has an id")
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_creates_course_with_active_draft() {
    let test = TestApp::new();
    let (_, admin) = test.user("admin", "admin").await;

    let course = create_course(&test, &admin, "Introducción a Rust").await;

    assert_eq!(course["slug"], "introduccion-a-rust");
    assert_eq!(course["active_version"]["status"], "draft");
    assert_eq!(course["active_version"]["version_label"], "v1.0.0");
    assert_eq!(course["active_version_id"], course["active_version"]["id"]);
}

#[tokio::test]
async fn only_admins_create_courses() {
    let test = TestApp::new();
    let (_, editor) = test.user("editor", "editor").await;

    let response = post_json_auth(
        test.app(),
        "/api/v1/courses",
        &editor,
        json!({ "title": "Curso" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], messages::ADMIN_ONLY);
}

#[tokio::test]
async fn students_only_list_published_visible_courses() {
    let test = TestApp::new();
    let (_, admin) = test.user("admin", "admin").await;
    let (_, student) = test.user("alumno", "student").await;

    let draft = create_course(&test, &admin, "Borrador").await;
    let live = create_course(&test, &admin, "Publicado").await;
    let version_id = id(&live["active_version"]);
    let response = post_auth(
        test.app(),
        &format!("/api/v1/versions/{version_id}/publish"),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get_auth(test.app(), "/api/v1/courses", &student).await).await;
    let listed: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(id)
        .collect();
    assert_eq!(listed, vec![id(&live)]);

    let json = body_json(get_auth(test.app(), "/api/v1/courses", &admin).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert!(json["data"].as_array().unwrap().iter().any(|c| id(c) == id(&draft)));
}

// ---------------------------------------------------------------------------
// Content editing and assignments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn teacher_needs_assignment_to_edit() {
    let test = TestApp::new();
    let (_, admin) = test.user("admin", "admin").await;
    let (teacher_id, teacher) = test.user("profe", "teacher").await;
    let course = create_course(&test, &admin, "Álgebra").await;
    let version_id = id(&course["active_version"]);
    let topics_uri = format!("/api/v1/versions/{version_id}/topics");

    let response =
        post_json_auth(test.app(), &topics_uri, &teacher, json!({ "title": "Tema 1" })).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], messages::NOT_ASSIGNED);

    let response = post_json_auth(
        test.app(),
        &format!("/api/v1/versions/{version_id}/assignments"),
        &admin,
        json!({ "teacher_id": teacher_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let topic = create_topic(&test, &teacher, version_id, "Tema 1").await;
    assert_eq!(topic["order_index"], 0);

    let mine = body_json(get_auth(test.app(), "/api/v1/me/assignments", &teacher).await).await;
    assert_eq!(mine["data"][0]["course_version_id"], version_id);

    let response = delete_auth(
        test.app(),
        &format!("/api/v1/versions/{version_id}/assignments/{teacher_id}"),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response =
        post_json_auth(test.app(), &topics_uri, &teacher, json!({ "title": "Tema 2" })).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn topic_resources_and_content_tree() {
    let test = TestApp::new();
    let (_, admin) = test.user("admin", "admin").await;
    let (_, editor) = test.user("editor", "editor").await;
    let course = create_course(&test, &admin, "Historia").await;
    let course_id = id(&course);
    let version_id = id(&course["active_version"]);

    // Topics posted to the course land in its active version.
    let response = post_json_auth(
        test.app(),
        &format!("/api/v1/courses/{course_id}/topics"),
        &editor,
        json!({ "title": "Roma" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let roma = body_json(response).await["data"].clone();
    assert_eq!(roma["course_version_id"], version_id);
    let grecia = create_topic(&test, &editor, version_id, "Grecia").await;
    assert_eq!(grecia["order_index"], 1);

    let response = post_json_auth(
        test.app(),
        &format!("/api/v1/topics/{}/resources", id(&roma)),
        &editor,
        json!({ "title": "Mapa", "kind": "link", "external_url": "https://example.com/mapa" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = put_json_auth(
        test.app(),
        &format!("/api/v1/topics/{}", id(&grecia)),
        &editor,
        json!({ "title": "Grecia clásica" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["title"], "Grecia clásica");

    let content = body_json(
        get_auth(
            test.app(),
            &format!("/api/v1/versions/{version_id}/content"),
            &editor,
        )
        .await,
    )
    .await;
    let topics = content["data"]["topics"].as_array().unwrap();
    assert_eq!(topics.len(), 2);
    assert_eq!(topics[0]["title"], "Roma");
    assert_eq!(topics[0]["resources"][0]["kind"], "link");
    assert_eq!(topics[1]["title"], "Grecia clásica");

    let response = delete_auth(
        test.app(),
        &format!("/api/v1/topics/{}", id(&grecia)),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn invalid_resource_is_rejected() {
    let test = TestApp::new();
    let (_, admin) = test.user("admin", "admin").await;
    let course = create_course(&test, &admin, "Química").await;
    let topic = create_topic(&test, &admin, id(&course["active_version"]), "Átomos").await;

    let response = post_json_auth(
        test.app(),
        &format!("/api/v1/topics/{}/resources", id(&topic)),
        &admin,
        json!({ "title": "Enlace roto", "kind": "link", "external_url": "ftp://example.com" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn publish_is_admin_only_and_freezes_content() {
    let test = TestApp::new();
    let (_, admin) = test.user("admin", "admin").await;
    let (_, editor) = test.user("editor", "editor").await;
    let course = create_course(&test, &admin, "Física").await;
    let version_id = id(&course["active_version"]);
    let publish_uri = format!("/api/v1/versions/{version_id}/publish");

    let response = post_auth(test.app(), &publish_uri, &editor).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], messages::PUBLISH_ADMIN_ONLY);

    let response = post_auth(test.app(), &publish_uri, &admin).await;
    assert_eq!(response.status(), StatusCode::OK);
    let version = body_json(response).await["data"].clone();
    assert_eq!(version["status"], "published");
    assert!(version["approved_at"].is_string());

    let response = post_json_auth(
        test.app(),
        &format!("/api/v1/versions/{version_id}/topics"),
        &editor,
        json!({ "title": "Tarde" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"], messages::VERSION_NOT_EDITABLE);

    let response = post_auth(test.app(), &publish_uri, &admin).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"], messages::ONLY_DRAFT_PUBLISHABLE);
}

#[tokio::test]
async fn new_draft_copies_content_and_supersedes_on_publish() {
    let test = TestApp::new();
    let (_, admin) = test.user("admin", "admin").await;
    let course = create_course(&test, &admin, "Biología").await;
    let course_id = id(&course);
    let v1 = id(&course["active_version"]);
    create_topic(&test, &admin, v1, "Células").await;
    post_auth(test.app(), &format!("/api/v1/versions/{v1}/publish"), &admin).await;

    let response = post_json_auth(
        test.app(),
        &format!("/api/v1/courses/{course_id}/versions"),
        &admin,
        json!({ "version_label": "v2.0.0", "base_version_id": v1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let v2 = id(&body_json(response).await["data"]);

    let content = body_json(
        get_auth(test.app(), &format!("/api/v1/versions/{v2}/content"), &admin).await,
    )
    .await;
    assert_eq!(content["data"]["topics"][0]["title"], "Células");

    let response = post_auth(test.app(), &format!("/api/v1/versions/{v2}/publish"), &admin).await;
    assert_eq!(response.status(), StatusCode::OK);

    let versions = body_json(
        get_auth(
            test.app(),
            &format!("/api/v1/courses/{course_id}/versions"),
            &admin,
        )
        .await,
    )
    .await;
    let statuses: Vec<(i64, String)> = versions["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| (id(v), v["status"].as_str().unwrap().to_string()))
        .collect();
    assert!(statuses.contains(&(v1, "archived".to_string())));
    assert!(statuses.contains(&(v2, "published".to_string())));

    let course = body_json(
        get_auth(test.app(), &format!("/api/v1/courses/{course_id}"), &admin).await,
    )
    .await;
    assert_eq!(course["data"]["active_version_id"], v2);
}

// ---------------------------------------------------------------------------
// Students: progress and comments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn student_progress_flow() {
    let test = TestApp::new();
    let (_, admin) = test.user("admin", "admin").await;
    let (_, student) = test.user("alumno", "student").await;
    let course = create_course(&test, &admin, "Geografía").await;
    let version_id = id(&course["active_version"]);
    let first = create_topic(&test, &admin, version_id, "Ríos").await;
    create_topic(&test, &admin, version_id, "Montañas").await;

    // Drafts are hidden from students.
    let response = post_auth(
        test.app(),
        &format!("/api/v1/topics/{}/complete", id(&first)),
        &student,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], messages::CONTENT_NOT_AVAILABLE);

    post_auth(test.app(), &format!("/api/v1/versions/{version_id}/publish"), &admin).await;

    let complete_uri = format!("/api/v1/topics/{}/complete", id(&first));
    for _ in 0..2 {
        let response = post_auth(test.app(), &complete_uri, &student).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let progress_uri = format!("/api/v1/versions/{version_id}/progress");
    let progress = body_json(get_auth(test.app(), &progress_uri, &student).await).await;
    assert_eq!(progress["data"]["total_topics"], 2);
    assert_eq!(progress["data"]["completed_topic_ids"], json!([id(&first)]));
    assert_eq!(progress["data"]["percentage"], 50);

    let response = delete_auth(test.app(), &complete_uri, &student).await;
    assert_eq!(response.status(), StatusCode::OK);
    let progress = body_json(get_auth(test.app(), &progress_uri, &student).await).await;
    assert_eq!(progress["data"]["percentage"], 0);
}

#[tokio::test]
async fn comment_thread_with_reply() {
    let test = TestApp::new();
    let (_, admin) = test.user("admin", "admin").await;
    let (student_id, student) = test.user("alumno", "student").await;
    let (_, other) = test.user("otro", "student").await;
    let course = create_course(&test, &admin, "Música").await;
    let version_id = id(&course["active_version"]);
    let topic = create_topic(&test, &admin, version_id, "Ritmo").await;
    post_auth(test.app(), &format!("/api/v1/versions/{version_id}/publish"), &admin).await;
    let comments_uri = format!("/api/v1/topics/{}/comments", id(&topic));

    let response =
        post_json_auth(test.app(), &comments_uri, &student, json!({ "body": "¿Qué es un compás?" }))
            .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let question = body_json(response).await["data"].clone();
    assert_eq!(question["author_id"], student_id);

    let response = post_json_auth(
        test.app(),
        &format!("/api/v1/comments/{}/responses", id(&question)),
        &admin,
        json!({ "body": "Una unidad de tiempo." }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = put_json_auth(
        test.app(),
        &format!("/api/v1/comments/{}", id(&question)),
        &other,
        json!({ "body": "Editado" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["error"], messages::NOT_COMMENT_AUTHOR);

    let thread = body_json(get_auth(test.app(), &comments_uri, &other).await).await;
    let thread = thread["data"].as_array().unwrap();
    assert_eq!(thread.len(), 2);
    assert_eq!(thread[1]["parent_id"], id(&question));
}

// ---------------------------------------------------------------------------
// Admin: profiles
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_changes_roles() {
    let test = TestApp::new();
    let (_, admin) = test.user("admin", "admin").await;
    let (student_id, student) = test.user("alumno", "student").await;

    let response = get_auth(test.app(), "/api/v1/admin/profiles", &student).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = put_json_auth(
        test.app(),
        &format!("/api/v1/admin/profiles/{student_id}/role"),
        &admin,
        json!({ "role": "teacher" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["role"], "teacher");

    let response = put_json_auth(
        test.app(),
        &format!("/api/v1/admin/profiles/{student_id}/role"),
        &admin,
        json!({ "role": "superuser" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
