mod common;

use assert_matches::assert_matches;
use aula_core::error::CoreError;
use aula_core::messages;
use aula_core::storage::ObjectStorage;
use aula_db::store::ResourceStore;
use aula_usecases::uploads::{UploadFileInput, UploadFileUseCase};
use common::{version_id, Fixture};

fn pdf(course_id: i64, topic_id: i64) -> UploadFileInput {
    UploadFileInput {
        course_id,
        topic_id,
        resource_type: "document".to_string(),
        file_name: "Guía práctica.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        content: b"%PDF-1.7".to_vec(),
        title: None,
    }
}

#[tokio::test]
async fn upload_stores_object_and_creates_file_resource() {
    let fx = Fixture::new().await;
    let course = fx.course("C").await;
    let topic = fx.topic(version_id(&course), "T").await;

    let resource = UploadFileUseCase::new(&fx.store, &fx.storage)
        .execute(fx.editor, pdf(course.course.id, topic.id))
        .await
        .unwrap();

    assert_eq!(resource.kind, "file");
    assert_eq!(resource.title, "Guía práctica.pdf");
    assert_eq!(resource.file_size, Some(8));
    assert_eq!(resource.mime_type.as_deref(), Some("application/pdf"));

    let url = resource.file_url.expect("file resource has a URL");
    let key = fx.storage.key_from_url(&url).expect("URL belongs to storage");
    let prefix = format!("courses/{}/topics/{}/Gu_a_pr_ctica_", course.course.id, topic.id);
    assert!(key.starts_with(&prefix), "unexpected key {key}");
    assert!(key.ends_with(".pdf"));
    let stored = fx.storage.get(&key).expect("object stored");
    assert_eq!(stored.content_type, "application/pdf");
}

#[tokio::test]
async fn upload_rejects_disallowed_type_without_storing() {
    let fx = Fixture::new().await;
    let course = fx.course("C").await;
    let topic = fx.topic(version_id(&course), "T").await;
    let mut input = pdf(course.course.id, topic.id);
    input.content_type = "application/zip".to_string();

    let err = UploadFileUseCase::new(&fx.store, &fx.storage)
        .execute(fx.admin, input)
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Validation(_));
    assert!(fx.storage.is_empty());
}

#[tokio::test]
async fn upload_checks_topic_belongs_to_course() {
    let fx = Fixture::new().await;
    let first = fx.course("Uno").await;
    let second = fx.course("Dos").await;
    let topic = fx.topic(version_id(&first), "T").await;

    let err = UploadFileUseCase::new(&fx.store, &fx.storage)
        .execute(fx.admin, pdf(second.course.id, topic.id))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Validation(ref m) if m == messages::TOPIC_NOT_IN_COURSE);
}

#[tokio::test]
async fn unassigned_teacher_cannot_upload() {
    let fx = Fixture::new().await;
    let course = fx.course("C").await;
    let topic = fx.topic(version_id(&course), "T").await;

    let err = UploadFileUseCase::new(&fx.store, &fx.storage)
        .execute(fx.teacher, pdf(course.course.id, topic.id))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Forbidden(ref m) if m == messages::NOT_ASSIGNED);
    assert!(fx.storage.is_empty());
}

#[tokio::test]
async fn storage_failure_creates_no_resource() {
    let fx = Fixture::new().await;
    let course = fx.course("C").await;
    let vid = version_id(&course);
    let topic = fx.topic(vid, "T").await;
    fx.storage.fail_puts(true);

    let err = UploadFileUseCase::new(&fx.store, &fx.storage)
        .execute(fx.admin, pdf(course.course.id, topic.id))
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Internal(ref m) if m == messages::UNEXPECTED_ERROR);
    assert!(fx.store.list_resources_for_version(vid).await.unwrap().is_empty());
}

#[tokio::test]
async fn explicit_title_wins_over_file_name() {
    let fx = Fixture::new().await;
    let course = fx.course("C").await;
    let topic = fx.topic(version_id(&course), "T").await;
    let mut input = pdf(course.course.id, topic.id);
    input.title = Some("Apuntes".to_string());

    let resource = UploadFileUseCase::new(&fx.store, &fx.storage)
        .execute(fx.admin, input)
        .await
        .unwrap();
    assert_eq!(resource.title, "Apuntes");
    assert_eq!(resource.file_name.as_deref(), Some("Guía práctica.pdf"));
}
