mod common;

use assert_matches::assert_matches;
use aula_core::error::CoreError;
use aula_core::messages;
use aula_db::store::ProgressStore;
use aula_usecases::progress::{
    GetCourseProgressUseCase, MarkTopicCompleteUseCase, MarkTopicIncompleteUseCase,
};
use aula_usecases::versions::PublishVersionUseCase;
use common::{version_id, Fixture};

#[tokio::test]
async fn completing_twice_keeps_one_record() {
    let fx = Fixture::new().await;
    let vid = version_id(&fx.course("C").await);
    let topic = fx.topic(vid, "T").await;
    PublishVersionUseCase::new(&fx.store).execute(fx.admin, vid).await.unwrap();

    let first = MarkTopicCompleteUseCase::new(&fx.store)
        .execute(fx.student, topic.id)
        .await
        .unwrap();
    let second = MarkTopicCompleteUseCase::new(&fx.store)
        .execute(fx.student, topic.id)
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert!(second.completed);
    assert_eq!(first.completed_at, second.completed_at);
    let records = fx.store.list_progress_for_version(fx.student, vid).await.unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn reset_clears_completion() {
    let fx = Fixture::new().await;
    let vid = version_id(&fx.course("C").await);
    let topic = fx.topic(vid, "T").await;
    PublishVersionUseCase::new(&fx.store).execute(fx.admin, vid).await.unwrap();

    MarkTopicCompleteUseCase::new(&fx.store)
        .execute(fx.student, topic.id)
        .await
        .unwrap();
    let reset = MarkTopicIncompleteUseCase::new(&fx.store)
        .execute(fx.student, topic.id)
        .await
        .unwrap();
    assert!(!reset.completed);
    assert!(reset.completed_at.is_none());
}

#[tokio::test]
async fn percentage_counts_completed_topics() {
    let fx = Fixture::new().await;
    let vid = version_id(&fx.course("C").await);
    let a = fx.topic(vid, "A").await;
    fx.topic(vid, "B").await;
    fx.topic(vid, "C").await;
    PublishVersionUseCase::new(&fx.store).execute(fx.admin, vid).await.unwrap();

    let empty = GetCourseProgressUseCase::new(&fx.store)
        .execute(fx.student, vid)
        .await
        .unwrap();
    assert_eq!(empty.total_topics, 3);
    assert_eq!(empty.percentage, 0);

    MarkTopicCompleteUseCase::new(&fx.store)
        .execute(fx.student, a.id)
        .await
        .unwrap();
    let progress = GetCourseProgressUseCase::new(&fx.store)
        .execute(fx.student, vid)
        .await
        .unwrap();
    assert_eq!(progress.completed_topic_ids, [a.id]);
    assert_eq!(progress.percentage, 33);

    // Another student's progress is separate.
    let other = GetCourseProgressUseCase::new(&fx.store)
        .execute(fx.admin, vid)
        .await
        .unwrap();
    assert!(other.completed_topic_ids.is_empty());
}

#[tokio::test]
async fn students_cannot_track_unpublished_content() {
    let fx = Fixture::new().await;
    let vid = version_id(&fx.course("C").await);
    let topic = fx.topic(vid, "T").await;

    let err = MarkTopicCompleteUseCase::new(&fx.store)
        .execute(fx.student, topic.id)
        .await
        .unwrap_err();
    assert_matches!(err, CoreError::Forbidden(ref m) if m == messages::CONTENT_NOT_AVAILABLE);
}

#[tokio::test]
async fn empty_version_is_zero_percent() {
    let fx = Fixture::new().await;
    let vid = version_id(&fx.course("C").await);
    let progress = GetCourseProgressUseCase::new(&fx.store)
        .execute(fx.teacher, vid)
        .await
        .unwrap();
    assert_eq!(progress.total_topics, 0);
    assert_eq!(progress.percentage, 0);
}
