//! Repository traits consumed by the use-case layer.
//!
//! Split per aggregate; [`ContentStore`] bundles them so callers can hold a
//! single `Arc<dyn ContentStore>`. [`crate::PgContentStore`] is the production
//! implementation and [`crate::MemoryContentStore`] backs tests and local
//! experiments.
//!
//! Guarded writes (`publish_version`, `archive_version`) return `Ok(None)` when
//! the row is no longer in the expected state, so the caller can report the
//! domain error instead of a database one.

use async_trait::async_trait;
use aula_core::types::DbId;

use crate::error::StoreResult;
use crate::models::assignment::TeacherAssignment;
use crate::models::comment::{CreateComment, TopicComment};
use crate::models::course::{Course, CreateCourse, UpdateCourse};
use crate::models::course_module::{CourseModule, CreateCourseModule, CreateLesson, Lesson};
use crate::models::course_version::{CourseVersion, CreateDraftVersion};
use crate::models::profile::{CreateProfile, Profile};
use crate::models::progress::StudentProgress;
use crate::models::resource::{CreateResource, Resource, UpdateResource};
use crate::models::topic::{CreateTopic, Topic, UpdateTopic};

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_profile(&self, id: DbId) -> StoreResult<Option<Profile>>;
    async fn find_profile_by_email(&self, email: &str) -> StoreResult<Option<Profile>>;
    async fn create_profile(&self, input: &CreateProfile) -> StoreResult<Profile>;
    async fn list_profiles(&self) -> StoreResult<Vec<Profile>>;
    async fn update_profile_role(&self, id: DbId, role: &str) -> StoreResult<Option<Profile>>;
}

#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Insert a course and its initial draft version, pointing the course's
    /// active version at it.
    async fn create_course_with_version(
        &self,
        input: &CreateCourse,
        version_label: &str,
        created_by: DbId,
    ) -> StoreResult<(Course, CourseVersion)>;
    async fn find_course(&self, id: DbId) -> StoreResult<Option<Course>>;
    async fn list_courses(&self) -> StoreResult<Vec<Course>>;
    async fn update_course(&self, id: DbId, input: &UpdateCourse) -> StoreResult<Option<Course>>;

    async fn find_version(&self, id: DbId) -> StoreResult<Option<CourseVersion>>;
    async fn list_versions(&self, course_id: DbId) -> StoreResult<Vec<CourseVersion>>;
    /// Insert a draft, copying the base version's topics, resources, modules
    /// and lessons when one is given.
    async fn create_draft(&self, input: &CreateDraftVersion) -> StoreResult<CourseVersion>;
    /// Publish a draft: archive the course's currently published version,
    /// mark this one published, stamp `approved_at`, and make it active.
    async fn publish_version(&self, id: DbId) -> StoreResult<Option<CourseVersion>>;
    /// Archive a published version, clearing the course's active version if
    /// it pointed here.
    async fn archive_version(&self, id: DbId) -> StoreResult<Option<CourseVersion>>;
}

#[async_trait]
pub trait TopicStore: Send + Sync {
    async fn create_topic(&self, input: &CreateTopic) -> StoreResult<Topic>;
    async fn find_topic(&self, id: DbId) -> StoreResult<Option<Topic>>;
    async fn list_topics(&self, course_version_id: DbId) -> StoreResult<Vec<Topic>>;
    async fn update_topic(&self, id: DbId, input: &UpdateTopic) -> StoreResult<Option<Topic>>;
    async fn delete_topic(&self, id: DbId) -> StoreResult<bool>;
}

#[async_trait]
pub trait ResourceStore: Send + Sync {
    async fn create_resource(&self, input: &CreateResource) -> StoreResult<Resource>;
    async fn find_resource(&self, id: DbId) -> StoreResult<Option<Resource>>;
    async fn list_resources_for_version(&self, course_version_id: DbId)
        -> StoreResult<Vec<Resource>>;
    async fn update_resource(
        &self,
        id: DbId,
        input: &UpdateResource,
    ) -> StoreResult<Option<Resource>>;
    async fn delete_resource(&self, id: DbId) -> StoreResult<bool>;
    /// How many resources still reference `file_url`.
    async fn count_resources_with_file_url(&self, file_url: &str) -> StoreResult<i64>;
}

#[async_trait]
pub trait ModuleStore: Send + Sync {
    async fn create_module(&self, input: &CreateCourseModule) -> StoreResult<CourseModule>;
    async fn find_module(&self, id: DbId) -> StoreResult<Option<CourseModule>>;
    async fn list_modules(&self, course_version_id: DbId) -> StoreResult<Vec<CourseModule>>;
    /// Delete a module and, by cascade, its lessons.
    async fn delete_module(&self, id: DbId) -> StoreResult<bool>;

    async fn create_lesson(&self, input: &CreateLesson) -> StoreResult<Lesson>;
    async fn find_lesson(&self, id: DbId) -> StoreResult<Option<Lesson>>;
    async fn list_lessons_for_version(&self, course_version_id: DbId) -> StoreResult<Vec<Lesson>>;
    async fn delete_lesson(&self, id: DbId) -> StoreResult<bool>;
}

#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Insert or update the (student, topic) record. `completed_at` is set the
    /// first time the record becomes complete and cleared when it is reset.
    async fn upsert_progress(
        &self,
        student_id: DbId,
        topic_id: DbId,
        completed: bool,
    ) -> StoreResult<StudentProgress>;
    async fn list_progress_for_version(
        &self,
        student_id: DbId,
        course_version_id: DbId,
    ) -> StoreResult<Vec<StudentProgress>>;
}

#[async_trait]
pub trait AssignmentStore: Send + Sync {
    async fn is_teacher_assigned(&self, teacher_id: DbId, course_version_id: DbId)
        -> StoreResult<bool>;
    async fn assign_teacher(
        &self,
        teacher_id: DbId,
        course_version_id: DbId,
        assigned_by: Option<DbId>,
    ) -> StoreResult<TeacherAssignment>;
    async fn unassign_teacher(&self, teacher_id: DbId, course_version_id: DbId)
        -> StoreResult<bool>;
    async fn list_assignments_for_version(
        &self,
        course_version_id: DbId,
    ) -> StoreResult<Vec<TeacherAssignment>>;
    async fn list_assignments_for_teacher(
        &self,
        teacher_id: DbId,
    ) -> StoreResult<Vec<TeacherAssignment>>;
}

#[async_trait]
pub trait CommentStore: Send + Sync {
    async fn create_comment(&self, input: &CreateComment) -> StoreResult<TopicComment>;
    async fn find_comment(&self, id: DbId) -> StoreResult<Option<TopicComment>>;
    async fn update_comment(&self, id: DbId, body: &str) -> StoreResult<Option<TopicComment>>;
    async fn list_comments(&self, topic_id: DbId) -> StoreResult<Vec<TopicComment>>;
}

#[async_trait]
pub trait HealthStore: Send + Sync {
    /// Verify the backing database is reachable.
    async fn ping(&self) -> StoreResult<()>;
}

/// Every repository the use-cases need.
pub trait ContentStore:
    HealthStore
    + ProfileStore
    + CourseStore
    + TopicStore
    + ResourceStore
    + ModuleStore
    + ProgressStore
    + AssignmentStore
    + CommentStore
{
}

impl<T> ContentStore for T where
    T: HealthStore
        + ProfileStore
        + CourseStore
        + TopicStore
        + ResourceStore
        + ModuleStore
        + ProgressStore
        + AssignmentStore
        + CommentStore
{
}
