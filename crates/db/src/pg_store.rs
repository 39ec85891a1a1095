//! PostgreSQL-backed [`ContentStore`](crate::store::ContentStore).
//!
//! A thin adapter: every method delegates to the matching repository and
//! converts `sqlx::Error` into [`StoreError`](crate::StoreError).

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
use crate::repositories::{
    CourseModuleRepo, CourseRepo, CourseVersionRepo, LessonRepo, ProfileRepo, ProgressRepo,
    ResourceRepo, TeacherAssignmentRepo, TopicCommentRepo, TopicRepo,
};
use crate::store::{
    AssignmentStore, CommentStore, CourseStore, HealthStore, ModuleStore, ProfileStore,
    ProgressStore, ResourceStore, TopicStore,
};
use crate::DbPool;

#[derive(Clone)]
pub struct PgContentStore {
    pool: DbPool,
}

impl PgContentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl HealthStore for PgContentStore {
    async fn ping(&self) -> StoreResult<()> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

#[async_trait]
impl ProfileStore for PgContentStore {
    async fn find_profile(&self, id: DbId) -> StoreResult<Option<Profile>> {
        Ok(ProfileRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_profile_by_email(&self, email: &str) -> StoreResult<Option<Profile>> {
        Ok(ProfileRepo::find_by_email(&self.pool, email).await?)
    }

    async fn create_profile(&self, input: &CreateProfile) -> StoreResult<Profile> {
        Ok(ProfileRepo::create(&self.pool, input).await?)
    }

    async fn list_profiles(&self) -> StoreResult<Vec<Profile>> {
        Ok(ProfileRepo::list(&self.pool).await?)
    }

    async fn update_profile_role(&self, id: DbId, role: &str) -> StoreResult<Option<Profile>> {
        Ok(ProfileRepo::update_role(&self.pool, id, role).await?)
    }
}

#[async_trait]
impl CourseStore for PgContentStore {
    async fn create_course_with_version(
        &self,
        input: &CreateCourse,
        version_label: &str,
        created_by: DbId,
    ) -> StoreResult<(Course, CourseVersion)> {
        Ok(CourseRepo::create_with_version(&self.pool, input, version_label, created_by).await?)
    }

    async fn find_course(&self, id: DbId) -> StoreResult<Option<Course>> {
        Ok(CourseRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_courses(&self) -> StoreResult<Vec<Course>> {
        Ok(CourseRepo::list(&self.pool).await?)
    }

    async fn update_course(&self, id: DbId, input: &UpdateCourse) -> StoreResult<Option<Course>> {
        Ok(CourseRepo::update(&self.pool, id, input).await?)
    }

    async fn find_version(&self, id: DbId) -> StoreResult<Option<CourseVersion>> {
        Ok(CourseVersionRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_versions(&self, course_id: DbId) -> StoreResult<Vec<CourseVersion>> {
        Ok(CourseVersionRepo::list_by_course(&self.pool, course_id).await?)
    }

    async fn create_draft(&self, input: &CreateDraftVersion) -> StoreResult<CourseVersion> {
        Ok(CourseVersionRepo::create_draft(&self.pool, input).await?)
    }

    async fn publish_version(&self, id: DbId) -> StoreResult<Option<CourseVersion>> {
        Ok(CourseVersionRepo::publish(&self.pool, id).await?)
    }

    async fn archive_version(&self, id: DbId) -> StoreResult<Option<CourseVersion>> {
        Ok(CourseVersionRepo::archive(&self.pool, id).await?)
    }
}

#[async_trait]
impl TopicStore for PgContentStore {
    async fn create_topic(&self, input: &CreateTopic) -> StoreResult<Topic> {
        Ok(TopicRepo::create(&self.pool, input).await?)
    }

    async fn find_topic(&self, id: DbId) -> StoreResult<Option<Topic>> {
        Ok(TopicRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_topics(&self, course_version_id: DbId) -> StoreResult<Vec<Topic>> {
        Ok(TopicRepo::list_by_version(&self.pool, course_version_id).await?)
    }

    async fn update_topic(&self, id: DbId, input: &UpdateTopic) -> StoreResult<Option<Topic>> {
        Ok(TopicRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_topic(&self, id: DbId) -> StoreResult<bool> {
        Ok(TopicRepo::delete(&self.pool, id).await?)
    }
}

#[async_trait]
impl ResourceStore for PgContentStore {
    async fn create_resource(&self, input: &CreateResource) -> StoreResult<Resource> {
        Ok(ResourceRepo::create(&self.pool, input).await?)
    }

    async fn find_resource(&self, id: DbId) -> StoreResult<Option<Resource>> {
        Ok(ResourceRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_resources_for_version(
        &self,
        course_version_id: DbId,
    ) -> StoreResult<Vec<Resource>> {
        Ok(ResourceRepo::list_by_version(&self.pool, course_version_id).await?)
    }

    async fn update_resource(
        &self,
        id: DbId,
        input: &UpdateResource,
    ) -> StoreResult<Option<Resource>> {
        Ok(ResourceRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_resource(&self, id: DbId) -> StoreResult<bool> {
        Ok(ResourceRepo::delete(&self.pool, id).await?)
    }

    async fn count_resources_with_file_url(&self, file_url: &str) -> StoreResult<i64> {
        Ok(ResourceRepo::count_by_file_url(&self.pool, file_url).await?)
    }
}

#[async_trait]
impl ModuleStore for PgContentStore {
    async fn create_module(&self, input: &CreateCourseModule) -> StoreResult<CourseModule> {
        Ok(CourseModuleRepo::create(&self.pool, input).await?)
    }

    async fn find_module(&self, id: DbId) -> StoreResult<Option<CourseModule>> {
        Ok(CourseModuleRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_modules(&self, course_version_id: DbId) -> StoreResult<Vec<CourseModule>> {
        Ok(CourseModuleRepo::list_by_version(&self.pool, course_version_id).await?)
    }

    async fn delete_module(&self, id: DbId) -> StoreResult<bool> {
        Ok(CourseModuleRepo::delete(&self.pool, id).await?)
    }

    async fn create_lesson(&self, input: &CreateLesson) -> StoreResult<Lesson> {
        Ok(LessonRepo::create(&self.pool, input).await?)
    }

    async fn find_lesson(&self, id: DbId) -> StoreResult<Option<Lesson>> {
        Ok(LessonRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_lessons_for_version(&self, course_version_id: DbId) -> StoreResult<Vec<Lesson>> {
        Ok(LessonRepo::list_by_version(&self.pool, course_version_id).await?)
    }

    async fn delete_lesson(&self, id: DbId) -> StoreResult<bool> {
        Ok(LessonRepo::delete(&self.pool, id).await?)
    }
}

#[async_trait]
impl ProgressStore for PgContentStore {
    async fn upsert_progress(
        &self,
        student_id: DbId,
        topic_id: DbId,
        completed: bool,
    ) -> StoreResult<StudentProgress> {
        Ok(ProgressRepo::upsert(&self.pool, student_id, topic_id, completed).await?)
    }

    async fn list_progress_for_version(
        &self,
        student_id: DbId,
        course_version_id: DbId,
    ) -> StoreResult<Vec<StudentProgress>> {
        Ok(ProgressRepo::list_for_version(&self.pool, student_id, course_version_id).await?)
    }
}

#[async_trait]
impl AssignmentStore for PgContentStore {
    async fn is_teacher_assigned(
        &self,
        teacher_id: DbId,
        course_version_id: DbId,
    ) -> StoreResult<bool> {
        Ok(TeacherAssignmentRepo::exists(&self.pool, teacher_id, course_version_id).await?)
    }

    async fn assign_teacher(
        &self,
        teacher_id: DbId,
        course_version_id: DbId,
        assigned_by: Option<DbId>,
    ) -> StoreResult<TeacherAssignment> {
        Ok(
            TeacherAssignmentRepo::create(&self.pool, teacher_id, course_version_id, assigned_by)
                .await?,
        )
    }

    async fn unassign_teacher(
        &self,
        teacher_id: DbId,
        course_version_id: DbId,
    ) -> StoreResult<bool> {
        Ok(TeacherAssignmentRepo::delete(&self.pool, teacher_id, course_version_id).await?)
    }

    async fn list_assignments_for_version(
        &self,
        course_version_id: DbId,
    ) -> StoreResult<Vec<TeacherAssignment>> {
        Ok(TeacherAssignmentRepo::list_by_version(&self.pool, course_version_id).await?)
    }

    async fn list_assignments_for_teacher(
        &self,
        teacher_id: DbId,
    ) -> StoreResult<Vec<TeacherAssignment>> {
        Ok(TeacherAssignmentRepo::list_by_teacher(&self.pool, teacher_id).await?)
    }
}

#[async_trait]
impl CommentStore for PgContentStore {
    async fn create_comment(&self, input: &CreateComment) -> StoreResult<TopicComment> {
        Ok(TopicCommentRepo::create(&self.pool, input).await?)
    }

    async fn find_comment(&self, id: DbId) -> StoreResult<Option<TopicComment>> {
        Ok(TopicCommentRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update_comment(&self, id: DbId, body: &str) -> StoreResult<Option<TopicComment>> {
        Ok(TopicCommentRepo::update_body(&self.pool, id, body).await?)
    }

    async fn list_comments(&self, topic_id: DbId) -> StoreResult<Vec<TopicComment>> {
        Ok(TopicCommentRepo::list_by_topic(&self.pool, topic_id).await?)
    }
}
