//! In-memory [`ContentStore`](crate::store::ContentStore).
//!
//! Mirrors the behavior the PostgreSQL schema enforces: `uq_*` unique
//! constraints, append-by-default `order_index`, cascading deletes, and the
//! guarded publish/archive transitions. Used by the use-case and HTTP tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use aula_core::types::DbId;
use aula_core::versioning::{STATUS_ARCHIVED, STATUS_DRAFT, STATUS_PUBLISHED};
use chrono::Utc;

use crate::error::{StoreError, StoreResult};
use crate::models::assignment::TeacherAssignment;
use crate::models::comment::{CreateComment, TopicComment};
use crate::models::course::{Course, CreateCourse, UpdateCourse};
use crate::models::course_module::{CourseModule, CreateCourseModule, CreateLesson, Lesson};
use crate::models::course_version::{CourseVersion, CreateDraftVersion};
use crate::models::profile::{CreateProfile, Profile};
use crate::models::progress::StudentProgress;
use crate::models::resource::{CreateResource, Resource, UpdateResource};
use crate::models::topic::{CreateTopic, Topic, UpdateTopic};
use crate::store::{
    AssignmentStore, CommentStore, CourseStore, HealthStore, ModuleStore, ProfileStore,
    ProgressStore, ResourceStore, TopicStore,
};

#[derive(Default)]
struct Tables {
    next_id: DbId,
    profiles: BTreeMap<DbId, Profile>,
    courses: BTreeMap<DbId, Course>,
    versions: BTreeMap<DbId, CourseVersion>,
    topics: BTreeMap<DbId, Topic>,
    resources: BTreeMap<DbId, Resource>,
    modules: BTreeMap<DbId, CourseModule>,
    lessons: BTreeMap<DbId, Lesson>,
    progress: BTreeMap<DbId, StudentProgress>,
    assignments: BTreeMap<DbId, TeacherAssignment>,
    comments: BTreeMap<DbId, TopicComment>,
}

impl Tables {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }

    fn next_topic_index(&self, version_id: DbId) -> StoreResult<i32> {
        next_index(
            self.topics
                .values()
                .filter(|t| t.course_version_id == version_id)
                .map(|t| t.order_index),
        )
    }

    fn next_module_index(&self, version_id: DbId) -> StoreResult<i32> {
        next_index(
            self.modules
                .values()
                .filter(|m| m.course_version_id == version_id)
                .map(|m| m.order_index),
        )
    }

    fn insert_version(
        &mut self,
        course_id: DbId,
        version_label: &str,
        created_by: DbId,
    ) -> StoreResult<CourseVersion> {
        if self
            .versions
            .values()
            .any(|v| v.course_id == course_id && v.version_label == version_label)
        {
            return Err(unique("uq_course_versions_label"));
        }
        let now = Utc::now();
        let version = CourseVersion {
            id: self.next_id(),
            course_id,
            status: STATUS_DRAFT.to_string(),
            version_label: version_label.to_string(),
            created_by,
            approved_at: None,
            created_at: now,
            updated_at: now,
        };
        self.versions.insert(version.id, version.clone());
        Ok(version)
    }

    fn copy_content(&mut self, from_version: DbId, to_version: DbId) {
        let now = Utc::now();

        let topics: Vec<Topic> = ordered(
            self.topics
                .values()
                .filter(|t| t.course_version_id == from_version)
                .cloned(),
            |t| (t.order_index, t.id),
        );
        for old in topics {
            let new_id = self.next_id();
            let resources: Vec<Resource> = self
                .resources
                .values()
                .filter(|r| r.topic_id == old.id)
                .cloned()
                .collect();
            for resource in resources {
                let id = self.next_id();
                self.resources.insert(
                    id,
                    Resource {
                        id,
                        topic_id: new_id,
                        created_at: now,
                        updated_at: now,
                        ..resource
                    },
                );
            }
            self.topics.insert(
                new_id,
                Topic {
                    id: new_id,
                    course_version_id: to_version,
                    created_at: now,
                    updated_at: now,
                    ..old
                },
            );
        }

        let modules: Vec<CourseModule> = ordered(
            self.modules
                .values()
                .filter(|m| m.course_version_id == from_version)
                .cloned(),
            |m| (m.order_index, m.id),
        );
        for old in modules {
            let new_id = self.next_id();
            let lessons: Vec<Lesson> = self
                .lessons
                .values()
                .filter(|l| l.module_id == old.id)
                .cloned()
                .collect();
            for lesson in lessons {
                let id = self.next_id();
                self.lessons.insert(
                    id,
                    Lesson {
                        id,
                        module_id: new_id,
                        created_at: now,
                        updated_at: now,
                        ..lesson
                    },
                );
            }
            self.modules.insert(
                new_id,
                CourseModule {
                    id: new_id,
                    course_version_id: to_version,
                    created_at: now,
                    updated_at: now,
                    ..old
                },
            );
        }
    }

    fn delete_topic_cascade(&mut self, id: DbId) -> bool {
        if self.topics.remove(&id).is_none() {
            return false;
        }
        self.resources.retain(|_, r| r.topic_id != id);
        self.progress.retain(|_, p| p.topic_id != id);
        self.comments.retain(|_, c| c.topic_id != id);
        true
    }
}

/// One past the largest existing index, or 0. Mirrors the
/// `COALESCE(MAX(order_index) + 1, 0)` defaults, including the overflow error.
fn next_index(existing: impl Iterator<Item = i32>) -> StoreResult<i32> {
    match existing.max() {
        None => Ok(0),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| StoreError::OutOfRange("order_index".to_string())),
    }
}

fn ordered<T, K: Ord>(items: impl Iterator<Item = T>, key: impl Fn(&T) -> K) -> Vec<T> {
    let mut items: Vec<T> = items.collect();
    items.sort_by_key(|item| key(item));
    items
}

fn unique(constraint: &str) -> StoreError {
    StoreError::UniqueViolation(constraint.to_string())
}

/// Thread-safe in-memory store. Cheap to construct; every instance is empty.
///
/// `fail_file_url_counts` makes `count_resources_with_file_url` fail so
/// callers can exercise their cleanup error paths.
#[derive(Default)]
pub struct MemoryContentStore {
    tables: Mutex<Tables>,
    fail_file_url_counts: AtomicBool,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_file_url_counts(&self, fail: bool) {
        self.fail_file_url_counts.store(fail, Ordering::SeqCst);
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("memory store poisoned: {e}")))
    }
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[async_trait]
impl HealthStore for MemoryContentStore {
    async fn ping(&self) -> StoreResult<()> {
        self.lock().map(|_| ())
    }
}

#[async_trait]
impl ProfileStore for MemoryContentStore {
    async fn find_profile(&self, id: DbId) -> StoreResult<Option<Profile>> {
        Ok(self.lock()?.profiles.get(&id).cloned())
    }

    async fn find_profile_by_email(&self, email: &str) -> StoreResult<Option<Profile>> {
        Ok(self
            .lock()?
            .profiles
            .values()
            .find(|p| p.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create_profile(&self, input: &CreateProfile) -> StoreResult<Profile> {
        let mut t = self.lock()?;
        if t.profiles
            .values()
            .any(|p| p.email.eq_ignore_ascii_case(&input.email))
        {
            return Err(unique("uq_profiles_email"));
        }
        let now = Utc::now();
        let profile = Profile {
            id: t.next_id(),
            email: input.email.clone(),
            full_name: input.full_name.clone(),
            role: input.role.clone(),
            password_hash: input.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        t.profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn list_profiles(&self) -> StoreResult<Vec<Profile>> {
        Ok(self.lock()?.profiles.values().cloned().collect())
    }

    async fn update_profile_role(&self, id: DbId, role: &str) -> StoreResult<Option<Profile>> {
        let mut t = self.lock()?;
        Ok(t.profiles.get_mut(&id).map(|p| {
            p.role = role.to_string();
            p.updated_at = Utc::now();
            p.clone()
        }))
    }
}

// ---------------------------------------------------------------------------
// Courses and versions
// ---------------------------------------------------------------------------

#[async_trait]
impl CourseStore for MemoryContentStore {
    async fn create_course_with_version(
        &self,
        input: &CreateCourse,
        version_label: &str,
        created_by: DbId,
    ) -> StoreResult<(Course, CourseVersion)> {
        let mut t = self.lock()?;
        if t.courses.values().any(|c| c.slug == input.slug) {
            return Err(unique("uq_courses_slug"));
        }
        let now = Utc::now();
        let course_id = t.next_id();
        let version = t.insert_version(course_id, version_label, created_by)?;
        let course = Course {
            id: course_id,
            title: input.title.clone(),
            description: input.description.clone(),
            slug: input.slug.clone(),
            is_visible: input.is_visible,
            active_version_id: Some(version.id),
            created_by,
            created_at: now,
            updated_at: now,
        };
        t.courses.insert(course.id, course.clone());
        Ok((course, version))
    }

    async fn find_course(&self, id: DbId) -> StoreResult<Option<Course>> {
        Ok(self.lock()?.courses.get(&id).cloned())
    }

    async fn list_courses(&self) -> StoreResult<Vec<Course>> {
        // Newest first, like the SQL ordering.
        Ok(self.lock()?.courses.values().rev().cloned().collect())
    }

    async fn update_course(&self, id: DbId, input: &UpdateCourse) -> StoreResult<Option<Course>> {
        let mut t = self.lock()?;
        Ok(t.courses.get_mut(&id).map(|c| {
            if let Some(title) = &input.title {
                c.title = title.clone();
            }
            if let Some(description) = &input.description {
                c.description = Some(description.clone());
            }
            if let Some(is_visible) = input.is_visible {
                c.is_visible = is_visible;
            }
            c.updated_at = Utc::now();
            c.clone()
        }))
    }

    async fn find_version(&self, id: DbId) -> StoreResult<Option<CourseVersion>> {
        Ok(self.lock()?.versions.get(&id).cloned())
    }

    async fn list_versions(&self, course_id: DbId) -> StoreResult<Vec<CourseVersion>> {
        Ok(self
            .lock()?
            .versions
            .values()
            .rev()
            .filter(|v| v.course_id == course_id)
            .cloned()
            .collect())
    }

    async fn create_draft(&self, input: &CreateDraftVersion) -> StoreResult<CourseVersion> {
        let mut t = self.lock()?;
        let version = t.insert_version(input.course_id, &input.version_label, input.created_by)?;
        if let Some(base_id) = input.base_version_id {
            t.copy_content(base_id, version.id);
        }
        if let Some(teacher_id) = input.assign_teacher {
            let assignment = TeacherAssignment {
                id: t.next_id(),
                teacher_id,
                course_version_id: version.id,
                assigned_by: Some(teacher_id),
                created_at: Utc::now(),
            };
            t.assignments.insert(assignment.id, assignment);
        }
        Ok(version)
    }

    async fn publish_version(&self, id: DbId) -> StoreResult<Option<CourseVersion>> {
        let mut t = self.lock()?;
        let Some(course_id) = t
            .versions
            .get(&id)
            .filter(|v| v.status == STATUS_DRAFT)
            .map(|v| v.course_id)
        else {
            return Ok(None);
        };

        let now = Utc::now();
        for v in t.versions.values_mut() {
            if v.course_id == course_id && v.status == STATUS_PUBLISHED {
                v.status = STATUS_ARCHIVED.to_string();
                v.updated_at = now;
            }
        }

        let published = match t.versions.get_mut(&id) {
            Some(v) => {
                v.status = STATUS_PUBLISHED.to_string();
                v.approved_at = Some(now);
                v.updated_at = now;
                v.clone()
            }
            None => return Ok(None),
        };

        if let Some(course) = t.courses.get_mut(&course_id) {
            course.active_version_id = Some(id);
            course.updated_at = now;
        }
        Ok(Some(published))
    }

    async fn archive_version(&self, id: DbId) -> StoreResult<Option<CourseVersion>> {
        let mut t = self.lock()?;
        let now = Utc::now();
        let archived = match t.versions.get_mut(&id) {
            Some(v) if v.status == STATUS_PUBLISHED => {
                v.status = STATUS_ARCHIVED.to_string();
                v.updated_at = now;
                v.clone()
            }
            _ => return Ok(None),
        };
        if let Some(course) = t.courses.get_mut(&archived.course_id) {
            if course.active_version_id == Some(id) {
                course.active_version_id = None;
                course.updated_at = now;
            }
        }
        Ok(Some(archived))
    }
}

// ---------------------------------------------------------------------------
// Topics and resources
// ---------------------------------------------------------------------------

#[async_trait]
impl TopicStore for MemoryContentStore {
    async fn create_topic(&self, input: &CreateTopic) -> StoreResult<Topic> {
        let mut t = self.lock()?;
        let now = Utc::now();
        let order_index = match input.order_index {
            Some(index) => index,
            None => t.next_topic_index(input.course_version_id)?,
        };
        let topic = Topic {
            id: t.next_id(),
            course_version_id: input.course_version_id,
            title: input.title.clone(),
            description: input.description.clone(),
            order_index,
            created_at: now,
            updated_at: now,
        };
        t.topics.insert(topic.id, topic.clone());
        Ok(topic)
    }

    async fn find_topic(&self, id: DbId) -> StoreResult<Option<Topic>> {
        Ok(self.lock()?.topics.get(&id).cloned())
    }

    async fn list_topics(&self, course_version_id: DbId) -> StoreResult<Vec<Topic>> {
        let t = self.lock()?;
        Ok(ordered(
            t.topics
                .values()
                .filter(|topic| topic.course_version_id == course_version_id)
                .cloned(),
            |topic| (topic.order_index, topic.id),
        ))
    }

    async fn update_topic(&self, id: DbId, input: &UpdateTopic) -> StoreResult<Option<Topic>> {
        let mut t = self.lock()?;
        Ok(t.topics.get_mut(&id).map(|topic| {
            if let Some(title) = &input.title {
                topic.title = title.clone();
            }
            if let Some(description) = &input.description {
                topic.description = Some(description.clone());
            }
            if let Some(order_index) = input.order_index {
                topic.order_index = order_index;
            }
            topic.updated_at = Utc::now();
            topic.clone()
        }))
    }

    async fn delete_topic(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.lock()?.delete_topic_cascade(id))
    }
}

#[async_trait]
impl ResourceStore for MemoryContentStore {
    async fn create_resource(&self, input: &CreateResource) -> StoreResult<Resource> {
        let mut t = self.lock()?;
        let now = Utc::now();
        let order_index = match input.order_index {
            Some(index) => index,
            None => next_index(
                t.resources
                    .values()
                    .filter(|r| r.topic_id == input.topic_id)
                    .map(|r| r.order_index),
            )?,
        };
        let resource = Resource {
            id: t.next_id(),
            topic_id: input.topic_id,
            title: input.title.clone(),
            kind: input.kind.clone(),
            file_url: input.file_url.clone(),
            file_name: input.file_name.clone(),
            file_size: input.file_size,
            mime_type: input.mime_type.clone(),
            external_url: input.external_url.clone(),
            order_index,
            created_at: now,
            updated_at: now,
        };
        t.resources.insert(resource.id, resource.clone());
        Ok(resource)
    }

    async fn find_resource(&self, id: DbId) -> StoreResult<Option<Resource>> {
        Ok(self.lock()?.resources.get(&id).cloned())
    }

    async fn list_resources_for_version(
        &self,
        course_version_id: DbId,
    ) -> StoreResult<Vec<Resource>> {
        let t = self.lock()?;
        Ok(ordered(
            t.resources
                .values()
                .filter(|r| {
                    t.topics
                        .get(&r.topic_id)
                        .is_some_and(|topic| topic.course_version_id == course_version_id)
                })
                .cloned(),
            |r| (r.topic_id, r.order_index, r.id),
        ))
    }

    async fn update_resource(
        &self,
        id: DbId,
        input: &UpdateResource,
    ) -> StoreResult<Option<Resource>> {
        let mut t = self.lock()?;
        Ok(t.resources.get_mut(&id).map(|r| {
            if let Some(title) = &input.title {
                r.title = title.clone();
            }
            if let Some(external_url) = &input.external_url {
                r.external_url = Some(external_url.clone());
            }
            if let Some(order_index) = input.order_index {
                r.order_index = order_index;
            }
            r.updated_at = Utc::now();
            r.clone()
        }))
    }

    async fn delete_resource(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.lock()?.resources.remove(&id).is_some())
    }

    async fn count_resources_with_file_url(&self, file_url: &str) -> StoreResult<i64> {
        if self.fail_file_url_counts.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected failure".to_string()));
        }
        let count = self
            .lock()?
            .resources
            .values()
            .filter(|r| r.file_url.as_deref() == Some(file_url))
            .count();
        Ok(count as i64)
    }
}

// ---------------------------------------------------------------------------
// Modules and lessons
// ---------------------------------------------------------------------------

#[async_trait]
impl ModuleStore for MemoryContentStore {
    async fn create_module(&self, input: &CreateCourseModule) -> StoreResult<CourseModule> {
        let mut t = self.lock()?;
        let now = Utc::now();
        let order_index = match input.order_index {
            Some(index) => index,
            None => t.next_module_index(input.course_version_id)?,
        };
        let module = CourseModule {
            id: t.next_id(),
            course_version_id: input.course_version_id,
            title: input.title.clone(),
            description: input.description.clone(),
            order_index,
            created_at: now,
            updated_at: now,
        };
        t.modules.insert(module.id, module.clone());
        Ok(module)
    }

    async fn find_module(&self, id: DbId) -> StoreResult<Option<CourseModule>> {
        Ok(self.lock()?.modules.get(&id).cloned())
    }

    async fn list_modules(&self, course_version_id: DbId) -> StoreResult<Vec<CourseModule>> {
        let t = self.lock()?;
        Ok(ordered(
            t.modules
                .values()
                .filter(|m| m.course_version_id == course_version_id)
                .cloned(),
            |m| (m.order_index, m.id),
        ))
    }

    async fn delete_module(&self, id: DbId) -> StoreResult<bool> {
        let mut t = self.lock()?;
        if t.modules.remove(&id).is_none() {
            return Ok(false);
        }
        t.lessons.retain(|_, l| l.module_id != id);
        Ok(true)
    }

    async fn create_lesson(&self, input: &CreateLesson) -> StoreResult<Lesson> {
        let mut t = self.lock()?;
        let now = Utc::now();
        let order_index = match input.order_index {
            Some(index) => index,
            None => next_index(
                t.lessons
                    .values()
                    .filter(|l| l.module_id == input.module_id)
                    .map(|l| l.order_index),
            )?,
        };
        let lesson = Lesson {
            id: t.next_id(),
            module_id: input.module_id,
            title: input.title.clone(),
            content: input.content.clone(),
            order_index,
            created_at: now,
            updated_at: now,
        };
        t.lessons.insert(lesson.id, lesson.clone());
        Ok(lesson)
    }

    async fn find_lesson(&self, id: DbId) -> StoreResult<Option<Lesson>> {
        Ok(self.lock()?.lessons.get(&id).cloned())
    }

    async fn list_lessons_for_version(&self, course_version_id: DbId) -> StoreResult<Vec<Lesson>> {
        let t = self.lock()?;
        Ok(ordered(
            t.lessons
                .values()
                .filter(|l| {
                    t.modules
                        .get(&l.module_id)
                        .is_some_and(|m| m.course_version_id == course_version_id)
                })
                .cloned(),
            |l| (l.module_id, l.order_index, l.id),
        ))
    }

    async fn delete_lesson(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.lock()?.lessons.remove(&id).is_some())
    }
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

#[async_trait]
impl ProgressStore for MemoryContentStore {
    async fn upsert_progress(
        &self,
        student_id: DbId,
        topic_id: DbId,
        completed: bool,
    ) -> StoreResult<StudentProgress> {
        let mut t = self.lock()?;
        let now = Utc::now();

        if let Some(existing) = t
            .progress
            .values_mut()
            .find(|p| p.student_id == student_id && p.topic_id == topic_id)
        {
            existing.completed = completed;
            existing.completed_at = if completed {
                existing.completed_at.or(Some(now))
            } else {
                None
            };
            existing.updated_at = now;
            return Ok(existing.clone());
        }

        let record = StudentProgress {
            id: t.next_id(),
            student_id,
            topic_id,
            completed,
            completed_at: completed.then_some(now),
            created_at: now,
            updated_at: now,
        };
        t.progress.insert(record.id, record.clone());
        Ok(record)
    }

    async fn list_progress_for_version(
        &self,
        student_id: DbId,
        course_version_id: DbId,
    ) -> StoreResult<Vec<StudentProgress>> {
        let t = self.lock()?;
        Ok(t.progress
            .values()
            .filter(|p| p.student_id == student_id)
            .filter(|p| {
                t.topics
                    .get(&p.topic_id)
                    .is_some_and(|topic| topic.course_version_id == course_version_id)
            })
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Teacher assignments
// ---------------------------------------------------------------------------

#[async_trait]
impl AssignmentStore for MemoryContentStore {
    async fn is_teacher_assigned(
        &self,
        teacher_id: DbId,
        course_version_id: DbId,
    ) -> StoreResult<bool> {
        Ok(self
            .lock()?
            .assignments
            .values()
            .any(|a| a.teacher_id == teacher_id && a.course_version_id == course_version_id))
    }

    async fn assign_teacher(
        &self,
        teacher_id: DbId,
        course_version_id: DbId,
        assigned_by: Option<DbId>,
    ) -> StoreResult<TeacherAssignment> {
        let mut t = self.lock()?;
        if t.assignments
            .values()
            .any(|a| a.teacher_id == teacher_id && a.course_version_id == course_version_id)
        {
            return Err(unique("uq_teacher_assignments_teacher_version"));
        }
        let assignment = TeacherAssignment {
            id: t.next_id(),
            teacher_id,
            course_version_id,
            assigned_by,
            created_at: Utc::now(),
        };
        t.assignments.insert(assignment.id, assignment.clone());
        Ok(assignment)
    }

    async fn unassign_teacher(
        &self,
        teacher_id: DbId,
        course_version_id: DbId,
    ) -> StoreResult<bool> {
        let mut t = self.lock()?;
        let before = t.assignments.len();
        t.assignments
            .retain(|_, a| !(a.teacher_id == teacher_id && a.course_version_id == course_version_id));
        Ok(t.assignments.len() < before)
    }

    async fn list_assignments_for_version(
        &self,
        course_version_id: DbId,
    ) -> StoreResult<Vec<TeacherAssignment>> {
        Ok(self
            .lock()?
            .assignments
            .values()
            .filter(|a| a.course_version_id == course_version_id)
            .cloned()
            .collect())
    }

    async fn list_assignments_for_teacher(
        &self,
        teacher_id: DbId,
    ) -> StoreResult<Vec<TeacherAssignment>> {
        Ok(self
            .lock()?
            .assignments
            .values()
            .rev()
            .filter(|a| a.teacher_id == teacher_id)
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[async_trait]
impl CommentStore for MemoryContentStore {
    async fn create_comment(&self, input: &CreateComment) -> StoreResult<TopicComment> {
        let mut t = self.lock()?;
        let now = Utc::now();
        let comment = TopicComment {
            id: t.next_id(),
            topic_id: input.topic_id,
            author_id: input.author_id,
            parent_id: input.parent_id,
            body: input.body.clone(),
            created_at: now,
            updated_at: now,
        };
        t.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn find_comment(&self, id: DbId) -> StoreResult<Option<TopicComment>> {
        Ok(self.lock()?.comments.get(&id).cloned())
    }

    async fn update_comment(&self, id: DbId, body: &str) -> StoreResult<Option<TopicComment>> {
        let mut t = self.lock()?;
        Ok(t.comments.get_mut(&id).map(|c| {
            c.body = body.to_string();
            c.updated_at = Utc::now();
            c.clone()
        }))
    }

    async fn list_comments(&self, topic_id: DbId) -> StoreResult<Vec<TopicComment>> {
        Ok(self
            .lock()?
            .comments
            .values()
            .filter(|c| c.topic_id == topic_id)
            .cloned()
            .collect())
    }
}
