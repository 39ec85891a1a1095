//! Course use-cases: create, update, list, and read a course and its
//! versions' content.

use std::collections::HashMap;

use aula_core::content::{self, slugify};
use aula_core::error::CoreError;
use aula_core::messages;
use aula_core::permissions::Action;
use aula_core::types::DbId;
use aula_core::versioning::{self, DEFAULT_INITIAL_VERSION_LABEL};
use aula_db::models::content::{ModuleWithLessons, TopicWithResources, VersionContent};
use aula_db::models::course::{Course, CourseWithVersion, CreateCourse, UpdateCourse};
use aula_db::models::course_version::CourseVersion;
use aula_db::models::resource::Resource;
use aula_db::ContentStore;
use serde::Deserialize;

use crate::context::{authenticate, authorize_global, ensure_readable, load_course, load_version};
use crate::error::StoreResultExt;

// ---------------------------------------------------------------------------
// CreateCourse
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseInput {
    pub title: String,
    pub description: Option<String>,
    /// Derived from the title when absent.
    pub slug: Option<String>,
    #[serde(default)]
    pub is_visible: bool,
    pub initial_version_label: Option<String>,
}

pub struct CreateCourseUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> CreateCourseUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// Create a course with an initial draft version that becomes its active
    /// version.
    pub async fn execute(
        &self,
        actor_id: DbId,
        input: CreateCourseInput,
    ) -> Result<CourseWithVersion, CoreError> {
        let actor = authenticate(self.store, actor_id).await?;
        authorize_global(&actor, Action::ManageCourses)?;

        content::validate_title(&input.title)?;
        let slug = match input.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => slugify(&input.title),
        };
        content::validate_slug(&slug)?;

        let label = input
            .initial_version_label
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_INITIAL_VERSION_LABEL);
        versioning::validate_version_label(label)?;

        let create = CreateCourse {
            title: input.title.trim().to_string(),
            description: input.description,
            slug,
            is_visible: input.is_visible,
        };
        let (course, version) = self
            .store
            .create_course_with_version(&create, label, actor.id())
            .await
            .or_conflict(messages::SLUG_TAKEN)?;

        tracing::info!(
            course_id = course.id,
            version_id = version.id,
            slug = %course.slug,
            user_id = actor.id(),
            "Course created",
        );

        Ok(CourseWithVersion {
            course,
            active_version: Some(version),
        })
    }
}

// ---------------------------------------------------------------------------
// UpdateCourse
// ---------------------------------------------------------------------------

pub struct UpdateCourseUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> UpdateCourseUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        actor_id: DbId,
        course_id: DbId,
        input: UpdateCourse,
    ) -> Result<Course, CoreError> {
        load_course(self.store, course_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        authorize_global(&actor, Action::ManageCourses)?;

        if let Some(title) = &input.title {
            content::validate_title(title)?;
        }

        let course = self
            .store
            .update_course(course_id, &input)
            .await
            .or_unexpected()?
            .ok_or(CoreError::NotFound {
                entity: "Curso",
                id: course_id,
            })?;

        tracing::info!(course_id, user_id = actor.id(), "Course updated");
        Ok(course)
    }
}

// ---------------------------------------------------------------------------
// ListCourses / GetCourse
// ---------------------------------------------------------------------------

pub struct ListCoursesUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> ListCoursesUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// Staff see every course. Students see visible courses whose active
    /// version is published.
    pub async fn execute(&self, actor_id: DbId) -> Result<Vec<CourseWithVersion>, CoreError> {
        let actor = authenticate(self.store, actor_id).await?;
        let courses = self.store.list_courses().await.or_unexpected()?;

        let mut result = Vec::with_capacity(courses.len());
        for course in courses {
            let active_version = match course.active_version_id {
                Some(id) => self.store.find_version(id).await.or_unexpected()?,
                None => None,
            };
            let readable = actor.role.is_staff()
                || active_version
                    .as_ref()
                    .is_some_and(|v| ensure_readable(&actor, &course, v).is_ok());
            if readable {
                result.push(CourseWithVersion {
                    course,
                    active_version,
                });
            }
        }
        Ok(result)
    }
}

pub struct GetCourseUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> GetCourseUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        actor_id: DbId,
        course_id: DbId,
    ) -> Result<CourseWithVersion, CoreError> {
        let course = load_course(self.store, course_id).await?;
        let actor = authenticate(self.store, actor_id).await?;

        let active_version = match course.active_version_id {
            Some(id) => Some(load_version(self.store, id).await?),
            None => None,
        };

        if !actor.role.is_staff() {
            match &active_version {
                Some(version) => ensure_readable(&actor, &course, version)?,
                None => return Err(CoreError::forbidden(messages::CONTENT_NOT_AVAILABLE)),
            }
        }

        Ok(CourseWithVersion {
            course,
            active_version,
        })
    }
}

// ---------------------------------------------------------------------------
// ListVersions
// ---------------------------------------------------------------------------

pub struct ListVersionsUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> ListVersionsUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// Every version of a course, newest first. Staff only.
    pub async fn execute(
        &self,
        actor_id: DbId,
        course_id: DbId,
    ) -> Result<Vec<CourseVersion>, CoreError> {
        load_course(self.store, course_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        if !actor.role.is_staff() {
            return Err(CoreError::forbidden(messages::CONTENT_NOT_AVAILABLE));
        }
        self.store.list_versions(course_id).await.or_unexpected()
    }
}

// ---------------------------------------------------------------------------
// GetVersionContent
// ---------------------------------------------------------------------------

pub struct GetVersionContentUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> GetVersionContentUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// Topics with their resources and modules with their lessons, each
    /// ordered by `order_index`.
    pub async fn execute(
        &self,
        actor_id: DbId,
        version_id: DbId,
    ) -> Result<VersionContent, CoreError> {
        let version = load_version(self.store, version_id).await?;
        let course = load_course(self.store, version.course_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        ensure_readable(&actor, &course, &version)?;

        let topics = self.store.list_topics(version_id).await.or_unexpected()?;
        let mut resources_by_topic: HashMap<DbId, Vec<Resource>> = HashMap::new();
        for resource in self
            .store
            .list_resources_for_version(version_id)
            .await
            .or_unexpected()?
        {
            resources_by_topic
                .entry(resource.topic_id)
                .or_default()
                .push(resource);
        }

        let modules = self.store.list_modules(version_id).await.or_unexpected()?;
        let mut lessons_by_module = HashMap::new();
        for lesson in self
            .store
            .list_lessons_for_version(version_id)
            .await
            .or_unexpected()?
        {
            lessons_by_module
                .entry(lesson.module_id)
                .or_insert_with(Vec::new)
                .push(lesson);
        }

        Ok(VersionContent {
            version,
            topics: topics
                .into_iter()
                .map(|topic| TopicWithResources {
                    resources: resources_by_topic.remove(&topic.id).unwrap_or_default(),
                    topic,
                })
                .collect(),
            modules: modules
                .into_iter()
                .map(|module| ModuleWithLessons {
                    lessons: lessons_by_module.remove(&module.id).unwrap_or_default(),
                    module,
                })
                .collect(),
        })
    }
}
