//! Module and lesson use-cases (the module -> lesson hierarchy that lives
//! alongside topics).

use aula_core::content;
use aula_core::error::CoreError;
use aula_core::types::DbId;
use aula_db::models::course_module::{CourseModule, CreateCourseModule, CreateLesson, Lesson};
use aula_db::ContentStore;
use serde::Deserialize;

use crate::context::{authenticate, authorize_content_write, load_version};
use crate::error::StoreResultExt;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateModuleInput {
    pub title: String,
    pub description: Option<String>,
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLessonInput {
    pub title: String,
    pub content: Option<String>,
    pub order_index: Option<i32>,
}

async fn load_module(store: &dyn ContentStore, id: DbId) -> Result<CourseModule, CoreError> {
    store
        .find_module(id)
        .await
        .or_unexpected()?
        .ok_or(CoreError::NotFound {
            entity: "Módulo",
            id,
        })
}

pub struct CreateModuleUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> CreateModuleUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        actor_id: DbId,
        version_id: DbId,
        input: CreateModuleInput,
    ) -> Result<CourseModule, CoreError> {
        let version = load_version(self.store, version_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        authorize_content_write(self.store, &actor, &version).await?;

        content::validate_title(&input.title)?;
        content::validate_order_index(input.order_index)?;
        let module = self
            .store
            .create_module(&CreateCourseModule {
                course_version_id: version_id,
                title: input.title.trim().to_string(),
                description: input.description,
                order_index: input.order_index,
            })
            .await
            .or_unexpected()?;

        tracing::info!(module_id = module.id, version_id, user_id = actor.id(), "Module created");
        Ok(module)
    }
}

pub struct DeleteModuleUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> DeleteModuleUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    /// Delete a module and its lessons.
    pub async fn execute(&self, actor_id: DbId, module_id: DbId) -> Result<(), CoreError> {
        let module = load_module(self.store, module_id).await?;
        let version = load_version(self.store, module.course_version_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        authorize_content_write(self.store, &actor, &version).await?;

        if !self.store.delete_module(module_id).await.or_unexpected()? {
            return Err(CoreError::NotFound {
                entity: "Módulo",
                id: module_id,
            });
        }
        tracing::info!(module_id, user_id = actor.id(), "Module deleted");
        Ok(())
    }
}

pub struct CreateLessonUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> CreateLessonUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        actor_id: DbId,
        module_id: DbId,
        input: CreateLessonInput,
    ) -> Result<Lesson, CoreError> {
        let module = load_module(self.store, module_id).await?;
        let version = load_version(self.store, module.course_version_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        authorize_content_write(self.store, &actor, &version).await?;

        content::validate_title(&input.title)?;
        content::validate_order_index(input.order_index)?;
        let lesson = self
            .store
            .create_lesson(&CreateLesson {
                module_id,
                title: input.title.trim().to_string(),
                content: input.content,
                order_index: input.order_index,
            })
            .await
            .or_unexpected()?;

        tracing::info!(lesson_id = lesson.id, module_id, user_id = actor.id(), "Lesson created");
        Ok(lesson)
    }
}

pub struct DeleteLessonUseCase<'a> {
    store: &'a dyn ContentStore,
}

impl<'a> DeleteLessonUseCase<'a> {
    pub fn new(store: &'a dyn ContentStore) -> Self {
        Self { store }
    }

    pub async fn execute(&self, actor_id: DbId, lesson_id: DbId) -> Result<(), CoreError> {
        let lesson = self
            .store
            .find_lesson(lesson_id)
            .await
            .or_unexpected()?
            .ok_or(CoreError::NotFound {
                entity: "Lección",
                id: lesson_id,
            })?;
        let module = load_module(self.store, lesson.module_id).await?;
        let version = load_version(self.store, module.course_version_id).await?;
        let actor = authenticate(self.store, actor_id).await?;
        authorize_content_write(self.store, &actor, &version).await?;

        if !self.store.delete_lesson(lesson_id).await.or_unexpected()? {
            return Err(CoreError::NotFound {
                entity: "Lección",
                id: lesson_id,
            });
        }
        tracing::info!(lesson_id, user_id = actor.id(), "Lesson deleted");
        Ok(())
    }
}
