#![allow(dead_code)]

use aula_core::types::DbId;
use aula_db::models::course::CourseWithVersion;
use aula_db::models::profile::CreateProfile;
use aula_db::models::topic::Topic;
use aula_db::store::ProfileStore;
use aula_db::MemoryContentStore;
use aula_storage::MemoryObjectStorage;
use aula_usecases::courses::{CreateCourseInput, CreateCourseUseCase};
use aula_usecases::topics::{CreateTopicInput, CreateTopicUseCase, TopicTarget};

/// Empty stores plus one profile per role.
pub struct Fixture {
    pub store: MemoryContentStore,
    pub storage: MemoryObjectStorage,
    pub admin: DbId,
    pub editor: DbId,
    pub teacher: DbId,
    pub student: DbId,
}

impl Fixture {
    pub async fn new() -> Self {
        let store = MemoryContentStore::new();
        let admin = add_profile(&store, "admin").await;
        let editor = add_profile(&store, "editor").await;
        let teacher = add_profile(&store, "teacher").await;
        let student = add_profile(&store, "student").await;
        Self {
            store,
            storage: MemoryObjectStorage::new(),
            admin,
            editor,
            teacher,
            student,
        }
    }

    /// Create a course as admin with an initial draft labelled `v1.0.0`.
    pub async fn course(&self, title: &str) -> CourseWithVersion {
        CreateCourseUseCase::new(&self.store)
            .execute(
                self.admin,
                CreateCourseInput {
                    title: title.to_string(),
                    description: None,
                    slug: None,
                    is_visible: true,
                    initial_version_label: Some("v1.0.0".to_string()),
                },
            )
            .await
            .expect("course creation should succeed")
    }

    pub async fn topic(&self, version_id: DbId, title: &str) -> Topic {
        CreateTopicUseCase::new(&self.store)
            .execute(self.admin, TopicTarget::Version(version_id), topic_input(title))
            .await
            .expect("topic creation should succeed")
    }

    pub async fn extra_teacher(&self, name: &str) -> DbId {
        add_profile(&self.store, name).await
    }
}

pub async fn add_profile(store: &MemoryContentStore, name: &str) -> DbId {
    let role = match name {
        "admin" | "editor" | "student" => name,
        _ => "teacher",
    };
    store
        .create_profile(&CreateProfile {
            email: format!("{name}@aula.test"),
            full_name: name.to_string(),
            role: role.to_string(),
            password_hash: "unused".to_string(),
        })
        .await
        .expect("profile creation should succeed")
        .id
}

pub fn topic_input(title: &str) -> CreateTopicInput {
    CreateTopicInput {
        title: title.to_string(),
        description: None,
        order_index: None,
    }
}

pub fn version_id(course: &CourseWithVersion) -> DbId {
    course
        .active_version
        .as_ref()
        .expect("course should have an active version")
        .id
}
