//! Read-side aggregates for a course version's content tree.

use serde::Serialize;

use super::course_module::{CourseModule, Lesson};
use super::course_version::CourseVersion;
use super::resource::Resource;
use super::topic::Topic;

#[derive(Debug, Clone, Serialize)]
pub struct TopicWithResources {
    #[serde(flatten)]
    pub topic: Topic,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModuleWithLessons {
    #[serde(flatten)]
    pub module: CourseModule,
    pub lessons: Vec<Lesson>,
}

/// Everything under a course version, ordered by `order_index`.
#[derive(Debug, Clone, Serialize)]
pub struct VersionContent {
    pub version: CourseVersion,
    pub topics: Vec<TopicWithResources>,
    pub modules: Vec<ModuleWithLessons>,
}
