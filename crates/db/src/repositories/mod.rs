//! Per-table repositories. Each is a zero-sized struct with async functions
//! taking a `&PgPool`.

pub mod assignment_repo;
pub mod comment_repo;
pub mod course_module_repo;
pub mod course_repo;
pub mod course_version_repo;
pub mod lesson_repo;
pub mod profile_repo;
pub mod progress_repo;
pub mod resource_repo;
pub mod topic_repo;

pub use assignment_repo::TeacherAssignmentRepo;
pub use comment_repo::TopicCommentRepo;
pub use course_module_repo::CourseModuleRepo;
pub use course_repo::CourseRepo;
pub use course_version_repo::CourseVersionRepo;
pub use lesson_repo::LessonRepo;
pub use profile_repo::ProfileRepo;
pub use progress_repo::ProgressRepo;
pub use resource_repo::ResourceRepo;
pub use topic_repo::TopicRepo;
