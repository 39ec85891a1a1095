pub mod assignment;
pub mod comment;
pub mod content;
pub mod course;
pub mod course_module;
pub mod course_version;
pub mod profile;
pub mod progress;
pub mod resource;
pub mod topic;
