//! [`ObjectStorage`](aula_core::storage::ObjectStorage) backends.
//!
//! - [`S3ObjectStorage`]: any S3-compatible service (AWS, MinIO, Supabase
//!   Storage's S3 endpoint).
//! - [`MemoryObjectStorage`]: process-local map used by tests.

pub mod memory;
pub mod s3;

pub use memory::MemoryObjectStorage;
pub use s3::S3ObjectStorage;
