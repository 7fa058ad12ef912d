//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct carrying its joined `*_info` lists
//! - A `Deserialize` + `Validate` create DTO; references arrive as strings
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//! - Where other entities embed it, a compact `*Info` projection

pub mod department;
pub mod job_application;
pub mod meeting;
pub mod note;
pub mod project;
pub mod project_task;
pub mod todo;
pub mod user;
