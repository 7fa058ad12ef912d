//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.
//!
//! Reads return each record with its `*_info` lists already joined in.
//! Writes that take string references from the request return
//! [`RepoError`](crate::error::RepoError) so a malformed reference can be
//! rejected before any row is touched.

pub mod department_repo;
pub mod job_application_repo;
pub mod meeting_repo;
pub mod note_repo;
pub mod project_repo;
pub mod project_task_repo;
pub mod todo_repo;
pub mod user_repo;

pub use department_repo::DepartmentRepo;
pub use job_application_repo::JobApplicationRepo;
pub use meeting_repo::MeetingRepo;
pub use note_repo::NoteRepo;
pub use project_repo::ProjectRepo;
pub use project_task_repo::ProjectTaskRepo;
pub use todo_repo::TodoRepo;
pub use user_repo::UserRepo;
