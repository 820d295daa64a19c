pub mod project;
pub mod task;
pub mod user;

pub use project::{Project, ProjectInput};
pub use task::{Task, TaskInput, TaskPatch, TaskPriority, TaskStatus};
pub use user::{User, UserInput};
