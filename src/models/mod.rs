pub mod task;

pub use task::{ExamTask, TaskStatus};
