//! Shared building blocks for screens and the runtime.

pub mod notice;
pub mod task;
pub mod text_field;

pub use notice::{Notice, NoticeKind, NoticeState};
pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskStarted, TaskState, Tasks};
pub use text_field::TextField;
