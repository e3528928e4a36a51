//! JSON transport for tasks: wire types, handlers and response rendering.

mod dates;
mod priority;
mod render;
mod task;
mod trace;

pub use dates::Dates;
pub use priority::Priority;
pub use render::{render_error_response, render_response, ErrorResponse};
pub use task::{
    CreateTasksRequest, CreateTasksResponse, ReadTasksResponse, Task, TaskHandler,
    UpdateTasksRequest,
};
pub use trace::{ErrorRecorder, NoopRecorder, SpanRecorder};
