// src/service.rs

use async_trait::async_trait;

use crate::error::Error;
use crate::models::{Dates, Priority, Task};

/// Everything the HTTP layer needs from whatever manages tasks.
///
/// Implementations must be safe to call concurrently; handlers share one
/// instance across all workers. Dropping a returned future cancels the call.
#[async_trait]
pub trait TaskService: Send + Sync {
    async fn create(&self, description: &str, priority: Priority, dates: Dates) -> Result<Task, Error>;

    async fn task(&self, id: &str) -> Result<Task, Error>;

    async fn update(
        &self,
        id: &str,
        description: &str,
        priority: Priority,
        dates: Dates,
        is_done: bool,
    ) -> Result<(), Error>;
}
