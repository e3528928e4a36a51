// src/memory_store.rs

use std::collections::HashMap;

use async_trait::async_trait;
use log::{debug, info};
use tokio::sync::RwLock;
use uuid::Uuid;
use validator::Validate;

use crate::error::{Error, ErrorCode};
use crate::models::{Dates, Priority, Task};
use crate::service::TaskService;

/// Process-local task storage. Everything is lost on restart.
///
/// Tasks are keyed by the parsed UUID, so ids compare case-insensitively.
#[derive(Default)]
pub struct MemoryTaskService {
    tasks: RwLock<HashMap<Uuid, Task>>,
}

fn parse_id(id: &str) -> Result<Uuid, Error> {
    Uuid::parse_str(id)
        .map_err(|e| Error::wrap(e, ErrorCode::InvalidArgument, format!("invalid task id {}", id)))
}

impl MemoryTaskService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskService for MemoryTaskService {
    async fn create(&self, description: &str, priority: Priority, dates: Dates) -> Result<Task, Error> {
        let id = Uuid::new_v4();
        let task = Task::new(id.to_string(), description.to_string(), priority, dates);
        task.validate()?;

        self.tasks.write().await.insert(id, task.clone());
        info!("Task created: {}", task.id);

        Ok(task)
    }

    async fn task(&self, id: &str) -> Result<Task, Error> {
        let key = parse_id(id)?;
        match self.tasks.read().await.get(&key) {
            Some(task) => Ok(task.clone()),
            None => {
                debug!("Task {} not found", id);
                Err(Error::not_found(format!("task {} not found", id)))
            }
        }
    }

    async fn update(
        &self,
        id: &str,
        description: &str,
        priority: Priority,
        dates: Dates,
        is_done: bool,
    ) -> Result<(), Error> {
        let key = parse_id(id)?;
        let updated = Task {
            id: key.to_string(),
            description: description.to_string(),
            priority,
            dates,
            is_done,
        };
        updated.validate()?;

        let mut tasks = self.tasks.write().await;
        match tasks.get_mut(&key) {
            Some(existing) => {
                *existing = updated;
                info!("Task updated: {}", id);
                Ok(())
            }
            None => Err(Error::not_found(format!("task {} not found", id))),
        }
    }
}
