// src/rest/task.rs

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{Error, ErrorCode};
use crate::models;
use crate::rest::{render_error_response, render_response, Dates, ErrorRecorder, Priority, SpanRecorder};
use crate::service::TaskService;

/// Canonical 8-4-4-4-12 hex UUID. Anything else never reaches a handler.
const UUID_REGEX: &str =
    "[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}";

/// A task as clients see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub priority: Priority,
    pub dates: Dates,
}

impl From<models::Task> for Task {
    fn from(t: models::Task) -> Self {
        Self {
            id: t.id,
            description: t.description,
            priority: t.priority.into(),
            dates: t.dates.into(),
        }
    }
}

/// Request payload for creating a task
#[derive(Debug, Deserialize)]
pub struct CreateTasksRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub dates: Dates,
}

#[derive(Debug, Serialize)]
pub struct CreateTasksResponse {
    pub task: Task,
}

#[derive(Debug, Serialize)]
pub struct ReadTasksResponse {
    pub task: Task,
}

/// Request payload for updating a task
#[derive(Debug, Deserialize)]
pub struct UpdateTasksRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_done: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub dates: Dates,
}

/// Adapts a [`TaskService`] to HTTP.
#[derive(Clone)]
pub struct TaskHandler {
    svc: Arc<dyn TaskService>,
    recorder: Arc<dyn ErrorRecorder>,
}

impl TaskHandler {
    pub fn new(svc: Arc<dyn TaskService>) -> Self {
        Self::with_recorder(svc, Arc::new(SpanRecorder))
    }

    pub fn with_recorder(svc: Arc<dyn TaskService>, recorder: Arc<dyn ErrorRecorder>) -> Self {
        Self { svc, recorder }
    }

    /// Mounts `POST /tasks`, `GET /tasks/{id}` and `PUT /tasks/{id}`.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        let task_path = format!("/tasks/{{id:{}}}", UUID_REGEX);

        cfg.app_data(web::Data::new(self.clone()))
            .service(web::resource("/tasks").route(web::post().to(create)))
            .service(
                web::resource(task_path)
                    .route(web::get().to(task))
                    .route(web::put().to(update)),
            );
    }

    fn error(&self, msg: &str, err: &Error) -> HttpResponse {
        render_error_response(self.recorder.as_ref(), msg, err)
    }
}

/// Consumes the buffered body; it is released as soon as decoding returns.
/// A body the extractor refused (too large, broken stream) is treated like
/// malformed JSON.
fn decode<T: DeserializeOwned>(body: Result<web::Bytes, actix_web::Error>) -> Result<T, Error> {
    let body = body.map_err(|e| {
        debug!("Error reading request body: {}", e);
        Error::new(ErrorCode::InvalidArgument, format!("reading body: {}", e))
    })?;

    serde_json::from_slice(&body)
        .map_err(|e| Error::wrap(e, ErrorCode::InvalidArgument, "json decoder"))
}

/// POST /tasks
async fn create(
    handler: web::Data<TaskHandler>,
    body: Result<web::Bytes, actix_web::Error>,
) -> HttpResponse {
    let req: CreateTasksRequest = match decode(body) {
        Ok(req) => req,
        Err(err) => return handler.error("invalid request", &err),
    };

    match handler
        .svc
        .create(&req.description, req.priority.into(), req.dates.into())
        .await
    {
        Ok(task) => {
            debug!("Created task {}", task.id);
            render_response(&CreateTasksResponse { task: task.into() }, StatusCode::CREATED)
        }
        Err(err) => handler.error("create failed", &err),
    }
}

/// GET /tasks/{id}
async fn task(handler: web::Data<TaskHandler>, id: web::Path<String>) -> HttpResponse {
    match handler.svc.task(&id).await {
        Ok(task) => render_response(&ReadTasksResponse { task: task.into() }, StatusCode::OK),
        Err(err) => handler.error("find failed", &err),
    }
}

/// PUT /tasks/{id}
async fn update(
    handler: web::Data<TaskHandler>,
    id: web::Path<String>,
    body: Result<web::Bytes, actix_web::Error>,
) -> HttpResponse {
    let req: UpdateTasksRequest = match decode(body) {
        Ok(req) => req,
        Err(err) => return handler.error("invalid request", &err),
    };

    match handler
        .svc
        .update(
            &id,
            &req.description,
            req.priority.into(),
            req.dates.into(),
            req.is_done,
        )
        .await
    {
        Ok(()) => render_response(&json!({}), StatusCode::OK),
        Err(err) => handler.error("update failed", &err),
    }
}
