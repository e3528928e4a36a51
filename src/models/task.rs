use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::{Validate, ValidationError};

/// How urgent a task is. `None` means nobody ranked it yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    #[default]
    None,
    Low,
    Medium,
    High,
}

/// The window a task should be worked on. Either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Dates {
    pub start: Option<DateTime<Utc>>,
    pub due: Option<DateTime<Utc>>,
}

/// A to-do item.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct Task {
    pub id: String,
    #[validate(custom(function = "validate_description"))]
    pub description: String,
    pub priority: Priority,
    #[validate(custom(function = "validate_dates"))]
    pub dates: Dates,
    pub is_done: bool,
}

impl Task {
    pub fn new(id: String, description: String, priority: Priority, dates: Dates) -> Self {
        Self {
            id,
            description,
            priority,
            dates,
            is_done: false,
        }
    }
}

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(failure("required", "cannot be blank"));
    }
    Ok(())
}

fn validate_dates(dates: &Dates) -> Result<(), ValidationError> {
    match (dates.start, dates.due) {
        (Some(start), Some(due)) if due < start => {
            Err(failure("due_before_start", "due must not be before start"))
        }
        _ => Ok(()),
    }
}
