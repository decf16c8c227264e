//! The calendar-event collaborator.
//!
//! Event ingestion (remote fetch, caching, recurrence expansion) lives
//! outside this core. The pipeline invokes the source exactly once,
//! synchronously, after registration and before the first page renders,
//! and hands every page the same frozen slice.

use crate::error::PipelineError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub title: String,
    pub all_day: bool,
}

pub trait EventSource {
    fn fetch(&self) -> Result<Vec<CalendarEvent>, PipelineError>;
}

/// Default collaborator for planners without a calendar feed.
pub struct NoEvents;

impl EventSource for NoEvents {
    fn fetch(&self) -> Result<Vec<CalendarEvent>, PipelineError> {
        Ok(Vec::new())
    }
}
