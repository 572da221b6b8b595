use crate::model::{StaffId, TaskId};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// même personne deux fois le même jour
    DoubleBooking,
    /// même tâche deux fois le même jour
    DuplicateTask,
}

impl ConflictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictKind::DoubleBooking => "double-booking",
            ConflictKind::DuplicateTask => "duplicate-task",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub date: NaiveDate,
    pub kind: ConflictKind,
    /// personne affectée deux fois ; `None` pour une tâche en double
    pub staff: Option<StaffId>,
    pub task_a: TaskId,
    pub task_b: TaskId,
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("invalid configuration: {field}: {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },
    #[error("schedule conflict on {date}: no free staff member left for task {task}")]
    ScheduleConflict { date: NaiveDate, task: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RosterError {
    pub(crate) fn invalid<R: Into<String>>(field: &'static str, reason: R) -> Self {
        RosterError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}
