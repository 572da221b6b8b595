use crate::model::Task;
use chrono::{Datelike, NaiveDate, Weekday};

/// Jour ouvré : lundi à vendredi.
pub(super) fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Une tâche est due ce jour-là si c'est un jour ouvré, ou si elle couvre le week-end.
pub(super) fn task_due_on(task: &Task, date: NaiveDate) -> bool {
    task.weekends || is_working_day(date)
}
