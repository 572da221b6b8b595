use super::rotation::{next_available, RotationCursor};
use super::{util, RosterError};
use crate::config::RosterConfig;
use crate::model::{RosterTable, ShiftAssignment, StaffId};
use chrono::Days;
use std::collections::HashSet;

pub(super) fn generate(config: &RosterConfig) -> Result<RosterTable, RosterError> {
    config.validate()?;

    let total_days = u64::from(config.weeks) * 7;
    let staff = config.staff.as_slice();
    let mut cursors: Vec<RotationCursor> = (0..config.tasks.len())
        .map(|idx| RotationCursor::for_task(idx, staff.len()))
        .collect();
    let mut table = RosterTable::new();

    for offset in 0..total_days {
        let Some(date) = config.start_date.checked_add_days(Days::new(offset)) else {
            return Err(RosterError::invalid("weeks", "date range overflows the calendar"));
        };

        let mut booked: HashSet<StaffId> = HashSet::with_capacity(staff.len());
        let mut assignments = Vec::with_capacity(config.tasks.len());

        for (task_index, task) in config.tasks.iter().enumerate() {
            if !util::task_due_on(task, date) {
                continue;
            }
            let Some((member, next)) = next_available(staff, cursors[task_index], &booked) else {
                #[cfg(feature = "logging")]
                tracing::warn!(%date, task = %task.name, "no free staff member left");
                return Err(RosterError::ScheduleConflict {
                    date,
                    task: task.name.clone(),
                });
            };
            cursors[task_index] = next;
            booked.insert(member.id.clone());
            assignments.push(ShiftAssignment {
                date,
                task_id: task.id.clone(),
                task: task.name.clone(),
                staff_id: member.id.clone(),
                staff: member.name.clone(),
            });
        }

        table.insert_day(date, assignments);
    }

    #[cfg(feature = "logging")]
    tracing::info!(
        start = %config.start_date,
        weeks = config.weeks,
        days = table.dates().count(),
        assignments = table.len(),
        "roster generated"
    );

    Ok(table)
}
