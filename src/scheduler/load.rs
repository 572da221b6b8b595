use crate::model::{RosterTable, StaffId};

/// Charge d'une personne sur un planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffLoad {
    pub staff_id: StaffId,
    pub staff: String,
    pub total: usize,
    /// (tâche, nombre), dans l'ordre de première apparition
    pub per_task: Vec<(String, usize)>,
}

pub(super) fn staff_load(table: &RosterTable) -> Vec<StaffLoad> {
    let mut out: Vec<StaffLoad> = Vec::new();

    for a in table.assignments() {
        let pos = match out.iter().position(|l| l.staff_id == a.staff_id) {
            Some(pos) => pos,
            None => {
                out.push(StaffLoad {
                    staff_id: a.staff_id.clone(),
                    staff: a.staff.clone(),
                    total: 0,
                    per_task: Vec::new(),
                });
                out.len() - 1
            }
        };
        let load = &mut out[pos];
        load.total += 1;
        match load.per_task.iter_mut().find(|(task, _)| *task == a.task) {
            Some((_, count)) => *count += 1,
            None => load.per_task.push((a.task.clone(), 1)),
        }
    }

    out
}
