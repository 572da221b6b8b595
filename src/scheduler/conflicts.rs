use super::{Conflict, ConflictKind};
use crate::model::{RosterTable, ShiftAssignment};

/// Contrôle un planning relu depuis le stockage (ou édité à la main).
pub(super) fn detect_conflicts(table: &RosterTable) -> Vec<Conflict> {
    let mut out = Vec::new();

    // paires d'un même jour : O(k^2) avec k = nombre de tâches
    for (_, assignments) in table.days() {
        for (idx, a) in assignments.iter().enumerate() {
            for b in assignments.iter().skip(idx + 1) {
                if a.staff_id == b.staff_id {
                    out.push(conflict(ConflictKind::DoubleBooking, a, b));
                }
                if a.task_id == b.task_id {
                    out.push(conflict(ConflictKind::DuplicateTask, a, b));
                }
            }
        }
    }

    out
}

fn conflict(kind: ConflictKind, a: &ShiftAssignment, b: &ShiftAssignment) -> Conflict {
    Conflict {
        date: a.date,
        kind,
        staff: match kind {
            ConflictKind::DoubleBooking => Some(a.staff_id.clone()),
            ConflictKind::DuplicateTask => None,
        },
        task_a: a.task_id.clone(),
        task_b: b.task_id.clone(),
    }
}
