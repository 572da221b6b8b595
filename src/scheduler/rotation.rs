use crate::model::{StaffId, StaffMember};
use std::collections::HashSet;

/// Curseur de rotation propre à une tâche : position dans la liste du personnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationCursor {
    pub cursor: usize,
}

impl RotationCursor {
    /// Curseur initial décalé par l'index de la tâche, pour étaler la charge.
    pub fn for_task(task_index: usize, staff_len: usize) -> Self {
        Self {
            cursor: if staff_len == 0 { 0 } else { task_index % staff_len },
        }
    }
}

/// Prochain membre libre à partir de `cursor`, en sautant ceux déjà affectés ce jour.
///
/// Au plus `staff.len()` essais. Renvoie le membre choisi et le curseur placé
/// juste après lui, ou `None` si tout le monde est déjà pris.
pub fn next_available<'a>(
    staff: &'a [StaffMember],
    cursor: RotationCursor,
    booked_today: &HashSet<StaffId>,
) -> Option<(&'a StaffMember, RotationCursor)> {
    let total = staff.len();
    (0..total).find_map(|offset| {
        let idx = (cursor.cursor + offset) % total;
        let member = &staff[idx];
        if booked_today.contains(&member.id) {
            return None;
        }
        Some((
            member,
            RotationCursor {
                cursor: (idx + 1) % total,
            },
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff() -> Vec<StaffMember> {
        vec![
            StaffMember::new("a", "Alice"),
            StaffMember::new("b", "Bob"),
            StaffMember::new("c", "Chloé"),
        ]
    }

    #[test]
    fn picks_cursor_position_when_free() {
        let staff = staff();
        let (member, next) =
            next_available(&staff, RotationCursor { cursor: 1 }, &HashSet::new()).unwrap();
        assert_eq!(member.name, "Bob");
        assert_eq!(next, RotationCursor { cursor: 2 });
    }

    #[test]
    fn skips_booked_and_wraps() {
        let staff = staff();
        let booked: HashSet<StaffId> = [StaffId::new("c"), StaffId::new("a")].into_iter().collect();
        let (member, next) = next_available(&staff, RotationCursor { cursor: 2 }, &booked).unwrap();
        assert_eq!(member.name, "Bob");
        assert_eq!(next, RotationCursor { cursor: 2 });
    }

    #[test]
    fn wraps_cursor_after_last_member() {
        let staff = staff();
        let (member, next) =
            next_available(&staff, RotationCursor { cursor: 2 }, &HashSet::new()).unwrap();
        assert_eq!(member.name, "Chloé");
        assert_eq!(next, RotationCursor { cursor: 0 });
    }

    #[test]
    fn none_when_everyone_booked() {
        let staff = staff();
        let booked: HashSet<StaffId> = staff.iter().map(|m| m.id.clone()).collect();
        assert!(next_available(&staff, RotationCursor { cursor: 0 }, &booked).is_none());
    }

    #[test]
    fn initial_offset_follows_task_index() {
        assert_eq!(RotationCursor::for_task(0, 3).cursor, 0);
        assert_eq!(RotationCursor::for_task(4, 3).cursor, 1);
        assert_eq!(RotationCursor::for_task(2, 0).cursor, 0);
    }
}
