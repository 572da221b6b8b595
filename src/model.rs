use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{btree_map, BTreeMap};

/// Toutes les affectations d'un planning, par date puis ordre des tâches.
pub type Assignments<'a> = std::iter::Flatten<btree_map::Values<'a, NaiveDate, Vec<ShiftAssignment>>>;

/// Identifiant stable d'un membre de l'équipe (indépendant du nom affiché).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StaffId(String);

impl StaffId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    /// Identifiant positionnel (`staff-1`, `staff-2`, ...).
    pub fn positional(index: usize) -> Self {
        Self(format!("staff-{}", index + 1))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiant stable d'une tâche récurrente.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn positional(index: usize) -> Self {
        Self(format!("task-{}", index + 1))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Membre de l'équipe, dans l'ordre de rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
}

impl StaffMember {
    pub fn new<I: AsRef<str>, N: Into<String>>(id: I, name: N) -> Self {
        Self {
            id: StaffId::new(id),
            name: name.into(),
        }
    }
}

/// Tâche récurrente. Le week-end, seules les tâches `weekends` sont couvertes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub weekends: bool,
}

impl Task {
    pub fn new<I: AsRef<str>, N: Into<String>>(id: I, name: N) -> Self {
        Self {
            id: TaskId::new(id),
            name: name.into(),
            weekends: false,
        }
    }
}

/// Une ligne du planning : qui fait quoi, quel jour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    pub date: NaiveDate,
    pub task_id: TaskId,
    pub task: String,
    pub staff_id: StaffId,
    pub staff: String,
}

/// Planning complet : date -> affectations du jour (ordre des tâches de la config).
///
/// Toujours remplacé en bloc ; jamais modifié incrémentalement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterTable {
    days: BTreeMap<NaiveDate, Vec<ShiftAssignment>>,
}

impl RosterTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert_day(&mut self, date: NaiveDate, assignments: Vec<ShiftAssignment>) {
        if !assignments.is_empty() {
            self.days.insert(date, assignments);
        }
    }

    pub fn day(&self, date: NaiveDate) -> Option<&[ShiftAssignment]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    /// Dates couvertes, en ordre croissant.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &[ShiftAssignment])> + '_ {
        self.days.iter().map(|(d, a)| (*d, a.as_slice()))
    }

    /// Toutes les affectations, par date puis ordre des tâches.
    pub fn assignments(&self) -> Assignments<'_> {
        self.days.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
