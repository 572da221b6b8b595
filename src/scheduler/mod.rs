mod assignment;
mod conflicts;
mod load;
mod rotation;
mod types;
mod util;

pub use load::StaffLoad;
pub use rotation::{next_available, RotationCursor};
pub use types::{Conflict, ConflictKind, RosterError};

use crate::config::RosterConfig;
use crate::model::RosterTable;

/// Génère un planning complet, ou rien.
///
/// Déterministe : mêmes entrées, même planning. Lundi–vendredi seulement,
/// sauf pour les tâches marquées `weekends`. Chaque tâche tourne sur le
/// personnel avec son propre curseur (décalé de l'index de la tâche) et
/// une personne n'est jamais affectée deux fois le même jour ; si plus
/// personne n'est libre, `RosterError::ScheduleConflict`.
pub fn generate(config: &RosterConfig) -> Result<RosterTable, RosterError> {
    assignment::generate(config)
}

/// Doubles affectations et tâches en double dans un planning existant.
pub fn detect_conflicts(table: &RosterTable) -> Vec<Conflict> {
    conflicts::detect_conflicts(table)
}

pub fn staff_load(table: &RosterTable) -> Vec<StaffLoad> {
    load::staff_load(table)
}
