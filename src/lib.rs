#![forbid(unsafe_code)]
//! Rota — génération de planning de rotation pour une petite équipe clinique.
//!
//! - Rotation round-robin par tâche, sans double affectation dans la journée.
//! - Génération tout-ou-rien, déterministe (ni hasard ni horloge).
//! - Export calendrier (ICS, journées entières) et tableur (CSV).
//! - Stockage fichier JSON, remplacé atomiquement.

pub mod calendar;
pub mod config;
pub mod io;
pub mod model;
pub mod scheduler;
pub mod storage;

pub use calendar::{export_ics, render_ics, to_calendar_events, CalendarEvent, CalendarEvents};
pub use config::{load_config_from_file, RosterConfig};
pub use io::{read_rows_csv, to_rows, write_rows_csv, Row, Rows};
pub use model::{RosterTable, ShiftAssignment, StaffId, StaffMember, Task, TaskId};
pub use scheduler::{
    detect_conflicts, generate, next_available, staff_load, Conflict, ConflictKind, RosterError,
    RotationCursor, StaffLoad,
};
pub use storage::{JsonStorage, RosterStore};
